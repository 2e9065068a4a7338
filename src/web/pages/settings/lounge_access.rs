// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::web::account::{
	AccountStateStoreFields, CurrentUserPersonalDetails, Session, User, current_user_personal_details,
	use_account_store,
};
use crate::web::avatar::{IconAsset, Illustration};
use crate::web::localization::{Localizer, TranslationKey, use_localize};
use crate::web::navigation::{Navigator, RouterNavigator, go_back, routes};
use crate::web::pages::components::{
	FeatureItem, FeatureList, IdentityHeader, IdentityOverlay, IllustratedHeaderPageLayout, LinearGradient, MenuItem,
};
use crate::web::pages::errors::not_found::NotFound;
use leptos::prelude::*;

pub const LOUNGE_ACCESS_OVERLAY: &str = "#1A3D32";

pub const MENU_ITEMS: [MenuItem; 3] = [
	MenuItem {
		translation_key: TranslationKey::CoffeePromo,
		icon: IconAsset::CoffeeMug,
	},
	MenuItem {
		translation_key: TranslationKey::NetworkingPromo,
		icon: IconAsset::ChatBubbles,
	},
	MenuItem {
		translation_key: TranslationKey::ViewsPromo,
		icon: IconAsset::SanFrancisco,
	},
];

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoungePromo {
	pub title: String,
	pub illustration: Illustration,
	pub overlay: IdentityOverlay,
	pub headline: String,
	pub description: String,
	pub features: Vec<FeatureItem>,
}

/// What the lounge access page shows for a given account state
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LoungeAccessView {
	NotFound,
	Promo(LoungePromo),
}

impl LoungeAccessView {
	pub fn build(
		session: &Session,
		user: &User,
		details: &CurrentUserPersonalDetails,
		localizer: &Localizer,
	) -> Self {
		if !user.has_lounge_access {
			return Self::NotFound;
		}

		Self::Promo(LoungePromo {
			title: localizer.translate(TranslationKey::LoungeAccess),
			illustration: Illustration::ExpensifyLounge,
			overlay: IdentityOverlay::build(session, details, localizer),
			headline: localizer.translate(TranslationKey::LoungeHeadline),
			description: localizer.translate(TranslationKey::LoungeDescription),
			features: MENU_ITEMS.iter().map(|item| item.localize(localizer)).collect(),
		})
	}
}

fn back_to_settings(navigator: &impl Navigator) {
	go_back(navigator, routes::SETTINGS);
}

fn overlay_colors() -> Vec<String> {
	vec![format!("{}00", LOUNGE_ACCESS_OVERLAY), LOUNGE_ACCESS_OVERLAY.to_string()]
}

#[component]
pub fn LoungeAccessPage() -> impl IntoView {
	let store = use_account_store();
	let navigator = RouterNavigator::new();
	let on_back_button_press = Callback::new(move |_: ()| back_to_settings(&navigator));

	move || {
		let session = store.session().get();
		let user = store.user().get();
		let details = current_user_personal_details(store);
		let localizer = use_localize();

		match LoungeAccessView::build(&session, &user, &details, &localizer) {
			LoungeAccessView::NotFound => view! { <NotFound /> }.into_any(),
			LoungeAccessView::Promo(promo) => {
				let LoungePromo {
					title,
					illustration,
					overlay,
					headline,
					description,
					features,
				} = promo;
				let overlay_content = move || {
					let overlay = overlay.clone();
					view! {
						<LinearGradient colors={overlay_colors()}>
							<IdentityHeader overlay={overlay} />
						</LinearGradient>
					}
				};

				view! {
					<IllustratedHeaderPageLayout
						title={title}
						illustration={illustration}
						on_back_button_press={on_back_button_press}
						overlay_content={overlay_content}
					>
						<FeatureList headline={headline} description={description} items={features} />
					</IllustratedHeaderPageLayout>
				}
				.into_any()
			}
		}
	}
}
