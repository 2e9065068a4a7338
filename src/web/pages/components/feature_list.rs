// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::web::avatar::IconAsset;
use crate::web::localization::{Localizer, TranslationKey};
use leptos::prelude::*;

/// A feature to advertise, before localization
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MenuItem {
	pub translation_key: TranslationKey,
	pub icon: IconAsset,
}

impl MenuItem {
	pub fn localize(&self, localizer: &Localizer) -> FeatureItem {
		FeatureItem {
			label: localizer.translate(self.translation_key),
			icon: self.icon,
		}
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeatureItem {
	pub label: String,
	pub icon: IconAsset,
}

#[component]
pub fn FeatureList(headline: String, description: String, items: Vec<FeatureItem>) -> impl IntoView {
	view! {
		<section class="feature_list">
			<h2 class="feature_list_headline">{headline}</h2>
			<p class="feature_list_description">{description}</p>
			<ul class="feature_list_items">
				{
					items
						.into_iter()
						.map(|item| view! {
							<li class="feature_list_item">
								<img class="feature_list_item_icon" src={item.icon.path()} alt="" />
								<span class="feature_list_item_label">{item.label}</span>
							</li>
						})
						.collect::<Vec<_>>()
				}
			</ul>
		</section>
	}
}
