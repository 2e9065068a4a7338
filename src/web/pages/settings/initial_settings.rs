// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::web::account::{AccountStateStoreFields, current_user_personal_details, use_account_store};
use crate::web::localization::{TranslationKey, use_localize};
use crate::web::navigation::routes;
use crate::web::pages::components::{IdentityHeader, IdentityOverlay};
use leptos::prelude::*;

#[component]
pub fn InitialSettingsPage() -> impl IntoView {
	let store = use_account_store();

	move || {
		let session = store.session().get();
		let has_lounge_access = store.user().with(|user| user.has_lounge_access);
		let details = current_user_personal_details(store);
		let localizer = use_localize();
		let overlay = IdentityOverlay::build(&session, &details, &localizer);

		view! {
			<div id="initial_settings_page">
				<h1>{localizer.translate(TranslationKey::SettingsTitle)}</h1>
				<IdentityHeader overlay={overlay} />
				<ul class="settings_menu">
					{
						has_lounge_access.then(|| view! {
							<li>
								<a href={routes::SETTINGS_LOUNGE_ACCESS}>
									{localizer.translate(TranslationKey::LoungeAccess)}
								</a>
							</li>
						})
					}
				</ul>
			</div>
		}
	}
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
	use super::*;
	use crate::web::pages::test_utils::{FORMATTED_LOGIN, account, render_at};
	use leptos_router::components::Router;

	fn render_settings(has_lounge_access: bool) -> String {
		render_at(routes::SETTINGS, account(has_lounge_access, Some("Ada Lovelace")), || {
			view! {
				<Router>
					<InitialSettingsPage />
				</Router>
			}
		})
	}

	#[test]
	fn lounge_link_shown_with_access() {
		let html = render_settings(true);
		assert!(html.contains(&format!("href=\"{}\"", routes::SETTINGS_LOUNGE_ACCESS)));
		assert!(html.contains("Ada Lovelace"));
		assert!(html.contains(FORMATTED_LOGIN));
	}

	#[test]
	fn lounge_link_hidden_without_access() {
		let html = render_settings(false);
		assert!(!html.contains(routes::SETTINGS_LOUNGE_ACCESS));
		assert!(html.contains("Ada Lovelace"));
	}
}
