// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::web::account::{AccountSnapshot, AccountState, PersonalDetails, Session, User};
use crate::web::localization::Localizer;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use leptos_router::location::RequestUrl;
use reactive_stores::Store;

pub const SMS_LOGIN: &str = "+15005550006@expensify.sms";
pub const FORMATTED_LOGIN: &str = "(500) 555-0006";

/// Account 42 signed in with an SMS login
pub fn account(has_lounge_access: bool, display_name: Option<&str>) -> AccountState {
	AccountState::from(AccountSnapshot {
		session: Session {
			email: Some(String::from(SMS_LOGIN)),
			account_id: Some(42),
		},
		user: User {
			has_lounge_access,
			..User::default()
		},
		personal_details: vec![PersonalDetails {
			account_id: 42,
			display_name: display_name.map(String::from),
			..PersonalDetails::default()
		}],
		localizer: Localizer::default(),
	})
}

/// Renders a view to HTML as the server would for a request to `path`, with `state` in the account store
pub fn render_at<V: IntoView>(path: &str, state: AccountState, view: impl FnOnce() -> V) -> String {
	let owner = Owner::new();
	owner.with(|| {
		provide_context(RequestUrl::new(path));
		provide_context(Store::new(state));
		view().to_html()
	})
}
