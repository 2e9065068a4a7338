// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::avatar::{Avatar, AvatarSize};
use crate::web::account::{CurrentUserPersonalDetails, Session};
use crate::web::avatar::{AvatarSource, IconAsset, get_avatar};
use crate::web::localization::Localizer;
use leptos::prelude::*;

/// Who the signed in user is, as shown over page headers
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IdentityOverlay {
	pub avatar: AvatarSource,
	pub fallback_icon: IconAsset,
	/// The display name, or the formatted login if there isn't one
	pub identity_line: String,
	/// Always the formatted login
	pub secondary_line: String,
}

impl IdentityOverlay {
	pub fn build(session: &Session, details: &CurrentUserPersonalDetails, localizer: &Localizer) -> Self {
		let formatted_login = localizer.format_phone_number(session.email.as_deref());
		let identity_line = match details.display_name.as_deref() {
			Some(name) if !name.is_empty() => name.to_string(),
			_ => formatted_login.clone(),
		};

		Self {
			avatar: get_avatar(details.avatar.as_deref(), session.account_id),
			fallback_icon: details.fallback_icon,
			identity_line,
			secondary_line: formatted_login,
		}
	}
}

#[component]
pub fn IdentityHeader(overlay: IdentityOverlay) -> impl IntoView {
	view! {
		<div class="identity_header">
			<Avatar source={overlay.avatar} fallback_icon={overlay.fallback_icon} size={AvatarSize::Large} />
			<div class="identity_header_name">{overlay.identity_line}</div>
			<div class="identity_header_login">{overlay.secondary_line}</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::web::localization::Locale;

	fn sms_session() -> Session {
		Session {
			email: Some(String::from("+15005550006@expensify.sms")),
			account_id: Some(42),
		}
	}

	fn details_named(display_name: Option<&str>) -> CurrentUserPersonalDetails {
		CurrentUserPersonalDetails {
			account_id: Some(42),
			display_name: display_name.map(String::from),
			..CurrentUserPersonalDetails::default()
		}
	}

	#[test]
	fn display_name_leads_when_present() {
		let overlay = IdentityOverlay::build(&sms_session(), &details_named(Some("Ada")), &Localizer::default());
		assert_eq!(overlay.identity_line, "Ada");
		assert_eq!(overlay.secondary_line, "(500) 555-0006");
	}

	#[test]
	fn empty_display_name_falls_back_to_login() {
		for name in [None, Some("")] {
			let overlay = IdentityOverlay::build(&sms_session(), &details_named(name), &Localizer::default());
			assert_eq!(overlay.identity_line, "(500) 555-0006");
			assert_eq!(overlay.secondary_line, overlay.identity_line);
		}
	}

	#[test]
	fn login_format_follows_region() {
		let localizer = Localizer::new(Locale::En, "GB");
		let overlay = IdentityOverlay::build(&sms_session(), &details_named(None), &localizer);
		assert_eq!(overlay.secondary_line, "+1 500-555-0006");
	}

	#[test]
	fn missing_session_email_is_blank() {
		let session = Session {
			email: None,
			account_id: Some(42),
		};
		let overlay = IdentityOverlay::build(&session, &details_named(None), &Localizer::default());
		assert_eq!(overlay.identity_line, "");
		assert_eq!(overlay.secondary_line, "");
		assert_eq!(overlay.avatar, AvatarSource::Default(19));
	}
}
