// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::avatar::IconAsset;
use super::localization::Localizer;
use leptos::prelude::*;
use reactive_stores::Store;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The session of the logged in person
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Session {
	pub email: Option<String>,
	pub account_id: Option<u64>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct User {
	#[serde(default)]
	pub has_lounge_access: bool,
	#[serde(default)]
	pub is_from_public_domain: bool,
	#[serde(default)]
	pub validated: bool,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct PersonalDetails {
	pub account_id: u64,
	pub display_name: Option<String>,
	pub login: Option<String>,
	pub avatar: Option<String>,
	pub fallback_icon: Option<IconAsset>,
}

/// Everything the server knows about the signed in account, as sent to the client
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct AccountSnapshot {
	pub session: Session,
	pub user: User,
	pub personal_details: Vec<PersonalDetails>,
	pub localizer: Localizer,
}

/// Client-side account store. Components subscribe to individual fields, so a change to the user
/// record only re-renders what reads it.
#[derive(Clone, Debug, Default, Store)]
pub struct AccountState {
	pub session: Session,
	pub user: User,
	pub personal_details: HashMap<u64, PersonalDetails>,
	pub localizer: Localizer,
}

impl From<AccountSnapshot> for AccountState {
	fn from(snapshot: AccountSnapshot) -> Self {
		let personal_details = snapshot
			.personal_details
			.into_iter()
			.map(|details| (details.account_id, details))
			.collect();
		Self {
			session: snapshot.session,
			user: snapshot.user,
			personal_details,
			localizer: snapshot.localizer,
		}
	}
}

impl AccountState {
	/// Replaces each field of the store with the snapshot's contents, notifying subscribers of each
	pub fn apply_snapshot(store: Store<AccountState>, snapshot: AccountSnapshot) {
		let state = AccountState::from(snapshot);
		store.session().set(state.session);
		store.user().set(state.user);
		store.personal_details().set(state.personal_details);
		store.localizer().set(state.localizer);
	}
}

pub fn use_account_store() -> Store<AccountState> {
	expect_context::<Store<AccountState>>()
}

/// Display-facing identity of the signed in account
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CurrentUserPersonalDetails {
	pub account_id: Option<u64>,
	pub display_name: Option<String>,
	pub login: Option<String>,
	pub avatar: Option<String>,
	pub fallback_icon: IconAsset,
}

impl CurrentUserPersonalDetails {
	pub fn resolve(session: &Session, personal_details: &HashMap<u64, PersonalDetails>) -> Self {
		let details = session.account_id.and_then(|id| personal_details.get(&id));
		match details {
			Some(details) => Self {
				account_id: session.account_id,
				display_name: details.display_name.clone(),
				login: details.login.clone(),
				avatar: details.avatar.clone(),
				fallback_icon: details.fallback_icon.unwrap_or_default(),
			},
			None => Self {
				account_id: session.account_id,
				..Self::default()
			},
		}
	}
}

/// Reads the current user's personal details, subscribing to the session and personal details table
pub fn current_user_personal_details(store: Store<AccountState>) -> CurrentUserPersonalDetails {
	let session = store.session().get();
	store
		.personal_details()
		.with(|personal_details| CurrentUserPersonalDetails::resolve(&session, personal_details))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn details(account_id: u64, display_name: &str) -> PersonalDetails {
		PersonalDetails {
			account_id,
			display_name: Some(display_name.to_string()),
			login: None,
			avatar: Some(String::from("https://cdn.example.com/a.png")),
			fallback_icon: None,
		}
	}

	#[test]
	fn snapshot_is_keyed_by_account() {
		let snapshot = AccountSnapshot {
			session: Session::default(),
			user: User::default(),
			personal_details: vec![details(1, "One"), details(2, "Two")],
			localizer: Localizer::default(),
		};
		let state = AccountState::from(snapshot);
		assert_eq!(state.personal_details.len(), 2);
		assert_eq!(state.personal_details[&2].display_name.as_deref(), Some("Two"));
	}

	#[test]
	fn resolves_details_for_session_account() {
		let table: HashMap<u64, PersonalDetails> = [(7, details(7, "Ada"))].into_iter().collect();
		let session = Session {
			email: Some(String::from("ada@example.com")),
			account_id: Some(7),
		};
		let current = CurrentUserPersonalDetails::resolve(&session, &table);
		assert_eq!(current.account_id, Some(7));
		assert_eq!(current.display_name.as_deref(), Some("Ada"));
		assert_eq!(current.fallback_icon, IconAsset::FallbackAvatar);
	}

	#[test]
	fn unknown_account_has_empty_details() {
		let table: HashMap<u64, PersonalDetails> = [(7, details(7, "Ada"))].into_iter().collect();
		let session = Session {
			email: None,
			account_id: Some(8),
		};
		let current = CurrentUserPersonalDetails::resolve(&session, &table);
		assert_eq!(current.account_id, Some(8));
		assert_eq!(current.display_name, None);
		assert_eq!(current.avatar, None);
	}

	#[test]
	fn missing_access_flag_means_no_access() {
		let user: User = serde_json::from_str("{}").unwrap();
		assert!(!user.has_lounge_access);
	}
}
