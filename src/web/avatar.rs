// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

pub const CONCIERGE_ACCOUNT_ID: u64 = 8392101;
pub const DEFAULT_AVATAR_COUNT: u64 = 24;

const DEFAULT_AVATAR_URL_PATTERNS: &[&str] = &[
	"images/avatars/avatar_",
	"images/avatars/default-avatar",
	"images/avatars/user/default",
];

/// Static images bundled with the app
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum IconAsset {
	#[default]
	FallbackAvatar,
	CoffeeMug,
	ChatBubbles,
	SanFrancisco,
}

impl IconAsset {
	pub fn path(&self) -> &'static str {
		match self {
			Self::FallbackAvatar => "/icons/fallback-avatar.svg",
			Self::CoffeeMug => "/illustrations/coffee-mug.svg",
			Self::ChatBubbles => "/illustrations/chat-bubbles.svg",
			Self::SanFrancisco => "/illustrations/san-francisco.svg",
		}
	}
}

/// Large header artwork for illustrated pages
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Illustration {
	ExpensifyLounge,
}

impl Illustration {
	pub fn path(&self) -> &'static str {
		match self {
			Self::ExpensifyLounge => "/illustrations/expensify-lounge.svg",
		}
	}
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum AvatarSource {
	Remote(String),
	/// One of the numbered default avatars, from 1 to [`DEFAULT_AVATAR_COUNT`]
	Default(u64),
	Concierge,
	Fallback,
}

impl AvatarSource {
	pub fn url(&self) -> String {
		match self {
			Self::Remote(url) => url.clone(),
			Self::Default(index) => format!("/avatars/default-avatar_{}.svg", index),
			Self::Concierge => String::from("/avatars/concierge.svg"),
			Self::Fallback => IconAsset::FallbackAvatar.path().to_string(),
		}
	}
}

pub fn is_default_avatar(avatar: Option<&str>) -> bool {
	match avatar {
		Some(url) if !url.is_empty() => DEFAULT_AVATAR_URL_PATTERNS.iter().any(|pattern| url.contains(pattern)),
		_ => true,
	}
}

pub fn default_avatar(account_id: Option<u64>) -> AvatarSource {
	match account_id {
		None | Some(0) => AvatarSource::Fallback,
		Some(CONCIERGE_ACCOUNT_ID) => AvatarSource::Concierge,
		Some(id) => AvatarSource::Default((id % DEFAULT_AVATAR_COUNT) + 1),
	}
}

/// Resolves the image to show for an account, replacing default avatar references with the account's
/// assigned default avatar.
pub fn get_avatar(avatar: Option<&str>, account_id: Option<u64>) -> AvatarSource {
	match avatar {
		Some(url) if !is_default_avatar(avatar) => AvatarSource::Remote(url.to_string()),
		_ => default_avatar(account_id),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn custom_avatar_is_kept() {
		let url = "https://cdn.example.com/avatars/ada.png";
		assert_eq!(get_avatar(Some(url), Some(42)), AvatarSource::Remote(url.to_string()));
	}

	#[test]
	fn default_avatar_references_resolve_by_account() {
		let url = "https://d2k5nsl2zxldvw.cloudfront.net/images/avatars/avatar_7.png";
		assert_eq!(get_avatar(Some(url), Some(42)), AvatarSource::Default(19));
		assert_eq!(get_avatar(None, Some(48)), AvatarSource::Default(1));
		assert_eq!(get_avatar(Some(""), Some(23)), AvatarSource::Default(24));
	}

	#[test]
	fn missing_account_uses_fallback() {
		assert_eq!(get_avatar(None, None), AvatarSource::Fallback);
		assert_eq!(get_avatar(None, Some(0)), AvatarSource::Fallback);
		assert_eq!(AvatarSource::Fallback.url(), IconAsset::FallbackAvatar.path());
	}

	#[test]
	fn concierge_has_its_own_avatar() {
		assert_eq!(get_avatar(None, Some(CONCIERGE_ACCOUNT_ID)), AvatarSource::Concierge);
	}

	#[test]
	fn every_referenced_asset_is_bundled() {
		let assets = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
		let mut paths: Vec<String> = [
			IconAsset::FallbackAvatar,
			IconAsset::CoffeeMug,
			IconAsset::ChatBubbles,
			IconAsset::SanFrancisco,
		]
		.iter()
		.map(|icon| icon.path().to_string())
		.collect();
		paths.push(Illustration::ExpensifyLounge.path().to_string());
		paths.push(AvatarSource::Concierge.url());
		paths.push(AvatarSource::Fallback.url());
		paths.extend((1..=DEFAULT_AVATAR_COUNT).map(|index| AvatarSource::Default(index).url()));

		for path in paths {
			let file = assets.join(path.trim_start_matches('/'));
			assert!(file.is_file(), "missing asset {}", file.display());
		}
	}
}
