// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::account::{AccountState, AccountStateStoreFields};
use super::phone_number::format_phone_number;
use leptos::prelude::*;
use reactive_stores::Store;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Locale {
	#[default]
	En,
	Es,
}

impl Locale {
	pub fn code(&self) -> &'static str {
		match self {
			Self::En => "en",
			Self::Es => "es",
		}
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.code())
	}
}

#[derive(Debug, Eq, PartialEq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "unknown locale \"{}\"", self.0)
	}
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
	type Err = UnknownLocale;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"en" => Ok(Self::En),
			"es" => Ok(Self::Es),
			_ => Err(UnknownLocale(s.to_string())),
		}
	}
}

/// Every piece of user-facing text the settings pages show.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum TranslationKey {
	LoungeAccess,
	LoungeHeadline,
	LoungeDescription,
	CoffeePromo,
	NetworkingPromo,
	ViewsPromo,
	SettingsTitle,
	GoBack,
	NotFoundTitle,
	NotFoundSubtitle,
	GoBackHome,
}

impl TranslationKey {
	pub const ALL: [TranslationKey; 11] = [
		Self::LoungeAccess,
		Self::LoungeHeadline,
		Self::LoungeDescription,
		Self::CoffeePromo,
		Self::NetworkingPromo,
		Self::ViewsPromo,
		Self::SettingsTitle,
		Self::GoBack,
		Self::NotFoundTitle,
		Self::NotFoundSubtitle,
		Self::GoBackHome,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::LoungeAccess => "loungeAccessPage.loungeAccess",
			Self::LoungeHeadline => "loungeAccessPage.headline",
			Self::LoungeDescription => "loungeAccessPage.description",
			Self::CoffeePromo => "loungeAccessPage.coffeePromo",
			Self::NetworkingPromo => "loungeAccessPage.networkingPromo",
			Self::ViewsPromo => "loungeAccessPage.viewsPromo",
			Self::SettingsTitle => "initialSettingsPage.settings",
			Self::GoBack => "common.goBack",
			Self::NotFoundTitle => "notFound.notHere",
			Self::NotFoundSubtitle => "notFound.pageNotFound",
			Self::GoBackHome => "notFound.goBackHome",
		}
	}
}

fn english(key: TranslationKey) -> &'static str {
	match key {
		TranslationKey::LoungeAccess => "Lounge access",
		TranslationKey::LoungeHeadline => "The Expensify Lounge is closed.",
		TranslationKey::LoungeDescription => {
			"The Expensify Lounge in San Francisco is closed for the time being, but we'll update this page when it reopens!"
		}
		TranslationKey::CoffeePromo => "Great coffee and snacks",
		TranslationKey::NetworkingPromo => "Network with other members",
		TranslationKey::ViewsPromo => "Take in the views",
		TranslationKey::SettingsTitle => "Settings",
		TranslationKey::GoBack => "Go back",
		TranslationKey::NotFoundTitle => "Hmm... it's not here",
		TranslationKey::NotFoundSubtitle => "Oops, this page cannot be found",
		TranslationKey::GoBackHome => "Go back to home page",
	}
}

fn spanish(key: TranslationKey) -> &'static str {
	match key {
		TranslationKey::LoungeAccess => "Acceso a la sala vip",
		TranslationKey::LoungeHeadline => "La sala vip de Expensify está cerrada.",
		TranslationKey::LoungeDescription => {
			"La sala vip de Expensify en San Francisco está cerrada por el momento, pero actualizaremos esta página cuando vuelva a abrir."
		}
		TranslationKey::CoffeePromo => "Un café estupendo y snacks",
		TranslationKey::NetworkingPromo => "Conoce a otros miembros",
		TranslationKey::ViewsPromo => "Disfruta de las vistas",
		TranslationKey::SettingsTitle => "Configuración",
		TranslationKey::GoBack => "Volver",
		TranslationKey::NotFoundTitle => "Hmm… no está aquí",
		TranslationKey::NotFoundSubtitle => "Ups, no encuentro la página que estás buscando",
		TranslationKey::GoBackHome => "Volver a la página principal",
	}
}

/// Translation and locale-aware formatting for the active user.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Localizer {
	pub locale: Locale,
	/// Region the user is in, used to decide between national and international phone formats
	pub country_code: String,
}

impl Default for Localizer {
	fn default() -> Self {
		Self {
			locale: Locale::En,
			country_code: String::from("US"),
		}
	}
}

impl Localizer {
	pub fn new(locale: Locale, country_code: impl Into<String>) -> Self {
		Self {
			locale,
			country_code: country_code.into(),
		}
	}

	pub fn translate(&self, key: TranslationKey) -> String {
		let text = match self.locale {
			Locale::En => english(key),
			Locale::Es => spanish(key),
		};
		text.to_string()
	}

	pub fn format_phone_number(&self, login: Option<&str>) -> String {
		format_phone_number(login, &self.country_code)
	}
}

/// Gets the signed in user's localizer, falling back to English in the US outside the app's store.
/// Tracks the store, so call it from a reactive context to follow locale changes.
pub fn use_localize() -> Localizer {
	match use_context::<Store<AccountState>>() {
		Some(store) => store.localizer().get(),
		None => Localizer::default(),
	}
}
