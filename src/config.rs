// © 2024 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::web::account::{AccountSnapshot, PersonalDetails, Session, User};
use crate::web::avatar::IconAsset;
use crate::web::localization::{Locale, Localizer};
use kdl::{KdlDocument, KdlNode, KdlValue};
use miette::{IntoDiagnostic, Result, miette};
use tokio::fs::read_to_string;

pub async fn parse_config(config_path: &str) -> Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	parse_config_document(&config_file_contents)
}

#[derive(Clone, Debug)]
pub struct ConfigData {
	pub web: WebConfig,
	pub account: AccountSnapshot,
}

#[derive(Clone, Debug)]
pub struct WebConfig {
	pub bind_addr: String,
}

pub fn parse_config_document(contents: &str) -> Result<ConfigData> {
	let document: KdlDocument = contents.parse()?;

	let web = document
		.get("web")
		.and_then(|node| node.children())
		.ok_or_else(|| miette!("Missing `web` block"))?;
	let bind_addr = string_arg(web, "bind_addr")?.ok_or_else(|| miette!("Missing `web.bind_addr`"))?;

	let locale = match string_arg(&document, "locale")? {
		Some(locale) => locale.parse::<Locale>().into_diagnostic()?,
		None => Locale::default(),
	};
	let country_code = string_arg(&document, "country_code")?.unwrap_or_else(|| String::from("US"));

	let session = match document.get("session").and_then(|node| node.children()) {
		Some(session) => Session {
			email: string_arg(session, "email")?,
			account_id: account_id_value(session.get_arg("account_id"), "session.account_id")?,
		},
		None => Session::default(),
	};

	let user = match document.get("user").and_then(|node| node.children()) {
		Some(user) => User {
			has_lounge_access: bool_arg(user, "has_lounge_access")?,
			is_from_public_domain: bool_arg(user, "is_from_public_domain")?,
			validated: bool_arg(user, "validated")?,
		},
		None => User::default(),
	};

	let mut personal_details = Vec::new();
	if let Some(details) = document.get("personal_details").and_then(|node| node.children()) {
		for node in details.nodes() {
			if node.name().value() != "account" {
				return Err(miette!(
					"Unexpected `{}` in `personal_details`; expected `account`",
					node.name().value()
				));
			}
			personal_details.push(parse_personal_details(node)?);
		}
	}

	Ok(ConfigData {
		web: WebConfig { bind_addr },
		account: AccountSnapshot {
			session,
			user,
			personal_details,
			localizer: Localizer::new(locale, country_code),
		},
	})
}

fn parse_personal_details(node: &KdlNode) -> Result<PersonalDetails> {
	let account_id = account_id_value(first_argument(node), "personal_details.account")?
		.ok_or_else(|| miette!("`account` needs an account ID argument"))?;
	let fallback_icon = match string_property(node, "fallback_icon")?.as_deref() {
		None => None,
		Some("fallback_avatar") => Some(IconAsset::FallbackAvatar),
		Some(other) => return Err(miette!("Unknown fallback icon `{}`", other)),
	};

	Ok(PersonalDetails {
		account_id,
		display_name: string_property(node, "display_name")?,
		login: string_property(node, "login")?,
		avatar: string_property(node, "avatar")?,
		fallback_icon,
	})
}

fn string_value(value: Option<&KdlValue>, name: &str) -> Result<Option<String>> {
	match value {
		None => Ok(None),
		Some(value) => value
			.as_string()
			.map(|value| Some(value.to_string()))
			.ok_or_else(|| miette!("`{}` must be a string", name)),
	}
}

fn string_arg(document: &KdlDocument, name: &str) -> Result<Option<String>> {
	string_value(document.get_arg(name), name)
}

fn first_argument(node: &KdlNode) -> Option<&KdlValue> {
	node.entries()
		.iter()
		.find(|entry| entry.name().is_none())
		.map(|entry| entry.value())
}

fn property<'a>(node: &'a KdlNode, name: &str) -> Option<&'a KdlValue> {
	node.entries()
		.iter()
		.find(|entry| entry.name().is_some_and(|entry_name| entry_name.value() == name))
		.map(|entry| entry.value())
}

fn string_property(node: &KdlNode, name: &str) -> Result<Option<String>> {
	string_value(property(node, name), name)
}

fn bool_arg(document: &KdlDocument, name: &str) -> Result<bool> {
	match document.get_arg(name) {
		None => Ok(false),
		Some(value) => value.as_bool().ok_or_else(|| miette!("`{}` must be #true or #false", name)),
	}
}

fn account_id_value(value: Option<&KdlValue>, name: &str) -> Result<Option<u64>> {
	let Some(value) = value else {
		return Ok(None);
	};
	let id = value
		.as_integer()
		.ok_or_else(|| miette!("`{}` must be an integer", name))?;
	let id = u64::try_from(id).into_diagnostic()?;
	Ok(Some(id))
}
