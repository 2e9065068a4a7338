// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Domain appended to phone numbers used as logins
pub const SMS_DOMAIN: &str = "@expensify.sms";

struct CallingCode {
	code: &'static str,
	region: &'static str,
	trunk_prefix: bool,
}

const CALLING_CODES: &[CallingCode] = &[
	CallingCode { code: "44", region: "GB", trunk_prefix: true },
	CallingCode { code: "52", region: "MX", trunk_prefix: false },
	CallingCode { code: "34", region: "ES", trunk_prefix: false },
	CallingCode { code: "33", region: "FR", trunk_prefix: true },
	CallingCode { code: "49", region: "DE", trunk_prefix: true },
	CallingCode { code: "91", region: "IN", trunk_prefix: true },
	CallingCode { code: "61", region: "AU", trunk_prefix: true },
];

const NANP_REGIONS: &[&str] = &["US", "CA"];

pub fn remove_sms_domain(login: &str) -> &str {
	login.strip_suffix(SMS_DOMAIN).unwrap_or(login)
}

/// Returns the digits of a possible E.164 number, or `None` if the login isn't one
fn e164_digits(login: &str) -> Option<String> {
	let number = login.strip_prefix('+')?;
	let mut digits = String::with_capacity(number.len());
	for character in number.chars() {
		match character {
			'0'..='9' => digits.push(character),
			' ' | '-' | '(' | ')' => (),
			_ => return None,
		}
	}
	if (8..=15).contains(&digits.len()) {
		Some(digits)
	} else {
		None
	}
}

/// Formats a login for display. Phone numbers get the national format when they belong to the
/// user's region and the international format otherwise; anything else (emails) is returned as-is.
pub fn format_phone_number(login: Option<&str>, region: &str) -> String {
	let Some(login) = login.filter(|login| !login.is_empty()) else {
		return String::new();
	};
	let login = remove_sms_domain(login);

	let Some(digits) = e164_digits(login) else {
		return login.to_string();
	};

	if let Some(national) = digits.strip_prefix('1').filter(|national| national.len() == 10) {
		let (area, rest) = national.split_at(3);
		let (exchange, subscriber) = rest.split_at(3);
		return if NANP_REGIONS.iter().any(|nanp| nanp.eq_ignore_ascii_case(region)) {
			format!("({}) {}-{}", area, exchange, subscriber)
		} else {
			format!("+1 {}-{}-{}", area, exchange, subscriber)
		};
	}

	for calling_code in CALLING_CODES {
		let Some(national) = digits.strip_prefix(calling_code.code) else {
			continue;
		};
		if calling_code.region.eq_ignore_ascii_case(region) {
			return if calling_code.trunk_prefix {
				format!("0{}", national)
			} else {
				national.to_string()
			};
		}
		return format!("+{} {}", calling_code.code, national);
	}

	format!("+{}", digits)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_login_is_empty() {
		assert_eq!(format_phone_number(None, "US"), "");
		assert_eq!(format_phone_number(Some(""), "US"), "");
	}

	#[test]
	fn emails_pass_through() {
		assert_eq!(format_phone_number(Some("ada@example.com"), "US"), "ada@example.com");
	}

	#[test]
	fn sms_login_in_home_region_uses_national_format() {
		assert_eq!(
			format_phone_number(Some("+15005550006@expensify.sms"), "US"),
			"(500) 555-0006"
		);
		assert_eq!(format_phone_number(Some("+1 (500) 555-0006"), "ca"), "(500) 555-0006");
	}

	#[test]
	fn sms_login_abroad_uses_international_format() {
		assert_eq!(
			format_phone_number(Some("+15005550006@expensify.sms"), "GB"),
			"+1 500-555-0006"
		);
		assert_eq!(format_phone_number(Some("+447911123456"), "US"), "+44 7911123456");
	}

	#[test]
	fn trunk_prefix_regions_get_leading_zero() {
		assert_eq!(format_phone_number(Some("+447911123456"), "GB"), "07911123456");
		assert_eq!(format_phone_number(Some("+525512345678"), "MX"), "5512345678");
	}

	#[test]
	fn unknown_calling_code_keeps_plus_digits() {
		assert_eq!(format_phone_number(Some("+999 1234 5678"), "US"), "+99912345678");
	}

	#[test]
	fn impossible_numbers_are_left_alone() {
		assert_eq!(format_phone_number(Some("+12345"), "US"), "+12345");
		assert_eq!(format_phone_number(Some("5005550006"), "US"), "5005550006");
	}

	#[test]
	fn dots_are_not_separators() {
		assert_eq!(format_phone_number(Some("+1.500.555.0006"), "US"), "+1.500.555.0006");
	}
}
