// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use std::sync::Arc;

pub mod routes {
	pub const SETTINGS: &str = "/settings";
	pub const SETTINGS_LOUNGE_ACCESS: &str = "/settings/profile/lounge-access";
}

pub trait Navigator {
	fn navigate(&self, route: &str);
}

/// Leaves the current page for `fallback_route`. Issues exactly one navigation per call.
pub fn go_back(navigator: &impl Navigator, fallback_route: &str) {
	tracing::debug!(route = fallback_route, "Navigating back");
	navigator.navigate(fallback_route);
}

/// Navigator backed by the Leptos router. Must be created inside a `<Router>`.
#[derive(Clone)]
pub struct RouterNavigator {
	navigate: Arc<dyn Fn(&str, NavigateOptions) + Send + Sync>,
}

impl RouterNavigator {
	pub fn new() -> Self {
		Self {
			navigate: Arc::new(use_navigate()),
		}
	}
}

impl Navigator for RouterNavigator {
	fn navigate(&self, route: &str) {
		(self.navigate)(route, NavigateOptions::default());
	}
}

#[cfg(test)]
pub mod test_utils {
	use super::Navigator;
	use std::cell::RefCell;

	#[derive(Default)]
	pub struct RecordingNavigator {
		pub requests: RefCell<Vec<String>>,
	}

	impl Navigator for RecordingNavigator {
		fn navigate(&self, route: &str) {
			self.requests.borrow_mut().push(route.to_string());
		}
	}
}
