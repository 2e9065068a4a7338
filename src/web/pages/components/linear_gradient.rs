// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use leptos::prelude::*;

/// Builds a top-to-bottom CSS gradient through the given colors
pub fn gradient_css(colors: &[String]) -> String {
	format!("background: linear-gradient(to bottom, {})", colors.join(", "))
}

#[component]
pub fn LinearGradient(colors: Vec<String>, children: Children) -> impl IntoView {
	view! {
		<div class="linear_gradient" style={gradient_css(&colors)}>
			{children()}
		</div>
	}
}
