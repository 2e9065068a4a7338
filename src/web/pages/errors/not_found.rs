// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::web::localization::{TranslationKey, use_localize};
use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
	move || {
		let localizer = use_localize();
		view! {
			<main id="not_found_page">
				<h1>{localizer.translate(TranslationKey::NotFoundTitle)}</h1>
				<p>{localizer.translate(TranslationKey::NotFoundSubtitle)}</p>
				<a href="/">{localizer.translate(TranslationKey::GoBackHome)}</a>
			</main>
		}
	}
}
