// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::web::avatar::Illustration;
use crate::web::localization::{TranslationKey, use_localize};
use leptos::prelude::*;

/// Page with a back button and title above a large illustration, which can have content laid over it
#[component]
pub fn IllustratedHeaderPageLayout(
	#[prop(into)] title: String,
	illustration: Illustration,
	on_back_button_press: Callback<()>,
	#[prop(optional, into)] overlay_content: Option<ViewFn>,
	children: Children,
) -> impl IntoView {
	let back_label = use_localize().translate(TranslationKey::GoBack);

	view! {
		<div class="illustrated_header_page">
			<header class="illustrated_header_page_header">
				<button
					class="illustrated_header_page_back"
					title={back_label}
					on:click=move |_| on_back_button_press.run(())
				>
					"←"
				</button>
				<h1 class="illustrated_header_page_title">{title}</h1>
			</header>
			<div class="illustrated_header_page_illustration">
				<img src={illustration.path()} alt="" />
				{overlay_content.map(|overlay| view! {
					<div class="illustrated_header_page_overlay">{overlay.run()}</div>
				})}
			</div>
			<div class="illustrated_header_page_content">
				{children()}
			</div>
		</div>
	}
}
