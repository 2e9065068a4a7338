// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::web::avatar::{AvatarSource, IconAsset};
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum AvatarSize {
	#[default]
	Default,
	Large,
}

impl AvatarSize {
	fn class(&self) -> &'static str {
		match self {
			Self::Default => "avatar",
			Self::Large => "avatar avatar_large",
		}
	}
}

/// Shows an avatar image, swapping in the fallback icon if the image can't be loaded
#[component]
pub fn Avatar(
	source: AvatarSource,
	#[prop(optional)] fallback_icon: IconAsset,
	#[prop(optional)] size: AvatarSize,
) -> impl IntoView {
	let (load_failed, set_load_failed) = signal(false);
	let source_url = source.url();

	view! {
		<img
			class={size.class()}
			src={move || if load_failed.get() { fallback_icon.path().to_string() } else { source_url.clone() }}
			alt=""
			on:error=move |_| set_load_failed.set(true)
		/>
	}
}
