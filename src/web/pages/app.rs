// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::errors::not_found::NotFound;
use super::settings::{InitialSettingsPage, LoungeAccessPage};
use crate::web::account::{AccountSnapshot, AccountState, use_account_store};
use crate::web::navigation::routes;
use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::nested_router::Outlet;
use leptos_router::path;
use reactive_stores::Store;

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	provide_context(Store::new(AccountState::default()));

	view! {
		<Stylesheet href="/pkg/lounge-settings.css" />
		<Title text="Settings" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=|| view! { <Redirect path=routes::SETTINGS /> } />
				<ParentRoute path=path!("/settings") view=SettingsPage>
					<Route path=path!("") view=InitialSettingsPage />
					<Route path=path!("/profile/lounge-access") view=LoungeAccessPage />
				</ParentRoute>
			</Routes>
		</Router>
	}
}

/// Writes a fetched snapshot into the store. A failed fetch leaves the store signed out.
fn load_snapshot(store: Store<AccountState>, snapshot: Result<AccountSnapshot, ServerFnError>) {
	match snapshot {
		Ok(snapshot) => AccountState::apply_snapshot(store, snapshot),
		Err(error) => tracing::warn!(source = ?error, "Failed to load the account; showing settings signed out"),
	}
}

/// Loads the signed in account into the store before showing any settings page
#[component]
fn SettingsPage() -> impl IntoView {
	let store = use_account_store();
	let snapshot = Resource::new(|| (), |_| get_account_snapshot());
	let (loaded, set_loaded) = signal(false);

	Effect::new(move |_| {
		if let Some(result) = snapshot.get() {
			load_snapshot(store, result);
			set_loaded.set(true);
		}
	});

	view! {
		<Show when=move || loaded.get()>
			<main>
				<Outlet />
			</main>
		</Show>
	}
}

#[server]
pub async fn get_account_snapshot() -> Result<AccountSnapshot, ServerFnError> {
	use crate::web::state::AppState;

	let state = expect_context::<AppState>();
	Ok(state.account.as_ref().clone())
}
