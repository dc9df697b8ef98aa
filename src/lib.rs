#![recursion_limit = "256"]
//! # campus-events-ui
//!
//! Leptos + WASM front end for the college event-management application.
//! Students discover and book events, organizers create and manage them,
//! and admins moderate content; community messages and motivation content
//! round out the feature set.
//!
//! This crate contains pages, components, application state, the REST
//! client, and the session layer that gates role-restricted routes behind
//! a bearer-token credential persisted in browser storage.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Client-side entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
