//! REST client for the backend API.
//!
//! DESIGN
//! ======
//! `auth` covers the three session operations (login, register, session
//! check) with a typed error taxonomy; `api` covers the feature endpoints
//! (events, notifications, messages, motivation, payment). All network IO
//! is gated behind the `hydrate` feature since it requires a browser
//! environment; server-side stubs return errors so SSR never performs
//! authenticated calls.

pub mod api;
pub mod auth;
pub mod error;
pub mod types;
