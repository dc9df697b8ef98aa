//! Auth Client: login, registration, and the silent session check.
//!
//! Each operation maps HTTP outcomes onto the [`ApiError`] taxonomy so the
//! session layer and the forms deal in typed results, never raw responses.
//! The bearer header is attached explicitly per request; there is no shared
//! transport configuration to mutate.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

#[cfg(feature = "hydrate")]
use super::api;
use super::error::ApiError;
use super::types::{AuthSession, RegisterPayload, User};

/// Check the stored credential against `GET /api/auth/me`.
///
/// # Errors
///
/// `Unauthenticated` when the server rejects the credential, `Network` on
/// transport failure. Callers treat either as a failed silent resume.
pub async fn current_user(token: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&api::api_url("/api/auth/me"))
            .header("Authorization", &api::bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(classify_session_check(resp.status()));
        }
        resp.json::<User>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::server_only())
    }
}

/// Exchange credentials for a session via `POST /api/auth/login`.
///
/// # Errors
///
/// `InvalidCredentials` on rejection, `Network` on transport failure.
pub async fn login(email: &str, password: &str) -> Result<AuthSession, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&api::api_url("/api/auth/login"))
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(classify_login(resp.status()));
        }
        resp.json::<AuthSession>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::server_only())
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// `Validation` with the server's message on rejected input (duplicate
/// account, malformed fields), `Network` on transport failure.
pub async fn register(payload: &RegisterPayload) -> Result<AuthSession, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&api::api_url("/api/auth/register"))
            .json(payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let message = api::response_message(&resp).await;
            return Err(classify_register(resp.status(), message));
        }
        resp.json::<AuthSession>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::server_only())
    }
}

/// Map a failed session-check status onto the error taxonomy.
fn classify_session_check(status: u16) -> ApiError {
    match status {
        401 | 403 => ApiError::Unauthenticated,
        _ => ApiError::Network(format!("session check failed with status {status}")),
    }
}

/// Map a failed login status onto the error taxonomy.
fn classify_login(status: u16) -> ApiError {
    match status {
        400 | 401 | 403 => ApiError::InvalidCredentials,
        _ => ApiError::Network(format!("login failed with status {status}")),
    }
}

/// Map a failed registration status onto the error taxonomy.
fn classify_register(status: u16, message: Option<String>) -> ApiError {
    if (400..500).contains(&status) {
        ApiError::Validation(
            message.unwrap_or_else(|| "Failed to register. Please try again.".to_owned()),
        )
    } else {
        ApiError::Network(format!("registration failed with status {status}"))
    }
}
