//! Feature REST endpoints: events, notifications, messages, motivation,
//! and payment verification.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with the bearer
//! header injected per request from the credential store. Server-side
//! (SSR): stubs returning errors since these endpoints are only meaningful
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`: 401 responses map to
//! `Unauthenticated`, other rejections carry the server's message as
//! `Validation`, and transport failures surface as `Network`. Callers
//! degrade UI behavior instead of crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::types::NewEvent;
use super::types::{
    CommunityPost, Event, EventFilters, EventRegistration, MotivationContent, Notification,
    PaymentVerification, RegistrationReceipt,
};

/// Base URL of the backend API, baked in at compile time.
pub fn api_base() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or("http://localhost:5000")
}

/// Join an endpoint path onto the API base.
pub fn api_url(path: &str) -> String {
    format!("{}{path}", api_base())
}

/// Value for the `Authorization` header.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Query pairs for the events listing; empty filters are omitted.
pub fn event_query(filters: &EventFilters) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if !filters.search.is_empty() {
        pairs.push(("search", filters.search.clone()));
    }
    if !filters.department.is_empty() {
        pairs.push(("department", filters.department.clone()));
    }
    if !filters.kind.is_empty() {
        pairs.push(("type", filters.kind.clone()));
    }
    pairs
}

/// Attach the bearer header when a credential is stored.
#[cfg(feature = "hydrate")]
fn authorized(req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::token_store::load() {
        Some(token) => req.header("Authorization", &bearer(&token)),
        None => req,
    }
}

/// Extract the `message` field from an error response body, if any.
#[cfg(feature = "hydrate")]
pub(crate) async fn response_message(resp: &gloo_net::http::Response) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }
    resp.json::<ErrorBody>().await.ok().and_then(|body| body.message)
}

#[cfg(feature = "hydrate")]
async fn error_from(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    if status == 401 {
        return ApiError::Unauthenticated;
    }
    let message = response_message(&resp).await;
    ApiError::Validation(message.unwrap_or_else(|| format!("request failed with status {status}")))
}

/// Send an authorized request and reject non-2xx responses.
#[cfg(feature = "hydrate")]
async fn send_authorized(
    req: gloo_net::http::RequestBuilder,
) -> Result<gloo_net::http::Response, ApiError> {
    let resp = authorized(req)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if resp.ok() {
        Ok(resp)
    } else {
        Err(error_from(resp).await)
    }
}

/// Send an authorized JSON request and reject non-2xx responses.
#[cfg(feature = "hydrate")]
async fn send_authorized_json<B: serde::Serialize>(
    req: gloo_net::http::RequestBuilder,
    body: &B,
) -> Result<gloo_net::http::Response, ApiError> {
    let request = authorized(req)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if resp.ok() {
        Ok(resp)
    } else {
        Err(error_from(resp).await)
    }
}

#[cfg(feature = "hydrate")]
async fn json_body<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

// =============================================================
// Events
// =============================================================

/// List events matching the given filters via `GET /api/events`.
pub async fn fetch_events(filters: &EventFilters) -> Result<Vec<Event>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let pairs = event_query(filters);
        let req = gloo_net::http::Request::get(&api_url("/api/events"))
            .query(pairs.iter().map(|(key, value)| (*key, value.as_str())));
        json_body(send_authorized(req).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = filters;
        Err(ApiError::server_only())
    }
}

/// Fetch a single event via `GET /api/events/{id}`.
pub async fn fetch_event(id: &str) -> Result<Event, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::get(&api_url(&format!("/api/events/{id}")));
        json_body(send_authorized(req).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::server_only())
    }
}

/// Fetch the caller's events via `GET /api/events/user`.
pub async fn fetch_my_events() -> Result<Vec<Event>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::get(&api_url("/api/events/user"));
        json_body(send_authorized(req).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::server_only())
    }
}

/// Delete an event via `DELETE /api/events/{id}`.
pub async fn delete_event(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::delete(&api_url(&format!("/api/events/{id}")));
        send_authorized(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::server_only())
    }
}

/// Book a seat via `POST /api/events/{id}/book`.
pub async fn book_event(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::post(&api_url(&format!("/api/events/{id}/book")));
        send_authorized(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::server_only())
    }
}

/// Cancel a booking via `POST /api/events/{id}/cancel`.
pub async fn cancel_booking(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::post(&api_url(&format!("/api/events/{id}/cancel")));
        send_authorized(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::server_only())
    }
}

/// Submit attendee details via `POST /api/events/register`.
pub async fn register_for_event(
    registration: &EventRegistration,
) -> Result<RegistrationReceipt, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::post(&api_url("/api/events/register"));
        json_body(send_authorized_json(req, registration).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = registration;
        Err(ApiError::server_only())
    }
}

/// Create an event via `POST /api/events` as a multipart form, with an
/// optional photo file.
#[cfg(feature = "hydrate")]
pub async fn create_event(event: &NewEvent, photo: Option<web_sys::File>) -> Result<Event, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("could not build form data".to_owned()))?;
    let fields = [
        ("title", &event.title),
        ("description", &event.description),
        ("date", &event.date),
        ("time", &event.time),
        ("location", &event.location),
        ("department", &event.department),
        ("type", &event.kind),
        ("capacity", &event.capacity),
    ];
    for (key, value) in fields {
        form.append_with_str(key, value)
            .map_err(|_| ApiError::Network("could not build form data".to_owned()))?;
    }
    if let Some(file) = photo {
        form.append_with_blob_and_filename("photo", &file, &file.name())
            .map_err(|_| ApiError::Network("could not attach photo".to_owned()))?;
    }

    let request = authorized(gloo_net::http::Request::post(&api_url("/api/events")))
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if resp.ok() {
        json_body(resp).await
    } else {
        Err(error_from(resp).await)
    }
}

// =============================================================
// Notifications
// =============================================================

/// List the caller's notifications via `GET /api/notifications`.
pub async fn fetch_notifications() -> Result<Vec<Notification>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::get(&api_url("/api/notifications"));
        json_body(send_authorized(req).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::server_only())
    }
}

/// Mark a notification read via `PUT /api/notifications/{id}/read`.
pub async fn mark_notification_read(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req =
            gloo_net::http::Request::put(&api_url(&format!("/api/notifications/{id}/read")));
        send_authorized(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::server_only())
    }
}

/// Delete a notification via `DELETE /api/notifications/{id}`.
pub async fn delete_notification(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::delete(&api_url(&format!("/api/notifications/{id}")));
        send_authorized(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::server_only())
    }
}

// =============================================================
// Community messages
// =============================================================

/// List community messages via `GET /api/messages`.
pub async fn fetch_messages() -> Result<Vec<CommunityPost>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::get(&api_url("/api/messages"));
        json_body(send_authorized(req).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::server_only())
    }
}

/// Post a community message via `POST /api/messages`.
pub async fn post_message(content: &str) -> Result<CommunityPost, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "content": content });
        let req = gloo_net::http::Request::post(&api_url("/api/messages"));
        json_body(send_authorized_json(req, &body).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = content;
        Err(ApiError::server_only())
    }
}

/// Delete a community message via `DELETE /api/messages/{id}`.
pub async fn delete_message(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::delete(&api_url(&format!("/api/messages/{id}")));
        send_authorized(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::server_only())
    }
}

// =============================================================
// Motivation
// =============================================================

/// Request personalized motivation via `POST /api/motivation`.
pub async fn request_motivation(feeling: &str) -> Result<MotivationContent, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "feeling": feeling });
        let req = gloo_net::http::Request::post(&api_url("/api/motivation"));
        json_body(send_authorized_json(req, &body).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = feeling;
        Err(ApiError::server_only())
    }
}

/// Generate motivation content for an event via
/// `POST /api/motivation/generate/{event_id}`.
pub async fn generate_event_motivation(event_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req =
            gloo_net::http::Request::post(&api_url(&format!("/api/motivation/generate/{event_id}")));
        send_authorized(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = event_id;
        Err(ApiError::server_only())
    }
}

/// Replace an event's motivation content via `PUT /api/motivation/{event_id}`.
pub async fn update_event_motivation(
    event_id: &str,
    content: &MotivationContent,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::put(&api_url(&format!("/api/motivation/{event_id}")));
        send_authorized_json(req, content).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (event_id, content);
        Err(ApiError::server_only())
    }
}

// =============================================================
// Payment
// =============================================================

/// Verify a checkout session via `POST /api/events/verify-payment`.
pub async fn verify_payment(session_id: &str) -> Result<PaymentVerification, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "sessionId": session_id });
        let req = gloo_net::http::Request::post(&api_url("/api/events/verify-payment"));
        json_body(send_authorized_json(req, &body).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session_id;
        Err(ApiError::server_only())
    }
}
