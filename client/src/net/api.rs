//! REST API helpers for the activities endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Each call is a single attempt with no retry or timeout. Transport and
//! decode failures come back as `ApiError`; application-level rejections of a
//! mutation are not errors and arrive as a non-ok `MutationReply`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ActivityMap, MutationReply};

/// Path of the activity listing endpoint.
pub const ACTIVITIES_ENDPOINT: &str = "/activities";

/// Failure to obtain a usable response from the activities API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn signup_endpoint(activity: &str, email: &str) -> String {
    mutation_endpoint(activity, "signup", email)
}

#[cfg(any(test, feature = "hydrate"))]
fn unregister_endpoint(activity: &str, email: &str) -> String {
    mutation_endpoint(activity, "unregister", email)
}

#[cfg(any(test, feature = "hydrate"))]
fn mutation_endpoint(activity: &str, action: &str, email: &str) -> String {
    format!(
        "{ACTIVITIES_ENDPOINT}/{}/{action}?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

/// Fetch the full activity snapshot from `GET /activities`.
///
/// # Errors
///
/// Returns an error if the request never completes, the server answers with a
/// non-OK status, or the body is not an activity mapping.
pub async fn fetch_activities() -> Result<ActivityMap, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ACTIVITIES_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<ActivityMap>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Sign `email` up for `activity` via `POST /activities/{activity}/signup`.
///
/// # Errors
///
/// Returns an error only if the request never completes.
pub async fn signup(activity: &str, email: &str) -> Result<MutationReply, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = signup_endpoint(activity, email);
        send_mutation(gloo_net::http::Request::post(&url)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (activity, email);
        Err(ApiError::Unavailable)
    }
}

/// Remove `email` from `activity` via `DELETE /activities/{activity}/unregister`.
///
/// # Errors
///
/// Returns an error only if the request never completes.
pub async fn unregister(activity: &str, email: &str) -> Result<MutationReply, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = unregister_endpoint(activity, email);
        send_mutation(gloo_net::http::Request::delete(&url)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (activity, email);
        Err(ApiError::Unavailable)
    }
}

// A body that is not JSON decodes as an empty response so the caller falls
// back to its generic message.
#[cfg(feature = "hydrate")]
async fn send_mutation(request: gloo_net::http::RequestBuilder) -> Result<MutationReply, ApiError> {
    use super::types::MutationResponse;

    let resp = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let body = resp.json::<MutationResponse>().await.unwrap_or_default();
    Ok(MutationReply { ok: resp.ok(), status: resp.status(), body })
}
