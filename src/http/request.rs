//! Request identification.
//!
//! # Responsibilities
//! - Mint a unique request ID (UUID v4) for requests arriving without one
//! - Leave caller-supplied IDs unchanged so they propagate to the response
//!
//! # Design Decisions
//! - The ID is set in the outermost layer so every span carries it
//! - Header name follows the x-request-id convention

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Mints a fresh UUID v4 for requests arriving without an ID.
#[derive(Clone, Copy, Debug, Default)]
pub struct MakeUuidRequestId;

impl MakeRequestId for MakeUuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}
