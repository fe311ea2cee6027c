//! Shared response envelope types for API handlers.
//!
//! Every failure body (and most plain-acknowledgement bodies) is a
//! `{ "msg": ... }` envelope. Use [`MsgResponse`] instead of ad-hoc
//! `serde_json::json!` so the shape stays consistent.

use serde::Serialize;

/// Standard `{ "msg": "..." }` response body.
#[derive(Debug, Serialize)]
pub struct MsgResponse {
    pub msg: &'static str,
}

impl MsgResponse {
    pub fn new(msg: &'static str) -> Self {
        Self { msg }
    }
}
