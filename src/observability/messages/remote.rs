// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for remote call lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Remote call dispatch to a peer host
//! * Successful completion, with duration
//! * Failure, carrying the peer's error payload

use crate::observability::messages::StructuredLog;
use serde_json::Value;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Remote call dispatched.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_monadic::observability::messages::remote::RemoteCallStarted;
///
/// let msg = RemoteCallStarted {
///     host_id: 2,
///     method: "mod/mahara/rpclib.php/get_views_for_user",
///     param_count: 2,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct RemoteCallStarted<'a> {
    pub host_id: i64,
    pub method: &'a str,
    pub param_count: usize,
}

impl Display for RemoteCallStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Calling '{}' on host {} with {} params",
            self.method, self.host_id, self.param_count
        )
    }
}

impl StructuredLog for RemoteCallStarted<'_> {
    fn log(&self) {
        tracing::info!(
            host_id = self.host_id,
            method = self.method,
            param_count = self.param_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "remote_call",
            span_name = name,
            host_id = self.host_id,
            method = self.method,
        )
    }
}

/// Remote call returned a success outcome.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RemoteCallSucceeded<'a> {
    pub method: &'a str,
    pub duration: std::time::Duration,
}

impl Display for RemoteCallSucceeded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Remote call '{}' succeeded in {:?}", self.method, self.duration)
    }
}

impl StructuredLog for RemoteCallSucceeded<'_> {
    fn log(&self) {
        tracing::info!(
            method = self.method,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "remote_call_succeeded",
            span_name = name,
            method = self.method,
            duration = ?self.duration,
        )
    }
}

/// Remote call returned a failure outcome.
///
/// The failure is data for the caller (it becomes `Either::Left`), so this is
/// logged as a warning rather than an error.
///
/// # Log Level
/// `warn!` - Degraded but handled
///
/// # Example
/// ```
/// use the_monadic::observability::messages::remote::RemoteCallFailed;
/// use serde_json::json;
///
/// let error = json!({"code": 7, "message": "view not found"});
/// let msg = RemoteCallFailed {
///     method: "mod/mahara/rpclib.php/submit_view_for_assessment",
///     error: &error,
/// };
///
/// assert!(msg.to_string().contains("view not found"));
/// ```
pub struct RemoteCallFailed<'a> {
    pub method: &'a str,
    pub error: &'a Value,
}

impl Display for RemoteCallFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Remote call '{}' failed: {}", self.method, self.error)
    }
}

impl StructuredLog for RemoteCallFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            method = self.method,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "remote_call_failed",
            span_name = name,
            method = self.method,
            error = %self.error,
        )
    }
}
