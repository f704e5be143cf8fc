// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! # Organization
//!
//! * `remote` - remote call lifecycle (start, success, failure)
//! * `store` - record writes and deletes performed by the service
//! * `events` - named events handed to the notifier
//! * `validation` - configuration validation failures
//!
//! # Usage Pattern
//!
//! ```rust
//! use the_monadic::observability::messages::store::RecordInserted;
//!
//! let msg = RecordInserted {
//!     table: "mahara_portfolio",
//!     id: 12,
//! };
//!
//! tracing::info!("{}", msg);
//! ```

pub mod events;
pub mod remote;
pub mod store;
pub mod validation;

use tracing::Span;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog: std::fmt::Display {
    /// Emit the message at its level with typed fields attached.
    fn log(&self);

    /// Open a span carrying the same fields.
    fn span(&self, name: &str) -> Span;
}
