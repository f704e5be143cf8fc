// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Message types live in [`messages`] and follow a struct-based pattern with
//! `Display` plus [`messages::StructuredLog`], so log lines carry both a
//! readable message and typed fields.
//!
//! The value wrappers never log; only the collaborator layer and the
//! portfolio service emit events.
//!
//! # Usage
//!
//! ```rust
//! use the_monadic::observability::messages::{remote::RemoteCallStarted, StructuredLog};
//!
//! RemoteCallStarted {
//!     host_id: 3,
//!     method: "mod/mahara/rpclib.php/get_views_for_user",
//!     param_count: 2,
//! }
//! .log();
//! ```

pub mod messages;

use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber.
///
/// `RUST_LOG` wins when set, otherwise `default_filter` is used. Returns
/// `false` when a global subscriber was already installed.
pub fn init_tracing(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
