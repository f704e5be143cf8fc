// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod collaborators; // remote transport, record store, event notifier
pub mod config;        // service config loader + validation
pub mod either;        // Left / Right
pub mod errors;        // error handling
pub mod maybe;         // Some / None
pub mod observability;
pub mod projection;    // side views over Either
pub mod service;       // portfolio sync on top of the wrappers
pub mod traits;        // shared combinator set
