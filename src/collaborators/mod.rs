// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Abstract collaborators the value wrappers are composed with.
//!
//! Each collaborator is a trait at the seam, with an in-memory implementation
//! for tests and local runs:
//!
//! | trait | in-memory |
//! |---|---|
//! | [`RemoteTransport`] | [`ScriptedTransport`] |
//! | [`RecordStore`] | [`MemoryStore`] |
//! | [`EventNotifier`] | [`RecordingNotifier`] |
//!
//! A remote outcome becomes an [`Either`](crate::either::Either)
//! (`Right(payload)` on success, `Left(error)` on failure) and a single-record
//! lookup becomes a [`Maybe`](crate::maybe::Maybe).

pub mod memory;
pub mod notifier;
pub mod store;
pub mod transport;

pub use memory::{MemoryStore, RecordingNotifier, ScriptedTransport};
pub use notifier::EventNotifier;
pub use store::{Criteria, Record, RecordStore};
pub use transport::{RemoteCall, RemoteOutcome, RemoteTransport};
