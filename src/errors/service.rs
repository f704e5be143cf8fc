// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for the record store and the portfolio service.
//!
//! A failed remote call is not an error here: it travels as `Either::Left`
//! data. These variants cover the local collaborators only.

use super::MonadError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    /// The record store could not complete an operation.
    #[error("Record store error: {0}")]
    Store(String),

    /// A record or remote payload is missing a field or has the wrong shape.
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// A user lookup found nothing.
    #[error("Unknown user: {0}")]
    UnknownUser(i64),

    /// A wrapper was unwrapped while empty.
    #[error(transparent)]
    Monad(#[from] MonadError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
