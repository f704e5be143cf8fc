// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised by the value wrappers themselves.
//!
//! The combinators never fail: absence is carried in the return type. The only
//! failing operation is unchecked extraction from an empty
//! [`Maybe`](crate::maybe::Maybe), which is a caller contract violation.

use thiserror::Error;

/// Message used when a value is pulled out of an empty `Maybe`.
pub const EMPTY_VALUE_MESSAGE: &str = "Can not call get() on Maybe::None";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MonadError {
    /// `get()` was called on `Maybe::None` without checking `is_defined()`
    /// first or using `get_or_else`/`map`.
    #[error("{}", EMPTY_VALUE_MESSAGE)]
    EmptyValue,
}

/// Result type alias for wrapper extraction.
pub type MonadResult<T> = Result<T, MonadError>;
