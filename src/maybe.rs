// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! A value that is either present or absent.
//!
//! `Maybe` is the natural return shape of a keyed lookup. It is consumed
//! functionally: every combinator returns a new `Maybe` and the absent branch
//! never invokes the supplied closure.
//!
//! # Examples
//!
//! ```
//! use the_monadic::maybe::Maybe;
//! use the_monadic::traits::Monadic;
//!
//! let found = Maybe::Some(20).map(|n| n + 1).filter(|n| *n > 10);
//! assert_eq!(found.get_or_else(0), 21);
//!
//! let missing: Maybe<i32> = Maybe::None;
//! assert!(missing.get().is_err());
//! ```

use crate::errors::{MonadError, MonadResult};
use crate::traits::Monadic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Maybe<T> {
    /// Carrying a value.
    Some(T),
    /// Carrying nothing.
    #[default]
    None,
}

impl<T> Maybe<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Maybe::None)
    }

    pub fn is_defined(&self) -> bool {
        !self.is_empty()
    }

    /// Take the wrapped value.
    ///
    /// Fails with [`MonadError::EmptyValue`] on `None`.
    #[must_use = "an empty Maybe is a contract violation that must be handled"]
    pub fn get(self) -> MonadResult<T> {
        match self {
            Maybe::Some(value) => Ok(value),
            Maybe::None => Err(MonadError::EmptyValue),
        }
    }

    /// Borrow the wrapped value. Fails like [`Maybe::get`].
    #[must_use = "an empty Maybe is a contract violation that must be handled"]
    pub fn get_ref(&self) -> MonadResult<&T> {
        self.as_ref().get()
    }

    /// Keep `self` when defined, otherwise wrap the supplier's result.
    ///
    /// The supplier runs exactly once, and only when empty.
    pub fn or_else<F>(self, supplier: F) -> Maybe<T>
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => Maybe::Some(supplier()),
        }
    }

    /// The wrapped value, or `default`.
    ///
    /// `default` is an already evaluated value; use
    /// [`Maybe::get_or_else_with`] to defer its construction.
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => default,
        }
    }

    pub fn get_or_else_with<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => supplier(),
        }
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => Maybe::None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}

impl<T> Monadic for Maybe<T> {
    type Item = T;
    type Mapped<U> = Maybe<U>;
    type Filtered = Maybe<T>;

    fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(value) => Maybe::Some(f(value)),
            Maybe::None => Maybe::None,
        }
    }

    fn each<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Maybe::Some(value) = &self {
            f(value);
        }
        self
    }

    fn filter<P>(self, pred: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Some(value) if pred(&value) => Maybe::Some(value),
            _ => Maybe::None,
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Maybe::Some(value),
            None => Maybe::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}
