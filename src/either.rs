// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! A value that is one of two alternatives.
//!
//! By convention `Right` holds the primary outcome (a successful remote call)
//! and `Left` the alternate one (the error payload). The type itself is
//! symmetric. The tag is fixed at construction; [`Either::fold`] is the safe
//! elimination form and the side projections ([`Either::with_right`],
//! [`Either::with_left`]) apply combinators to one side only.

use crate::maybe::Maybe;
use crate::projection::{LeftProjection, RightProjection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    pub fn is_left(&self) -> bool {
        !self.is_right()
    }

    /// Apply `on_left` or `on_right`, whichever matches the tag.
    pub fn fold<U, FL, FR>(self, on_left: FL, on_right: FR) -> U
    where
        FL: FnOnce(L) -> U,
        FR: FnOnce(R) -> U,
    {
        match self {
            Either::Left(value) => on_left(value),
            Either::Right(value) => on_right(value),
        }
    }

    /// Project onto the right side, moving `self` into the view.
    pub fn with_right(self) -> RightProjection<L, R> {
        RightProjection::new(self)
    }

    /// Project onto the left side, moving `self` into the view.
    pub fn with_left(self) -> LeftProjection<L, R> {
        LeftProjection::new(self)
    }

    /// Borrow both sides, e.g. to project without giving up ownership.
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(value) => Either::Left(value),
            Either::Right(value) => Either::Right(value),
        }
    }

    pub fn left(self) -> Maybe<L> {
        match self {
            Either::Left(value) => Maybe::Some(value),
            Either::Right(_) => Maybe::None,
        }
    }

    pub fn right(self) -> Maybe<R> {
        match self {
            Either::Left(_) => Maybe::None,
            Either::Right(value) => Maybe::Some(value),
        }
    }
}

impl<T> Either<T, T> {
    /// Return the payload whichever side holds it.
    ///
    /// Unchecked: the tag is not consulted and this never fails.
    pub fn get(self) -> T {
        match self {
            Either::Left(value) | Either::Right(value) => value,
        }
    }

    pub fn get_ref(&self) -> &T {
        match self {
            Either::Left(value) | Either::Right(value) => value,
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Either::Right(value),
            Err(error) => Either::Left(error),
        }
    }
}
