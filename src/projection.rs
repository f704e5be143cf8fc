// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Side projections over [`Either`].
//!
//! A projection wraps exactly one `Either` and accepts one side of it. The
//! [`Monadic`] combinators only touch the payload when the wrapped tag matches
//! the accepted side:
//!
//! * `map` rewraps the result as a new same-side `Either` inside a new
//!   projection, or passes the other side through untouched;
//! * `each` runs its effect on a match and always returns the projection;
//! * `filter` yields `Maybe::Some(projection)` on a match that satisfies the
//!   predicate and `Maybe::None` otherwise. The projection stays nested so the
//!   chain can keep using projection combinators after the filter.
//!
//! The non-combinator `Either` operations (`is_right`, `is_left`, `get`,
//! `fold`) are delegated explicitly to the wrapped value.
//!
//! ```
//! use the_monadic::either::Either;
//! use the_monadic::traits::Monadic;
//!
//! let ok: Either<&str, i32> = Either::Right(42);
//! assert_eq!(ok.with_right().map(|x| x + 1).into_inner(), Either::Right(43));
//!
//! let failed: Either<&str, i32> = Either::Left("err");
//! assert_eq!(failed.with_right().map(|x| x + 1).into_inner(), Either::Left("err"));
//! ```
//!
//! Projecting a borrowed value leaves the original in place:
//!
//! ```
//! use the_monadic::either::Either;
//! use the_monadic::traits::Monadic;
//!
//! let outcome: Either<String, Vec<u8>> = Either::Right(vec![1, 2, 3]);
//! let len = outcome.as_ref().with_right().map(|bytes| bytes.len()).fold(|_| 0, |n| n);
//!
//! assert_eq!(len, 3);
//! assert!(outcome.is_right());
//! ```

use crate::either::Either;
use crate::maybe::Maybe;
use crate::traits::Monadic;

/// A view over an [`Either`] that only operates on `Right` payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RightProjection<L, R> {
    inner: Either<L, R>,
}

/// A view over an [`Either`] that only operates on `Left` payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeftProjection<L, R> {
    inner: Either<L, R>,
}

impl<L, R> RightProjection<L, R> {
    pub fn new(inner: Either<L, R>) -> Self {
        Self { inner }
    }

    /// True iff the wrapped value is a `Right`.
    pub fn is_acceptable(&self) -> bool {
        self.inner.is_right()
    }

    pub fn is_right(&self) -> bool {
        self.inner.is_right()
    }

    pub fn is_left(&self) -> bool {
        self.inner.is_left()
    }

    pub fn fold<U, FL, FR>(self, on_left: FL, on_right: FR) -> U
    where
        FL: FnOnce(L) -> U,
        FR: FnOnce(R) -> U,
    {
        self.inner.fold(on_left, on_right)
    }

    pub fn either(&self) -> &Either<L, R> {
        &self.inner
    }

    /// Drop the view and hand back the wrapped value.
    pub fn into_inner(self) -> Either<L, R> {
        self.inner
    }
}

impl<T> RightProjection<T, T> {
    pub fn get(self) -> T {
        self.inner.get()
    }

    pub fn get_ref(&self) -> &T {
        self.inner.get_ref()
    }
}

impl<L, R, E> RightProjection<L, Result<R, E>> {
    /// Lift a fallible right-side `map` out of the projection.
    ///
    /// `Right(Err(e))` becomes `Err(e)`; `Right(Ok(r))` and any `Left` stay
    /// projections.
    pub fn transpose(self) -> Result<RightProjection<L, R>, E> {
        match self.inner {
            Either::Right(Ok(value)) => Ok(RightProjection::new(Either::Right(value))),
            Either::Right(Err(error)) => Err(error),
            Either::Left(value) => Ok(RightProjection::new(Either::Left(value))),
        }
    }
}

impl<L, R> Monadic for RightProjection<L, R> {
    type Item = R;
    type Mapped<U> = RightProjection<L, U>;
    type Filtered = Maybe<RightProjection<L, R>>;

    fn map<U, F>(self, f: F) -> RightProjection<L, U>
    where
        F: FnOnce(R) -> U,
    {
        match self.inner {
            Either::Right(value) => RightProjection::new(Either::Right(f(value))),
            Either::Left(value) => RightProjection::new(Either::Left(value)),
        }
    }

    fn each<F>(self, f: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Either::Right(value) = &self.inner {
            f(value);
        }
        self
    }

    fn filter<P>(self, pred: P) -> Maybe<RightProjection<L, R>>
    where
        P: FnOnce(&R) -> bool,
    {
        match self.inner {
            Either::Right(value) if pred(&value) => {
                Maybe::Some(RightProjection::new(Either::Right(value)))
            }
            _ => Maybe::None,
        }
    }
}

impl<L, R> LeftProjection<L, R> {
    pub fn new(inner: Either<L, R>) -> Self {
        Self { inner }
    }

    /// True iff the wrapped value is a `Left`.
    pub fn is_acceptable(&self) -> bool {
        self.inner.is_left()
    }

    pub fn is_right(&self) -> bool {
        self.inner.is_right()
    }

    pub fn is_left(&self) -> bool {
        self.inner.is_left()
    }

    pub fn fold<U, FL, FR>(self, on_left: FL, on_right: FR) -> U
    where
        FL: FnOnce(L) -> U,
        FR: FnOnce(R) -> U,
    {
        self.inner.fold(on_left, on_right)
    }

    pub fn either(&self) -> &Either<L, R> {
        &self.inner
    }

    pub fn into_inner(self) -> Either<L, R> {
        self.inner
    }
}

impl<T> LeftProjection<T, T> {
    pub fn get(self) -> T {
        self.inner.get()
    }

    pub fn get_ref(&self) -> &T {
        self.inner.get_ref()
    }
}

impl<L, R> Monadic for LeftProjection<L, R> {
    type Item = L;
    type Mapped<U> = LeftProjection<U, R>;
    type Filtered = Maybe<LeftProjection<L, R>>;

    fn map<U, F>(self, f: F) -> LeftProjection<U, R>
    where
        F: FnOnce(L) -> U,
    {
        match self.inner {
            Either::Left(value) => LeftProjection::new(Either::Left(f(value))),
            Either::Right(value) => LeftProjection::new(Either::Right(value)),
        }
    }

    fn each<F>(self, f: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Either::Left(value) = &self.inner {
            f(value);
        }
        self
    }

    fn filter<P>(self, pred: P) -> Maybe<LeftProjection<L, R>>
    where
        P: FnOnce(&L) -> bool,
    {
        match self.inner {
            Either::Left(value) if pred(&value) => {
                Maybe::Some(LeftProjection::new(Either::Left(value)))
            }
            _ => Maybe::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_acceptability_follows_tag() {
        let right: Either<&str, i32> = Either::Right(1);
        let left: Either<&str, i32> = Either::Left("e");

        assert!(right.with_right().is_acceptable());
        assert!(!right.with_left().is_acceptable());
        assert!(left.with_left().is_acceptable());
        assert!(!left.with_right().is_acceptable());
    }

    #[test]
    fn test_right_map_on_right_rewraps_as_right() {
        let mapped = Either::<&str, i32>::Right(42).with_right().map(|x| x + 1);

        assert!(mapped.is_acceptable());
        assert_eq!(mapped.either(), &Either::Right(43));
    }

    #[test]
    fn test_right_map_then_get() {
        assert_eq!(Either::<i32, i32>::Right(42).with_right().map(|x| x + 1).get(), 43);
    }

    #[test]
    fn test_right_map_on_left_passes_through_without_calling() {
        let calls = Cell::new(0);
        let mapped = Either::<&str, i32>::Left("err").with_right().map(|x| {
            calls.set(calls.get() + 1);
            x + 1
        });

        assert_eq!(calls.get(), 0);
        assert!(!mapped.is_acceptable());
        assert_eq!(mapped.into_inner(), Either::Left("err"));
    }

    #[test]
    fn test_right_map_on_left_get_returns_left_payload() {
        assert_eq!(Either::<i32, i32>::Left(7).with_right().map(|x| x + 1).get(), 7);
    }

    #[test]
    fn test_left_map_touches_only_left() {
        let mapped = Either::<String, i32>::Left("err".to_string())
            .with_left()
            .map(|e| e.to_uppercase());
        assert_eq!(mapped.into_inner(), Either::Left("ERR".to_string()));

        let calls = Cell::new(0);
        let untouched = Either::<String, i32>::Right(5).with_left().map(|e| {
            calls.set(calls.get() + 1);
            e.len()
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(untouched.into_inner(), Either::Right(5));
    }

    #[test]
    fn test_each_runs_only_on_match_and_returns_self() {
        let seen = Cell::new(0);
        let projection = Either::<&str, i32>::Right(3).with_right().each(|x| seen.set(*x));
        assert_eq!(seen.get(), 3);
        assert_eq!(projection.either(), &Either::Right(3));

        let seen = Cell::new(0);
        let projection = Either::<&str, i32>::Left("e").with_right().each(|x| seen.set(*x));
        assert_eq!(seen.get(), 0);
        assert_eq!(projection.either(), &Either::Left("e"));
    }

    #[test]
    fn test_right_filter_scenarios() {
        let low = Either::<&str, i32>::Right(5).with_right().filter(|x| *x > 10);
        assert!(low.is_empty());

        let high = Either::<&str, i32>::Right(15).with_right().filter(|x| *x > 10);
        assert_eq!(high, Maybe::Some(RightProjection::new(Either::Right(15))));
    }

    #[test]
    fn test_filter_on_other_side_is_none_without_calling_predicate() {
        let calls = Cell::new(0);
        let filtered = Either::<&str, i32>::Left("e").with_right().filter(|_| {
            calls.set(calls.get() + 1);
            true
        });

        assert!(filtered.is_empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_left_filter() {
        let kept = Either::<i32, &str>::Left(404).with_left().filter(|code| *code >= 400);
        assert_eq!(kept, Maybe::Some(LeftProjection::new(Either::Left(404))));

        let dropped = Either::<i32, &str>::Left(200).with_left().filter(|code| *code >= 400);
        assert_eq!(dropped, Maybe::None);
    }

    #[test]
    fn test_filter_result_keeps_chaining_as_projection() {
        let doubled = Either::<&str, i32>::Right(15)
            .with_right()
            .filter(|x| *x > 10)
            .map(|projection| projection.map(|x| x * 2))
            .map(|projection| projection.fold(|_| 0, |x| x))
            .get_or_else(-1);

        assert_eq!(doubled, 30);
    }

    #[test]
    fn test_delegates_non_combinator_calls() {
        let projection = Either::<&str, i32>::Right(1).with_right();
        assert!(projection.is_right());
        assert!(!projection.is_left());
        assert_eq!(projection.fold(|_| -1, |x| x), 1);

        let projection = Either::<i32, i32>::Left(9).with_left();
        assert!(projection.is_left());
        assert_eq!(*projection.get_ref(), 9);
        assert_eq!(projection.get(), 9);
    }

    #[test]
    fn test_mixed_chain() {
        let log = Cell::new(0);
        let result = Either::<String, i32>::Right(2)
            .with_right()
            .map(|x| x * 10)
            .each(|x| log.set(*x))
            .into_inner()
            .with_left()
            .map(|e| e.len())
            .fold(|_| 0, |x| x);

        assert_eq!(log.get(), 20);
        assert_eq!(result, 20);
    }

    #[test]
    fn test_transpose_fallible_map() {
        let ok = Either::<&str, &str>::Right("12")
            .with_right()
            .map(|s| s.parse::<i32>())
            .transpose();
        assert_eq!(ok.map(|p| p.into_inner()), Ok(Either::Right(12)));

        let failed = Either::<&str, &str>::Right("x")
            .with_right()
            .map(|s| s.parse::<i32>())
            .transpose();
        assert!(failed.is_err());

        let skipped = Either::<&str, &str>::Left("offline")
            .with_right()
            .map(|s| s.parse::<i32>())
            .transpose();
        assert_eq!(skipped.map(|p| p.into_inner()), Ok(Either::Left("offline")));
    }

    #[test]
    fn test_borrowed_projection_leaves_original_untouched() {
        let outcome: Either<String, i32> = Either::Right(10);
        let mapped = outcome.as_ref().with_right().map(|x| x + 1);

        assert_eq!(mapped.into_inner(), Either::Right(11));
        assert_eq!(outcome, Either::Right(10));
    }
}
