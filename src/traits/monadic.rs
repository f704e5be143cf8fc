// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Shared combinator set for value wrappers.
///
/// Implemented by [`Maybe`](crate::maybe::Maybe) and by both side projections
/// over [`Either`](crate::either::Either). Each combinator consumes the wrapper
/// and hands back a new one, so pipelines read left to right:
///
/// ```
/// use the_monadic::either::Either;
/// use the_monadic::traits::Monadic;
///
/// let total = Either::<String, i32>::Right(41)
///     .with_right()
///     .map(|x| x + 1)
///     .fold(|_err| 0, |x| x);
///
/// assert_eq!(total, 42);
/// ```
pub trait Monadic: Sized {
    /// The value the combinators operate on.
    type Item;

    /// Wrapper produced by `map` when the item type changes to `U`.
    type Mapped<U>;

    /// Wrapper produced by `filter`.
    type Filtered;

    /// Transform the wrapped item. The function is not invoked when the
    /// wrapper does not hold an item it accepts.
    fn map<U, F>(self, f: F) -> Self::Mapped<U>
    where
        F: FnOnce(Self::Item) -> U;

    /// Run a side effect against the wrapped item and return the wrapper
    /// unchanged.
    fn each<F>(self, f: F) -> Self
    where
        F: FnOnce(&Self::Item);

    /// Keep the wrapped item only when `pred` holds for it.
    fn filter<P>(self, pred: P) -> Self::Filtered
    where
        P: FnOnce(&Self::Item) -> bool;
}
