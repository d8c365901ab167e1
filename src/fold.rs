//! Core sequential fold operations.
//! Application order is left to right and never reassociated since
//! combining operations are allowed to be non-associative.
use crate::error::EmptyInput;

/// Fold `items` from the left, starting from `seed`.
/// An empty input returns the seed untouched.
///
/// # Example
///
/// ```
/// assert_eq!(seqfold::fold_seeded(0..5, 10, |acc, curr| acc + curr), 20);
/// ```
pub fn fold_seeded<I, R, F>(items: I, seed: R, mut fold_op: F) -> R
where
    I: IntoIterator,
    F: FnMut(R, I::Item) -> R,
{
    let mut accumulator = seed;
    for item in items {
        accumulator = fold_op(accumulator, item);
    }
    accumulator
}

/// Fold `items` from the left, seeding the accumulator with the first
/// element. The combining operation runs once per remaining element, so a
/// singleton input is returned untouched.
///
/// # Example
///
/// ```
/// assert_eq!(seqfold::fold_first(vec![0, 1, 2, 3, 4], |acc, curr| acc + curr), Ok(10));
/// ```
pub fn fold_first<I, F>(items: I, fold_op: F) -> Result<I::Item, EmptyInput>
where
    I: IntoIterator,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    let mut iterator = items.into_iter();
    let seed = iterator.next().ok_or(EmptyInput)?;
    Ok(fold_seeded(iterator, seed, fold_op))
}

/// Seeded fold handing the combining operation the position of each element,
/// counted from 0.
pub fn fold_indexed<I, R, F>(items: I, seed: R, mut fold_op: F) -> R
where
    I: IntoIterator,
    F: FnMut(R, I::Item, usize) -> R,
{
    let mut accumulator = seed;
    for (index, item) in items.into_iter().enumerate() {
        accumulator = fold_op(accumulator, item, index);
    }
    accumulator
}

/// Seeded fold with a fallible combining operation, stopping at the first
/// error. The error is the caller's and is propagated unchanged.
///
/// # Example
///
/// ```
/// let safe_sum = seqfold::try_fold_seeded(vec![1u8, 2, 3], 0u8, |acc, curr| {
///     acc.checked_add(curr).ok_or("overflow")
/// });
/// assert_eq!(safe_sum, Ok(6));
/// ```
pub fn try_fold_seeded<I, R, E, F>(items: I, seed: R, mut fold_op: F) -> Result<R, E>
where
    I: IntoIterator,
    F: FnMut(R, I::Item) -> Result<R, E>,
{
    let mut accumulator = seed;
    for item in items {
        accumulator = fold_op(accumulator, item)?;
    }
    Ok(accumulator)
}

/// Sequential fold methods, available on every iterator.
pub trait FoldIterator: Iterator + Sized {
    /// Fold from the left, starting from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use seqfold::prelude::*;
    /// assert_eq!((0..5).fold_seeded(10, |acc, curr| acc + curr), 20);
    /// ```
    fn fold_seeded<R, F>(self, seed: R, fold_op: F) -> R
    where
        F: FnMut(R, Self::Item) -> R,
    {
        fold_seeded(self, seed, fold_op)
    }

    /// Fold from the left, seeded by the first element.
    ///
    /// # Example
    ///
    /// ```
    /// use seqfold::prelude::*;
    /// assert_eq!((0..5).fold_first(|acc, curr| acc + curr), Ok(10));
    /// ```
    fn fold_first<F>(self, fold_op: F) -> Result<Self::Item, EmptyInput>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        fold_first(self, fold_op)
    }

    /// Seeded fold with element positions, counted from 0.
    fn fold_indexed<R, F>(self, seed: R, fold_op: F) -> R
    where
        F: FnMut(R, Self::Item, usize) -> R,
    {
        fold_indexed(self, seed, fold_op)
    }

    /// Seeded fold stopping at the first combining error.
    fn try_fold_seeded<R, E, F>(self, seed: R, fold_op: F) -> Result<R, E>
    where
        F: FnMut(R, Self::Item) -> Result<R, E>,
    {
        try_fold_seeded(self, seed, fold_op)
    }
}

impl<I: Iterator> FoldIterator for I {}
