//! Folder trait and its implementations.
use crate::traced::Traced;
use std::marker::PhantomData;

/// A `Folder` packs a starting accumulator together with a combining
/// operation, so the same fold can be rerun, post-processed with `map` or
/// traced step by step. `run` consumes the elements left to right; each step
/// rebinds the accumulator to the combined value.
pub trait Folder: Sized {
    /// Element type consumed by the folder.
    type Item;
    /// Accumulator type carried between steps.
    type Acc;
    /// Final output type, produced from the last accumulator.
    type Output;
    /// Produce the starting accumulator.
    fn seed(&self) -> Self::Acc;
    /// Combine the accumulator with the next element.
    fn consume(&self, accumulator: Self::Acc, item: Self::Item) -> Self::Acc;
    /// Turn the final accumulator into the output.
    fn finish(&self, accumulator: Self::Acc) -> Self::Output;
    /// Run the fold over `items`, left to right.
    ///
    /// # Example
    ///
    /// ```
    /// use seqfold::prelude::*;
    /// let sum = seqfold::folder(|| 0u32, |acc: u32, curr: u32| acc + curr);
    /// assert_eq!(sum.run(1..5), 10);
    /// ```
    fn run<I>(&self, items: I) -> Self::Output
    where
        I: IntoIterator<Item = Self::Item>,
    {
        let mut accumulator = self.seed();
        for item in items {
            accumulator = self.consume(accumulator, item);
        }
        self.finish(accumulator)
    }
    /// Post-process the final output with `map_op`.
    fn map<O, M: Fn(Self::Output) -> O>(self, map_op: M) -> Map<Self, O, M> {
        Map {
            inner_folder: self,
            map_op,
            phantom: PhantomData,
        }
    }
    /// Emit one trace event per consumed element, tagged with `tag`.
    fn traced(self, tag: &'static str) -> Traced<Self> {
        Traced {
            inner_folder: self,
            tag,
        }
    }
}

/// Folder built from a seed closure and a combining closure by the `folder`
/// function.
pub struct ClosureFolder<T, R, S: Fn() -> R, F: Fn(R, T) -> R> {
    pub(crate) seed_op: S,
    pub(crate) fold_op: F,
    pub(crate) phantom: PhantomData<(T, R)>,
}

/// Build a `Folder` from a seed closure and a combining closure.
pub fn folder<T, R, S, F>(seed_op: S, fold_op: F) -> ClosureFolder<T, R, S, F>
where
    S: Fn() -> R,
    F: Fn(R, T) -> R,
{
    ClosureFolder {
        seed_op,
        fold_op,
        phantom: PhantomData,
    }
}

impl<T, R, S, F> Folder for ClosureFolder<T, R, S, F>
where
    S: Fn() -> R,
    F: Fn(R, T) -> R,
{
    type Item = T;
    type Acc = R;
    type Output = R;
    fn seed(&self) -> R {
        (self.seed_op)()
    }
    fn consume(&self, accumulator: R, item: T) -> R {
        (self.fold_op)(accumulator, item)
    }
    fn finish(&self, accumulator: R) -> R {
        accumulator
    }
}

/// Map a folder's output to something else, obtained from the `map` method
/// on `Folder`. The mapping runs once, on the final output only.
pub struct Map<F: Folder, O, M: Fn(F::Output) -> O> {
    pub(crate) inner_folder: F,
    pub(crate) map_op: M,
    pub(crate) phantom: PhantomData<O>,
}

impl<F, O, M> Folder for Map<F, O, M>
where
    F: Folder,
    M: Fn(F::Output) -> O,
{
    type Item = F::Item;
    type Acc = F::Acc;
    type Output = O;
    fn seed(&self) -> Self::Acc {
        self.inner_folder.seed()
    }
    fn consume(&self, accumulator: Self::Acc, item: Self::Item) -> Self::Acc {
        self.inner_folder.consume(accumulator, item)
    }
    fn finish(&self, accumulator: Self::Acc) -> Self::Output {
        (self.map_op)(self.inner_folder.finish(accumulator))
    }
}
