//! Tracing adaptor emitting one event per fold step.
use crate::folder::Folder;
use std::fmt::Debug;
use tracing::trace;

/// Folder adaptor logging every step, obtained from the `traced` method on
/// `Folder`. Tracing never changes the folded result.
pub struct Traced<F> {
    pub(crate) inner_folder: F,
    pub(crate) tag: &'static str,
}

impl<F> Folder for Traced<F>
where
    F: Folder,
    F::Acc: Debug,
    F::Item: Debug,
{
    type Item = F::Item;
    type Acc = F::Acc;
    type Output = F::Output;
    fn seed(&self) -> Self::Acc {
        self.inner_folder.seed()
    }
    fn consume(&self, accumulator: Self::Acc, item: Self::Item) -> Self::Acc {
        // both operands move into the inner folder, render them first
        let accumulator_repr = format!("{:?}", accumulator);
        let item_repr = format!("{:?}", item);
        let total = self.inner_folder.consume(accumulator, item);
        trace!(
            tag = self.tag,
            "Accumulator: {} Current Value: {} Total: {:?}",
            accumulator_repr,
            item_repr,
            total
        );
        total
    }
    fn finish(&self, accumulator: Self::Acc) -> Self::Output {
        self.inner_folder.finish(accumulator)
    }
}
