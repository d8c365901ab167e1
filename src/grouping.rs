//! Grouping folder: sum amounts per key while folding.
use crate::folder::Folder;
use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

/// Folder accumulating a map from key to summed amount. Each consumed
/// element is upserted: an unseen key is inserted with the element's amount,
/// a seen key gets the amount added to its entry. The seed is the empty map,
/// so the accumulator type differs from the element type.
///
/// # Example
///
/// ```
/// use seqfold::prelude::*;
/// use seqfold::GroupedSum;
/// let by_parity = GroupedSum::new(|n: &u64| n % 2, |n: &u64| *n);
/// let sums = by_parity.run(vec![1, 2, 3, 4]);
/// assert_eq!(sums[&0], 6);
/// assert_eq!(sums[&1], 4);
/// ```
pub struct GroupedSum<T, K: Hash + Eq, KF: Fn(&T) -> K, AF: Fn(&T) -> u64> {
    pub(crate) key_op: KF,
    pub(crate) amount_op: AF,
    pub(crate) phantom: PhantomData<(T, K)>,
}

impl<T, K: Hash + Eq, KF: Fn(&T) -> K, AF: Fn(&T) -> u64> GroupedSum<T, K, KF, AF> {
    /// Build a grouping folder from a key extractor and an amount extractor.
    pub fn new(key_op: KF, amount_op: AF) -> Self {
        GroupedSum {
            key_op,
            amount_op,
            phantom: PhantomData,
        }
    }
}

impl<T, K, KF, AF> Folder for GroupedSum<T, K, KF, AF>
where
    K: Hash + Eq,
    KF: Fn(&T) -> K,
    AF: Fn(&T) -> u64,
{
    type Item = T;
    type Acc = HashMap<K, u64>;
    type Output = HashMap<K, u64>;
    fn seed(&self) -> Self::Acc {
        HashMap::new()
    }
    fn consume(&self, mut accumulator: Self::Acc, item: Self::Item) -> Self::Acc {
        let key = (self.key_op)(&item);
        let amount = (self.amount_op)(&item);
        *accumulator.entry(key).or_insert(0) += amount;
        accumulator
    }
    fn finish(&self, accumulator: Self::Acc) -> Self::Output {
        accumulator
    }
}
