//! This crate provides sequential fold (reduce) operations over ordered sequences.
#![warn(clippy::all)]
#![deny(missing_docs)]

/// Errors reported by fold operations.
pub(crate) mod error;
pub use crate::error::EmptyInput;
/// Core fold operations.
pub(crate) mod fold;
pub use crate::fold::{fold_first, fold_indexed, fold_seeded, try_fold_seeded, FoldIterator};
/// Folder trait and implementations.
pub(crate) mod folder;
pub use crate::folder::{folder, ClosureFolder, Folder, Map};
/// Grouping folder.
pub(crate) mod grouping;
pub use crate::grouping::GroupedSum;
/// Import all traits in prelude to enable fold methods.
pub mod prelude;
/// Per-step tracing adaptor.
pub(crate) mod traced;
pub use crate::traced::Traced;
