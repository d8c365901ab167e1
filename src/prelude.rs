pub use crate::fold::FoldIterator;
pub use crate::folder::Folder;
