//! Path-addressed view of the drive.

pub mod cache;
pub(crate) mod node;
mod operations;
pub mod path;

pub use cache::{DEFAULT_CAPACITY, PathCache};
pub use node::{KindFilter, Node, NodeKind, ROOT_NAME};
