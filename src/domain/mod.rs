//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config
//! loading).

pub mod entities;
pub mod error;
pub mod order;
pub mod tree;

pub use entities::{Link, LinkId, Node, NodeId, NodeKind};
pub use error::DomainError;
pub use order::{sibling_order, sort_siblings};
pub use tree::{build_forest, ItemTree};
