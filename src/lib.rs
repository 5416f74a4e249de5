//! cabinet: hierarchical file/folder item manager with an attached link
//! shortener.
//!
//! The core is the tree builder in [`domain::tree`]: it turns a flat
//! snapshot of persisted nodes into an ordered forest under a fixed sibling
//! ordering (folders first, then name length, then case-insensitive
//! alphabetical). Persistence sits behind the store traits in
//! [`infrastructure::traits`]; services in [`application::services`]
//! orchestrate the two.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::services::{CreateItem, ItemService, LinkService};
pub use config::Settings;
pub use domain::{build_forest, sibling_order, sort_siblings};
pub use domain::{DomainError, ItemTree, Link, LinkId, Node, NodeId, NodeKind};
