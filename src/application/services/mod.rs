//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on the store boundary traits (NodeStore, LinkStore)
//! but are themselves concrete structs, not traits.

mod items;
mod links;

pub use items::{CreateItem, ItemService};
pub use links::LinkService;
