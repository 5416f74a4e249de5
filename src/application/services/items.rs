//! Item hierarchy service
//!
//! Orchestrates node store reads/writes and invokes the tree builder for
//! hierarchy-producing operations. Each call works on its own store snapshot;
//! nothing is cached across calls.

use std::sync::Arc;

use itertools::Itertools;
use tracing::debug;

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{build_forest, sibling_order, sort_siblings};
use crate::domain::{DomainError, ItemTree, Node, NodeId, NodeKind};
use crate::infrastructure::traits::NodeStore;

/// Request to create a new item.
#[derive(Debug, Clone)]
pub struct CreateItem {
    pub name: String,
    pub kind: NodeKind,
    pub parent_id: Option<NodeId>,
    pub content: Option<String>,
}

/// Service for browsing and editing the item hierarchy.
pub struct ItemService {
    store: Arc<dyn NodeStore>,
}

impl ItemService {
    /// Create a new item service.
    pub fn new(store: Arc<dyn NodeStore>) -> Self {
        Self { store }
    }

    /// Fetch every node and build the full ordered forest.
    pub fn list_all(&self) -> ApplicationResult<Vec<ItemTree>> {
        debug!("list_all");
        let nodes = self.store.fetch_all().with_context("fetch all nodes")?;
        Ok(build_forest(nodes))
    }

    /// Immediate children of one folder, flat, in sibling order.
    ///
    /// An unknown `folder_id` (or a folder without children) yields an empty
    /// list; existence is deliberately not validated here.
    pub fn list_children(&self, folder_id: &NodeId) -> ApplicationResult<Vec<Node>> {
        debug!("list_children: folder_id={folder_id}");
        let mut children = self
            .store
            .fetch_by_parent(folder_id)
            .with_context("fetch children")?;
        sort_siblings(&mut children);
        Ok(children)
    }

    /// Text content of a file. Folders and unknown ids report not-found.
    pub fn file_content(&self, id: &NodeId) -> ApplicationResult<String> {
        debug!("file_content: id={id}");
        let node = self.fetch(id)?.ok_or(DomainError::ItemNotFound(*id))?;
        if !node.is_file() {
            return Err(DomainError::NotAFile(*id).into());
        }
        Ok(node.content.unwrap_or_default())
    }

    /// All nodes whose name contains `query` (case-insensitive), flat,
    /// in sibling order. An empty query is rejected, never treated as
    /// match-everything.
    pub fn search(&self, query: &str) -> ApplicationResult<Vec<Node>> {
        debug!("search: query={query:?}");
        if query.is_empty() {
            return Err(DomainError::InvalidArgument("search query is required".into()).into());
        }

        let needle = query.to_lowercase();
        let nodes = self.store.fetch_all().with_context("fetch all nodes")?;

        Ok(nodes
            .into_iter()
            .filter(|n| n.name.to_lowercase().contains(&needle))
            .sorted_by(sibling_order)
            .collect())
    }

    /// Create a root item or a child of an existing folder.
    ///
    /// The parent is resolved before anything is persisted, so a bad
    /// `parent_id` leaves no partial write behind. File content defaults to
    /// the empty string; folder content is dropped even if supplied.
    pub fn create(&self, req: CreateItem) -> ApplicationResult<Node> {
        debug!(
            "create: name={:?} kind={} parent_id={:?}",
            req.name, req.kind, req.parent_id
        );
        if req.name.is_empty() {
            return Err(DomainError::InvalidArgument("item name is required".into()).into());
        }

        if let Some(parent_id) = req.parent_id {
            self.fetch(&parent_id)?
                .ok_or(DomainError::ParentNotFound(parent_id))?;
        }

        let node = match req.kind {
            NodeKind::Folder => Node::folder(req.name, req.parent_id),
            NodeKind::File => Node::file(req.name, req.parent_id, req.content),
        };

        self.store.save(node).with_context("save new item")
    }

    /// Replace the content of a file. Folders and unknown ids report
    /// not-found; kind and parent stay untouched.
    pub fn update_content(&self, id: &NodeId, content: &str) -> ApplicationResult<Node> {
        debug!("update_content: id={id}");
        let mut node = self.fetch(id)?.ok_or(DomainError::ItemNotFound(*id))?;
        if !node.is_file() {
            return Err(DomainError::NotAFile(*id).into());
        }
        node.content = Some(content.to_string());
        self.store.save(node).with_context("save file content")
    }

    /// Change an item's display name only.
    pub fn rename(&self, id: &NodeId, name: &str) -> ApplicationResult<Node> {
        debug!("rename: id={id} name={name:?}");
        if name.is_empty() {
            return Err(DomainError::InvalidArgument("item name is required".into()).into());
        }
        let mut node = self.fetch(id)?.ok_or(DomainError::ItemNotFound(*id))?;
        node.name = name.to_string();
        self.store.save(node).with_context("save renamed item")
    }

    /// Delete an item together with its transitive descendants.
    /// Deleting an unknown id is a no-op.
    pub fn delete(&self, id: &NodeId) -> ApplicationResult<()> {
        debug!("delete: id={id}");
        self.store.delete_cascade(id).with_context("delete item")
    }

    fn fetch(&self, id: &NodeId) -> ApplicationResult<Option<Node>> {
        self.store.fetch_by_id(id).with_context("fetch node")
    }
}
