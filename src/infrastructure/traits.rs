//! Store boundary traits for testability
//!
//! These traits abstract the persistence collaborator, allowing services
//! to be tested with in-memory implementations.

use std::io;
use std::sync::RwLock;

use crate::domain::{Link, LinkId, Node, NodeId};

/// Node persistence abstraction.
///
/// The store exclusively owns persisted node state; callers receive
/// snapshots. `delete_cascade` is the store's responsibility so referential
/// validity holds without orphaned descendants.
pub trait NodeStore: Send + Sync {
    /// Fetch every node.
    fn fetch_all(&self) -> io::Result<Vec<Node>>;

    /// Fetch nodes whose parent is `parent_id`.
    fn fetch_by_parent(&self, parent_id: &NodeId) -> io::Result<Vec<Node>>;

    /// Fetch one node by id.
    fn fetch_by_id(&self, id: &NodeId) -> io::Result<Option<Node>>;

    /// Insert or update a node (keyed by id). Returns the stored node.
    fn save(&self, node: Node) -> io::Result<Node>;

    /// Remove a node and all transitive descendants. Unknown ids are a no-op.
    fn delete_cascade(&self, id: &NodeId) -> io::Result<()>;
}

/// Link persistence abstraction.
pub trait LinkStore: Send + Sync {
    /// Fetch every link.
    fn fetch_all(&self) -> io::Result<Vec<Link>>;

    /// Fetch one link by its short code.
    fn fetch_by_code(&self, code: &str) -> io::Result<Option<Link>>;

    /// Fetch one link by id.
    fn fetch_by_id(&self, id: &LinkId) -> io::Result<Option<Link>>;

    /// Insert or update a link (keyed by id). Returns the stored link.
    fn save(&self, link: Link) -> io::Result<Link>;

    /// Remove a link. Unknown ids are a no-op.
    fn delete(&self, id: &LinkId) -> io::Result<()>;
}

// ============================================================
// IN-MEMORY IMPLEMENTATIONS
// ============================================================

/// In-memory node store. Insertion-ordered, lock-serialized writes.
///
/// Serves as the service test double and as the working set behind the
/// JSON-backed store.
#[derive(Debug, Default)]
pub struct MemoryNodeStore {
    nodes: RwLock<Vec<Node>>,
}

impl MemoryNodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `nodes`.
    pub fn with_nodes(nodes: Vec<Node>) -> Self {
        Self {
            nodes: RwLock::new(nodes),
        }
    }
}

/// Ids of `id` plus all transitive descendants within `nodes`.
pub(crate) fn subtree_ids(nodes: &[Node], id: &NodeId) -> Vec<NodeId> {
    let mut doomed = vec![*id];
    let mut frontier = vec![*id];
    while let Some(current) = frontier.pop() {
        for node in nodes {
            if node.parent_id == Some(current) {
                doomed.push(node.id);
                frontier.push(node.id);
            }
        }
    }
    doomed
}

impl NodeStore for MemoryNodeStore {
    fn fetch_all(&self) -> io::Result<Vec<Node>> {
        Ok(self.nodes.read().expect("lock poisoned").clone())
    }

    fn fetch_by_parent(&self, parent_id: &NodeId) -> io::Result<Vec<Node>> {
        Ok(self
            .nodes
            .read()
            .expect("lock poisoned")
            .iter()
            .filter(|n| n.parent_id.as_ref() == Some(parent_id))
            .cloned()
            .collect())
    }

    fn fetch_by_id(&self, id: &NodeId) -> io::Result<Option<Node>> {
        Ok(self
            .nodes
            .read()
            .expect("lock poisoned")
            .iter()
            .find(|n| n.id == *id)
            .cloned())
    }

    fn save(&self, node: Node) -> io::Result<Node> {
        let mut nodes = self.nodes.write().expect("lock poisoned");
        match nodes.iter_mut().find(|n| n.id == node.id) {
            Some(existing) => *existing = node.clone(),
            None => nodes.push(node.clone()),
        }
        Ok(node)
    }

    fn delete_cascade(&self, id: &NodeId) -> io::Result<()> {
        let mut nodes = self.nodes.write().expect("lock poisoned");
        let doomed = subtree_ids(&nodes, id);
        nodes.retain(|n| !doomed.contains(&n.id));
        Ok(())
    }
}

/// In-memory link store.
#[derive(Debug, Default)]
pub struct MemoryLinkStore {
    links: RwLock<Vec<Link>>,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LinkStore for MemoryLinkStore {
    fn fetch_all(&self) -> io::Result<Vec<Link>> {
        Ok(self.links.read().expect("lock poisoned").clone())
    }

    fn fetch_by_code(&self, code: &str) -> io::Result<Option<Link>> {
        Ok(self
            .links
            .read()
            .expect("lock poisoned")
            .iter()
            .find(|l| l.code == code)
            .cloned())
    }

    fn fetch_by_id(&self, id: &LinkId) -> io::Result<Option<Link>> {
        Ok(self
            .links
            .read()
            .expect("lock poisoned")
            .iter()
            .find(|l| l.id == *id)
            .cloned())
    }

    fn save(&self, link: Link) -> io::Result<Link> {
        let mut links = self.links.write().expect("lock poisoned");
        match links.iter_mut().find(|l| l.id == link.id) {
            Some(existing) => *existing = link.clone(),
            None => links.push(link.clone()),
        }
        Ok(link)
    }

    fn delete(&self, id: &LinkId) -> io::Result<()> {
        let mut links = self.links.write().expect("lock poisoned");
        links.retain(|l| l.id != *id);
        Ok(())
    }
}
