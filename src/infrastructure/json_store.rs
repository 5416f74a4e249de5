//! JSON-document-backed store
//!
//! Persists the complete node and link set as a single JSON document.
//! Every mutation rewrites the file via write-temp-then-rename so a crash
//! mid-write never leaves a half-written store behind.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Link, LinkId, Node, NodeId};
use crate::infrastructure::traits::{subtree_ids, LinkStore, NodeStore};

/// On-disk document layout.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct Document {
    #[serde(default)]
    nodes: Vec<Node>,
    #[serde(default)]
    links: Vec<Link>,
}

/// Durable store keeping nodes and links in one JSON file.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    doc: RwLock<Document>,
}

impl JsonStore {
    /// Open the store at `path`, loading the existing document if present.
    /// A missing file yields an empty store; the file is created on first
    /// write.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let doc = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?
        } else {
            Document::default()
        };
        debug!(
            "open: path={} nodes={} links={}",
            path.display(),
            doc.nodes.len(),
            doc.links.len()
        );
        Ok(Self {
            path,
            doc: RwLock::new(doc),
        })
    }

    fn persist(&self, doc: &Document) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(doc)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)
    }
}

impl NodeStore for JsonStore {
    fn fetch_all(&self) -> io::Result<Vec<Node>> {
        Ok(self.doc.read().expect("lock poisoned").nodes.clone())
    }

    fn fetch_by_parent(&self, parent_id: &NodeId) -> io::Result<Vec<Node>> {
        Ok(self
            .doc
            .read()
            .expect("lock poisoned")
            .nodes
            .iter()
            .filter(|n| n.parent_id.as_ref() == Some(parent_id))
            .cloned()
            .collect())
    }

    fn fetch_by_id(&self, id: &NodeId) -> io::Result<Option<Node>> {
        Ok(self
            .doc
            .read()
            .expect("lock poisoned")
            .nodes
            .iter()
            .find(|n| n.id == *id)
            .cloned())
    }

    fn save(&self, node: Node) -> io::Result<Node> {
        let mut doc = self.doc.write().expect("lock poisoned");
        match doc.nodes.iter_mut().find(|n| n.id == node.id) {
            Some(existing) => *existing = node.clone(),
            None => doc.nodes.push(node.clone()),
        }
        self.persist(&doc)?;
        Ok(node)
    }

    fn delete_cascade(&self, id: &NodeId) -> io::Result<()> {
        let mut doc = self.doc.write().expect("lock poisoned");
        let doomed = subtree_ids(&doc.nodes, id);
        doc.nodes.retain(|n| !doomed.contains(&n.id));
        self.persist(&doc)
    }
}

impl LinkStore for JsonStore {
    fn fetch_all(&self) -> io::Result<Vec<Link>> {
        Ok(self.doc.read().expect("lock poisoned").links.clone())
    }

    fn fetch_by_code(&self, code: &str) -> io::Result<Option<Link>> {
        Ok(self
            .doc
            .read()
            .expect("lock poisoned")
            .links
            .iter()
            .find(|l| l.code == code)
            .cloned())
    }

    fn fetch_by_id(&self, id: &LinkId) -> io::Result<Option<Link>> {
        Ok(self
            .doc
            .read()
            .expect("lock poisoned")
            .links
            .iter()
            .find(|l| l.id == *id)
            .cloned())
    }

    fn save(&self, link: Link) -> io::Result<Link> {
        let mut doc = self.doc.write().expect("lock poisoned");
        match doc.links.iter_mut().find(|l| l.id == link.id) {
            Some(existing) => *existing = link.clone(),
            None => doc.links.push(link.clone()),
        }
        self.persist(&doc)?;
        Ok(link)
    }

    fn delete(&self, id: &LinkId) -> io::Result<()> {
        let mut doc = self.doc.write().expect("lock poisoned");
        doc.links.retain(|l| l.id != *id);
        self.persist(&doc)
    }
}
