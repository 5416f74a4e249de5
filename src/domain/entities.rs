//! Domain entities: core data structures

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier for a node in the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Generate a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for NodeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Kind of a node: folders may carry children, files carry content.
/// Immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Folder,
    File,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Folder => write!(f, "folder"),
            NodeKind::File => write!(f, "file"),
        }
    }
}

/// A file or folder entry in the hierarchy.
///
/// `parent_id` is a plain back-reference; `None` marks a root. The
/// parent/child relation forms a forest: no cycles, at most one parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Display name; uniqueness among siblings is NOT enforced
    pub name: String,
    pub kind: NodeKind,
    /// Text content, present only for files
    pub content: Option<String>,
    /// Parent node id, `None` for roots
    pub parent_id: Option<NodeId>,
}

impl Node {
    /// Create a folder node. Folders never carry content.
    pub fn folder(name: impl Into<String>, parent_id: Option<NodeId>) -> Self {
        Self {
            id: NodeId::new(),
            name: name.into(),
            kind: NodeKind::Folder,
            content: None,
            parent_id,
        }
    }

    /// Create a file node. Content defaults to the empty string.
    pub fn file(
        name: impl Into<String>,
        parent_id: Option<NodeId>,
        content: Option<String>,
    ) -> Self {
        Self {
            id: NodeId::new(),
            name: name.into(),
            kind: NodeKind::File,
            content: Some(content.unwrap_or_default()),
            parent_id,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }
}

/// Opaque identifier for a shortened link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkId(Uuid);

impl LinkId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LinkId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for LinkId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A shortened link: target URL plus its generated short code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: LinkId,
    /// Full URL being shortened
    pub target: String,
    /// 8-character hex short code
    pub code: String,
    /// Derived `<base_url>/<code>`
    pub short_url: String,
}
