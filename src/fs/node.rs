//! Filesystem node types.

use serde::{Deserialize, Serialize};

/// Name the remote gives the drive root.
pub const ROOT_NAME: &str = "Root";

/// Kind of a remote node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Regular file
    File,
    /// Folder/directory
    Folder,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::File => "file",
            NodeKind::Folder => "folder",
        }
    }
}

/// Narrows a name lookup to files, folders, or either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindFilter {
    File,
    Folder,
    Any,
}

impl KindFilter {
    /// Check whether a node of `kind` passes this filter.
    pub fn matches(&self, kind: NodeKind) -> bool {
        match self {
            KindFilter::Any => true,
            KindFilter::File => kind == NodeKind::File,
            KindFilter::Folder => kind == NodeKind::Folder,
        }
    }
}

impl From<NodeKind> for KindFilter {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::File => KindFilter::File,
            NodeKind::Folder => KindFilter::Folder,
        }
    }
}

/// A node in the Pan filesystem.
///
/// Nodes are snapshots taken when they were fetched; they are never updated
/// in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Node identifier (opaque)
    #[serde(rename = "nodeId")]
    pub id: String,
    /// Node name
    #[serde(default)]
    pub name: String,
    /// File or folder
    pub kind: NodeKind,
    /// File size in bytes (0 for folders)
    #[serde(default)]
    pub size: u64,
    /// Last-updated timestamp as sent by the server
    #[serde(default)]
    pub updated: String,
    /// Direct download locator, when the listing included one
    #[serde(
        rename = "downloadUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub download_url: Option<String>,
    /// Parent node identifier
    #[serde(rename = "parentId", default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl Node {
    /// The well-known root node for a drive.
    pub fn root(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: ROOT_NAME.to_string(),
            kind: NodeKind::Folder,
            size: 0,
            updated: String::new(),
            download_url: None,
            parent_id: None,
        }
    }

    /// A freshly created folder as reported by a create request.
    pub(crate) fn new_folder(id: String, name: String, parent_id: &str) -> Self {
        Self {
            id,
            name,
            kind: NodeKind::Folder,
            size: 0,
            updated: String::new(),
            download_url: None,
            parent_id: Some(parent_id.to_string()),
        }
    }

    /// Check if this node is a file.
    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }

    /// Check if this node is a folder.
    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    /// Download locator, ignoring the empty string the server sometimes sends.
    pub fn download_url(&self) -> Option<&str> {
        self.download_url.as_deref().filter(|u| !u.is_empty())
    }
}
