//! Path → node resolution.

use tracing::{debug, trace};

use crate::error::{PanError, Result, ResultExt};
use crate::fs::node::{KindFilter, Node};
use crate::fs::path::{display_parent, join, normalize, split_parent};
use crate::session::Session;

impl Session {
    /// Resolve a path to the node it names.
    ///
    /// The root path returns [`Session::root`] without touching the cache or
    /// the network. Otherwise the parent folder id is taken from the path
    /// cache when present, and missing ancestors are listed level by level
    /// (and cached) until the parent is known. A final listing of the parent
    /// is scanned for the first child named like the leaf whose kind passes
    /// `filter`.
    ///
    /// With a warm cache this costs exactly one listing regardless of depth.
    pub async fn resolve(&self, path: &str, filter: KindFilter) -> Result<Node> {
        let path = normalize(path);
        if path == "/" {
            return Ok(self.root.clone());
        }

        let (parent_path, leaf) = split_parent(&path);
        let parent_id = self.folder_id(parent_path).await?;
        self.find_child(&parent_id, parent_path, leaf, filter).await
    }

    /// Like [`Session::resolve`] with [`KindFilter::Any`], but a missing
    /// path is `Ok(None)`.
    pub async fn stat(&self, path: &str) -> Result<Option<Node>> {
        match self.resolve(path, KindFilter::Any).await {
            Ok(node) => Ok(Some(node)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Id of the folder at normalized `path` (`""` is the root).
    ///
    /// Walks up until a cached ancestor or the root, then lists back down,
    /// caching every folder it discovers.
    async fn folder_id(&self, path: &str) -> Result<String> {
        let mut missing = Vec::new();
        let mut cursor = path;
        let mut id = loop {
            if cursor.is_empty() {
                break self.root.id.clone();
            }
            if let Some(id) = self.cache.get(cursor) {
                trace!(path = cursor, "path cache hit");
                break id;
            }
            trace!(path = cursor, "path cache miss");
            missing.push(cursor);
            cursor = split_parent(cursor).0;
        };

        for folder_path in missing.into_iter().rev() {
            let (parent_path, name) = split_parent(folder_path);
            let folder = self
                .find_child(&id, parent_path, name, KindFilter::Folder)
                .await?;
            self.cache.put(folder_path, folder.id.clone());
            id = folder.id;
        }
        Ok(id)
    }

    /// One listing of `parent_id`, first match on name and kind wins.
    async fn find_child(
        &self,
        parent_id: &str,
        parent_path: &str,
        name: &str,
        filter: KindFilter,
    ) -> Result<Node> {
        debug!(parent_id, name, ?filter, "list children");
        let children = self
            .remote
            .list_children(&self.scope, parent_id)
            .await
            .context(|| format!("list \"{}\"", display_parent(parent_path)))?;
        children
            .into_iter()
            .find(|n| n.name == name && filter.matches(n.kind))
            .ok_or_else(|| PanError::NotFound {
                path: join(parent_path, name),
                parent: display_parent(parent_path).to_string(),
            })
    }
}
