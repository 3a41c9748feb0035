//! Rename, move and remove.

use tracing::debug;

use crate::error::{PanError, Result, ResultExt};
use crate::fs::node::{KindFilter, Node};
use crate::fs::path::normalize;
use crate::session::Session;

impl Session {
    /// Rename a file or folder.
    ///
    /// # Arguments
    /// * `path` - Path to the file/folder to rename
    /// * `new_name` - The new name (not a path, just the name)
    ///
    /// Renaming a folder drops its cached subtree so later lookups under the
    /// old path go back to the remote.
    pub async fn rename(&self, path: &str, new_name: &str) -> Result<()> {
        let path = guard_root(path, "rename")?;
        let node = self
            .resolve(&path, KindFilter::Any)
            .await
            .context(|| format!("rename \"{}\"", path))?;

        self.rename_node(&node, new_name).await?;
        self.forget_if_folder(&node, &path);
        Ok(())
    }

    /// Rename an already-resolved node.
    pub async fn rename_node(&self, node: &Node, new_name: &str) -> Result<()> {
        if self.is_root(node) {
            return Err(PanError::Precondition { op: "rename" });
        }
        self.remote
            .rename(&self.scope, &node.id, new_name)
            .await
            .context(|| format!("rename \"{}\" to \"{}\"", node.name, new_name))
    }

    /// Move a file or folder into another folder.
    ///
    /// # Arguments
    /// * `source_path` - Path to the file/folder to move
    /// * `dest_folder_path` - Path to the new parent folder
    ///
    /// # Example
    /// ```no_run
    /// # async fn example(session: &tbpan::Session) -> tbpan::Result<()> {
    /// session.mv("/home/test2", "/").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn mv(&self, source_path: &str, dest_folder_path: &str) -> Result<()> {
        let source_path = guard_root(source_path, "move")?;
        let source = self
            .resolve(&source_path, KindFilter::Any)
            .await
            .context(|| format!("move \"{}\"", source_path))?;
        let dest = self
            .resolve(dest_folder_path, KindFilter::Folder)
            .await
            .context(|| format!("move into \"{}\"", dest_folder_path))?;

        self.move_node(&source, &dest).await?;
        self.forget_if_folder(&source, &source_path);
        Ok(())
    }

    /// Move an already-resolved node into an already-resolved folder.
    pub async fn move_node(&self, node: &Node, dest_folder: &Node) -> Result<()> {
        if self.is_root(node) {
            return Err(PanError::Precondition { op: "move" });
        }
        self.remote
            .move_node(&self.scope, &node.id, &dest_folder.id)
            .await
            .context(|| format!("move \"{}\" into node {}", node.name, dest_folder.id))
    }

    /// Remove (archive) a file or folder.
    pub async fn rm(&self, path: &str) -> Result<()> {
        let path = guard_root(path, "remove")?;
        let node = self
            .resolve(&path, KindFilter::Any)
            .await
            .context(|| format!("remove \"{}\"", path))?;

        self.remove_node(&node).await?;
        self.forget_if_folder(&node, &path);
        Ok(())
    }

    /// Remove (archive) an already-resolved node.
    pub async fn remove_node(&self, node: &Node) -> Result<()> {
        if self.is_root(node) {
            return Err(PanError::Precondition { op: "remove" });
        }
        self.remote
            .archive(&self.scope, &node.id)
            .await
            .context(|| format!("remove \"{}\"", node.name))
    }

    fn forget_if_folder(&self, node: &Node, path: &str) {
        if node.is_folder() {
            debug!(path, "dropping cached subtree");
            self.cache.forget_subtree(path);
        }
    }
}

/// Normalize `path`, refusing the root before anything touches the network.
fn guard_root(path: &str, op: &'static str) -> Result<String> {
    let path = normalize(path);
    if path == "/" {
        return Err(PanError::Precondition { op });
    }
    Ok(path)
}
