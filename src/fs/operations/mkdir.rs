//! Idempotent recursive folder creation.

use tracing::debug;

use crate::error::{PanError, Result};
use crate::fs::node::{KindFilter, Node};
use crate::fs::path::{display_parent, join, normalize};
use crate::session::Session;

impl Session {
    /// Make sure every folder along `path` exists and return the last one.
    ///
    /// Segments are handled root to leaf. For each one the session's folder
    /// lock is taken, the folder is looked up, and only if it is missing is a
    /// create request sent (with the remote refusing duplicate names). The
    /// lock is released before moving to the next segment, so concurrent
    /// callers contend per segment rather than per path.
    ///
    /// Calling this again for an existing chain sends no create requests.
    /// A failed create aborts the walk; folders created earlier in the walk
    /// are left in place.
    pub async fn ensure_folder(&self, path: &str) -> Result<Node> {
        let path = normalize(path);
        let mut current = self.root.clone();
        let mut current_path = String::new();

        for name in path.split('/').filter(|s| !s.is_empty()) {
            let target = join(&current_path, name);
            let node = {
                let _guard = self.mkdir_lock.lock().await;
                self.ensure_child_folder(&current, &current_path, name, &target)
                    .await?
            };
            current = node;
            current_path = target;
        }

        Ok(current)
    }

    /// Create folder `name` inside the folder at `parent`.
    ///
    /// Succeeds without a request if the folder already exists.
    pub async fn mkdir(&self, parent: &str, name: &str) -> Result<Node> {
        self.ensure_folder(&join(&normalize(parent), name)).await
    }

    /// Check-and-create for one segment. Caller holds `mkdir_lock`.
    async fn ensure_child_folder(
        &self,
        parent: &Node,
        parent_path: &str,
        name: &str,
        target: &str,
    ) -> Result<Node> {
        match self.resolve(target, KindFilter::Folder).await {
            Ok(node) => return Ok(node),
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e),
        }

        debug!(path = target, parent_id = %parent.id, "creating folder");
        let created = match self.remote.create_folder(&self.scope, &parent.id, name).await {
            Ok(node) => node,
            // Someone else got there between the lookup and the create.
            Err(PanError::Conflict { .. }) => {
                debug!(path = target, "folder appeared concurrently");
                self.resolve(target, KindFilter::Folder).await?
            }
            Err(e) => {
                return Err(e.context(format!(
                    "create folder \"{}\" in \"{}\"",
                    name,
                    display_parent(parent_path)
                )));
            }
        };

        self.cache.put(target, created.id.clone());
        Ok(created)
    }
}
