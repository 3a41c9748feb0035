//! Listing and reading.

use bytes::BytesMut;
use futures::TryStreamExt;

use crate::api::ByteStream;
use crate::error::{PanError, Result, ResultExt};
use crate::fs::node::{KindFilter, Node};
use crate::session::Session;

impl Session {
    /// List the children of a folder, ascending by name.
    ///
    /// # Example
    /// ```no_run
    /// # async fn example(session: &tbpan::Session) -> tbpan::Result<()> {
    /// for node in session.list("/media/music").await? {
    ///     let icon = if node.is_folder() { "📁" } else { "📄" };
    ///     println!("{} {}", icon, node.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list(&self, path: &str) -> Result<Vec<Node>> {
        let folder = self
            .resolve(path, KindFilter::Folder)
            .await
            .context(|| format!("list \"{}\"", path))?;
        self.list_node(&folder).await
    }

    /// List the children of an already-resolved folder.
    pub async fn list_node(&self, folder: &Node) -> Result<Vec<Node>> {
        self.remote
            .list_children(&self.scope, &folder.id)
            .await
            .context(|| format!("list node {}", folder.id))
    }

    /// Open a file for reading.
    ///
    /// Returns the download body as a stream of chunks.
    pub async fn open(&self, path: &str) -> Result<ByteStream> {
        let node = self
            .resolve(path, KindFilter::File)
            .await
            .context(|| format!("open \"{}\"", path))?;
        self.open_node(&node).await
    }

    /// Open an already-resolved file.
    ///
    /// Listings usually carry the download locator; when this one does not,
    /// the node detail is fetched first.
    pub async fn open_node(&self, node: &Node) -> Result<ByteStream> {
        let url = match node.download_url() {
            Some(url) => url.to_string(),
            None => {
                let detail = self
                    .remote
                    .node_detail(&self.scope, &node.id)
                    .await
                    .context(|| format!("fetch detail of node {}", node.id))?;
                detail
                    .download_url()
                    .map(str::to_string)
                    .ok_or_else(|| {
                        PanError::InvalidResponse(format!(
                            "Can't find download url of \"{}\"",
                            node.name
                        ))
                    })?
            }
        };

        self.remote
            .download(&url)
            .await
            .context(|| format!("download \"{}\"", node.name))
    }

    /// Read a whole file into memory.
    pub async fn read(&self, path: &str) -> Result<Vec<u8>> {
        let body = self
            .open(path)
            .await?
            .try_fold(BytesMut::new(), |mut acc, chunk| async move {
                acc.extend_from_slice(&chunk);
                Ok(acc)
            })
            .await?;
        Ok(body.to_vec())
    }
}
