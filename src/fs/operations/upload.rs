//! File upload.

use std::path::Path;

use bytes::Bytes;
use tracing::{debug, warn};

use crate::api::UploadTicket;
use crate::error::{PanError, Result, ResultExt};
use crate::fs::node::{KindFilter, Node, NodeKind};
use crate::fs::path::{join, normalize};
use crate::session::Session;

impl Session {
    /// Upload `data` as file `name` inside the folder at `parent`.
    ///
    /// Missing folders along `parent` are created first. The remote renames
    /// uploads that collide with an existing name. With `overwrite` set, the
    /// existing file is archived instead and the upload is retried once under
    /// the requested name; the renamed upload session is abandoned.
    ///
    /// # Example
    /// ```no_run
    /// # async fn example(session: &tbpan::Session) -> tbpan::Result<()> {
    /// let node = session
    ///     .create_file("/docs", "notes.txt", "hello".as_bytes().to_vec(), true)
    ///     .await?;
    /// println!("uploaded {} ({} bytes)", node.name, node.size);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_file(
        &self,
        parent: &str,
        name: &str,
        data: impl Into<Bytes>,
        overwrite: bool,
    ) -> Result<Node> {
        let data: Bytes = data.into();
        let parent = normalize(parent);
        let folder = self.ensure_folder(&parent).await?;
        let size = data.len() as u64;

        let mut ticket = self.pre_upload(&folder, name, size).await?;
        if overwrite && ticket.name != name {
            warn!(
                requested = name,
                assigned = %ticket.name,
                "name taken, replacing existing file"
            );
            let existing = self
                .resolve(&join(&parent, name), KindFilter::File)
                .await
                .context(|| format!("replace \"{}\"", join(&parent, name)))?;
            self.remote
                .archive(&self.scope, &existing.id)
                .await
                .context(|| format!("remove \"{}\"", join(&parent, name)))?;
            ticket = self.pre_upload(&folder, name, size).await?;
        }

        let url = ticket.upload_urls.first().ok_or_else(|| {
            PanError::InvalidResponse(format!("no upload url for \"{}\"", ticket.name))
        })?;
        debug!(name = %ticket.name, size, "uploading");
        self.remote
            .upload_bytes(url, data)
            .await
            .context(|| format!("upload \"{}\"", ticket.name))?;
        self.remote
            .complete_upload(&self.scope, &ticket)
            .await
            .context(|| format!("complete upload of \"{}\"", ticket.name))?;

        Ok(Node {
            id: ticket.node_id,
            name: ticket.name,
            kind: NodeKind::File,
            size,
            updated: String::new(),
            download_url: None,
            parent_id: Some(folder.id),
        })
    }

    /// Upload a local file into the folder at `parent`, keeping its file
    /// name.
    pub async fn upload_file<P: AsRef<Path>>(
        &self,
        local_path: P,
        parent: &str,
        overwrite: bool,
    ) -> Result<Node> {
        let local_path = local_path.as_ref();
        let name = local_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                PanError::Config(format!("no file name in {}", local_path.display()))
            })?;
        let data = tokio::fs::read(local_path)
            .await
            .map_err(PanError::from)
            .context(|| format!("read {}", local_path.display()))?;

        self.create_file(parent, name, data, overwrite).await
    }

    async fn pre_upload(&self, folder: &Node, name: &str, size: u64) -> Result<UploadTicket> {
        self.remote
            .create_upload(&self.scope, &folder.id, name, size)
            .await
            .context(|| format!("create upload \"{}\"", name))
    }
}
