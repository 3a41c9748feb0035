//! The remote directory service as seen by the filesystem layer.

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;

use crate::error::Result;
use crate::fs::Node;

/// Streamed download body.
pub type ByteStream = BoxStream<'static, Result<Bytes>>;

/// Account identifiers fixed at session bootstrap and sent with every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveScope {
    pub org_id: String,
    pub member_id: String,
    pub drive_id: String,
    /// Root folder id; the remote also uses it as the space id.
    pub root_id: String,
}

/// Identifiers returned by `GET /api/organizations/personal`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalOrg {
    pub org_id: String,
    pub member_id: String,
}

/// One entry of the pre-upload response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTicket {
    pub node_id: String,
    /// Name the server assigned, which differs from the requested one when
    /// it auto-renamed around a collision.
    pub name: String,
    pub upload_id: String,
    pub upload_urls: Vec<String>,
}

/// Operations the remote service offers, one request each.
///
/// [`crate::api::ApiClient`] implements this over HTTP. The filesystem layer
/// only talks to the service through this trait.
#[async_trait]
pub trait RemoteDirectory: Send + Sync {
    /// Children of `parent_id`, ascending by name.
    async fn list_children(&self, scope: &DriveScope, parent_id: &str) -> Result<Vec<Node>>;

    /// Create a folder, refusing if the name is already taken
    /// ([`crate::PanError::Conflict`]).
    async fn create_folder(&self, scope: &DriveScope, parent_id: &str, name: &str)
    -> Result<Node>;

    /// Open an upload session for a single-chunk file, auto-renaming on
    /// collision.
    async fn create_upload(
        &self,
        scope: &DriveScope,
        parent_id: &str,
        name: &str,
        size: u64,
    ) -> Result<UploadTicket>;

    /// Send file contents to an upload locator.
    async fn upload_bytes(&self, upload_url: &str, data: Bytes) -> Result<()>;

    /// Finish an upload session.
    async fn complete_upload(&self, scope: &DriveScope, ticket: &UploadTicket) -> Result<()>;

    /// Full record of one node, including its download locator.
    async fn node_detail(&self, scope: &DriveScope, node_id: &str) -> Result<Node>;

    /// Stream the body behind a download locator.
    async fn download(&self, download_url: &str) -> Result<ByteStream>;

    async fn rename(&self, scope: &DriveScope, node_id: &str, new_name: &str) -> Result<()>;

    async fn move_node(&self, scope: &DriveScope, node_id: &str, new_parent_id: &str)
    -> Result<()>;

    /// Soft-delete a node.
    async fn archive(&self, scope: &DriveScope, node_id: &str) -> Result<()>;

    async fn personal_org(&self) -> Result<PersonalOrg>;

    /// Root ids of the account's storage spaces.
    async fn spaces(&self, org_id: &str, member_id: &str) -> Result<Vec<String>>;

    async fn drive_id(&self, org_id: &str) -> Result<String>;
}
