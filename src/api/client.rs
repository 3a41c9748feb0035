//! Pan REST API client.

use async_trait::async_trait;
use bytes::Bytes;
use futures::TryStreamExt;
use reqwest::Method;

use super::remote::{ByteStream, DriveScope, PersonalOrg, RemoteDirectory, UploadTicket};
use super::types::{
    ArchiveBody, CompleteBody, CreateFileBody, CreateFolderBody, CreatedFolder, Drive, FileInfo,
    MoveBody, MoveId, Nodes, Personal, RenameBody, Space, UploadResult,
};
use crate::error::{PanError, Result};
use crate::fs::Node;
use crate::http::HttpClient;
use crate::session::Config;

/// Page size for child listings; the remote's maximum.
pub const LIST_LIMIT: &str = "10000";

/// [`RemoteDirectory`] over the Teambition Pan HTTP API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
    api_base: String,
    account_base: String,
}

impl ApiClient {
    /// Create a new API client from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let http = match &config.proxy {
            Some(proxy) => HttpClient::with_proxy(config.cookie(), proxy)?,
            None => HttpClient::new(config.cookie()),
        };
        Ok(Self {
            http,
            api_base: config.api_base.clone(),
            account_base: config.account_base.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

#[async_trait]
impl RemoteDirectory for ApiClient {
    async fn list_children(&self, scope: &DriveScope, parent_id: &str) -> Result<Vec<Node>> {
        let nodes: Nodes = self
            .http
            .get_json(
                &self.url("/pan/api/nodes"),
                &[
                    ("orgId", scope.org_id.as_str()),
                    ("driveId", scope.drive_id.as_str()),
                    ("parentId", parent_id),
                    ("limit", LIST_LIMIT),
                    ("orderBy", "name"),
                    ("orderDirection", "asc"),
                ],
            )
            .await?;
        Ok(nodes.data)
    }

    async fn create_folder(
        &self,
        scope: &DriveScope,
        parent_id: &str,
        name: &str,
    ) -> Result<Node> {
        let body = CreateFolderBody {
            org_id: &scope.org_id,
            drive_id: &scope.drive_id,
            space_id: &scope.root_id,
            parent_id,
            ccp_parent_id: parent_id,
            name,
            check_name_mode: "refuse",
            node_type: "folder",
        };
        let created: CreatedFolder = self
            .http
            .send_json(Method::POST, &self.url("/pan/api/nodes/folder"), &body)
            .await
            .map_err(|e| match e {
                PanError::HttpError(409) => PanError::Conflict {
                    name: name.to_string(),
                    parent_id: parent_id.to_string(),
                },
                other => other,
            })?;
        let created = created.into_first().ok_or_else(|| {
            PanError::InvalidResponse(format!("create folder \"{}\" returned no node", name))
        })?;

        Ok(Node::new_folder(
            created.node_id,
            created.name.unwrap_or_else(|| name.to_string()),
            parent_id,
        ))
    }

    async fn create_upload(
        &self,
        scope: &DriveScope,
        parent_id: &str,
        name: &str,
        size: u64,
    ) -> Result<UploadTicket> {
        let body = CreateFileBody {
            org_id: &scope.org_id,
            space_id: &scope.root_id,
            parent_id,
            check_name_mode: "autoRename",
            infos: vec![FileInfo {
                name,
                ccp_parent_id: parent_id,
                drive_id: &scope.drive_id,
                size,
                chunk_count: 1,
                content_type: "",
                node_type: "file",
            }],
        };
        let results: Vec<UploadResult> = self
            .http
            .send_json(Method::POST, &self.url("/pan/api/nodes/file"), &body)
            .await?;

        let result = results
            .into_iter()
            .next()
            .filter(|r| !r.upload_url.is_empty())
            .ok_or_else(|| {
                PanError::InvalidResponse(format!(
                    "Failed to create \"{}\", no upload url in reply",
                    name
                ))
            })?;

        Ok(UploadTicket {
            node_id: result.node_id,
            name: result.name.unwrap_or_else(|| name.to_string()),
            upload_id: result.upload_id,
            upload_urls: result.upload_url,
        })
    }

    async fn upload_bytes(&self, upload_url: &str, data: Bytes) -> Result<()> {
        self.http.put_bytes(upload_url, data).await
    }

    async fn complete_upload(&self, scope: &DriveScope, ticket: &UploadTicket) -> Result<()> {
        let body = CompleteBody {
            drive_id: &scope.drive_id,
            org_id: &scope.org_id,
            node_id: &ticket.node_id,
            upload_id: &ticket.upload_id,
            ccp_file_id: &ticket.node_id,
        };
        self.http
            .send_json_discard(Method::POST, &self.url("/pan/api/nodes/complete"), &body)
            .await
    }

    async fn node_detail(&self, scope: &DriveScope, node_id: &str) -> Result<Node> {
        self.http
            .get_json(
                &self.url(&format!("/pan/api/nodes/{}", node_id)),
                &[
                    ("orgId", scope.org_id.as_str()),
                    ("driveId", scope.drive_id.as_str()),
                ],
            )
            .await
    }

    async fn download(&self, download_url: &str) -> Result<ByteStream> {
        let response = self.http.get_stream(download_url).await?;
        Ok(Box::pin(response.bytes_stream().map_err(PanError::from)))
    }

    async fn rename(&self, scope: &DriveScope, node_id: &str, new_name: &str) -> Result<()> {
        let body = RenameBody {
            org_id: &scope.org_id,
            drive_id: &scope.drive_id,
            ccp_file_id: node_id,
            name: new_name,
        };
        self.http
            .send_json_discard(
                Method::PUT,
                &self.url(&format!("/pan/api/nodes/{}", node_id)),
                &body,
            )
            .await
    }

    async fn move_node(
        &self,
        scope: &DriveScope,
        node_id: &str,
        new_parent_id: &str,
    ) -> Result<()> {
        let body = MoveBody {
            org_id: &scope.org_id,
            drive_id: &scope.drive_id,
            same_level: false,
            ids: vec![MoveId {
                id: node_id,
                ccp_file_id: node_id,
            }],
            parent_id: new_parent_id,
        };
        self.http
            .send_json_discard(Method::POST, &self.url("/pan/api/nodes/move"), &body)
            .await
    }

    async fn archive(&self, scope: &DriveScope, node_id: &str) -> Result<()> {
        let body = ArchiveBody {
            node_ids: vec![node_id],
            org_id: &scope.org_id,
        };
        self.http
            .send_json_discard(Method::POST, &self.url("/pan/api/nodes/archive"), &body)
            .await
    }

    async fn personal_org(&self) -> Result<PersonalOrg> {
        let personal: Personal = self
            .http
            .get_json(
                &format!("{}/api/organizations/personal", self.account_base),
                &[],
            )
            .await?;
        Ok(PersonalOrg {
            org_id: personal.id,
            member_id: personal.creator_id,
        })
    }

    async fn spaces(&self, org_id: &str, member_id: &str) -> Result<Vec<String>> {
        let spaces: Vec<Space> = self
            .http
            .get_json(
                &self.url("/pan/api/spaces"),
                &[("orgId", org_id), ("memberId", member_id)],
            )
            .await?;
        Ok(spaces.into_iter().map(|s| s.root_id).collect())
    }

    async fn drive_id(&self, org_id: &str) -> Result<String> {
        let drive: Drive = self
            .http
            .get_json(
                &self.url(&format!("/pan/api/orgs/{}", org_id)),
                &[("orgId", org_id)],
            )
            .await?;
        Ok(drive.data.drive_id)
    }
}
