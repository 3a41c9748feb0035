//! Wire types for the Pan REST API.

use serde::{Deserialize, Serialize};

use crate::fs::Node;

#[derive(Debug, Deserialize)]
pub(crate) struct Personal {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_creatorId")]
    pub creator_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Space {
    pub root_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Drive {
    pub data: DriveData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DriveData {
    pub drive_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Nodes {
    #[serde(default)]
    pub data: Vec<Node>,
}

/// Create-folder replies have been seen both as a bare object and as a
/// one-element array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum CreatedFolder {
    Many(Vec<CreatedNode>),
    One(CreatedNode),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreatedNode {
    pub node_id: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl CreatedFolder {
    pub fn into_first(self) -> Option<CreatedNode> {
        match self {
            CreatedFolder::Many(nodes) => nodes.into_iter().next(),
            CreatedFolder::One(node) => Some(node),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UploadResult {
    pub node_id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub upload_id: String,
    #[serde(default)]
    pub upload_url: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateFolderBody<'a> {
    pub org_id: &'a str,
    pub drive_id: &'a str,
    pub space_id: &'a str,
    pub parent_id: &'a str,
    pub ccp_parent_id: &'a str,
    pub name: &'a str,
    pub check_name_mode: &'static str,
    #[serde(rename = "type")]
    pub node_type: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateFileBody<'a> {
    pub org_id: &'a str,
    pub space_id: &'a str,
    pub parent_id: &'a str,
    pub check_name_mode: &'static str,
    pub infos: Vec<FileInfo<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FileInfo<'a> {
    pub name: &'a str,
    pub ccp_parent_id: &'a str,
    pub drive_id: &'a str,
    pub size: u64,
    pub chunk_count: u32,
    pub content_type: &'static str,
    #[serde(rename = "type")]
    pub node_type: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CompleteBody<'a> {
    pub drive_id: &'a str,
    pub org_id: &'a str,
    pub node_id: &'a str,
    pub upload_id: &'a str,
    pub ccp_file_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RenameBody<'a> {
    pub org_id: &'a str,
    pub drive_id: &'a str,
    pub ccp_file_id: &'a str,
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MoveBody<'a> {
    pub org_id: &'a str,
    pub drive_id: &'a str,
    pub same_level: bool,
    pub ids: Vec<MoveId<'a>>,
    pub parent_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MoveId<'a> {
    pub id: &'a str,
    pub ccp_file_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ArchiveBody<'a> {
    pub node_ids: Vec<&'a str>,
    pub org_id: &'a str,
}
