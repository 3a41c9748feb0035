//! In-memory Pan drive for integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream;

use tbpan::{
    ByteStream, DriveScope, Node, NodeKind, PanError, PersonalOrg, RemoteDirectory, Result,
    Session, UploadTicket,
};

pub const ROOT_ID: &str = "root";
pub const ORG_ID: &str = "org-1";
pub const MEMBER_ID: &str = "member-1";
pub const DRIVE_ID: &str = "drive-1";

/// One request the fake remote received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List(String),
    CreateFolder { parent_id: String, name: String },
    CreateUpload { parent_id: String, name: String },
    UploadBytes(String),
    Complete(String),
    Detail(String),
    Download(String),
    Rename { node_id: String, name: String },
    Move { node_id: String, parent_id: String },
    Archive(String),
    Personal,
    Spaces,
    Drive,
}

struct Entry {
    node: Node,
    archived: bool,
}

struct PendingUpload {
    parent_id: String,
    name: String,
    size: u64,
    url: String,
}

#[derive(Default)]
struct State {
    entries: Vec<Entry>,
    next_id: usize,
    calls: Vec<Call>,
    failing_creates: HashSet<String>,
    uploads: HashMap<String, PendingUpload>,
    blobs: HashMap<String, Bytes>,
    spaces: Vec<String>,
    hide_download_urls: bool,
}

/// A drive held in memory. Listings are sorted by name; entries with equal
/// names keep insertion order.
pub struct MockRemote {
    state: Mutex<State>,
    create_delay: Mutex<Duration>,
    creates_in_flight: AtomicUsize,
    max_creates_in_flight: AtomicUsize,
}

impl MockRemote {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(State {
                spaces: vec![ROOT_ID.to_string()],
                ..State::default()
            }),
            create_delay: Mutex::new(Duration::ZERO),
            creates_in_flight: AtomicUsize::new(0),
            max_creates_in_flight: AtomicUsize::new(0),
        })
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    pub fn scope() -> DriveScope {
        DriveScope {
            org_id: ORG_ID.to_string(),
            member_id: MEMBER_ID.to_string(),
            drive_id: DRIVE_ID.to_string(),
            root_id: ROOT_ID.to_string(),
        }
    }

    // ----- seeding -----

    pub fn add_folder(&self, parent_id: &str, name: &str) -> String {
        self.insert(parent_id, name, NodeKind::Folder, None)
    }

    pub fn add_file(&self, parent_id: &str, name: &str, body: &[u8]) -> String {
        self.insert(parent_id, name, NodeKind::File, Some(Bytes::copy_from_slice(body)))
    }

    fn insert(&self, parent_id: &str, name: &str, kind: NodeKind, body: Option<Bytes>) -> String {
        let mut state = self.state();
        insert_locked(&mut state, parent_id, name, kind, body)
    }

    // ----- fault injection -----

    /// Make every `create_folder` for `name` fail with HTTP 500.
    pub fn fail_create(&self, name: &str) {
        self.state().failing_creates.insert(name.to_string());
    }

    /// Hold every `create_folder` call open for `delay` before answering.
    pub fn set_create_delay(&self, delay: Duration) {
        *self.create_delay.lock().unwrap() = delay;
    }

    pub fn set_spaces(&self, roots: Vec<String>) {
        self.state().spaces = roots;
    }

    /// Leave download urls out of listings so readers must fetch details.
    pub fn hide_download_urls(&self) {
        self.state().hide_download_urls = true;
    }

    // ----- inspection -----

    pub fn calls(&self) -> Vec<Call> {
        self.state().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state().calls.clear();
    }

    pub fn list_calls(&self, parent_id: &str) -> usize {
        self.state()
            .calls
            .iter()
            .filter(|c| matches!(c, Call::List(p) if p == parent_id))
            .count()
    }

    /// Names passed to `create_folder`, in call order.
    pub fn created_folders(&self) -> Vec<String> {
        self.state()
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::CreateFolder { name, .. } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn max_creates_in_flight(&self) -> usize {
        self.max_creates_in_flight.load(Ordering::SeqCst)
    }

    /// Live (not archived) children named `name` under `parent_id`.
    pub fn children_named(&self, parent_id: &str, name: &str) -> Vec<Node> {
        self.state()
            .entries
            .iter()
            .filter(|e| !e.archived)
            .filter(|e| e.node.parent_id.as_deref() == Some(parent_id) && e.node.name == name)
            .map(|e| e.node.clone())
            .collect()
    }

    pub fn is_archived(&self, node_id: &str) -> bool {
        self.state()
            .entries
            .iter()
            .any(|e| e.node.id == node_id && e.archived)
    }

    pub fn node(&self, node_id: &str) -> Option<Node> {
        self.state()
            .entries
            .iter()
            .find(|e| e.node.id == node_id)
            .map(|e| e.node.clone())
    }
}

fn insert_locked(
    state: &mut State,
    parent_id: &str,
    name: &str,
    kind: NodeKind,
    body: Option<Bytes>,
) -> String {
    state.next_id += 1;
    let id = format!("n{}", state.next_id);
    let (size, download_url) = match body {
        Some(body) => {
            let url = format!("mock://download/{}", id);
            let size = body.len() as u64;
            state.blobs.insert(url.clone(), body);
            (size, Some(url))
        }
        None => (0, None),
    };
    state.entries.push(Entry {
        node: Node {
            id: id.clone(),
            name: name.to_string(),
            kind,
            size,
            updated: "2024-01-01T00:00:00.000Z".to_string(),
            download_url,
            parent_id: Some(parent_id.to_string()),
        },
        archived: false,
    });
    id
}

fn name_taken(state: &State, parent_id: &str, name: &str) -> bool {
    state
        .entries
        .iter()
        .any(|e| !e.archived && e.node.parent_id.as_deref() == Some(parent_id) && e.node.name == name)
}

fn entry_mut<'a>(state: &'a mut State, node_id: &str) -> Result<&'a mut Entry> {
    state
        .entries
        .iter_mut()
        .find(|e| e.node.id == node_id && !e.archived)
        .ok_or(PanError::HttpError(404))
}

#[async_trait]
impl RemoteDirectory for MockRemote {
    async fn list_children(&self, _scope: &DriveScope, parent_id: &str) -> Result<Vec<Node>> {
        let mut state = self.state();
        state.calls.push(Call::List(parent_id.to_string()));
        let hide = state.hide_download_urls;
        let mut children: Vec<Node> = state
            .entries
            .iter()
            .filter(|e| !e.archived && e.node.parent_id.as_deref() == Some(parent_id))
            .map(|e| {
                let mut node = e.node.clone();
                if hide {
                    node.download_url = None;
                }
                node
            })
            .collect();
        // Stable: equal names keep insertion order.
        children.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(children)
    }

    async fn create_folder(&self, _scope: &DriveScope, parent_id: &str, name: &str) -> Result<Node> {
        self.state().calls.push(Call::CreateFolder {
            parent_id: parent_id.to_string(),
            name: name.to_string(),
        });

        let now = self.creates_in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_creates_in_flight.fetch_max(now, Ordering::SeqCst);
        let delay = *self.create_delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.creates_in_flight.fetch_sub(1, Ordering::SeqCst);

        let mut state = self.state();
        if state.failing_creates.contains(name) {
            return Err(PanError::HttpError(500));
        }
        if name_taken(&state, parent_id, name) {
            return Err(PanError::Conflict {
                name: name.to_string(),
                parent_id: parent_id.to_string(),
            });
        }
        let id = insert_locked(&mut state, parent_id, name, NodeKind::Folder, None);
        Ok(Node {
            id,
            name: name.to_string(),
            kind: NodeKind::Folder,
            size: 0,
            updated: String::new(),
            download_url: None,
            parent_id: Some(parent_id.to_string()),
        })
    }

    async fn create_upload(
        &self,
        _scope: &DriveScope,
        parent_id: &str,
        name: &str,
        size: u64,
    ) -> Result<UploadTicket> {
        let mut state = self.state();
        state.calls.push(Call::CreateUpload {
            parent_id: parent_id.to_string(),
            name: name.to_string(),
        });

        let mut assigned = name.to_string();
        let mut n = 1;
        while name_taken(&state, parent_id, &assigned) {
            assigned = format!("{}({})", name, n);
            n += 1;
        }

        state.next_id += 1;
        let upload_id = format!("u{}", state.next_id);
        let node_id = format!("n{}", state.next_id);
        let url = format!("mock://upload/{}", upload_id);
        state.uploads.insert(
            upload_id.clone(),
            PendingUpload {
                parent_id: parent_id.to_string(),
                name: assigned.clone(),
                size,
                url: url.clone(),
            },
        );
        Ok(UploadTicket {
            node_id,
            name: assigned,
            upload_id,
            upload_urls: vec![url],
        })
    }

    async fn upload_bytes(&self, upload_url: &str, data: Bytes) -> Result<()> {
        let mut state = self.state();
        state.calls.push(Call::UploadBytes(upload_url.to_string()));
        state.blobs.insert(upload_url.to_string(), data);
        Ok(())
    }

    async fn complete_upload(&self, _scope: &DriveScope, ticket: &UploadTicket) -> Result<()> {
        let mut state = self.state();
        state.calls.push(Call::Complete(ticket.node_id.clone()));
        let pending = state
            .uploads
            .remove(&ticket.upload_id)
            .ok_or(PanError::HttpError(404))?;
        let body = state.blobs.remove(&pending.url).unwrap_or_default();
        assert_eq!(body.len() as u64, pending.size, "uploaded size mismatch");

        let url = format!("mock://download/{}", ticket.node_id);
        state.blobs.insert(url.clone(), body);
        state.entries.push(Entry {
            node: Node {
                id: ticket.node_id.clone(),
                name: pending.name,
                kind: NodeKind::File,
                size: pending.size,
                updated: String::new(),
                download_url: Some(url),
                parent_id: Some(pending.parent_id),
            },
            archived: false,
        });
        Ok(())
    }

    async fn node_detail(&self, _scope: &DriveScope, node_id: &str) -> Result<Node> {
        let mut state = self.state();
        state.calls.push(Call::Detail(node_id.to_string()));
        Ok(entry_mut(&mut state, node_id)?.node.clone())
    }

    async fn download(&self, download_url: &str) -> Result<ByteStream> {
        let mut state = self.state();
        state.calls.push(Call::Download(download_url.to_string()));
        let body = state
            .blobs
            .get(download_url)
            .cloned()
            .ok_or(PanError::HttpError(404))?;

        // Two chunks so readers have to stitch.
        let mid = body.len() / 2;
        let chunks: Vec<Result<Bytes>> = vec![Ok(body.slice(..mid)), Ok(body.slice(mid..))];
        Ok(Box::pin(stream::iter(chunks)))
    }

    async fn rename(&self, _scope: &DriveScope, node_id: &str, new_name: &str) -> Result<()> {
        let mut state = self.state();
        state.calls.push(Call::Rename {
            node_id: node_id.to_string(),
            name: new_name.to_string(),
        });
        entry_mut(&mut state, node_id)?.node.name = new_name.to_string();
        Ok(())
    }

    async fn move_node(&self, _scope: &DriveScope, node_id: &str, new_parent_id: &str) -> Result<()> {
        let mut state = self.state();
        state.calls.push(Call::Move {
            node_id: node_id.to_string(),
            parent_id: new_parent_id.to_string(),
        });
        entry_mut(&mut state, node_id)?.node.parent_id = Some(new_parent_id.to_string());
        Ok(())
    }

    async fn archive(&self, _scope: &DriveScope, node_id: &str) -> Result<()> {
        let mut state = self.state();
        state.calls.push(Call::Archive(node_id.to_string()));
        entry_mut(&mut state, node_id)?.archived = true;
        Ok(())
    }

    async fn personal_org(&self) -> Result<PersonalOrg> {
        self.state().calls.push(Call::Personal);
        Ok(PersonalOrg {
            org_id: ORG_ID.to_string(),
            member_id: MEMBER_ID.to_string(),
        })
    }

    async fn spaces(&self, _org_id: &str, _member_id: &str) -> Result<Vec<String>> {
        let mut state = self.state();
        state.calls.push(Call::Spaces);
        Ok(state.spaces.clone())
    }

    async fn drive_id(&self, _org_id: &str) -> Result<String> {
        self.state().calls.push(Call::Drive);
        Ok(DRIVE_ID.to_string())
    }
}

/// A session over `remote` with a cache of `capacity` folder paths.
pub fn session(remote: &Arc<MockRemote>, capacity: usize) -> Session {
    Session::from_parts(remote.clone(), MockRemote::scope(), capacity).unwrap()
}
