//! Session state and bootstrap.

use std::fmt;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use super::config::Config;
use crate::api::{ApiClient, DriveScope, RemoteDirectory};
use crate::error::{PanError, Result, ResultExt};
use crate::fs::{Node, PathCache};

/// A connected Pan drive.
///
/// Holds the account identifiers found at bootstrap, the path cache, and the
/// remote service handle. All operations take `&self`; share a session
/// between tasks with `Arc<Session>`.
pub struct Session {
    pub(crate) remote: Arc<dyn RemoteDirectory>,
    pub(crate) scope: DriveScope,
    pub(crate) root: Node,
    pub(crate) cache: PathCache,
    /// Serializes the check-and-create step of folder creation, one segment
    /// at a time.
    pub(crate) mkdir_lock: Mutex<()>,
}

impl Session {
    /// Connect over HTTP using `config`.
    ///
    /// # Example
    /// ```no_run
    /// use tbpan::{Config, Session};
    ///
    /// # async fn example() -> tbpan::Result<()> {
    /// let session = Session::connect(Config::from_env()?).await?;
    /// for node in session.list("/media").await? {
    ///     println!("{} ({} bytes)", node.name, node.size);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(config: Config) -> Result<Self> {
        let api = ApiClient::new(&config)?;
        Self::bootstrap(Arc::new(api), config.cache_capacity).await
    }

    /// Look up the organization, member, root and drive identifiers for the
    /// account behind `remote`.
    ///
    /// Fails with [`PanError::NoStorageSpace`] when the account has no space.
    pub async fn bootstrap(remote: Arc<dyn RemoteDirectory>, cache_capacity: usize) -> Result<Self> {
        let personal = remote
            .personal_org()
            .await
            .context(|| "fetch personal organization")?;

        let root_id = remote
            .spaces(&personal.org_id, &personal.member_id)
            .await
            .context(|| format!("fetch spaces of org {}", personal.org_id))?
            .into_iter()
            .next()
            .ok_or(PanError::NoStorageSpace)?;

        let drive_id = remote
            .drive_id(&personal.org_id)
            .await
            .context(|| format!("fetch drive of org {}", personal.org_id))?;

        let scope = DriveScope {
            org_id: personal.org_id,
            member_id: personal.member_id,
            drive_id,
            root_id,
        };
        info!(org_id = %scope.org_id, drive_id = %scope.drive_id, "session ready");

        Self::from_parts(remote, scope, cache_capacity)
    }

    /// Build a session from identifiers that are already known.
    pub fn from_parts(
        remote: Arc<dyn RemoteDirectory>,
        scope: DriveScope,
        cache_capacity: usize,
    ) -> Result<Self> {
        Ok(Self {
            remote,
            root: Node::root(scope.root_id.clone()),
            scope,
            cache: PathCache::new(cache_capacity)?,
            mkdir_lock: Mutex::new(()),
        })
    }

    /// Identifiers sent with every request.
    pub fn scope(&self) -> &DriveScope {
        &self.scope
    }

    /// The drive's root folder.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The folder path cache.
    pub fn cache(&self) -> &PathCache {
        &self.cache
    }

    pub(crate) fn is_root(&self, node: &Node) -> bool {
        node.id == self.root.id
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("org_id", &self.scope.org_id)
            .field("member_id", &self.scope.member_id)
            .field("drive_id", &self.scope.drive_id)
            .field("root_id", &self.scope.root_id)
            .field("cache", &self.cache)
            .finish()
    }
}
