//! # tbpan
//!
//! Rust client library for Teambition Pan cloud storage.
//!
//! ## Features
//!
//! - **Session**: Authenticate with the web session cookie and discover the
//!   account's organization, space and drive identifiers.
//! - **Path addressing**: Every operation takes Unix-like paths such as
//!   `/media/music/song.mp3`. Folder ids are kept in a bounded LRU cache so a
//!   warm lookup costs a single listing.
//! - **Filesystem Operations**:
//!   - List folders and `stat` paths.
//!   - Create folders recursively (`ensure_folder`, `mkdir`), safe to call
//!     from many tasks at once.
//!   - Move (`mv`), rename, and remove (`rm`) files/folders.
//! - **File Transfers**: Single-request uploads with optional overwrite, and
//!   streamed downloads.
//!
//! ## Example: Basic Usage
//!
//! ```no_run
//! use tbpan::{Config, Session};
//!
//! # async fn example() -> tbpan::Result<()> {
//! // Reads TEAMBITION_SESSIONID and TEAMBITION_SESSIONID_SIG
//! let session = Session::connect(Config::from_env()?).await?;
//!
//! session.ensure_folder("/backups/2024").await?;
//! session.upload_file("notes.txt", "/backups/2024", true).await?;
//!
//! for node in session.list("/backups/2024").await? {
//!     println!("{} ({} bytes)", node.name, node.size);
//! }
//!
//! let body = session.read("/backups/2024/notes.txt").await?;
//! println!("{}", String::from_utf8_lossy(&body));
//! # Ok(())
//! # }
//! ```
//!
//! Sessions may be shared between tasks with `Arc<Session>`. Cancel an
//! operation by dropping its future, or see [`cancel`] for deadline and
//! signal helpers.

pub mod api;
pub mod cancel;
pub mod error;
pub mod fs;
pub mod http;
pub mod session;

// Re-export commonly used types
pub use api::{ApiClient, ByteStream, DriveScope, PersonalOrg, RemoteDirectory, UploadTicket};
pub use error::{ErrorKind, PanError, Result, ResultExt};
pub use fs::{KindFilter, Node, NodeKind, PathCache};
pub use session::{Config, Session};
