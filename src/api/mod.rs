//! Pan API client and types.

pub mod client;
pub mod remote;
mod types;

pub use client::ApiClient;
pub use remote::{ByteStream, DriveScope, PersonalOrg, RemoteDirectory, UploadTicket};
