//! Session configuration and bootstrap.

mod config;
mod session;

pub use config::{Config, DEFAULT_ACCOUNT_BASE, DEFAULT_API_BASE};
pub use session::Session;
