//! Filesystem operations split into focused modules.

mod browse;
mod dir_ops;
mod mkdir;
mod resolve;
mod upload;
