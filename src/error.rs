//! Error types for the tbpan library.

use thiserror::Error;

/// Main error type for tbpan operations.
#[derive(Error, Debug)]
pub enum PanError {
    /// HTTP request completed with a non-success status code.
    #[error("HTTP error: {0}")]
    HttpError(u16),

    /// Network request error.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Local I/O error (reading a file to upload).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Response decoded but was missing something we need.
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// No child matched the requested name and kind.
    #[error("\"{path}\" not found in \"{parent}\"")]
    NotFound { path: String, parent: String },

    /// Bootstrap found no storage space for the account.
    #[error("No storage space found for this account")]
    NoStorageSpace,

    /// Operation refused before any request was sent.
    #[error("Can't {op} the root folder")]
    Precondition { op: &'static str },

    /// The remote refused to create a node because the name is taken.
    #[error("\"{name}\" already exists under node {parent_id}")]
    Conflict { name: String, parent_id: String },

    /// Cancelled by the caller's signal or deadline.
    #[error("Operation cancelled")]
    Cancelled,

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Another error with the path or node it happened on.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<PanError>,
    },
}

/// Coarse classification of a [`PanError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Decode,
    NotFound,
    Precondition,
    Conflict,
    Cancelled,
    Config,
}

impl PanError {
    /// Wrap this error with a description of where it happened.
    pub fn context(self, context: impl Into<String>) -> Self {
        PanError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, looking through any context wrappers.
    pub fn root_cause(&self) -> &PanError {
        let mut current = self;
        while let PanError::Context { source, .. } = current {
            current = source;
        }
        current
    }

    /// Classify the error, looking through any context wrappers.
    pub fn kind(&self) -> ErrorKind {
        match self.root_cause() {
            PanError::HttpError(_) | PanError::RequestError(_) | PanError::Io(_) => {
                ErrorKind::Transport
            }
            PanError::JsonError(_) | PanError::InvalidResponse(_) => ErrorKind::Decode,
            PanError::NotFound { .. } | PanError::NoStorageSpace => ErrorKind::NotFound,
            PanError::Precondition { .. } => ErrorKind::Precondition,
            PanError::Conflict { .. } => ErrorKind::Conflict,
            PanError::Cancelled => ErrorKind::Cancelled,
            PanError::Config(_) => ErrorKind::Config,
            PanError::Context { .. } => unreachable!("root_cause strips context"),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

/// Attach context to the error side of a [`Result`].
pub trait ResultExt<T> {
    fn context<C, F>(self, f: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T> ResultExt<T> for Result<T> {
    fn context<C, F>(self, f: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|e| e.context(f()))
    }
}

/// Result type alias for tbpan operations.
pub type Result<T> = std::result::Result<T, PanError>;
