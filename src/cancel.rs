//! Caller-driven cancellation.
//!
//! Dropping any operation's future aborts its in-flight request. These
//! helpers turn a deadline or a signal into [`PanError::Cancelled`] instead.

use std::future::Future;
use std::time::Duration;

use crate::error::{PanError, Result};

/// Run `op`, failing with [`PanError::Cancelled`] if it has not finished
/// within `limit`.
///
/// # Example
/// ```no_run
/// use std::time::Duration;
/// # async fn example(session: &tbpan::Session) -> tbpan::Result<()> {
/// let nodes = tbpan::cancel::with_deadline(Duration::from_secs(10), session.list("/")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn with_deadline<T, F>(limit: Duration, op: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::time::timeout(limit, op)
        .await
        .map_err(|_| PanError::Cancelled)?
}

/// Run `op` until `signal` resolves, whichever comes first.
pub async fn until<T, F, S>(signal: S, op: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
    S: Future<Output = ()>,
{
    tokio::select! {
        biased;
        _ = signal => Err(PanError::Cancelled),
        res = op => res,
    }
}
