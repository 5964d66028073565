//! Purpose: Convert a reply stream into a single awaited outcome.
//! Exports: `first`, `discard`, `collect`.
//! Role: The three reply shapes shared by every server-control command.
//! Invariants: Each helper polls its stream from exactly one caller and
//! resumes that caller at most once.
//! Invariants: Dropping a pending call drops the stream, which cancels the
//! in-flight command; no value is delivered afterwards.

use tokio_stream::{Stream, StreamExt};

use crate::core::error::Error;

/// Await the first reply, if any.
///
/// Returns `Ok(None)` when the stream completes without a reply. Later
/// elements are never awaited; the stream is dropped after the first.
pub async fn first<T, S>(replies: S) -> Result<Option<T>, Error>
where
    S: Stream<Item = Result<T, Error>>,
{
    tokio::pin!(replies);
    match replies.next().await {
        Some(Ok(value)) => Ok(Some(value)),
        Some(Err(error)) => Err(error),
        None => Ok(None),
    }
}

/// Await the first reply or completion and drop any value.
///
/// Errors still propagate; success carries no result.
pub async fn discard<T, S>(replies: S) -> Result<(), Error>
where
    S: Stream<Item = Result<T, Error>>,
{
    first(replies).await.map(|_| ())
}

/// Drain the stream to completion, preserving arrival order.
///
/// An empty stream yields an empty vector. If any element is an error the
/// partial results are dropped and the error is returned.
pub async fn collect<T, S>(replies: S) -> Result<Vec<T>, Error>
where
    S: Stream<Item = Result<T, Error>>,
{
    tokio::pin!(replies);
    let mut items = Vec::new();
    while let Some(reply) = replies.next().await {
        items.push(reply?);
    }
    Ok(items)
}
