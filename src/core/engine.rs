//! Purpose: Define the seam between the command facade and the reply engine.
//! Exports: `ServerEngine`, `ReplyStream`, and stream constructors
//! (`replies`, `once`, `empty`, `failed`).
//! Role: The engine owns wiring, dispatch, and decoding; this trait only
//! names the operations and their reply element types.
//! Invariants: Every call returns a fresh stream; streams are never reused.
//! Invariants: An `Err` item is terminal; engines emit nothing after it.

use std::collections::HashMap;
use std::pin::Pin;

use bytes::Bytes;
use time::OffsetDateTime;
use tokio_stream::Stream;

use crate::core::error::Error;
use crate::core::types::{CommandDetail, KillFilter, SlowlogEntry, TrackingOptions, UnblockKind};

/// Asynchronous reply source for one command invocation. Dropping the stream
/// releases the in-flight command; engines must treat the drop as
/// cancellation and stop producing.
pub type ReplyStream<T> = Pin<Box<dyn Stream<Item = Result<T, Error>> + Send>>;

/// Box an arbitrary reply source into the seam's stream type.
pub fn replies<T, S>(stream: S) -> ReplyStream<T>
where
    S: Stream<Item = Result<T, Error>> + Send + 'static,
{
    Box::pin(stream)
}

/// A stream that yields one successful reply and completes.
pub fn once<T: Send + 'static>(value: T) -> ReplyStream<T> {
    Box::pin(tokio_stream::once(Ok(value)))
}

/// A stream that completes without yielding a reply.
pub fn empty<T: Send + 'static>() -> ReplyStream<T> {
    Box::pin(tokio_stream::empty())
}

/// A stream that fails immediately with `error`.
pub fn failed<T: Send + 'static>(error: Error) -> ReplyStream<T> {
    Box::pin(tokio_stream::once(Err(error)))
}

/// Streaming command engine for server-control operations.
///
/// One method per operation; each returns a fresh [`ReplyStream`] that emits
/// zero or more decoded reply elements and then completes or fails.
/// Implementations handle connection management, encoding, and dispatch.
pub trait ServerEngine: Send + Sync {
    fn bgrewriteaof(&self) -> ReplyStream<String>;

    fn bgsave(&self) -> ReplyStream<String>;

    fn client_caching(&self, enabled: bool) -> ReplyStream<String>;

    fn client_getname(&self) -> ReplyStream<Bytes>;

    fn client_getredir(&self) -> ReplyStream<i64>;

    fn client_id(&self) -> ReplyStream<i64>;

    fn client_kill_addr(&self, addr: String) -> ReplyStream<String>;

    fn client_kill(&self, filter: KillFilter) -> ReplyStream<i64>;

    fn client_list(&self) -> ReplyStream<String>;

    fn client_pause(&self, timeout_ms: u64) -> ReplyStream<String>;

    fn client_setname(&self, name: Bytes) -> ReplyStream<String>;

    fn client_tracking(&self, options: TrackingOptions) -> ReplyStream<String>;

    fn client_unblock(&self, id: i64, kind: UnblockKind) -> ReplyStream<i64>;

    fn command(&self) -> ReplyStream<CommandDetail>;

    fn command_count(&self) -> ReplyStream<i64>;

    fn command_info(&self, commands: Vec<String>) -> ReplyStream<CommandDetail>;

    fn config_get(&self, parameter: String) -> ReplyStream<HashMap<String, String>>;

    fn config_resetstat(&self) -> ReplyStream<String>;

    fn config_rewrite(&self) -> ReplyStream<String>;

    fn config_set(&self, parameter: String, value: String) -> ReplyStream<String>;

    fn dbsize(&self) -> ReplyStream<i64>;

    fn debug_crash_and_recover(&self, delay_ms: u64) -> ReplyStream<String>;

    fn debug_htstats(&self, db: u64) -> ReplyStream<String>;

    fn debug_object(&self, key: Bytes) -> ReplyStream<String>;

    fn debug_oom(&self) -> ReplyStream<String>;

    fn debug_reload(&self) -> ReplyStream<String>;

    fn debug_restart(&self, delay_ms: u64) -> ReplyStream<String>;

    fn debug_sdslen(&self, key: Bytes) -> ReplyStream<String>;

    fn debug_segfault(&self) -> ReplyStream<String>;

    fn flushall(&self) -> ReplyStream<String>;

    fn flushall_async(&self) -> ReplyStream<String>;

    fn flushdb(&self) -> ReplyStream<String>;

    fn flushdb_async(&self) -> ReplyStream<String>;

    fn info(&self) -> ReplyStream<String>;

    fn info_section(&self, section: String) -> ReplyStream<String>;

    fn lastsave(&self) -> ReplyStream<OffsetDateTime>;

    fn memory_usage(&self, key: Bytes) -> ReplyStream<i64>;

    fn replicaof(&self, host: String, port: u16) -> ReplyStream<String>;

    fn replicaof_no_one(&self) -> ReplyStream<String>;

    fn save(&self) -> ReplyStream<String>;

    fn shutdown(&self, save: bool) -> ReplyStream<String>;

    fn slowlog_get(&self) -> ReplyStream<SlowlogEntry>;

    fn slowlog_get_count(&self, count: u64) -> ReplyStream<SlowlogEntry>;

    fn slowlog_len(&self) -> ReplyStream<i64>;

    fn slowlog_reset(&self) -> ReplyStream<String>;

    fn time(&self) -> ReplyStream<String>;
}
