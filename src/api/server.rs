//! Purpose: Suspending command surface for server control.
//! Exports: `ServerCommands`.
//! Role: One async method per operation, delegating to the engine and
//! awaiting the reply in one of three shapes (scalar, unit, sequence).
//! Invariants: Each method invokes its engine operation exactly once.
//! Invariants: Engine errors pass through with only the command name added.
//! Invariants: Dropping an in-flight call cancels the underlying command.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use time::OffsetDateTime;
use tracing::trace;

use crate::core::consume;
use crate::core::engine::{ReplyStream, ServerEngine};
use crate::core::error::Error;
use crate::core::types::{CommandDetail, KillFilter, SlowlogEntry, TrackingOptions, UnblockKind};

async fn scalar<T>(command: &'static str, replies: ReplyStream<T>) -> Result<Option<T>, Error> {
    trace!(command, "awaiting scalar reply");
    consume::first(replies)
        .await
        .map_err(|error| error.with_command(command))
}

async fn unit<T>(command: &'static str, replies: ReplyStream<T>) -> Result<(), Error> {
    trace!(command, "awaiting acknowledgement");
    consume::discard(replies)
        .await
        .map_err(|error| error.with_command(command))
}

async fn sequence<T>(command: &'static str, replies: ReplyStream<T>) -> Result<Vec<T>, Error> {
    trace!(command, "draining reply sequence");
    consume::collect(replies)
        .await
        .map_err(|error| error.with_command(command))
}

/// Server-control commands executed against a streaming reply engine.
///
/// The facade is cheap to clone and safe to share; every call opens a
/// private reply stream on the shared engine.
pub struct ServerCommands<E> {
    engine: Arc<E>,
}

impl<E> Clone for ServerCommands<E> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}

impl<E: ServerEngine> ServerCommands<E> {
    pub fn new(engine: Arc<E>) -> Self {
        Self { engine }
    }

    /// Rewrite the append-only file in the background.
    pub async fn bgrewriteaof(&self) -> Result<Option<String>, Error> {
        scalar("BGREWRITEAOF", self.engine.bgrewriteaof()).await
    }

    /// Snapshot the dataset in the background.
    pub async fn bgsave(&self) -> Result<Option<String>, Error> {
        scalar("BGSAVE", self.engine.bgsave()).await
    }

    pub async fn client_caching(&self, enabled: bool) -> Result<Option<String>, Error> {
        scalar("CLIENT CACHING", self.engine.client_caching(enabled)).await
    }

    pub async fn client_getname(&self) -> Result<Option<Bytes>, Error> {
        scalar("CLIENT GETNAME", self.engine.client_getname()).await
    }

    pub async fn client_getredir(&self) -> Result<Option<i64>, Error> {
        scalar("CLIENT GETREDIR", self.engine.client_getredir()).await
    }

    pub async fn client_id(&self) -> Result<Option<i64>, Error> {
        scalar("CLIENT ID", self.engine.client_id()).await
    }

    /// Kill the single connection held at `addr`.
    pub async fn client_kill_addr(
        &self,
        addr: impl Into<String>,
    ) -> Result<Option<String>, Error> {
        scalar("CLIENT KILL", self.engine.client_kill_addr(addr.into())).await
    }

    /// Kill every connection matching `filter`; resolves to the number of
    /// connections closed.
    pub async fn client_kill(&self, filter: KillFilter) -> Result<Option<i64>, Error> {
        scalar("CLIENT KILL", self.engine.client_kill(filter)).await
    }

    pub async fn client_list(&self) -> Result<Option<String>, Error> {
        scalar("CLIENT LIST", self.engine.client_list()).await
    }

    /// Suspend command processing for all clients for `timeout_ms`.
    pub async fn client_pause(&self, timeout_ms: u64) -> Result<Option<String>, Error> {
        scalar("CLIENT PAUSE", self.engine.client_pause(timeout_ms)).await
    }

    pub async fn client_setname(&self, name: impl Into<Bytes>) -> Result<Option<String>, Error> {
        scalar("CLIENT SETNAME", self.engine.client_setname(name.into())).await
    }

    /// Enable or disable server-assisted client-side caching notifications.
    pub async fn client_tracking(
        &self,
        options: TrackingOptions,
    ) -> Result<Option<String>, Error> {
        scalar("CLIENT TRACKING", self.engine.client_tracking(options)).await
    }

    /// Release a connection blocked in a waiting command. `kind` selects
    /// whether the blocked caller observes a timeout or an error reply.
    pub async fn client_unblock(&self, id: i64, kind: UnblockKind) -> Result<Option<i64>, Error> {
        scalar("CLIENT UNBLOCK", self.engine.client_unblock(id, kind)).await
    }

    /// Enumerate the full command table in server order.
    pub async fn command(&self) -> Result<Vec<CommandDetail>, Error> {
        sequence("COMMAND", self.engine.command()).await
    }

    pub async fn command_count(&self) -> Result<Option<i64>, Error> {
        scalar("COMMAND COUNT", self.engine.command_count()).await
    }

    pub async fn command_info(&self, commands: &[&str]) -> Result<Vec<CommandDetail>, Error> {
        let commands = commands.iter().map(|name| name.to_string()).collect();
        sequence("COMMAND INFO", self.engine.command_info(commands)).await
    }

    /// Fetch configuration parameters matching `parameter` as a name/value
    /// mapping; glob patterns are resolved by the server.
    pub async fn config_get(
        &self,
        parameter: impl Into<String>,
    ) -> Result<Option<HashMap<String, String>>, Error> {
        scalar("CONFIG GET", self.engine.config_get(parameter.into())).await
    }

    pub async fn config_resetstat(&self) -> Result<Option<String>, Error> {
        scalar("CONFIG RESETSTAT", self.engine.config_resetstat()).await
    }

    pub async fn config_rewrite(&self) -> Result<Option<String>, Error> {
        scalar("CONFIG REWRITE", self.engine.config_rewrite()).await
    }

    pub async fn config_set(
        &self,
        parameter: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Option<String>, Error> {
        scalar(
            "CONFIG SET",
            self.engine.config_set(parameter.into(), value.into()),
        )
        .await
    }

    pub async fn dbsize(&self) -> Result<Option<i64>, Error> {
        scalar("DBSIZE", self.engine.dbsize()).await
    }

    pub async fn debug_crash_and_recover(&self, delay_ms: u64) -> Result<Option<String>, Error> {
        scalar(
            "DEBUG CRASH-AND-RECOVER",
            self.engine.debug_crash_and_recover(delay_ms),
        )
        .await
    }

    pub async fn debug_htstats(&self, db: u64) -> Result<Option<String>, Error> {
        scalar("DEBUG HTSTATS", self.engine.debug_htstats(db)).await
    }

    pub async fn debug_object(&self, key: impl Into<Bytes>) -> Result<Option<String>, Error> {
        scalar("DEBUG OBJECT", self.engine.debug_object(key.into())).await
    }

    /// Simulate an out-of-memory condition; the server reply, if any, is
    /// discarded.
    pub async fn debug_oom(&self) -> Result<(), Error> {
        unit("DEBUG OOM", self.engine.debug_oom()).await
    }

    pub async fn debug_reload(&self) -> Result<Option<String>, Error> {
        scalar("DEBUG RELOAD", self.engine.debug_reload()).await
    }

    pub async fn debug_restart(&self, delay_ms: u64) -> Result<Option<String>, Error> {
        scalar("DEBUG RESTART", self.engine.debug_restart(delay_ms)).await
    }

    pub async fn debug_sdslen(&self, key: impl Into<Bytes>) -> Result<Option<String>, Error> {
        scalar("DEBUG SDSLEN", self.engine.debug_sdslen(key.into())).await
    }

    /// Crash the server with a segmentation fault; no reply is expected.
    pub async fn debug_segfault(&self) -> Result<(), Error> {
        unit("DEBUG SEGFAULT", self.engine.debug_segfault()).await
    }

    pub async fn flushall(&self) -> Result<Option<String>, Error> {
        scalar("FLUSHALL", self.engine.flushall()).await
    }

    /// Flush all databases without blocking the server; reclamation happens
    /// in a background thread.
    pub async fn flushall_async(&self) -> Result<Option<String>, Error> {
        scalar("FLUSHALL ASYNC", self.engine.flushall_async()).await
    }

    pub async fn flushdb(&self) -> Result<Option<String>, Error> {
        scalar("FLUSHDB", self.engine.flushdb()).await
    }

    pub async fn flushdb_async(&self) -> Result<Option<String>, Error> {
        scalar("FLUSHDB ASYNC", self.engine.flushdb_async()).await
    }

    pub async fn info(&self) -> Result<Option<String>, Error> {
        scalar("INFO", self.engine.info()).await
    }

    pub async fn info_section(&self, section: impl Into<String>) -> Result<Option<String>, Error> {
        scalar("INFO", self.engine.info_section(section.into())).await
    }

    /// Timestamp of the last successful snapshot.
    pub async fn lastsave(&self) -> Result<Option<OffsetDateTime>, Error> {
        scalar("LASTSAVE", self.engine.lastsave()).await
    }

    pub async fn memory_usage(&self, key: impl Into<Bytes>) -> Result<Option<i64>, Error> {
        scalar("MEMORY USAGE", self.engine.memory_usage(key.into())).await
    }

    /// Make this server a replica of `host:port`.
    pub async fn replicaof(
        &self,
        host: impl Into<String>,
        port: u16,
    ) -> Result<Option<String>, Error> {
        scalar("REPLICAOF", self.engine.replicaof(host.into(), port)).await
    }

    /// Promote this server back to a standalone primary.
    pub async fn replicaof_no_one(&self) -> Result<Option<String>, Error> {
        scalar("REPLICAOF NO ONE", self.engine.replicaof_no_one()).await
    }

    pub async fn save(&self) -> Result<Option<String>, Error> {
        scalar("SAVE", self.engine.save()).await
    }

    /// Stop the server, optionally saving first. A clean shutdown closes the
    /// connection before any reply arrives, so none is awaited.
    pub async fn shutdown(&self, save: bool) -> Result<(), Error> {
        unit("SHUTDOWN", self.engine.shutdown(save)).await
    }

    pub async fn slowlog_get(&self) -> Result<Vec<SlowlogEntry>, Error> {
        sequence("SLOWLOG GET", self.engine.slowlog_get()).await
    }

    pub async fn slowlog_get_count(&self, count: u64) -> Result<Vec<SlowlogEntry>, Error> {
        sequence("SLOWLOG GET", self.engine.slowlog_get_count(count)).await
    }

    pub async fn slowlog_len(&self) -> Result<Option<i64>, Error> {
        scalar("SLOWLOG LEN", self.engine.slowlog_len()).await
    }

    pub async fn slowlog_reset(&self) -> Result<Option<String>, Error> {
        scalar("SLOWLOG RESET", self.engine.slowlog_reset()).await
    }

    /// Current server time as its raw components, in emission order.
    pub async fn time(&self) -> Result<Vec<String>, Error> {
        sequence("TIME", self.engine.time()).await
    }
}
