//! Purpose: Argument records and reply records for server-control commands.
//! Exports: `ClientType`, `KillFilter`, `TrackingOptions`, `UnblockKind`,
//! `CommandDetail`, `SlowlogEntry`.
//! Role: Plain data carried across the engine seam; no wire encoding here.
//! Invariants: Filter and tracking records are additive; unset fields mean
//! "no constraint" and engines must omit them from the encoded command.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClientType {
    Normal,
    Master,
    Replica,
    Pubsub,
}

impl ClientType {
    pub fn as_str(self) -> &'static str {
        match self {
            ClientType::Normal => "normal",
            ClientType::Master => "master",
            ClientType::Replica => "replica",
            ClientType::Pubsub => "pubsub",
        }
    }
}

/// Connection selector for the filtered client-kill operation.
///
/// An empty filter matches every connection except, by default, the caller's
/// own; engines encode only the fields that are set.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct KillFilter {
    pub id: Option<i64>,
    pub addr: Option<String>,
    pub laddr: Option<String>,
    pub client_type: Option<ClientType>,
    pub user: Option<String>,
    pub skipme: Option<bool>,
    pub max_age_secs: Option<u64>,
}

impl KillFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn addr(mut self, addr: impl Into<String>) -> Self {
        self.addr = Some(addr.into());
        self
    }

    pub fn laddr(mut self, laddr: impl Into<String>) -> Self {
        self.laddr = Some(laddr.into());
        self
    }

    pub fn client_type(mut self, client_type: ClientType) -> Self {
        self.client_type = Some(client_type);
        self
    }

    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn skipme(mut self, skipme: bool) -> Self {
        self.skipme = Some(skipme);
        self
    }

    pub fn max_age_secs(mut self, max_age_secs: u64) -> Self {
        self.max_age_secs = Some(max_age_secs);
        self
    }
}

/// Options for the client-side caching invalidation subscription.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TrackingOptions {
    pub enabled: bool,
    pub redirect: Option<i64>,
    pub prefixes: Vec<Bytes>,
    pub broadcast: bool,
    pub opt_in: bool,
    pub opt_out: bool,
    pub no_loop: bool,
}

impl TrackingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn redirect(mut self, client_id: i64) -> Self {
        self.redirect = Some(client_id);
        self
    }

    pub fn prefix(mut self, prefix: impl Into<Bytes>) -> Self {
        self.prefixes.push(prefix.into());
        self
    }

    pub fn broadcast(mut self, broadcast: bool) -> Self {
        self.broadcast = broadcast;
        self
    }

    pub fn no_loop(mut self, no_loop: bool) -> Self {
        self.no_loop = no_loop;
        self
    }
}

/// How a blocked connection is released: as if its timeout fired, or with an
/// error reply delivered to the blocked caller.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UnblockKind {
    Timeout,
    Error,
}

impl UnblockKind {
    pub fn as_str(self) -> &'static str {
        match self {
            UnblockKind::Timeout => "TIMEOUT",
            UnblockKind::Error => "ERROR",
        }
    }
}

/// One entry of the server's command table.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CommandDetail {
    pub name: String,
    pub arity: i64,
    pub flags: Vec<String>,
    pub first_key: i64,
    pub last_key: i64,
    pub key_step: i64,
}

/// One entry of the server's slow-query log.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SlowlogEntry {
    pub id: i64,
    pub recorded_at: OffsetDateTime,
    pub duration_micros: i64,
    pub args: Vec<String>,
    pub client_addr: String,
    pub client_name: String,
}
