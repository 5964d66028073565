//! Purpose: Define the stable public API boundary for Capstan.
//! Exports: The command facade, the engine seam, and shared value types.
//! Role: Public, additive-only surface; callers never import core paths.
//! Invariants: This module is the only public path to core primitives.

mod server;

pub use crate::core::engine::{ReplyStream, ServerEngine, empty, failed, once, replies};
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::types::{
    ClientType, CommandDetail, KillFilter, SlowlogEntry, TrackingOptions, UnblockKind,
};
pub use server::ServerCommands;
