//! Purpose: Suspending server-control command facade for remote key-value stores.
//! Exports: `api` (command facade and public types), `core` (engine seam, reply
//! consumption, errors).
//! Role: Library crate consumed by higher-level clients and bindings; the wire
//! protocol and connection management live behind the engine seam.
//! Invariants: The facade relays engine errors untouched apart from command context.
//! Invariants: Each call invokes its engine operation once and resumes at most once.
pub mod api;
pub mod core;
