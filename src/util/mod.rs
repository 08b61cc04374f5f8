//! Helpers shared across effect modules.
//!
//! `rate_limit` is plain Rust over the [`crate::scheduler::Scheduler`] seam;
//! `dom` wraps the `web-sys` calls and only exists in the `hydrate` build.

#[cfg(feature = "hydrate")]
pub mod dom;
pub mod rate_limit;
