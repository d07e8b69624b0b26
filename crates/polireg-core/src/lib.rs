//! polireg core: the policy registry state machine, its data model and error surface.
//!
//! This crate holds the admin-gated registry of time-bounded insurance policies.
//! It carries no runtime or I/O dependencies: caller identity and current height
//! arrive through [`CallContext`] on every call, so a registry can be driven by a
//! ledger host, a test fixture, or anything else that serializes calls.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Every rejected call
//! surfaces as a [`RegistryError`] so the host never crashes on bad input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod context;
pub mod error;
pub mod model;
pub mod registry;

pub use context::CallContext;
/// Shared result type.
pub use error::{ErrorCode, RegistryError, Result};
pub use model::{Height, NewPolicy, Policy, PolicyId, Principal};
pub use registry::PolicyRegistry;
