//! polireg ledger host.
//!
//! Wraps a [`polireg_core::PolicyRegistry`] in the environment a ledger would
//! provide: a block clock, a transaction format with wire receipts, strict YAML
//! config and scripts, and a single task that applies transactions one at a time.
//! Consumed by the binary (`main.rs`) and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod clock;
pub mod config;
pub mod error;
pub mod runtime;
pub mod script;
pub mod tx;

pub use clock::BlockClock;
pub use error::{LedgerError, Result};
pub use runtime::{Ledger, LedgerHandle, Snapshot};
pub use tx::{Call, Receipt, ReceiptValue, Transaction};
