//! Top-level facade crate for polireg.
//!
//! Re-exports the registry core and the ledger host so users can depend on a single crate.

pub mod core {
    pub use polireg_core::*;
}

pub mod ledger {
    pub use polireg_ledger::*;
}
