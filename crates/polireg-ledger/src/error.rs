//! Host-level errors (config, scripts, ledger lifecycle).
//!
//! Registry rejections are not errors at this level; they travel inside
//! [`crate::tx::Receipt`].

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, LedgerError>;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("invalid config: {0}")]
    Config(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("invalid script: {0}")]
    Script(String),
    #[error("io: {0}")]
    Io(String),
    #[error("ledger closed")]
    Closed,
}
