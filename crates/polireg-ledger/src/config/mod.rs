//! Ledger config loader (strict parsing).

pub mod schema;

use std::fs;

use crate::error::{LedgerError, Result};

pub use schema::{LedgerConfig, LedgerSection};

pub fn load_from_file(path: &str) -> Result<LedgerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| LedgerError::Io(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<LedgerConfig> {
    let cfg: LedgerConfig = serde_yaml::from_str(s)
        .map_err(|e| LedgerError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
