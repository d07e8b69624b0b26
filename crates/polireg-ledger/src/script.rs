//! Transaction scripts: a YAML sequence of [`Transaction`]s replayed in order.

use std::fs;

use crate::error::{LedgerError, Result};
use crate::tx::Transaction;

pub fn load_from_file(path: &str) -> Result<Vec<Transaction>> {
    let s = fs::read_to_string(path)
        .map_err(|e| LedgerError::Io(format!("read script failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<Vec<Transaction>> {
    serde_yaml::from_str(s).map_err(|e| LedgerError::Script(format!("invalid yaml: {e}")))
}
