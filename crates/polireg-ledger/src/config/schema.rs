use serde::Deserialize;

use polireg_core::{Height, PolicyRegistry};

use crate::error::{LedgerError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LedgerConfig {
    pub version: u32,
    pub ledger: LedgerSection,
}

impl LedgerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(LedgerError::UnsupportedVersion);
        }
        self.ledger.validate()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LedgerSection {
    /// Initial registry admin.
    pub admin: String,

    #[serde(default)]
    pub genesis_height: Height,

    #[serde(default = "default_queue_depth")]
    pub queue_depth: usize,
}

impl LedgerSection {
    pub fn validate(&self) -> Result<()> {
        if self.admin.trim().is_empty() {
            return Err(LedgerError::Config("ledger.admin must not be empty".into()));
        }
        if !(1..=65536).contains(&self.queue_depth) {
            return Err(LedgerError::Config(
                "ledger.queue_depth must be between 1 and 65536".into(),
            ));
        }
        Ok(())
    }

    /// Fresh registry administered by the configured admin.
    pub fn genesis_registry(&self) -> PolicyRegistry {
        PolicyRegistry::new(self.admin.as_str())
    }
}

fn default_queue_depth() -> usize {
    64
}
