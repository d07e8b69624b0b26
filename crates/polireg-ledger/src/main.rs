//! polireg ledger binary.
//!
//! Replays a transaction script against a fresh registry and prints one JSON
//! receipt per line on stdout. Logs go to stderr.
//!
//! Usage: `polireg-ledger <script.yaml>` (config from `$POLIREG_CONFIG`, default `polireg.yaml`).

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use polireg_ledger::{config, script, BlockClock, Ledger, LedgerError, Result};

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "polireg-ledger failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cfg_path = std::env::var("POLIREG_CONFIG").unwrap_or_else(|_| "polireg.yaml".into());
    let cfg = config::load_from_file(&cfg_path)?;

    let script_path = std::env::args()
        .nth(1)
        .ok_or_else(|| LedgerError::Script("usage: polireg-ledger <script.yaml>".into()))?;
    let txs = script::load_from_file(&script_path)?;

    let clock = Arc::new(BlockClock::new(cfg.ledger.genesis_height));
    let (handle, join) = Ledger::spawn(
        cfg.ledger.genesis_registry(),
        clock,
        cfg.ledger.queue_depth,
    );

    tracing::info!(script = %script_path, transactions = txs.len(), "replaying script");
    for tx in txs {
        let receipt = handle.submit(tx).await?;
        let line = serde_json::to_string(&receipt)
            .map_err(|e| LedgerError::Io(format!("encode receipt failed: {e}")))?;
        println!("{line}");
    }

    drop(handle);
    let registry = join.await.map_err(|_| LedgerError::Closed)?;
    tracing::info!(
        admin = %registry.admin(),
        policies = registry.len(),
        "replay finished"
    );
    Ok(())
}
