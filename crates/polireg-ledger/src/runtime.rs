//! Single-writer ledger task.
//!
//! One tokio task owns the [`PolicyRegistry`] and drains a bounded queue of
//! submissions, so every call sees the whole registry exclusively. Handles are
//! cheap to clone; when the last one is dropped the task finishes and hands
//! the registry back through its `JoinHandle`.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use polireg_core::{CallContext, Height, PolicyId, PolicyRegistry, Principal};

use crate::clock::BlockClock;
use crate::error::{LedgerError, Result};
use crate::tx::{Receipt, Transaction};

enum Command {
    Submit {
        tx: Transaction,
        reply: oneshot::Sender<Receipt>,
    },
    Snapshot {
        reply: oneshot::Sender<Snapshot>,
    },
}

/// Point-in-time view of registry bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub admin: Principal,
    pub policy_counter: PolicyId,
    pub policies: usize,
    pub height: Height,
}

pub struct Ledger;

impl Ledger {
    /// Start the ledger task. Must be called inside a tokio runtime.
    pub fn spawn(
        registry: PolicyRegistry,
        clock: Arc<BlockClock>,
        queue_depth: usize,
    ) -> (LedgerHandle, JoinHandle<PolicyRegistry>) {
        let (tx, rx) = mpsc::channel(queue_depth.max(1));
        let join = tokio::spawn(run(registry, Arc::clone(&clock), rx));
        (LedgerHandle { tx, clock }, join)
    }
}

/// Submission side of a running ledger.
#[derive(Clone)]
pub struct LedgerHandle {
    tx: mpsc::Sender<Command>,
    clock: Arc<BlockClock>,
}

impl LedgerHandle {
    pub fn clock(&self) -> &BlockClock {
        &self.clock
    }

    /// Queue a transaction and wait for its receipt.
    pub async fn submit(&self, tx: Transaction) -> Result<Receipt> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::Submit { tx, reply })
            .await
            .map_err(|_| LedgerError::Closed)?;
        rx.await.map_err(|_| LedgerError::Closed)
    }

    pub async fn snapshot(&self) -> Result<Snapshot> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::Snapshot { reply })
            .await
            .map_err(|_| LedgerError::Closed)?;
        rx.await.map_err(|_| LedgerError::Closed)
    }
}

async fn run(
    mut registry: PolicyRegistry,
    clock: Arc<BlockClock>,
    mut rx: mpsc::Receiver<Command>,
) -> PolicyRegistry {
    tracing::info!(admin = %registry.admin(), height = clock.now(), "ledger started");

    while let Some(cmd) = rx.recv().await {
        match cmd {
            Command::Submit { tx, reply } => {
                let receipt = apply(&mut registry, &clock, tx);
                // submitter may have gone away; the state change still stands
                let _ = reply.send(receipt);
            }
            Command::Snapshot { reply } => {
                let _ = reply.send(Snapshot {
                    admin: registry.admin().clone(),
                    policy_counter: registry.policy_counter(),
                    policies: registry.len(),
                    height: clock.now(),
                });
            }
        }
    }

    tracing::info!(
        policies = registry.len(),
        policy_counter = registry.policy_counter(),
        "ledger stopped"
    );
    registry
}

/// Apply one transaction to `registry` at the clock's height.
pub fn apply(registry: &mut PolicyRegistry, clock: &BlockClock, tx: Transaction) -> Receipt {
    if let Some(h) = tx.height {
        clock.set(h);
    }
    let ctx = CallContext::new(tx.sender, clock.now());
    let op = tx.call.name();

    match tx.call.execute(registry, &ctx) {
        Ok(v) => Receipt::Ok(v),
        Err(e) => {
            tracing::warn!(
                op,
                sender = %ctx.caller,
                height = ctx.height,
                code = e.code().as_str(),
                "transaction rejected"
            );
            Receipt::from(&e)
        }
    }
}
