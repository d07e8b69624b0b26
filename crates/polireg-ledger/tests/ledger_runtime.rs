//! Ledger task and script replay tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use polireg_core::{NewPolicy, PolicyRegistry, Principal};
use polireg_ledger::{
    script, BlockClock, Call, Ledger, LedgerError, Receipt, ReceiptValue, Transaction,
};

const ADMIN: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
const OWNER: &str = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG";
const NEW_ADMIN: &str = "ST3PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

fn create(start: u64, end: u64) -> Call {
    Call::CreatePolicy(NewPolicy {
        owner: Principal::new(OWNER),
        coverage_amount: 1_000_000,
        premium: 50_000,
        start_height: start,
        end_height: end,
        policy_type: "health".into(),
    })
}

fn spawn_at(height: u64) -> (polireg_ledger::LedgerHandle, tokio::task::JoinHandle<PolicyRegistry>) {
    Ledger::spawn(PolicyRegistry::new(ADMIN), Arc::new(BlockClock::new(height)), 8)
}

#[tokio::test]
async fn liveness_tracks_the_block_clock() {
    let (ledger, _join) = spawn_at(10);

    let r = ledger.submit(Transaction::new(ADMIN, create(50, 150))).await.unwrap();
    assert_eq!(r, Receipt::Ok(ReceiptValue::Id(1)));

    let probe = || Transaction::new(OWNER, Call::IsPolicyActive { policy_id: 1 });

    assert_eq!(ledger.submit(probe()).await.unwrap(), Receipt::Ok(ReceiptValue::Flag(false)));

    ledger.clock().set(50);
    assert_eq!(ledger.submit(probe()).await.unwrap(), Receipt::Ok(ReceiptValue::Flag(true)));

    ledger.clock().advance(101);
    assert_eq!(ledger.submit(probe()).await.unwrap(), Receipt::Ok(ReceiptValue::Flag(false)));
}

#[tokio::test]
async fn transaction_height_moves_the_clock() {
    let (ledger, _join) = spawn_at(0);
    ledger
        .submit(Transaction::new(ADMIN, create(50, 150)).at_height(120))
        .await
        .unwrap();
    assert_eq!(ledger.clock().now(), 120);

    let snap = ledger.snapshot().await.unwrap();
    assert_eq!(snap.height, 120);
    assert_eq!(snap.policy_counter, 1);
    assert_eq!(snap.policies, 1);
    assert_eq!(snap.admin.as_str(), ADMIN);
}

#[tokio::test]
async fn rejected_calls_report_numeric_codes() {
    let (ledger, _join) = spawn_at(100);

    let r = ledger.submit(Transaction::new(OWNER, create(150, 100))).await.unwrap();
    assert_eq!(r.err_code(), Some(403));

    let r = ledger.submit(Transaction::new(ADMIN, create(150, 100))).await.unwrap();
    assert_eq!(r.err_code(), Some(400));

    let r = ledger
        .submit(Transaction::new(
            ADMIN,
            Call::UpdatePolicyStatus { policy_id: 1, active: false },
        ))
        .await
        .unwrap();
    assert_eq!(r.err_code(), Some(404));

    assert_eq!(ledger.snapshot().await.unwrap().policy_counter, 0);
}

#[tokio::test]
async fn dropping_handles_returns_the_registry() {
    let (ledger, join) = spawn_at(100);
    let second = ledger.clone();
    ledger.submit(Transaction::new(ADMIN, create(50, 150))).await.unwrap();
    second
        .submit(Transaction::new(ADMIN, Call::SetAdmin { new_admin: NEW_ADMIN.into() }))
        .await
        .unwrap();

    drop(ledger);
    drop(second);

    let registry = join.await.unwrap();
    assert_eq!(registry.admin().as_str(), NEW_ADMIN);
    assert_eq!(registry.policy_counter(), 1);
    assert!(registry.get_policy(1).unwrap().active);
}

#[tokio::test]
async fn submit_after_shutdown_is_closed() {
    let (ledger, join) = spawn_at(0);
    join.abort();
    let _ = join.await;

    let err = ledger
        .submit(Transaction::new(ADMIN, Call::GetPolicy { policy_id: 1 }))
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::Closed));
}

#[tokio::test]
async fn lifecycle_script_replays_in_order() {
    let txs = script::load_from_file("tests/fixtures/policy_lifecycle.yaml").unwrap();
    assert_eq!(txs.len(), 8);

    let (ledger, join) = spawn_at(0);
    let mut receipts = Vec::new();
    for tx in txs {
        receipts.push(serde_json::to_value(ledger.submit(tx).await.unwrap()).unwrap());
    }
    drop(ledger);

    let expected = [
        r#"{"ok":1}"#,
        r#"{"ok":true}"#,
        r#"{"err":400}"#,
        r#"{"ok":true}"#,
        r#"{"ok":false}"#,
        r#"{"ok":true}"#,
        r#"{"err":403}"#,
        r#"{"err":404}"#,
    ];
    let expected: Vec<serde_json::Value> = expected
        .iter()
        .map(|s| serde_json::from_str(s).unwrap())
        .collect();
    assert_eq!(receipts, expected);

    let registry = join.await.unwrap();
    assert_eq!(registry.admin().as_str(), NEW_ADMIN);
    assert_eq!(registry.policy_counter(), 1);
    assert!(!registry.get_policy(1).unwrap().active);
}

#[test]
fn script_rejects_unknown_transaction_fields() {
    let bad = r#"
- sender: "a"
  hieght: 3
  call: { op: get_policy, policy_id: 1 }
"#;
    assert!(matches!(script::load_from_str(bad), Err(LedgerError::Script(_))));
}

#[test]
fn script_rejects_unknown_ops() {
    let bad = r#"
- sender: "a"
  call: { op: delete_policy, policy_id: 1 }
"#;
    assert!(matches!(script::load_from_str(bad), Err(LedgerError::Script(_))));
}

#[test]
fn script_parses_create_policy_fields() {
    let ok = r#"
- sender: "admin"
  height: 7
  call:
    op: create_policy
    owner: "bob"
    coverage_amount: 10
    premium: 1
    start_height: 1
    end_height: 9
    policy_type: auto
"#;
    let txs = script::load_from_str(ok).unwrap();
    assert_eq!(txs[0].height, Some(7));
    match &txs[0].call {
        Call::CreatePolicy(req) => {
            assert_eq!(req.owner.as_str(), "bob");
            assert_eq!(req.policy_type, "auto");
            assert!(req.is_in_range());
        }
        other => panic!("unexpected call: {other:?}"),
    }
}
