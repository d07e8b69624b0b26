//! Transactions and their wire receipts.
//!
//! A transaction names its sender, optionally the block height it executes
//! at, and one registry call. Its outcome is rendered as a [`Receipt`]:
//! `{"ok": <value>}` or `{"err": <code>}`, where codes come from
//! [`polireg_core::ErrorCode::as_u16`].

use serde::{Deserialize, Serialize};

use polireg_core::{
    CallContext, Height, NewPolicy, Policy, PolicyId, PolicyRegistry, Principal, RegistryError,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Transaction {
    pub sender: Principal,
    /// If set, the block clock is moved here before the call runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Height>,
    pub call: Call,
}

impl Transaction {
    pub fn new(sender: impl Into<Principal>, call: Call) -> Self {
        Self {
            sender: sender.into(),
            height: None,
            call,
        }
    }

    pub fn at_height(mut self, height: Height) -> Self {
        self.height = Some(height);
        self
    }
}

/// One registry operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Call {
    CreatePolicy(NewPolicy),
    GetPolicy { policy_id: PolicyId },
    UpdatePolicyStatus { policy_id: PolicyId, active: bool },
    IsPolicyActive { policy_id: PolicyId },
    SetAdmin { new_admin: Principal },
}

impl Call {
    pub fn name(&self) -> &'static str {
        match self {
            Call::CreatePolicy(_) => "create_policy",
            Call::GetPolicy { .. } => "get_policy",
            Call::UpdatePolicyStatus { .. } => "update_policy_status",
            Call::IsPolicyActive { .. } => "is_policy_active",
            Call::SetAdmin { .. } => "set_admin",
        }
    }

    /// Run against `registry`. Unit successes report `true`.
    pub fn execute(
        self,
        registry: &mut PolicyRegistry,
        ctx: &CallContext,
    ) -> polireg_core::Result<ReceiptValue> {
        match self {
            Call::CreatePolicy(req) => registry.create_policy(ctx, req).map(ReceiptValue::Id),
            Call::GetPolicy { policy_id } => {
                Ok(ReceiptValue::Policy(registry.get_policy(policy_id)))
            }
            Call::UpdatePolicyStatus { policy_id, active } => registry
                .update_policy_status(ctx, policy_id, active)
                .map(|()| ReceiptValue::Flag(true)),
            Call::IsPolicyActive { policy_id } => Ok(ReceiptValue::Flag(
                registry.is_policy_active(policy_id, ctx.height),
            )),
            Call::SetAdmin { new_admin } => registry
                .set_admin(ctx, new_admin)
                .map(|()| ReceiptValue::Flag(true)),
        }
    }
}

/// Success payload of a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReceiptValue {
    Id(PolicyId),
    Flag(bool),
    Policy(Option<Policy>),
}

/// Outcome of one transaction as reported to the submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Receipt {
    #[serde(rename = "ok")]
    Ok(ReceiptValue),
    #[serde(rename = "err")]
    Err(u16),
}

impl Receipt {
    pub fn is_ok(&self) -> bool {
        matches!(self, Receipt::Ok(_))
    }

    /// Error code, if the call was rejected.
    pub fn err_code(&self) -> Option<u16> {
        match self {
            Receipt::Err(code) => Some(*code),
            Receipt::Ok(_) => None,
        }
    }
}

impl From<&RegistryError> for Receipt {
    fn from(e: &RegistryError) -> Self {
        Receipt::Err(e.code().as_u16())
    }
}
