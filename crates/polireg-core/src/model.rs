//! Policy data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Policy identifier. Assigned from 1 upward, never reused.
pub type PolicyId = u64;

/// External clock value (block height or equivalent).
pub type Height = u64;

/// Opaque, comparable caller identity (e.g. a ledger address).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Principal {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Principal {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Arguments for creating a policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewPolicy {
    pub owner: Principal,
    pub coverage_amount: u64,
    pub premium: u64,
    pub start_height: Height,
    pub end_height: Height,
    pub policy_type: String,
}

impl NewPolicy {
    /// Coverage must be positive and the window non-empty.
    pub fn is_in_range(&self) -> bool {
        self.coverage_amount > 0 && self.end_height > self.start_height
    }
}

/// A stored policy record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub owner: Principal,
    pub coverage_amount: u64,
    pub premium: u64,
    pub start_height: Height,
    pub end_height: Height,
    pub active: bool,
    pub policy_type: String,
}

impl Policy {
    pub(crate) fn activated(req: NewPolicy) -> Self {
        Self {
            owner: req.owner,
            coverage_amount: req.coverage_amount,
            premium: req.premium,
            start_height: req.start_height,
            end_height: req.end_height,
            active: true,
            policy_type: req.policy_type,
        }
    }

    /// Live = active flag set and `height` inside `[start_height, end_height]`.
    pub fn is_live_at(&self, height: Height) -> bool {
        self.active && self.start_height <= height && height <= self.end_height
    }
}
