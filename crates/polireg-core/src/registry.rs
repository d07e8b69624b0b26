//! Admin-gated policy registry.
//!
//! The registry is append-only: policies are created by the admin and only
//! their `active` flag changes afterwards. Authorization is always checked
//! before any other precondition, so a non-admin caller receives
//! [`RegistryError::Unauthorized`] no matter what else is wrong.

use std::collections::BTreeMap;

use crate::context::CallContext;
use crate::error::{RegistryError, Result};
use crate::model::{Height, NewPolicy, Policy, PolicyId, Principal};

/// Registry state: admin identity, last assigned id, and the policy map.
#[derive(Debug, Clone)]
pub struct PolicyRegistry {
    admin: Principal,
    policy_counter: PolicyId,
    policies: BTreeMap<PolicyId, Policy>,
}

impl PolicyRegistry {
    /// Empty registry administered by `admin`.
    pub fn new(admin: impl Into<Principal>) -> Self {
        Self {
            admin: admin.into(),
            policy_counter: 0,
            policies: BTreeMap::new(),
        }
    }

    pub fn admin(&self) -> &Principal {
        &self.admin
    }

    /// Last id handed out (0 before the first creation).
    pub fn policy_counter(&self) -> PolicyId {
        self.policy_counter
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// All policies in ascending id order.
    pub fn policies(&self) -> impl Iterator<Item = (PolicyId, &Policy)> {
        self.policies.iter().map(|(id, p)| (*id, p))
    }

    fn ensure_admin(&self, ctx: &CallContext) -> Result<()> {
        if ctx.caller != self.admin {
            return Err(RegistryError::Unauthorized);
        }
        Ok(())
    }

    /// Create a policy and return its freshly allocated id.
    pub fn create_policy(&mut self, ctx: &CallContext, req: NewPolicy) -> Result<PolicyId> {
        self.ensure_admin(ctx)?;
        if !req.is_in_range() {
            return Err(RegistryError::InvalidRange);
        }

        let id = self.policy_counter + 1;
        let policy = Policy::activated(req);
        tracing::debug!(
            policy_id = id,
            owner = %policy.owner,
            policy_type = %policy.policy_type,
            height = ctx.height,
            "policy created"
        );
        self.policies.insert(id, policy);
        self.policy_counter = id;
        Ok(id)
    }

    /// Copy of the stored policy, if any.
    pub fn get_policy(&self, id: PolicyId) -> Option<Policy> {
        self.policies.get(&id).cloned()
    }

    /// Overwrite the `active` flag of an existing policy.
    pub fn update_policy_status(
        &mut self,
        ctx: &CallContext,
        id: PolicyId,
        active: bool,
    ) -> Result<()> {
        self.ensure_admin(ctx)?;
        let policy = self.policies.get_mut(&id).ok_or(RegistryError::NotFound)?;
        policy.active = active;
        tracing::debug!(policy_id = id, active, "policy status updated");
        Ok(())
    }

    /// Whether the policy exists, is flagged active, and `height` is inside its window.
    pub fn is_policy_active(&self, id: PolicyId, height: Height) -> bool {
        self.policies
            .get(&id)
            .is_some_and(|p| p.is_live_at(height))
    }

    /// Hand admin rights to `new_admin`. Any identity is accepted, including the current one.
    pub fn set_admin(&mut self, ctx: &CallContext, new_admin: impl Into<Principal>) -> Result<()> {
        self.ensure_admin(ctx)?;
        let new_admin = new_admin.into();
        tracing::debug!(from = %self.admin, to = %new_admin, "admin transferred");
        self.admin = new_admin;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const ADMIN: &str = "admin";

    fn req(coverage: u64, start: Height, end: Height) -> NewPolicy {
        NewPolicy {
            owner: Principal::new("owner"),
            coverage_amount: coverage,
            premium: 5,
            start_height: start,
            end_height: end,
            policy_type: "life".into(),
        }
    }

    #[test]
    fn unauthorized_wins_over_invalid_range() {
        let mut reg = PolicyRegistry::new(ADMIN);
        let stranger = CallContext::new("stranger", 0);
        assert_eq!(
            reg.create_policy(&stranger, req(0, 10, 5)),
            Err(RegistryError::Unauthorized)
        );
    }

    #[test]
    fn unauthorized_wins_over_not_found() {
        let mut reg = PolicyRegistry::new(ADMIN);
        let stranger = CallContext::new("stranger", 0);
        assert_eq!(
            reg.update_policy_status(&stranger, 99, false),
            Err(RegistryError::Unauthorized)
        );
    }

    #[test]
    fn equal_heights_are_rejected() {
        let mut reg = PolicyRegistry::new(ADMIN);
        let ctx = CallContext::new(ADMIN, 0);
        assert_eq!(
            reg.create_policy(&ctx, req(1, 7, 7)),
            Err(RegistryError::InvalidRange)
        );
        assert_eq!(reg.policy_counter(), 0);
        assert!(reg.is_empty());
    }

    #[test]
    fn policies_iterate_in_id_order() {
        let mut reg = PolicyRegistry::new(ADMIN);
        let ctx = CallContext::new(ADMIN, 0);
        for _ in 0..3 {
            reg.create_policy(&ctx, req(1, 0, 1)).unwrap();
        }
        let ids: Vec<_> = reg.policies().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(reg.len(), 3);
    }
}
