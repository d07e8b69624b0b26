//! Per-call environment: who is calling and at which height.

use crate::model::{Height, Principal};

/// Environment facts supplied by the host for a single call.
///
/// The registry only compares against `height`; it does not check that
/// heights are non-decreasing across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallContext {
    pub caller: Principal,
    pub height: Height,
}

impl CallContext {
    pub fn new(caller: impl Into<Principal>, height: Height) -> Self {
        Self {
            caller: caller.into(),
            height,
        }
    }

    pub fn caller(&self) -> &Principal {
        &self.caller
    }

    pub fn height(&self) -> Height {
        self.height
    }

    /// Same caller, different height.
    pub fn at(&self, height: Height) -> Self {
        Self {
            caller: self.caller.clone(),
            height,
        }
    }
}
