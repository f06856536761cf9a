use crate::domain::Role;
use crate::errors::LifecycleError;
use std::fmt;

/// Display semantics for a lifecycle state. Every rendering surface reads
/// from this single mapping; the values carry no business meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDisplay {
    pub label: &'static str,
    pub color: &'static str,
}

/// Canonical state machine contract shared by the order and repair
/// lifecycles. Transitions are validated locally and synchronously; a
/// rejection here never reaches the network.
pub trait LifecycleStatus: Sized + Copy + PartialEq + fmt::Display + 'static {
    /// Every state of the machine, in progression order.
    fn all() -> &'static [Self];

    fn display(&self) -> StatusDisplay;

    fn is_terminal(&self) -> bool;

    /// Whether `next` is reachable from `self` in one legal step,
    /// irrespective of actor.
    fn can_transition_to(&self, next: &Self) -> bool;

    /// Transitions the given actor may request from this state. Customers
    /// observe status only; they hold no transition capability.
    fn transitions_for(&self, role: Role) -> Vec<Self> {
        if role != Role::Admin {
            return Vec::new();
        }
        Self::all()
            .iter()
            .copied()
            .filter(|next| self.can_transition_to(next))
            .collect()
    }

    /// Defensive gate applied before any transition request is forwarded.
    fn ensure_transition(&self, next: &Self, role: Role) -> Result<(), LifecycleError> {
        if role != Role::Admin || !self.can_transition_to(next) {
            return Err(LifecycleError::InvalidTransition {
                from: self.to_string(),
                to: next.to_string(),
            });
        }
        Ok(())
    }
}
