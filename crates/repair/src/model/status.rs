use serde::{Deserialize, Serialize};
use shared::errors::LifecycleError;
use shared::lifecycle::{LifecycleStatus, StatusDisplay};
use std::fmt;

/// Repair ticket status. Review forks into approval or rejection; approved
/// work then moves through the workshop one step at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepairStatus {
    Pending,
    Approved,
    Rejected,
    InProgress,
    Ready,
    Completed,
}

const ALL: [RepairStatus; 6] = [
    RepairStatus::Pending,
    RepairStatus::Approved,
    RepairStatus::Rejected,
    RepairStatus::InProgress,
    RepairStatus::Ready,
    RepairStatus::Completed,
];

impl RepairStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepairStatus::Pending => "pending",
            RepairStatus::Approved => "approved",
            RepairStatus::Rejected => "rejected",
            RepairStatus::InProgress => "in_progress",
            RepairStatus::Ready => "ready",
            RepairStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for RepairStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LifecycleStatus for RepairStatus {
    fn all() -> &'static [Self] {
        &ALL
    }

    fn display(&self) -> StatusDisplay {
        match self {
            RepairStatus::Pending => StatusDisplay {
                label: "Pending Review",
                color: "#FF9800",
            },
            RepairStatus::Approved => StatusDisplay {
                label: "Approved",
                color: "#2196F3",
            },
            RepairStatus::Rejected => StatusDisplay {
                label: "Rejected",
                color: "#F44336",
            },
            RepairStatus::InProgress => StatusDisplay {
                label: "In Progress",
                color: "#9C27B0",
            },
            RepairStatus::Ready => StatusDisplay {
                label: "Ready for Pickup",
                color: "#4CAF50",
            },
            RepairStatus::Completed => StatusDisplay {
                label: "Completed",
                color: "#4CAF50",
            },
        }
    }

    fn is_terminal(&self) -> bool {
        matches!(self, RepairStatus::Rejected | RepairStatus::Completed)
    }

    fn can_transition_to(&self, next: &Self) -> bool {
        use RepairStatus::*;
        matches!(
            (self, next),
            (Pending, Approved)
                | (Pending, Rejected)
                | (Approved, InProgress)
                | (InProgress, Ready)
                | (Ready, Completed)
        )
    }
}

/// Structured transition form replacing the original unguarded prompt
/// input. Approval must carry a positive estimated cost and rejection an
/// explanation; nothing defaults to empty strings or zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairStatusUpdate {
    pub status: RepairStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
}

impl RepairStatusUpdate {
    pub fn approve(estimated_cost: f64, admin_notes: Option<String>) -> Self {
        Self {
            status: RepairStatus::Approved,
            estimated_cost: Some(estimated_cost),
            admin_notes,
        }
    }

    pub fn reject(admin_notes: impl Into<String>) -> Self {
        Self {
            status: RepairStatus::Rejected,
            estimated_cost: None,
            admin_notes: Some(admin_notes.into()),
        }
    }

    pub fn start_work() -> Self {
        Self::plain(RepairStatus::InProgress)
    }

    pub fn mark_ready() -> Self {
        Self::plain(RepairStatus::Ready)
    }

    pub fn complete() -> Self {
        Self::plain(RepairStatus::Completed)
    }

    fn plain(status: RepairStatus) -> Self {
        Self {
            status,
            estimated_cost: None,
            admin_notes: None,
        }
    }

    /// Field invariants for the target state. A zero or non-finite cost
    /// counts as absent rather than as a free approval.
    pub fn validate_required_fields(&self) -> Result<(), LifecycleError> {
        match self.status {
            RepairStatus::Approved => match self.estimated_cost {
                Some(cost) if cost.is_finite() && cost > 0.0 => Ok(()),
                _ => Err(LifecycleError::MissingRequiredField("estimatedCost")),
            },
            RepairStatus::Rejected => match self.admin_notes.as_deref().map(str::trim) {
                Some(notes) if !notes.is_empty() => Ok(()),
                _ => Err(LifecycleError::MissingRequiredField("adminNotes")),
            },
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::Role;

    #[test]
    fn test_review_forks_into_approval_or_rejection() {
        let next = RepairStatus::Pending.transitions_for(Role::Admin);
        assert_eq!(next, vec![RepairStatus::Approved, RepairStatus::Rejected]);
    }

    #[test]
    fn test_workshop_progression_is_single_step() {
        assert!(RepairStatus::Approved.can_transition_to(&RepairStatus::InProgress));
        assert!(RepairStatus::InProgress.can_transition_to(&RepairStatus::Ready));
        assert!(RepairStatus::Ready.can_transition_to(&RepairStatus::Completed));

        // Completion requires passing through 'ready'.
        assert!(!RepairStatus::InProgress.can_transition_to(&RepairStatus::Completed));
    }

    #[test]
    fn test_terminal_states() {
        for terminal in [RepairStatus::Rejected, RepairStatus::Completed] {
            assert!(terminal.is_terminal());
            assert!(terminal.transitions_for(Role::Admin).is_empty());
        }
    }

    #[test]
    fn test_customers_cannot_transition() {
        assert!(
            RepairStatus::Pending
                .transitions_for(Role::Customer)
                .is_empty()
        );
    }

    #[test]
    fn test_approval_requires_positive_cost() {
        let missing = RepairStatusUpdate {
            status: RepairStatus::Approved,
            estimated_cost: None,
            admin_notes: None,
        };
        assert_eq!(
            missing.validate_required_fields(),
            Err(LifecycleError::MissingRequiredField("estimatedCost"))
        );

        let zero = RepairStatusUpdate::approve(0.0, None);
        assert_eq!(
            zero.validate_required_fields(),
            Err(LifecycleError::MissingRequiredField("estimatedCost"))
        );

        let priced = RepairStatusUpdate::approve(4500.0, Some("Replace coil".into()));
        assert!(priced.validate_required_fields().is_ok());
    }

    #[test]
    fn test_rejection_requires_notes() {
        let blank = RepairStatusUpdate {
            status: RepairStatus::Rejected,
            estimated_cost: None,
            admin_notes: Some("   ".into()),
        };
        assert_eq!(
            blank.validate_required_fields(),
            Err(LifecycleError::MissingRequiredField("adminNotes"))
        );

        assert!(
            RepairStatusUpdate::reject("No spare parts available")
                .validate_required_fields()
                .is_ok()
        );
    }

    #[test]
    fn test_plain_steps_carry_no_fields() {
        assert!(RepairStatusUpdate::start_work().validate_required_fields().is_ok());
        assert!(RepairStatusUpdate::mark_ready().validate_required_fields().is_ok());
        assert!(RepairStatusUpdate::complete().validate_required_fields().is_ok());
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&RepairStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        let status: RepairStatus = serde_json::from_str("\"ready\"").unwrap();
        assert_eq!(status, RepairStatus::Ready);
    }

    #[test]
    fn test_display_mapping() {
        assert_eq!(RepairStatus::Pending.display().label, "Pending Review");
        assert_eq!(RepairStatus::Ready.display().label, "Ready for Pickup");
        assert_eq!(RepairStatus::Ready.display().color, "#4CAF50");
        assert_eq!(RepairStatus::Completed.display().color, "#4CAF50");
    }

    #[test]
    fn test_update_serializes_without_absent_fields() {
        let json = serde_json::to_string(&RepairStatusUpdate::start_work()).unwrap();
        assert_eq!(json, r#"{"status":"in_progress"}"#);
    }
}
