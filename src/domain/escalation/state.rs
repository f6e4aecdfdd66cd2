//! Escalation flow states.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Lifecycle of one SOS/crisis escalation flow.
///
/// Location acquisition is advisory: denial or timeout proceeds to
/// `ResourcesShown` exactly like success. `Closed` is terminal; a new SOS
/// starts a fresh flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscalationState {
    Idle,
    LocationRequested,
    ResourcesShown,
    Closed,
}

impl StateMachine for EscalationState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use EscalationState::*;
        matches!(
            (self, target),
            (Idle, LocationRequested)
                | (LocationRequested, ResourcesShown)
                | (ResourcesShown, Closed)
                // closing mid-acquisition is allowed
                | (LocationRequested, Closed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use EscalationState::*;
        match self {
            Idle => vec![LocationRequested],
            LocationRequested => vec![ResourcesShown, Closed],
            ResourcesShown => vec![Closed],
            Closed => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_transitions_are_valid() {
        let s = EscalationState::Idle;
        let s = s.transition_to(EscalationState::LocationRequested).unwrap();
        let s = s.transition_to(EscalationState::ResourcesShown).unwrap();
        let s = s.transition_to(EscalationState::Closed).unwrap();
        assert!(s.is_terminal());
    }

    #[test]
    fn idle_cannot_jump_straight_to_resources() {
        let result = EscalationState::Idle.transition_to(EscalationState::ResourcesShown);
        assert!(result.is_err());
    }

    #[test]
    fn closed_is_terminal() {
        assert!(EscalationState::Closed.is_terminal());
        assert!(!EscalationState::Closed.can_transition_to(&EscalationState::Idle));
    }

    #[test]
    fn closing_during_location_acquisition_is_valid() {
        assert!(EscalationState::LocationRequested.can_transition_to(&EscalationState::Closed));
    }
}
