//! Escalation controller: drives the SOS/crisis-response flow.
//!
//! One controller instance covers one escalation flow, from trigger to
//! close. Location capture is advisory; every acquisition outcome
//! (success, denial, timeout) proceeds identically to showing the
//! emergency resources.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;

use crate::config::EscalationConfig;
use crate::domain::catalog::{emergency_resources, EmergencyResource};
use crate::domain::conversation::{ConversationSession, Message, Sender};
use crate::domain::escalation::EscalationState;
use crate::domain::foundation::{DomainError, ErrorCode, StateMachine};
use crate::ports::{Coordinates, Geolocator, TelephonyLauncher};

/// Hand-off notice appended to the chat on the crisis-inline path.
const COUNSELOR_HANDOFF: &str = "I'm connecting you with a counselor now. Please stay on this \
     page. A counselor will join this conversation shortly.";

/// Drives one SOS escalation flow.
pub struct EscalationController {
    state: EscalationState,
    location: Option<Coordinates>,
    geolocator: Arc<dyn Geolocator>,
    telephony: Arc<dyn TelephonyLauncher>,
    location_timeout: Duration,
    local_emergency_number: String,
}

impl EscalationController {
    /// Creates an idle controller.
    pub fn new(
        geolocator: Arc<dyn Geolocator>,
        telephony: Arc<dyn TelephonyLauncher>,
        config: &EscalationConfig,
    ) -> Self {
        Self {
            state: EscalationState::Idle,
            location: None,
            geolocator,
            telephony,
            location_timeout: Duration::from_secs(config.location_timeout_secs),
            local_emergency_number: config.local_emergency_number.clone(),
        }
    }

    /// Returns the current flow state.
    pub fn state(&self) -> EscalationState {
        self.state
    }

    /// Returns the advisory location, if one was captured.
    pub fn location(&self) -> Option<Coordinates> {
        self.location
    }

    /// Returns the configured local emergency number, display-formatted.
    pub fn local_emergency_number(&self) -> &str {
        &self.local_emergency_number
    }

    /// Starts the flow (manual SOS button or crisis signal follow-up).
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the flow has already started
    pub fn trigger_sos(&mut self) -> Result<(), DomainError> {
        self.transition(EscalationState::LocationRequested)?;
        tracing::info!("escalation flow started");
        Ok(())
    }

    /// Attempts to capture the device location, then shows resources.
    ///
    /// Denial, timeout, and unavailability all proceed identically; the
    /// flow never stalls in `LocationRequested`.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if location was not requested
    pub async fn request_location(&mut self) -> Result<EscalationState, DomainError> {
        if self.state != EscalationState::LocationRequested {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Location can only be requested after SOS is triggered",
            ));
        }

        match timeout(self.location_timeout, self.geolocator.current_position()).await {
            Ok(Ok(position)) => {
                tracing::debug!(lat = position.lat, lng = position.lng, "location captured");
                self.location = Some(position);
            }
            Ok(Err(err)) => {
                tracing::debug!(%err, "location unavailable, showing resources without it");
            }
            Err(_) => {
                tracing::debug!("location acquisition timed out, showing resources without it");
            }
        }

        self.transition(EscalationState::ResourcesShown)?;
        Ok(self.state)
    }

    /// Returns the emergency resource list.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` unless resources are being shown
    pub fn resources(&self) -> Result<&'static [EmergencyResource], DomainError> {
        if self.state != EscalationState::ResourcesShown {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Resources are only listed while the flow shows them",
            ));
        }
        Ok(emergency_resources())
    }

    /// Launches a call to a resource. Fire-and-forget.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the resource's phone field has no digits
    pub fn call_resource(&self, resource: &EmergencyResource) -> Result<(), DomainError> {
        let digits = resource.phone_digits();
        if digits.is_empty() {
            return Err(DomainError::validation(
                "phone",
                format!("Resource '{}' has no dialable digits", resource.id),
            ));
        }
        self.telephony.dial(&digits);
        Ok(())
    }

    /// Launches a call to the configured local emergency number.
    pub fn call_local_emergency(&self) {
        let digits: String = self
            .local_emergency_number
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        self.telephony.dial(&digits);
    }

    /// Closes the flow, discarding location and modal state.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the flow never started or is closed
    pub fn close(&mut self) -> Result<(), DomainError> {
        self.transition(EscalationState::Closed)?;
        self.location = None;
        tracing::info!("escalation flow closed");
        Ok(())
    }

    /// Crisis-inline path: appends the counselor hand-off notice to the
    /// chat and clears the crisis banner. Does not open a transport.
    ///
    /// # Errors
    ///
    /// - `SessionClosed` if the session has been torn down
    pub fn connect_to_live_counselor(
        &self,
        session: &mut ConversationSession,
    ) -> Result<(), DomainError> {
        let notice = Message::new(Sender::Bot, COUNSELOR_HANDOFF)?;
        session.push(notice)?;
        session.clear_crisis_alert();
        Ok(())
    }

    fn transition(&mut self, target: EscalationState) -> Result<(), DomainError> {
        self.state = self.state.transition_to(target).map_err(|err| {
            DomainError::new(ErrorCode::InvalidStateTransition, err.to_string())
        })?;
        Ok(())
    }
}
