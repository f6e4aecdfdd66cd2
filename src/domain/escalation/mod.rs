//! Escalation module: the crisis-response flow's state machine.
//!
//! The controller that drives this machine lives in the application layer
//! (it talks to the geolocation and telephony ports); the states and
//! transition rules are pure and live here.

mod state;

pub use state::EscalationState;
