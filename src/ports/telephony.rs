//! Telephony Port - boundary to the platform's call launch action.

/// Port for launching an outbound call.
///
/// The launch is terminal and fire-and-forget: the controller does not
/// track whether the call connected.
pub trait TelephonyLauncher: Send + Sync {
    /// Launches a call to a digits-only phone string.
    ///
    /// Callers are responsible for stripping formatting before dialing.
    fn dial(&self, digits: &str);
}
