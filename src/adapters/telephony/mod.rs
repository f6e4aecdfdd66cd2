//! Telephony adapters.
//!
//! The actual call launch is a platform action (`tel:` URI). The adapter
//! here formats the URI and hands it to the host shell via a callback;
//! the recording variant is for tests.

use std::sync::{Arc, Mutex};

use crate::ports::TelephonyLauncher;

/// Launches calls by formatting a `tel:` URI and passing it to the host
/// shell's opener.
pub struct TelUriLauncher {
    open: Box<dyn Fn(&str) + Send + Sync>,
}

impl TelUriLauncher {
    /// Creates a launcher that hands `tel:{digits}` URIs to `open`.
    pub fn new(open: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            open: Box::new(open),
        }
    }
}

impl TelephonyLauncher for TelUriLauncher {
    fn dial(&self, digits: &str) {
        let uri = format!("tel:{}", digits);
        tracing::info!(%uri, "launching outbound call");
        (self.open)(&uri);
    }
}

/// Records dialed numbers instead of launching anything.
#[derive(Debug, Clone, Default)]
pub struct RecordingLauncher {
    dialed: Arc<Mutex<Vec<String>>>,
}

impl RecordingLauncher {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the numbers dialed so far.
    pub fn dialed(&self) -> Vec<String> {
        self.dialed.lock().expect("dial log poisoned").clone()
    }
}

impl TelephonyLauncher for RecordingLauncher {
    fn dial(&self, digits: &str) {
        self.dialed
            .lock()
            .expect("dial log poisoned")
            .push(digits.to_string());
    }
}
