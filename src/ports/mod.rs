//! Ports: async trait boundaries to external collaborators.

mod geolocator;
mod symptom_classifier;
mod telephony;

pub use geolocator::{Coordinates, Geolocator, LocationError};
pub use symptom_classifier::{ClassifierError, SymptomClassifier};
pub use telephony::TelephonyLauncher;
