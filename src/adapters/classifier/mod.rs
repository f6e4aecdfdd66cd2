//! Classifier adapters: HTTP implementation and test mock.

mod http;
mod mock;

pub use http::{HttpClassifier, HttpClassifierConfig};
pub use mock::{MockClassifier, MockFailure};
