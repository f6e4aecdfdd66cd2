//! Adapters: implementations of the ports.

pub mod classifier;
pub mod geolocation;
pub mod telephony;
