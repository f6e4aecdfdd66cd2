//! Wellmind - Embedded Triage Decision Engine
//!
//! This crate implements the decision core of a consumer wellness
//! application: validated self-report questionnaire scoring, keyword-based
//! conversational support classification, crisis detection and escalation,
//! and normalization of structured symptom intake into a canonical
//! analysis record.
//!
//! Page layout, routing, authentication, storage, and the third-party
//! image-classification relay are external collaborators and live outside
//! this crate.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
