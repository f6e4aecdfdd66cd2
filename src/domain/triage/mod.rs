//! Triage module: symptom intake and classifier payload normalization.

mod analysis;
mod intake;

pub use analysis::{
    normalize, AnalysisResult, ClassifierPayload, ConsultationFees, Urgency,
};
pub use intake::{SymptomIntake, SymptomSeverity};
