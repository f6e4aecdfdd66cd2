//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction and input checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be at least {min} characters, got {actual}")]
    TooShort {
        field: String,
        min: usize,
        actual: usize,
    },

    #[error("Field '{field}' has invalid value: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates a too-short validation error.
    pub fn too_short(field: impl Into<String>, min: usize, actual: usize) -> Self {
        ValidationError::TooShort {
            field: field.into(),
            min,
            actual,
        }
    }

    /// Creates an invalid value validation error.
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    AnswerOutOfScale,

    // Assessment errors
    NoActiveAssessment,
    AssessmentIncomplete,
    UnknownQuestion,

    // Conversation errors
    SessionClosed,

    // Escalation errors
    InvalidStateTransition,

    // Triage errors
    ClassifierError,
    UnusablePayload,

    // Infrastructure errors
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::AnswerOutOfScale => "ANSWER_OUT_OF_SCALE",
            ErrorCode::NoActiveAssessment => "NO_ACTIVE_ASSESSMENT",
            ErrorCode::AssessmentIncomplete => "ASSESSMENT_INCOMPLETE",
            ErrorCode::UnknownQuestion => "UNKNOWN_QUESTION",
            ErrorCode::SessionClosed => "SESSION_CLOSED",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::ClassifierError => "CLASSIFIER_ERROR",
            ErrorCode::UnusablePayload => "UNUSABLE_PAYLOAD",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
            details: HashMap::new(),
        }
        .with_detail("field", field.into())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match err {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            _ => ErrorCode::ValidationFailed,
        };
        DomainError::new(code, err.to_string())
    }
}
