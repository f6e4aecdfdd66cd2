//! Question and assessment definitions.
//!
//! Questions are immutable records defined at catalog-load time. Each
//! question carries an ordered scale of integer option values and a
//! matching ordered list of response labels.

use crate::domain::foundation::ValidationError;
use serde::{Deserialize, Serialize};

/// A single scaled question within an assessment.
///
/// # Invariants
///
/// - `scale` and `labels` have equal, non-zero length
/// - immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: u32,
    prompt: String,
    scale: Vec<i32>,
    labels: Vec<String>,
}

impl Question {
    /// Creates a new question.
    ///
    /// # Errors
    ///
    /// - `InvalidValue` if `scale` and `labels` differ in length or are empty
    pub fn new(
        id: u32,
        prompt: impl Into<String>,
        scale: Vec<i32>,
        labels: Vec<&str>,
    ) -> Result<Self, ValidationError> {
        if scale.is_empty() {
            return Err(ValidationError::invalid_value(
                "scale",
                "Question scale cannot be empty",
            ));
        }
        if scale.len() != labels.len() {
            return Err(ValidationError::invalid_value(
                "labels",
                format!(
                    "Expected {} labels to match the scale, got {}",
                    scale.len(),
                    labels.len()
                ),
            ));
        }

        Ok(Self {
            id,
            prompt: prompt.into(),
            scale,
            labels: labels.into_iter().map(String::from).collect(),
        })
    }

    /// Returns the question id.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the question prompt.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the ordered scale of option values.
    pub fn scale(&self) -> &[i32] {
        &self.scale
    }

    /// Returns the ordered response labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns true if `value` is one of this question's scale options.
    pub fn accepts(&self, value: i32) -> bool {
        self.scale.contains(&value)
    }
}

/// An immutable ordered questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    id: String,
    name: String,
    description: String,
    questions: Vec<Question>,
}

impl Assessment {
    /// Creates a new assessment.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if there are no questions
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, ValidationError> {
        if questions.is_empty() {
            return Err(ValidationError::empty_field("questions"));
        }

        Ok(Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            questions,
        })
    }

    /// Returns the assessment id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the ordered questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Looks up a question by id.
    pub fn question(&self, question_id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == question_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question::new(
            1,
            "Feeling down, depressed, or hopeless",
            vec![0, 1, 2, 3],
            vec![
                "Not at all",
                "Several days",
                "More than half the days",
                "Nearly every day",
            ],
        )
        .unwrap()
    }

    #[test]
    fn question_rejects_mismatched_labels() {
        let result = Question::new(1, "prompt", vec![0, 1, 2], vec!["a", "b"]);
        assert!(result.is_err());
    }

    #[test]
    fn question_rejects_empty_scale() {
        let result = Question::new(1, "prompt", vec![], vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn question_accepts_scale_values_only() {
        let q = question();
        assert!(q.accepts(0));
        assert!(q.accepts(3));
        assert!(!q.accepts(4));
        assert!(!q.accepts(-1));
    }

    #[test]
    fn assessment_rejects_empty_question_list() {
        let result = Assessment::new("phq9", "Depression Screening", "desc", vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn assessment_finds_question_by_id() {
        let a = Assessment::new("phq9", "Depression Screening", "desc", vec![question()])
            .unwrap();
        assert!(a.question(1).is_some());
        assert!(a.question(99).is_none());
    }
}
