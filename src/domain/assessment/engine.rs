//! Assessment engine: drives a user through a questionnaire and scores it.
//!
//! The engine owns exactly one in-progress answer set. Selecting a new
//! assessment or resetting discards the prior answers entirely; there is
//! no partial carry-over between attempts.

use std::collections::BTreeMap;

use crate::domain::catalog::{Assessment, Question, QuestionBank};
use crate::domain::foundation::{DomainError, ErrorCode, StateMachine};

use super::severity::{classify, ScoreResult};

/// Lifecycle of an assessment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentProgress {
    Idle,
    InProgress,
    Complete,
}

impl StateMachine for AssessmentProgress {
    fn can_transition_to(&self, target: &Self) -> bool {
        use AssessmentProgress::*;
        matches!(
            (self, target),
            (Idle, InProgress)
                | (InProgress, InProgress)
                | (InProgress, Complete)
                // reset or select-new from anywhere
                | (InProgress, Idle)
                | (Complete, Idle)
                | (Complete, InProgress)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use AssessmentProgress::*;
        match self {
            Idle => vec![InProgress],
            InProgress => vec![InProgress, Complete, Idle],
            Complete => vec![Idle, InProgress],
        }
    }
}

/// Drives questionnaire selection, answering, and scoring.
#[derive(Debug, Default)]
pub struct AssessmentEngine {
    selected: Option<&'static Assessment>,
    answers: BTreeMap<u32, i32>,
    step: usize,
}

impl AssessmentEngine {
    /// Creates an idle engine with no assessment selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects an assessment by catalog id, discarding any prior answers.
    ///
    /// Unknown ids are a silent no-op; callers are expected to offer only
    /// catalog ids.
    pub fn select(&mut self, id: &str) {
        match QuestionBank::get(id) {
            Some(assessment) => {
                self.selected = Some(assessment);
                self.answers.clear();
                self.step = 0;
            }
            None => {
                tracing::warn!(assessment_id = %id, "ignoring unknown assessment id");
            }
        }
    }

    /// Records an answer for a question of the active assessment.
    ///
    /// Overwrites any prior answer for the same question and advances the
    /// step pointer unless already at the last question.
    ///
    /// # Errors
    ///
    /// - `NoActiveAssessment` if nothing is selected
    /// - `UnknownQuestion` if the id is not in the active assessment
    /// - `AnswerOutOfScale` if the value is not on the question's scale
    pub fn answer(&mut self, question_id: u32, value: i32) -> Result<(), DomainError> {
        let assessment = self.active()?;

        let question = assessment.question(question_id).ok_or_else(|| {
            DomainError::new(
                ErrorCode::UnknownQuestion,
                format!("Question {} is not part of '{}'", question_id, assessment.id()),
            )
        })?;

        if !question.accepts(value) {
            return Err(DomainError::new(
                ErrorCode::AnswerOutOfScale,
                format!(
                    "Value {} is not on the scale of question {}",
                    value, question_id
                ),
            )
            .with_detail("question_id", question_id.to_string()));
        }

        self.answers.insert(question_id, value);
        if self.step < assessment.questions().len() - 1 {
            self.step += 1;
        }
        Ok(())
    }

    /// Steps the pointer back to the previous question.
    ///
    /// Recorded answers are untouched; no-op at the first question.
    pub fn previous_step(&mut self) {
        self.step = self.step.saturating_sub(1);
    }

    /// Returns the question at the current step, if an assessment is active.
    pub fn current_question(&self) -> Option<&'static Question> {
        let assessment = self.selected?;
        assessment.questions().get(self.step)
    }

    /// Returns the current step index.
    pub fn current_step(&self) -> usize {
        self.step
    }

    /// Returns the number of recorded answers.
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// True iff every question of the active assessment has an answer.
    pub fn is_complete(&self) -> bool {
        match self.selected {
            Some(assessment) => assessment
                .questions()
                .iter()
                .all(|q| self.answers.contains_key(&q.id())),
            None => false,
        }
    }

    /// Computes the total score over all answers.
    ///
    /// # Errors
    ///
    /// - `AssessmentIncomplete` if any question is unanswered
    pub fn score(&self) -> Result<i32, DomainError> {
        self.active()?;
        if !self.is_complete() {
            return Err(DomainError::new(
                ErrorCode::AssessmentIncomplete,
                "Score is only defined for a fully answered assessment",
            ));
        }
        Ok(self.answers.values().sum())
    }

    /// Scores and classifies the completed assessment.
    ///
    /// # Errors
    ///
    /// - `AssessmentIncomplete` if any question is unanswered
    pub fn result(&self) -> Result<ScoreResult, DomainError> {
        let assessment = self.active()?;
        let score = self.score()?;
        Ok(classify(assessment.id(), score))
    }

    /// Clears answers and the step pointer, keeping the selection.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.step = 0;
    }

    /// Clears the selection entirely, returning the engine to idle.
    pub fn deselect(&mut self) {
        self.selected = None;
        self.reset();
    }

    /// Returns the lifecycle state of the current attempt.
    pub fn progress(&self) -> AssessmentProgress {
        if self.selected.is_none() {
            AssessmentProgress::Idle
        } else if self.is_complete() {
            AssessmentProgress::Complete
        } else {
            AssessmentProgress::InProgress
        }
    }

    /// Returns the active assessment's id, if any.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.map(|a| a.id())
    }

    fn active(&self) -> Result<&'static Assessment, DomainError> {
        self.selected.ok_or_else(|| {
            DomainError::new(ErrorCode::NoActiveAssessment, "No assessment selected")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::SeverityBand;
    use crate::domain::catalog::{GAD7, PHQ9};

    fn complete(engine: &mut AssessmentEngine, value: i32) {
        let count = QuestionBank::get(engine.selected_id().unwrap())
            .unwrap()
            .questions()
            .len();
        for id in 1..=count as u32 {
            engine.answer(id, value).unwrap();
        }
    }

    mod selection {
        use super::*;

        #[test]
        fn select_moves_idle_to_in_progress() {
            let mut engine = AssessmentEngine::new();
            assert_eq!(engine.progress(), AssessmentProgress::Idle);

            engine.select(PHQ9);
            assert_eq!(engine.progress(), AssessmentProgress::InProgress);
            assert_eq!(engine.selected_id(), Some(PHQ9));
            assert_eq!(engine.current_step(), 0);
        }

        #[test]
        fn unknown_id_is_a_silent_no_op() {
            let mut engine = AssessmentEngine::new();
            engine.select("pcl5");
            assert_eq!(engine.progress(), AssessmentProgress::Idle);
        }

        #[test]
        fn reselecting_discards_prior_answers() {
            let mut engine = AssessmentEngine::new();
            engine.select(PHQ9);
            engine.answer(1, 3).unwrap();
            engine.answer(2, 3).unwrap();

            engine.select(PHQ9);
            assert_eq!(engine.answered_count(), 0);
            assert_eq!(engine.current_step(), 0);
        }

        #[test]
        fn switching_assessments_discards_answers() {
            let mut engine = AssessmentEngine::new();
            engine.select(PHQ9);
            engine.answer(1, 2).unwrap();

            engine.select(GAD7);
            assert_eq!(engine.answered_count(), 0);
            assert_eq!(engine.selected_id(), Some(GAD7));
        }
    }

    mod answering {
        use super::*;

        #[test]
        fn answer_advances_the_step_pointer() {
            let mut engine = AssessmentEngine::new();
            engine.select(PHQ9);

            engine.answer(1, 1).unwrap();
            assert_eq!(engine.current_step(), 1);
            assert_eq!(engine.current_question().unwrap().id(), 2);
        }

        #[test]
        fn answer_does_not_advance_past_the_last_question() {
            let mut engine = AssessmentEngine::new();
            engine.select(GAD7);
            complete(&mut engine, 0);

            assert_eq!(engine.current_step(), 6);
            engine.answer(7, 1).unwrap();
            assert_eq!(engine.current_step(), 6);
        }

        #[test]
        fn answer_overwrites_prior_value() {
            let mut engine = AssessmentEngine::new();
            engine.select(PHQ9);
            engine.answer(1, 1).unwrap();
            engine.previous_step();
            engine.answer(1, 3).unwrap();

            assert_eq!(engine.answered_count(), 1);
            for id in 2..=9 {
                engine.answer(id, 0).unwrap();
            }
            // q1 contributes its overwritten value, all others 0
            assert_eq!(engine.score().unwrap(), 3);
        }

        #[test]
        fn answer_outside_scale_is_rejected() {
            let mut engine = AssessmentEngine::new();
            engine.select(PHQ9);
            let err = engine.answer(1, 5).unwrap_err();
            assert_eq!(err.code, ErrorCode::AnswerOutOfScale);
            assert_eq!(engine.answered_count(), 0);
        }

        #[test]
        fn answer_for_unknown_question_is_rejected() {
            let mut engine = AssessmentEngine::new();
            engine.select(GAD7);
            let err = engine.answer(8, 1).unwrap_err();
            assert_eq!(err.code, ErrorCode::UnknownQuestion);
        }

        #[test]
        fn answer_without_selection_is_rejected() {
            let mut engine = AssessmentEngine::new();
            let err = engine.answer(1, 1).unwrap_err();
            assert_eq!(err.code, ErrorCode::NoActiveAssessment);
        }

        #[test]
        fn previous_step_is_a_no_op_at_the_start() {
            let mut engine = AssessmentEngine::new();
            engine.select(PHQ9);
            engine.previous_step();
            assert_eq!(engine.current_step(), 0);
        }
    }

    mod scoring {
        use super::*;

        #[test]
        fn score_is_undefined_before_completion() {
            let mut engine = AssessmentEngine::new();
            engine.select(PHQ9);
            engine.answer(1, 3).unwrap();

            let err = engine.score().unwrap_err();
            assert_eq!(err.code, ErrorCode::AssessmentIncomplete);
        }

        #[test]
        fn completed_phq9_scores_and_classifies() {
            let mut engine = AssessmentEngine::new();
            engine.select(PHQ9);
            engine.answer(1, 3).unwrap();
            engine.answer(2, 3).unwrap();
            for id in 3..=9 {
                engine.answer(id, 0).unwrap();
            }

            assert!(engine.is_complete());
            assert_eq!(engine.progress(), AssessmentProgress::Complete);
            let result = engine.result().unwrap();
            assert_eq!(result.score, 6);
            assert_eq!(result.band, SeverityBand::Mild);
        }

        #[test]
        fn completed_gad7_sums_all_answers() {
            let mut engine = AssessmentEngine::new();
            engine.select(GAD7);
            complete(&mut engine, 2);

            assert_eq!(engine.score().unwrap(), 14);
            assert_eq!(engine.result().unwrap().band, SeverityBand::Moderate);
        }
    }

    mod resetting {
        use super::*;

        #[test]
        fn reset_clears_answers_but_keeps_selection() {
            let mut engine = AssessmentEngine::new();
            engine.select(PHQ9);
            engine.answer(1, 2).unwrap();

            engine.reset();
            assert_eq!(engine.answered_count(), 0);
            assert_eq!(engine.current_step(), 0);
            assert_eq!(engine.selected_id(), Some(PHQ9));
            assert_eq!(engine.progress(), AssessmentProgress::InProgress);
        }

        #[test]
        fn deselect_returns_to_idle() {
            let mut engine = AssessmentEngine::new();
            engine.select(PHQ9);
            engine.deselect();
            assert_eq!(engine.progress(), AssessmentProgress::Idle);
            assert!(engine.current_question().is_none());
        }
    }

    mod progress_machine {
        use super::*;

        #[test]
        fn idle_cannot_jump_to_complete() {
            assert!(!AssessmentProgress::Idle.can_transition_to(&AssessmentProgress::Complete));
        }

        #[test]
        fn complete_can_restart() {
            assert!(AssessmentProgress::Complete.can_transition_to(&AssessmentProgress::Idle));
            assert!(
                AssessmentProgress::Complete.can_transition_to(&AssessmentProgress::InProgress)
            );
        }
    }
}
