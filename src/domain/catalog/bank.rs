//! Static catalog of validated screening questionnaires.
//!
//! The bank holds the PHQ-9 depression screen and the GAD-7 anxiety
//! screen. Both use the standard four-option frequency scale. The catalog
//! is built once and shared read-only across all sessions.

use once_cell::sync::Lazy;

use super::question::{Assessment, Question};

/// Catalog id of the depression screen.
pub const PHQ9: &str = "phq9";

/// Catalog id of the anxiety screen.
pub const GAD7: &str = "gad7";

const FREQUENCY_LABELS: [&str; 4] = [
    "Not at all",
    "Several days",
    "More than half the days",
    "Nearly every day",
];

static CATALOG: Lazy<Vec<Assessment>> = Lazy::new(|| {
    vec![build_phq9(), build_gad7()]
});

fn frequency_question(id: u32, prompt: &str) -> Question {
    // The standard scale is fixed at construction; this cannot fail.
    Question::new(id, prompt, vec![0, 1, 2, 3], FREQUENCY_LABELS.to_vec())
        .expect("standard frequency question is well-formed")
}

fn build_phq9() -> Assessment {
    let prompts = [
        "Little interest or pleasure in doing things",
        "Feeling down, depressed, or hopeless",
        "Trouble falling or staying asleep, or sleeping too much",
        "Feeling tired or having little energy",
        "Poor appetite or overeating",
        "Feeling bad about yourself, or that you are a failure or have let yourself or your family down",
        "Trouble concentrating on things, such as reading the newspaper or watching television",
        "Moving or speaking so slowly that other people could have noticed, or the opposite, being fidgety or restless",
        "Thoughts that you would be better off dead, or of hurting yourself in some way",
    ];
    let questions = prompts
        .iter()
        .enumerate()
        .map(|(i, p)| frequency_question(i as u32 + 1, p))
        .collect();

    Assessment::new(
        PHQ9,
        "Depression Screening",
        "A validated 9-question tool to screen for the presence and severity of depression.",
        questions,
    )
    .expect("PHQ-9 catalog entry is well-formed")
}

fn build_gad7() -> Assessment {
    let prompts = [
        "Feeling nervous, anxious, or on edge",
        "Not being able to stop or control worrying",
        "Worrying too much about different things",
        "Trouble relaxing",
        "Being so restless that it is hard to sit still",
        "Becoming easily annoyed or irritable",
        "Feeling afraid, as if something awful might happen",
    ];
    let questions = prompts
        .iter()
        .enumerate()
        .map(|(i, p)| frequency_question(i as u32 + 1, p))
        .collect();

    Assessment::new(
        GAD7,
        "Anxiety Screening",
        "A 7-question screening tool for generalized anxiety disorder.",
        questions,
    )
    .expect("GAD-7 catalog entry is well-formed")
}

/// Read-only access to the questionnaire catalog.
pub struct QuestionBank;

impl QuestionBank {
    /// Looks up an assessment by catalog id.
    pub fn get(id: &str) -> Option<&'static Assessment> {
        CATALOG.iter().find(|a| a.id() == id)
    }

    /// Returns all assessments in catalog order.
    pub fn all() -> &'static [Assessment] {
        &CATALOG
    }
}
