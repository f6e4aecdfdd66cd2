//! Conversation reply engine.
//!
//! Classifies a user message and selects the reply text. Depression and
//! anxiety carry multi-candidate reply lists chosen uniformly at random
//! from an injected seedable source, so tests can pin the seed and assert
//! exact output. Every other category maps to a fixed reply.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::classifier::{classify, SupportCategory};

const CRISIS_REPLY: &str = "I'm concerned about what you're sharing. You're not alone, and \
     support is available. Would you like to talk to a counselor or see crisis resources?";

const DEPRESSION_REPLIES: [&str; 5] = [
    "I'm sorry you're feeling this way. Sometimes writing down your thoughts or talking to a friend can help.",
    "Would you like to try a guided breathing exercise or a short gratitude activity?",
    "Remember, it's okay to ask for help. If you'd like, I can suggest some support groups or professional resources.",
    "Taking a short walk or listening to calming music might help lift your mood a bit.",
    "Would you like to hear a positive affirmation or a motivational quote?",
];

const ANXIETY_REPLIES: [&str; 5] = [
    "Anxiety can be tough. Try the 5-4-3-2-1 grounding technique: Name 5 things you see, 4 you can touch, 3 you hear, 2 you smell, and 1 you taste.",
    "Would you like to try a short mindfulness exercise or a calming visualization?",
    "Remember to take slow, deep breaths. Inhale for 4 seconds, hold for 4, exhale for 4.",
    "If you're comfortable, you can share more about what's making you anxious. I'm here to listen.",
    "Would you like some tips for managing anxiety or information about support groups?",
];

const SLEEP_REPLY: &str = "Sleep issues are common. Try to keep a regular bedtime, avoid screens \
     before bed, and practice relaxation techniques. Would you like a guided sleep meditation?";

const STRESS_REPLY: &str = "Stress can build up quickly. Taking short breaks, stretching, or \
     talking to someone you trust can help. Would you like a quick stress-relief exercise or to \
     talk more about what's on your mind?";

const LONELINESS_REPLY: &str = "Feeling lonely is tough. Would you like to join a peer support \
     group or connect with others who understand what you're going through?";

const MOTIVATION_REPLY: &str = "Motivation can come and go. Setting small, achievable goals and \
     celebrating little wins can help. Would you like some productivity tips or a motivational \
     quote?";

const DEFAULT_REPLY: &str = "I'm here to listen and support you. Can you tell me more about how \
     you're feeling or what you'd like help with?";

/// A classified user message with the selected assistant reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub category: SupportCategory,
    pub text: String,
}

impl Reply {
    /// True if the message carried a crisis signal.
    pub fn is_crisis(&self) -> bool {
        self.category == SupportCategory::Crisis
    }
}

/// Selects replies for classified user messages.
#[derive(Debug)]
pub struct ConversationEngine {
    rng: StdRng,
}

impl ConversationEngine {
    /// Creates an engine with an entropy-seeded random source.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates an engine with a fixed seed, for deterministic replies.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Classifies the message and selects a reply.
    ///
    /// Crisis strictly precedes topical checks: a crisis message never
    /// receives a topical reply.
    pub fn reply_to(&mut self, user_text: &str) -> Reply {
        let category = classify(user_text);
        if category == SupportCategory::Crisis {
            tracing::warn!("crisis language detected in user message");
        }

        let text = match category {
            SupportCategory::Crisis => CRISIS_REPLY.to_string(),
            SupportCategory::Depression => self.pick(&DEPRESSION_REPLIES),
            SupportCategory::Anxiety => self.pick(&ANXIETY_REPLIES),
            SupportCategory::Sleep => SLEEP_REPLY.to_string(),
            SupportCategory::Stress => STRESS_REPLY.to_string(),
            SupportCategory::Loneliness => LONELINESS_REPLY.to_string(),
            SupportCategory::Motivation => MOTIVATION_REPLY.to_string(),
            SupportCategory::Unknown => DEFAULT_REPLY.to_string(),
        };

        Reply { category, text }
    }

    fn pick(&mut self, candidates: &[&str]) -> String {
        let index = self.rng.gen_range(0..candidates.len());
        candidates[index].to_string()
    }
}

impl Default for ConversationEngine {
    fn default() -> Self {
        Self::new()
    }
}
