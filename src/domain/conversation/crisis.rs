//! Crisis language detection.
//!
//! A fixed, explicit phrase list checked with case-insensitive substring
//! matching. Any single hit is a positive signal; there is no partial
//! scoring. This check always runs before topical classification and a
//! positive result short-circuits it.

/// Phrases that indicate a crisis. Kept short and explicit so the policy
/// is auditable.
const CRISIS_PHRASES: [&str; 4] = ["suicide", "kill myself", "want to die", "end my life"];

/// Returns true if the text contains any crisis-indicating phrase.
pub fn detect(text: &str) -> bool {
    let lowered = text.to_lowercase();
    CRISIS_PHRASES.iter().any(|phrase| lowered.contains(phrase))
}
