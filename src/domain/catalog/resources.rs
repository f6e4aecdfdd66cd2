//! Static emergency resource reference data.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A crisis hotline or support service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyResource {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub description: String,
    pub hours: String,
    pub website: Option<String>,
}

impl EmergencyResource {
    fn new(
        id: &str,
        name: &str,
        phone: &str,
        description: &str,
        hours: &str,
        website: Option<&str>,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
            description: description.to_string(),
            hours: hours.to_string(),
            website: website.map(String::from),
        }
    }

    /// Returns the phone field reduced to its digits.
    ///
    /// Used when launching a call; display keeps the original formatting.
    pub fn phone_digits(&self) -> String {
        self.phone.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

static RESOURCES: Lazy<Vec<EmergencyResource>> = Lazy::new(|| {
    vec![
        EmergencyResource::new(
            "suicide-prevention",
            "National Suicide Prevention Lifeline",
            "988",
            "Free and confidential support for people in distress, prevention and crisis resources.",
            "24/7",
            Some("https://988lifeline.org/"),
        ),
        EmergencyResource::new(
            "crisis-text",
            "Crisis Text Line",
            "Text HOME to 741741",
            "Free crisis counseling via text message.",
            "24/7",
            Some("https://www.crisistextline.org/"),
        ),
        EmergencyResource::new(
            "domestic-violence",
            "National Domestic Violence Hotline",
            "1-800-799-7233",
            "Advocates are available to talk to anyone experiencing domestic violence.",
            "24/7",
            Some("https://www.thehotline.org/"),
        ),
    ]
});

/// Returns the full emergency resource list, in display order.
pub fn emergency_resources() -> &'static [EmergencyResource] {
    &RESOURCES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_has_three_resources() {
        assert_eq!(emergency_resources().len(), 3);
    }

    #[test]
    fn phone_digits_strips_formatting() {
        let dv = emergency_resources()
            .iter()
            .find(|r| r.id == "domestic-violence")
            .unwrap();
        assert_eq!(dv.phone_digits(), "18007997233");
    }

    #[test]
    fn phone_digits_extracts_from_text_instructions() {
        let text_line = emergency_resources()
            .iter()
            .find(|r| r.id == "crisis-text")
            .unwrap();
        assert_eq!(text_line.phone_digits(), "741741");
    }
}
