//! Keyword classifier that routes a request to an advisory topic.
//!
//! Both paths walk an ordered rule table and return the first topic whose
//! keyword set matches the lowercased signal. The order is the tie-break:
//! "water and pest problem" is water management because water is tested first.
//! An unmatched (or empty) signal always lands on the trailing default.

use crate::models::{ConversationTopic, Topic};

/// Ordered (topic, keywords) rules for the structured concern path
pub const CONCERN_RULES: &[(Topic, &[&str])] = &[
    (Topic::WaterManagement, &["water"]),
    (Topic::PestDisease, &["pest", "disease"]),
    (Topic::SoilHealth, &["soil"]),
    (Topic::YieldImprovement, &["yield"]),
    (Topic::WeatherPlanning, &["weather"]),
];

/// Ordered (topic, keywords) rules for free-text prompts
pub const PROMPT_RULES: &[(ConversationTopic, &[&str])] = &[
    (
        ConversationTopic::Livestock,
        &["livestock", "animal", "cattle", "carabao", "poultry", "chicken", "swine", "goat"],
    ),
    (
        ConversationTopic::Cultivation,
        &["plant", "crop", "cultivat", "seedling", "sowing"],
    ),
    (
        ConversationTopic::DiseaseDetection,
        &["disease", "detect", "diagnos", "symptom", "infect"],
    ),
    (
        ConversationTopic::SmartIrrigation,
        &["irrigat", "smart water", "water"],
    ),
    (
        ConversationTopic::WeatherYield,
        &["weather", "yield", "forecast", "predict"],
    ),
    (
        ConversationTopic::PrecisionAgriculture,
        &["precision", "iot", "sensor", "drone", "smart farm"],
    ),
    (ConversationTopic::Rice, &["rice", "palay"]),
    (ConversationTopic::Corn, &["corn", "mais"]),
];

/// Classify a concern (or any short signal) into a [`Topic`].
pub fn classify(signal: &str) -> Topic {
    first_match(CONCERN_RULES, signal).unwrap_or(Topic::General)
}

/// Classify a free-text prompt into a [`ConversationTopic`].
pub fn classify_prompt(prompt: &str) -> ConversationTopic {
    first_match(PROMPT_RULES, prompt).unwrap_or(ConversationTopic::Greeting)
}

fn first_match<T: Copy>(rules: &[(T, &[&str])], signal: &str) -> Option<T> {
    let lower = signal.to_lowercase();
    rules
        .iter()
        .find(|(_, keywords)| contains_any(&lower, keywords))
        .map(|(topic, _)| *topic)
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}
