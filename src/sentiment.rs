//! Keyword-based sentiment classification.
//!
//! A deliberately simple classifier: the agent's language model handles the
//! conversational reasoning, while this tool gives it a deterministic signal
//! for user feedback. Positive keywords are checked before negative ones, so
//! mixed feedback classifies as positive.

use serde::{Deserialize, Serialize};

/// Sentiment category for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

/// Classification result with a fixed per-category confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub sentiment: Sentiment,
    pub confidence: f64,
}

const POSITIVE_KEYWORDS: &[&str] = &["good", "sunny"];
const NEGATIVE_KEYWORDS: &[&str] = &["rain", "bad"];

/// Classify the sentiment of free text by keyword containment.
///
/// Case-insensitive substring search. Positive keywords take precedence over
/// negative ones when both are present.
pub fn analyze(text: &str) -> SentimentScore {
    let lowered = text.to_lowercase();

    if POSITIVE_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        return SentimentScore {
            sentiment: Sentiment::Positive,
            confidence: 0.8,
        };
    }

    if NEGATIVE_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        return SentimentScore {
            sentiment: Sentiment::Negative,
            confidence: 0.7,
        };
    }

    SentimentScore {
        sentiment: Sentiment::Neutral,
        confidence: 0.6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_keywords() {
        let score = analyze("It's good and sunny");
        assert_eq!(score.sentiment, Sentiment::Positive);
        assert_eq!(score.confidence, 0.8);

        let score = analyze("SUNNY days ahead");
        assert_eq!(score.sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_negative_keywords() {
        let score = analyze("I don't like rain");
        assert_eq!(score.sentiment, Sentiment::Negative);
        assert_eq!(score.confidence, 0.7);

        let score = analyze("That was a BAD forecast");
        assert_eq!(score.sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_neutral_fallback() {
        let score = analyze("The temperature is 18 degrees");
        assert_eq!(score.sentiment, Sentiment::Neutral);
        assert_eq!(score.confidence, 0.6);

        let score = analyze("");
        assert_eq!(score.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn mixed_keywords_prefer_positive() {
        // Positive check runs first, so feedback containing keywords from
        // both sets classifies positive.
        let score = analyze("good weather despite the bad rain");
        assert_eq!(score.sentiment, Sentiment::Positive);
        assert_eq!(score.confidence, 0.8);
    }

    #[test]
    fn test_negative_only_keywords() {
        let score = analyze("I hate the bad rain");
        assert_eq!(score.sentiment, Sentiment::Negative);
        assert_eq!(score.confidence, 0.7);
    }

    #[test]
    fn test_idempotent() {
        let first = analyze("sunny");
        let second = analyze("sunny");
        assert_eq!(first, second);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(analyze("rainy weather")).unwrap();
        assert_eq!(json["sentiment"], "negative");
        assert_eq!(json["confidence"], 0.7);
    }
}
