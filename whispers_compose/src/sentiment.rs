// Sentiment capability: three-class polarity plus a confidence score.
//
// `SentimentScorer` is the seam where a real classifier (a pretrained
// transformer behind a service, say) plugs in. The analyzer only relies on
// the shape of the answer: one of three labels and a score in [0, 1].
//
// `LexiconSentiment` is the built-in scorer used by the `compose` binary
// when no model service is wired up. It counts hits against two small word
// lists; it is crude, but it honors the same contract.

use serde::{Deserialize, Serialize};

use crate::error::CapabilityError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Negative,
    Neutral,
    Positive,
}

/// A scorer's verdict on one piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: SentimentLabel,
    /// Confidence in `label`, expected in [0, 1].
    pub score: f32,
}

impl Sentiment {
    pub fn new(label: SentimentLabel, score: f32) -> Self {
        Sentiment { label, score }
    }
}

/// Anything that can assign a sentiment to text.
pub trait SentimentScorer: Send + Sync {
    /// Short identifier used in log lines.
    fn name(&self) -> &str;

    fn score(&self, text: &str) -> Result<Sentiment, CapabilityError>;
}

const POSITIVE_WORDS: &[&str] = &[
    "happy", "joy", "joyful", "love", "loving", "excited", "great", "good", "bright",
    "upbeat", "celebrate", "optimistic", "confident", "bold", "fun", "magical", "amazing",
    "wonderful", "pumped", "unstoppable", "cheerful", "peaceful", "serene", "calm",
];

const NEGATIVE_WORDS: &[&str] = &[
    "sad", "heartbroken", "low", "heavy", "angry", "frustrated", "anxious", "overwhelmed",
    "tired", "lonely", "depressed", "gloomy", "afraid", "scared", "hate", "awful", "bad",
    "terrible", "miserable", "upset", "stressed", "melancholy",
];

/// Word-list sentiment scorer.
///
/// The label follows the sign of `positive_hits - negative_hits`; the score
/// is `0.5 + 0.5 * |difference| / (total_hits + 1)`, so a text with no hits
/// is neutral at 0.5 and confidence grows with a lopsided count.
#[derive(Debug, Clone, Default)]
pub struct LexiconSentiment;

impl SentimentScorer for LexiconSentiment {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn score(&self, text: &str) -> Result<Sentiment, CapabilityError> {
        let lower = text.to_lowercase();
        let mut positive = 0u32;
        let mut negative = 0u32;
        for word in lower.split(|c: char| !c.is_alphanumeric()) {
            if word.is_empty() {
                continue;
            }
            if POSITIVE_WORDS.contains(&word) {
                positive += 1;
            } else if NEGATIVE_WORDS.contains(&word) {
                negative += 1;
            }
        }

        let diff = positive.abs_diff(negative);
        let score = 0.5 + 0.5 * diff as f32 / (positive + negative + 1) as f32;
        let label = match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => SentimentLabel::Positive,
            std::cmp::Ordering::Less => SentimentLabel::Negative,
            std::cmp::Ordering::Equal => SentimentLabel::Neutral,
        };
        Ok(Sentiment::new(label, score))
    }
}
