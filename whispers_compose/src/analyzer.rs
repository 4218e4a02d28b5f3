// Mood inference: free text in, `InferenceResult` out.
//
// The pipeline per request:
// 1. Score sentiment with the injected `SentimentScorer`.
// 2. Encode the text with the injected `TextEncoder` and pick the nearest
//    mood prototype by cosine similarity (`embedding::MoodPrototypes`).
// 3. Derive an energy level from sentiment plus high/low-energy keywords.
// 4. Synthesize tempo, key, instruments and genre from mood and energy.
//
// `try_analyze` surfaces every failure as an `AnalysisError`. `analyze` is
// the fault boundary callers normally use: every `AnalysisError` becomes
// `InferenceResult::fallback()`, with the error kept in `Analysis::Fallback`.
// A capability that panics is not caught; the panic unwinds to the caller.
//
// Nothing here is mutated after construction, so one `MoodAnalyzer` can
// serve concurrent requests as long as its capabilities can.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::embedding::{MoodPrototypes, TextEncoder};
use crate::error::AnalysisError;
use crate::mood::{GenreStyle, KeyQuality, Mood};
use crate::sentiment::{Sentiment, SentimentLabel, SentimentScorer};

/// Substrings that push the energy level up, 1.5 per word present.
pub const HIGH_ENERGY_WORDS: [&str; 7] = [
    "energetic", "excited", "pump", "workout", "dance", "party", "fast",
];

/// Substrings that pull the energy level down, 1.5 per word present.
pub const LOW_ENERGY_WORDS: [&str; 7] = [
    "calm", "peaceful", "sleep", "meditate", "quiet", "soft", "slow",
];

pub const MIN_ENERGY: u8 = 1;
pub const MAX_ENERGY: u8 = 10;
pub const MIN_TEMPO: u16 = 60;
pub const MAX_TEMPO: u16 = 180;

/// Output of mood inference for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceResult {
    pub mood_category: Mood,
    /// 1 (very low) to 10 (very high).
    pub energy_level: u8,
    /// Beats per minute, 60 to 180.
    pub tempo: u16,
    pub key: KeyQuality,
    pub instruments: Vec<String>,
    pub time_signature: String,
    pub genre_style: GenreStyle,
    /// Sentiment score rounded to two decimals.
    pub sentiment_confidence: f32,
}

impl InferenceResult {
    /// The result substituted whenever inference fails.
    pub fn fallback() -> Self {
        InferenceResult {
            mood_category: Mood::Calm,
            energy_level: 5,
            tempo: 120,
            key: KeyQuality::Major,
            instruments: vec![
                "piano".to_string(),
                "strings".to_string(),
                "soft_synth".to_string(),
            ],
            time_signature: "4/4".to_string(),
            genre_style: GenreStyle::Ambient,
            sentiment_confidence: 0.5,
        }
    }
}

/// Outcome of `MoodAnalyzer::analyze`: either a real inference or the
/// fallback result together with the fault that triggered it.
#[derive(Debug, Clone, PartialEq)]
pub enum Analysis {
    Inferred(InferenceResult),
    Fallback {
        result: InferenceResult,
        reason: AnalysisError,
    },
}

impl Analysis {
    pub fn result(&self) -> &InferenceResult {
        match self {
            Analysis::Inferred(result) | Analysis::Fallback { result, .. } => result,
        }
    }

    pub fn into_result(self) -> InferenceResult {
        match self {
            Analysis::Inferred(result) | Analysis::Fallback { result, .. } => result,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Analysis::Fallback { .. })
    }

    /// The fault behind a fallback, if any.
    pub fn fault(&self) -> Option<&AnalysisError> {
        match self {
            Analysis::Inferred(_) => None,
            Analysis::Fallback { reason, .. } => Some(reason),
        }
    }
}

/// Text-to-mood analyzer holding the injected capabilities and the
/// prototype vectors computed from them at construction.
pub struct MoodAnalyzer<S, E> {
    scorer: S,
    encoder: E,
    prototypes: Option<MoodPrototypes>,
}

impl<S: SentimentScorer, E: TextEncoder> MoodAnalyzer<S, E> {
    /// Build an analyzer, embedding the mood prototypes once.
    ///
    /// If the encoder cannot embed the prototypes, the analyzer is still
    /// returned; every request will then take the fallback path with
    /// `AnalysisError::PrototypesUnavailable`.
    pub fn new(scorer: S, encoder: E) -> Self {
        let prototypes = match MoodPrototypes::build(&encoder) {
            Ok(p) => {
                info!(
                    sentiment = scorer.name(),
                    encoder = encoder.name(),
                    dimension = p.dimension(),
                    "mood prototypes built"
                );
                Some(p)
            }
            Err(e) => {
                warn!(encoder = encoder.name(), "failed to build mood prototypes: {e}");
                None
            }
        };
        MoodAnalyzer {
            scorer,
            encoder,
            prototypes,
        }
    }

    pub fn prototypes_ready(&self) -> bool {
        self.prototypes.is_some()
    }

    /// Infer mood parameters, substituting the fallback result for any
    /// `AnalysisError`. Capability panics are not caught and propagate.
    pub fn analyze(&self, text: &str) -> Analysis {
        match self.try_analyze(text) {
            Ok(result) => Analysis::Inferred(result),
            Err(reason) => {
                warn!("mood analysis failed, using defaults: {reason}");
                Analysis::Fallback {
                    result: InferenceResult::fallback(),
                    reason,
                }
            }
        }
    }

    /// Infer mood parameters, reporting the first failure.
    pub fn try_analyze(&self, text: &str) -> Result<InferenceResult, AnalysisError> {
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        let prototypes = self
            .prototypes
            .as_ref()
            .ok_or(AnalysisError::PrototypesUnavailable)?;

        let sentiment = self.scorer.score(text).map_err(AnalysisError::Sentiment)?;
        if !(0.0..=1.0).contains(&sentiment.score) {
            return Err(AnalysisError::InvalidSentimentScore(sentiment.score));
        }

        let embedding = self.encoder.encode(text).map_err(AnalysisError::Embedding)?;
        let (mood, similarity) = prototypes.classify(&embedding)?;

        let energy = energy_level(text, &sentiment);
        debug!(
            label = ?sentiment.label,
            score = sentiment.score,
            %mood,
            similarity,
            energy,
            "analyzed mood"
        );

        Ok(synthesize(mood, energy, &sentiment))
    }
}

/// Energy level 1-10 from sentiment and keyword presence.
///
/// The sentiment base is `6 + 2*score` when positive, `4 - 2*score` when
/// negative and 5 when neutral. Each high-energy word present in the
/// lowercased text adds 1.5 and each low-energy word subtracts 1.5. Words
/// match as substrings and count once no matter how often they occur.
pub fn energy_level(text: &str, sentiment: &Sentiment) -> u8 {
    let lower = text.to_lowercase();
    let high = HIGH_ENERGY_WORDS.iter().filter(|w| lower.contains(*w)).count() as f32;
    let low = LOW_ENERGY_WORDS.iter().filter(|w| lower.contains(*w)).count() as f32;

    let base = match sentiment.label {
        SentimentLabel::Positive => 6.0 + sentiment.score * 2.0,
        SentimentLabel::Negative => 4.0 - sentiment.score * 2.0,
        SentimentLabel::Neutral => 5.0,
    };
    let adjusted = base + (high - low) * 1.5;

    adjusted
        .clamp(MIN_ENERGY as f32, MAX_ENERGY as f32)
        .round() as u8
}

/// Tempo for `mood` at `energy_level`: 5 BPM per energy step away from 5,
/// clamped to 60-180.
pub fn tempo_for(mood: Mood, energy_level: u8) -> u16 {
    let offset = (energy_level as i32 - 5) * 5;
    (mood.base_tempo() as i32 + offset).clamp(MIN_TEMPO as i32, MAX_TEMPO as i32) as u16
}

/// Major for positive sentiment, minor otherwise; mysterious is always minor.
pub fn key_for(mood: Mood, label: SentimentLabel) -> KeyQuality {
    if mood == Mood::Mysterious || label != SentimentLabel::Positive {
        KeyQuality::Minor
    } else {
        KeyQuality::Major
    }
}

fn synthesize(mood: Mood, energy_level: u8, sentiment: &Sentiment) -> InferenceResult {
    InferenceResult {
        mood_category: mood,
        energy_level,
        tempo: tempo_for(mood, energy_level),
        key: key_for(mood, sentiment.label),
        instruments: mood.instruments().iter().map(|s| s.to_string()).collect(),
        time_signature: "4/4".to_string(),
        genre_style: GenreStyle::for_mood(mood, energy_level),
        sentiment_confidence: (sentiment.score * 100.0).round() / 100.0,
    }
}
