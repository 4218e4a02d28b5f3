// Whispers Compose: mood-to-composition-parameter engine.
//
// Turns a free-text mood description ("I'm heartbroken and reflective")
// into composition parameters: tempo, key, scale, chord progression,
// instrumentation, dynamics, texture and genre. Two stages:
//
// - Mood inference (analyzer.rs): sentiment scoring plus cosine similarity
//   against six mood prototypes, then energy/tempo/key/genre synthesis.
//   Every error yields a fixed fallback result; panics are not caught.
// - Parameter enhancement (enhance.rs): random selection from static
//   per-mood theory tables, plus energy-derived dynamics and texture.
//
// Architecture:
// - mood.rs: Closed `Mood` enum and its per-mood tables (phrase, tempo,
//   instruments), `KeyQuality`, `GenreStyle`
// - sentiment.rs: `SentimentScorer` capability + built-in lexicon scorer
// - embedding.rs: `TextEncoder` capability, cosine similarity, prototype
//   classification, built-in hashed n-gram encoder
// - analyzer.rs: `MoodAnalyzer` (analyze / try_analyze), `InferenceResult`
// - theory.rs: `Scale`, `RhythmicPattern`, theory tables, key spelling
// - enhance.rs: `enhance`, `CompositionParameters`, `Dynamics`, `Texture`
// - config.rs: JSON-loaded `AnalyzerConfig`
// - error.rs: Error enums
//
// Sentiment and embedding are injected capabilities so a model service can
// replace the built-in heuristics. Randomness is injected as a `rand::Rng`;
// a seeded RNG makes enhancement reproducible.

pub mod analyzer;
pub mod config;
pub mod embedding;
pub mod enhance;
pub mod error;
pub mod mood;
pub mod sentiment;
pub mod theory;

pub use analyzer::{Analysis, InferenceResult, MoodAnalyzer};
pub use config::AnalyzerConfig;
pub use embedding::{HashedEncoder, MoodPrototypes, TextEncoder};
pub use enhance::{CompositionParameters, Dynamics, Texture, enhance};
pub use error::{AnalysisError, CapabilityError, ConfigError};
pub use mood::{GenreStyle, KeyQuality, Mood};
pub use sentiment::{LexiconSentiment, Sentiment, SentimentLabel, SentimentScorer};
