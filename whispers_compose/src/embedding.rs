// Text embedding capability and mood-prototype similarity search.
//
// `TextEncoder` turns text into a fixed-length vector. The same encoder
// embeds the six mood prototype phrases once (`MoodPrototypes::build`) and
// every incoming request afterwards; classification is a cosine-similarity
// argmax over the six prototypes.
//
// `HashedEncoder` is the built-in, dependency-free encoder: word unigrams
// and character trigrams hashed (FNV-1a) into a fixed number of buckets,
// then L2-normalized. It catches shared words and word stems ("relax" vs
// "relaxed") but has no notion of synonyms. A sentence-embedding model
// behind the trait does much better.

use tracing::debug;

use crate::error::{AnalysisError, CapabilityError, ConfigError};
use crate::mood::Mood;

/// Anything that maps text to a fixed-length vector.
pub trait TextEncoder: Send + Sync {
    /// Short identifier used in log lines.
    fn name(&self) -> &str;

    fn encode(&self, text: &str) -> Result<Vec<f32>, CapabilityError>;
}

/// Cosine similarity of two equal-length vectors.
///
/// Returns 0.0 when either vector has zero magnitude or the lengths differ.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

/// Prototype vectors for every mood, indexed by `Mood::index()`.
#[derive(Debug, Clone)]
pub struct MoodPrototypes {
    vectors: Vec<Vec<f32>>,
    dimension: usize,
}

impl MoodPrototypes {
    /// Embed each mood's prototype phrase with `encoder`.
    ///
    /// Fails if the encoder fails on any phrase or returns empty vectors or
    /// vectors of inconsistent length.
    pub fn build(encoder: &dyn TextEncoder) -> Result<Self, AnalysisError> {
        let mut vectors = Vec::with_capacity(Mood::ALL.len());
        for mood in Mood::ALL {
            let v = encoder
                .encode(mood.prototype_phrase())
                .map_err(AnalysisError::Embedding)?;
            vectors.push(v);
        }

        let dimension = vectors[0].len();
        if dimension == 0 {
            return Err(AnalysisError::EmptyEmbedding);
        }
        if let Some(bad) = vectors.iter().find(|v| v.len() != dimension) {
            return Err(AnalysisError::DimensionMismatch {
                expected: dimension,
                actual: bad.len(),
            });
        }

        Ok(MoodPrototypes { vectors, dimension })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Similarity of `embedding` to each prototype, in `Mood::ALL` order.
    pub fn similarities(&self, embedding: &[f32]) -> Result<[f32; 6], AnalysisError> {
        if embedding.len() != self.dimension {
            return Err(AnalysisError::DimensionMismatch {
                expected: self.dimension,
                actual: embedding.len(),
            });
        }
        let mut sims = [0.0f32; 6];
        for (slot, proto) in sims.iter_mut().zip(&self.vectors) {
            *slot = cosine_similarity(embedding, proto);
        }
        Ok(sims)
    }

    /// The most similar mood and its similarity.
    ///
    /// Ties resolve to the mood declared first in `Mood::ALL`; a NaN
    /// similarity never wins. If every similarity is NaN the first mood is
    /// returned.
    pub fn classify(&self, embedding: &[f32]) -> Result<(Mood, f32), AnalysisError> {
        let sims = self.similarities(embedding)?;
        debug!(?sims, "prototype similarities");

        let mut best = (Mood::ALL[0], f32::NEG_INFINITY);
        for (mood, sim) in Mood::ALL.into_iter().zip(sims) {
            if sim > best.1 {
                best = (mood, sim);
            }
        }
        Ok(best)
    }
}

/// Feature-hashing text encoder.
#[derive(Debug, Clone)]
pub struct HashedEncoder {
    dimension: usize,
}

impl HashedEncoder {
    /// Fails on a zero `dimension`, which leaves nothing to hash into.
    pub fn new(dimension: usize) -> Result<Self, ConfigError> {
        if dimension == 0 {
            return Err(ConfigError::Invalid(
                "embedding dimension must be non-zero".into(),
            ));
        }
        Ok(HashedEncoder { dimension })
    }

    fn bucket(&self, feature: &str) -> usize {
        (fnv1a(feature.as_bytes()) % self.dimension as u64) as usize
    }
}

impl TextEncoder for HashedEncoder {
    fn name(&self) -> &str {
        "hashed-ngrams"
    }

    fn encode(&self, text: &str) -> Result<Vec<f32>, CapabilityError> {
        let mut v = vec![0.0f32; self.dimension];
        let lower = text.to_lowercase();

        for word in lower.split(|c: char| !c.is_alphanumeric()) {
            if word.is_empty() {
                continue;
            }
            v[self.bucket(word)] += 1.0;

            // Trigrams over the padded word so short words still contribute.
            let padded: Vec<char> = format!("<{word}>").chars().collect();
            for gram in padded.windows(3) {
                let gram: String = gram.iter().collect();
                v[self.bucket(&gram)] += 0.5;
            }
        }

        normalize(&mut v);
        Ok(v)
    }
}

/// Scale `v` to unit length in place. Zero vectors are left untouched.
fn normalize(v: &mut [f32]) {
    let magnitude: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if magnitude > 0.0 {
        for x in v.iter_mut() {
            *x /= magnitude;
        }
    }
}

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for &b in bytes {
        hash ^= b as u64;
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}
