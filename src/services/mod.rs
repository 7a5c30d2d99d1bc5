//! Contracts for the pretrained-model collaborators.
//!
//! The scoring and selection logic only ever sees these traits, so it can be
//! driven by the HTTP adapters in [`http`] or by fixed stubs in tests.

pub mod device;
pub mod http;

pub use self::device::Device;
pub use self::http::{HttpEmbedder, HttpParaphraser, LanguageToolChecker};

use crate::consts::{
    GENERATION_EARLY_STOPPING, GENERATION_MAX_LENGTH, GENERATION_NUM_BEAMS,
    GENERATION_NUM_RETURN_SEQUENCES, GENERATION_TEMPERATURE,
};
use crate::error::RlResult;
use serde::{Deserialize, Serialize};

/// Beam search settings sent with every paraphrase request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub num_beams: usize,
    pub num_return_sequences: usize,
    pub max_length: usize,
    pub truncation: bool,
    pub temperature: f32,
    pub early_stopping: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            num_beams: GENERATION_NUM_BEAMS,
            num_return_sequences: GENERATION_NUM_RETURN_SEQUENCES,
            max_length: GENERATION_MAX_LENGTH,
            truncation: true,
            temperature: GENERATION_TEMPERATURE,
            early_stopping: GENERATION_EARLY_STOPPING,
        }
    }
}

/// One problem reported by the grammar checker. Scoring only counts them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarIssue {
    pub message: String,
    pub offset: usize,
    pub length: usize,
    pub rule_id: Option<String>,
}

/// Sequence-to-sequence paraphrase generator.
pub trait Paraphraser {
    /// Returns decoded candidates in generation order, special tokens stripped.
    fn generate(&self, text: &str, params: &GenerationParams) -> RlResult<Vec<String>>;
}

/// Sentence embedding model.
pub trait Embedder {
    fn embed(&self, text: &str) -> RlResult<Vec<f32>>;
}

/// Grammar checking service.
pub trait GrammarChecker {
    fn check(&self, text: &str) -> RlResult<Vec<GrammarIssue>>;
}
