use crate::consts::{
    DEFAULT_GRAMMAR_LANGUAGE, DEFAULT_GRAMMAR_WEIGHT, DEFAULT_SIMILARITY_WEIGHT,
    DEFAULT_STRUCTURE_WEIGHT,
};
use crate::error::RlResult;
use crate::services::device::Device;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use typed_builder::TypedBuilder;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub weights: ScoringWeights,
    pub services: ServiceConfig,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> RlResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Weights of the three ParaMetric components.
///
/// Nothing checks that they are non-negative or sum to 1; out-of-range
/// weights simply produce out-of-range `overall` scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(default)]
pub struct ScoringWeights {
    #[builder(default = DEFAULT_SIMILARITY_WEIGHT)]
    pub similarity: f64,
    #[builder(default = DEFAULT_GRAMMAR_WEIGHT)]
    pub grammar: f64,
    #[builder(default = DEFAULT_STRUCTURE_WEIGHT)]
    pub structure: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            similarity: DEFAULT_SIMILARITY_WEIGHT,
            grammar: DEFAULT_GRAMMAR_WEIGHT,
            structure: DEFAULT_STRUCTURE_WEIGHT,
        }
    }
}

impl ScoringWeights {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> RlResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    #[inline]
    pub fn combine(&self, similarity: f64, grammar: f64, structure: f64) -> f64 {
        self.similarity * similarity + self.grammar * grammar + self.structure * structure
    }
}

/// Where the model collaborators live.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServiceConfig {
    pub paraphraser_url: String,
    pub embedding_url: String,
    pub grammar_url: String,
    pub grammar_language: String,
    pub device: Device,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            paraphraser_url: "http://127.0.0.1:8080/paraphrase".to_string(),
            embedding_url: "http://127.0.0.1:8081/embed".to_string(),
            grammar_url: "http://127.0.0.1:8010/v2/check".to_string(),
            grammar_language: DEFAULT_GRAMMAR_LANGUAGE.to_string(),
            device: Device::Auto,
        }
    }
}
