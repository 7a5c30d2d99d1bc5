#![allow(dead_code)]

use reflective_listening::error::{ReflectError, RlResult};
use reflective_listening::services::{
    Embedder, GenerationParams, GrammarChecker, GrammarIssue, Paraphraser,
};
use std::cell::RefCell;
use std::collections::HashMap;

/// Returns a fixed vector per known text, `fallback` for anything else.
pub struct StubEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    fallback: Vec<f32>,
}

impl StubEmbedder {
    pub fn uniform() -> Self {
        Self {
            vectors: HashMap::new(),
            fallback: vec![1.0, 0.0, 0.0],
        }
    }

    pub fn with(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.to_string(), vector);
        self
    }
}

impl Embedder for StubEmbedder {
    fn embed(&self, text: &str) -> RlResult<Vec<f32>> {
        Ok(self
            .vectors
            .get(text)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone()))
    }
}

/// Reports a configured number of issues per text, zero otherwise.
#[derive(Default)]
pub struct StubGrammar {
    issues: HashMap<String, usize>,
}

impl StubGrammar {
    pub fn with(mut self, text: &str, count: usize) -> Self {
        self.issues.insert(text.to_string(), count);
        self
    }
}

impl GrammarChecker for StubGrammar {
    fn check(&self, text: &str) -> RlResult<Vec<GrammarIssue>> {
        let count = self.issues.get(text).copied().unwrap_or(0);
        Ok(vec![GrammarIssue::default(); count])
    }
}

/// Returns the same candidates for every input and records the request.
pub struct StubParaphraser {
    candidates: Vec<String>,
    pub last_params: RefCell<Option<GenerationParams>>,
    pub calls: RefCell<usize>,
}

impl StubParaphraser {
    pub fn new(candidates: &[&str]) -> Self {
        Self {
            candidates: candidates.iter().map(|c| c.to_string()).collect(),
            last_params: RefCell::new(None),
            calls: RefCell::new(0),
        }
    }
}

impl Paraphraser for StubParaphraser {
    fn generate(&self, _text: &str, params: &GenerationParams) -> RlResult<Vec<String>> {
        *self.last_params.borrow_mut() = Some(*params);
        *self.calls.borrow_mut() += 1;
        Ok(self.candidates.clone())
    }
}

pub struct FailingEmbedder;

impl Embedder for FailingEmbedder {
    fn embed(&self, _text: &str) -> RlResult<Vec<f32>> {
        Err(ReflectError::Embedding("model unavailable".to_string()))
    }
}

pub struct FailingGrammar;

impl GrammarChecker for FailingGrammar {
    fn check(&self, _text: &str) -> RlResult<Vec<GrammarIssue>> {
        Err(ReflectError::Grammar("grammar service down".to_string()))
    }
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
