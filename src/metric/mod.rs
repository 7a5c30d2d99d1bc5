pub mod containment;
pub mod similarity;
pub mod types;

pub use self::containment::containment_measure;
pub use self::similarity::cosine_similarity;
pub use self::types::{ScoreBreakdown, ScoredCandidate};

use crate::config::ScoringWeights;
use crate::error::RlResult;
use crate::services::{Embedder, GrammarChecker};
use crate::text::count_word_tokens;
use tracing::debug;

/// ParaMetric: paraphrase quality as a weighted mix of three signals.
///
/// - similarity: cosine similarity of the sentence embeddings
/// - grammar: 1 - (grammar issues / alphabetic tokens) of the paraphrase
/// - structure: 1 - trigram containment of the paraphrase in the original
pub struct ParaMetric<E, G> {
    embedder: E,
    grammar: G,
    weights: ScoringWeights,
}

impl<E: Embedder, G: GrammarChecker> ParaMetric<E, G> {
    pub fn new(embedder: E, grammar: G) -> Self {
        Self {
            embedder,
            grammar,
            weights: ScoringWeights::default(),
        }
    }

    /// Replaces the weights used by [`ParaMetric::aggregate_score`].
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Text without alphabetic tokens counts as perfectly grammatical.
    pub fn grammar_score(&self, text: &str) -> RlResult<f64> {
        let issues = self.grammar.check(text)?.len();
        let tokens = count_word_tokens(text);
        if tokens == 0 {
            return Ok(1.0);
        }
        Ok(1.0 - issues as f64 / tokens as f64)
    }

    pub fn similarity_score(&self, original: &str, paraphrase: &str) -> RlResult<f64> {
        let original_vec = self.embedder.embed(original)?;
        let paraphrase_vec = self.embedder.embed(paraphrase)?;
        cosine_similarity(&original_vec, &paraphrase_vec)
    }

    /// Higher means the paraphrase copied less of the original's phrasing.
    pub fn structure_score(&self, original: &str, paraphrase: &str) -> f64 {
        1.0 - containment_measure(original, paraphrase)
    }

    pub fn aggregate_score(&self, original: &str, paraphrase: &str) -> RlResult<ScoreBreakdown> {
        self.aggregate_score_with(original, paraphrase, &self.weights)
    }

    pub fn aggregate_score_with(
        &self,
        original: &str,
        paraphrase: &str,
        weights: &ScoringWeights,
    ) -> RlResult<ScoreBreakdown> {
        if paraphrase.is_empty() {
            return Ok(ScoreBreakdown::ZERO);
        }

        let similarity = self.similarity_score(original, paraphrase)?;
        let grammar = self.grammar_score(paraphrase)?;
        let structure = self.structure_score(original, paraphrase);
        let overall = weights.combine(similarity, grammar, structure);

        debug!(
            "ParaMetric '{}': sim={:.4} gram={:.4} struct={:.4} -> {:.4}",
            paraphrase, similarity, grammar, structure, overall
        );

        Ok(ScoreBreakdown {
            similarity,
            grammar,
            structure,
            overall,
        })
    }

    /// Scores each candidate against `original`, keeping generation order.
    pub fn score_candidates<I, S>(
        &self,
        original: &str,
        candidates: I,
    ) -> RlResult<Vec<ScoredCandidate>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.score_candidates_with(original, candidates, &self.weights)
    }

    pub fn score_candidates_with<I, S>(
        &self,
        original: &str,
        candidates: I,
        weights: &ScoringWeights,
    ) -> RlResult<Vec<ScoredCandidate>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        candidates
            .into_iter()
            .map(|c| {
                let text: String = c.into();
                let score = self.aggregate_score_with(original, &text, weights)?;
                Ok(ScoredCandidate { text, score })
            })
            .collect()
    }
}

/// Index of the highest `overall` score; the earliest wins a tie.
///
/// A NaN score is never selected: it fails the strict `>` comparison, so it
/// cannot displace a finite best, and a leading NaN is replaced by the first
/// finite score after it. Only an all-NaN list returns index 0.
pub fn select_best(scored: &[ScoredCandidate]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, c) in scored.iter().enumerate() {
        let better = match best {
            None => true,
            Some((_, top)) => {
                c.score.overall > top || (top.is_nan() && !c.score.overall.is_nan())
            }
        };
        if better {
            best = Some((i, c.score.overall));
        }
    }
    best.map(|(i, _)| i)
}
