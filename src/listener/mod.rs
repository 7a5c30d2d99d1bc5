pub mod lead_in;
pub mod pov;

pub use self::lead_in::{prepend_lead_in, LeadIn, PhraseSelector};
pub use self::pov::flip_point_of_view;

use crate::config::ScoringWeights;
use crate::consts::LEAD_IN_SEED;
use crate::error::{ReflectError, RlResult};
use crate::metric::{select_best, ParaMetric, ScoredCandidate};
use crate::services::{Embedder, GenerationParams, GrammarChecker, Paraphraser};
use tracing::{debug, info};

/// Turns a statement into a reflective-listening response.
///
/// Example:
/// "My teeth can be sensitive at times due to TMJ issues." ->
/// "I understand, so your teeth are sensitive due to temporomandibular disorders."
///
/// The lead-in selector is owned state: every listener starts from the same
/// seed, and each response advances it.
pub struct ReflectiveListener<P, E, G, S = fastrand::Rng> {
    paraphraser: P,
    metric: ParaMetric<E, G>,
    generation: GenerationParams,
    selector: S,
}

impl<P, E, G> ReflectiveListener<P, E, G>
where
    P: Paraphraser,
    E: Embedder,
    G: GrammarChecker,
{
    pub fn new(paraphraser: P, metric: ParaMetric<E, G>) -> Self {
        info!("Reflective listener ready (lead-in seed {})", LEAD_IN_SEED);
        Self {
            paraphraser,
            metric,
            generation: GenerationParams::default(),
            selector: fastrand::Rng::with_seed(LEAD_IN_SEED),
        }
    }
}

impl<P, E, G, S> ReflectiveListener<P, E, G, S>
where
    P: Paraphraser,
    E: Embedder,
    G: GrammarChecker,
    S: PhraseSelector,
{
    /// Swaps the lead-in source, e.g. for a fixed sequence in tests.
    pub fn with_selector<T: PhraseSelector>(self, selector: T) -> ReflectiveListener<P, E, G, T> {
        ReflectiveListener {
            paraphraser: self.paraphraser,
            metric: self.metric,
            generation: self.generation,
            selector,
        }
    }

    pub fn paraphraser(&self) -> &P {
        &self.paraphraser
    }

    pub fn metric(&self) -> &ParaMetric<E, G> {
        &self.metric
    }

    pub fn generation_params(&self) -> &GenerationParams {
        &self.generation
    }

    /// All candidates for `input_text` with their scores, in generation order.
    ///
    /// Always scored with the default weights; weights set on the metric only
    /// affect its own `aggregate_score`.
    pub fn rank_candidates(&self, input_text: &str) -> RlResult<Vec<ScoredCandidate>> {
        let candidates = self.paraphraser.generate(input_text, &self.generation)?;
        debug!("Scoring {} candidates", candidates.len());
        self.metric
            .score_candidates_with(input_text, candidates, &ScoringWeights::default())
    }

    /// The candidate with the highest overall ParaMetric score.
    pub fn get_paraphrase(&self, input_text: &str) -> RlResult<String> {
        let mut ranked = self.rank_candidates(input_text)?;
        let best = select_best(&ranked).ok_or_else(|| {
            ReflectError::Generation(format!("no paraphrase candidates for '{}'", input_text))
        })?;
        let chosen = ranked.swap_remove(best);
        debug!(
            "Selected candidate #{} '{}' (overall {:.4})",
            best, chosen.text, chosen.score.overall
        );
        Ok(chosen.text)
    }

    /// Prefixes `text` with the next lead-in phrase.
    pub fn prepend_lead_in(&mut self, text: &str) -> String {
        prepend_lead_in(&mut self.selector, text)
    }

    pub fn get_response(&mut self, input_text: &str) -> RlResult<String> {
        let paraphrase = self.get_paraphrase(input_text)?;
        let flipped = flip_point_of_view(&paraphrase);
        Ok(self.prepend_lead_in(&flipped))
    }
}
