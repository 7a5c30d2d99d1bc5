/// Seed for the lead-in phrase selector of every new listener.
pub const LEAD_IN_SEED: u64 = 10;

/// Default ParaMetric weights (similarity, grammar, structure).
pub const DEFAULT_SIMILARITY_WEIGHT: f64 = 0.8;
pub const DEFAULT_GRAMMAR_WEIGHT: f64 = 0.1;
pub const DEFAULT_STRUCTURE_WEIGHT: f64 = 0.1;

/// Beam search settings used for every paraphrase request.
pub const GENERATION_NUM_BEAMS: usize = 20;
pub const GENERATION_NUM_RETURN_SEQUENCES: usize = 20;
/// Applies to both the generated output and input truncation.
pub const GENERATION_MAX_LENGTH: usize = 60;
pub const GENERATION_TEMPERATURE: f32 = 1.5;
pub const GENERATION_EARLY_STOPPING: bool = true;

/// Locale passed to the grammar checker.
pub const DEFAULT_GRAMMAR_LANGUAGE: &str = "en-US";
