use serde::{Deserialize, Serialize};

/// Per-component scores of one paraphrase plus their weighted sum.
///
/// Values are not clamped: cosine similarity can dip below 0 and the
/// grammar ratio goes negative when issues outnumber words.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub similarity: f64,
    pub grammar: f64,
    pub structure: f64,
    pub overall: f64,
}

impl ScoreBreakdown {
    /// Score given to an empty paraphrase.
    pub const ZERO: ScoreBreakdown = ScoreBreakdown {
        similarity: 0.0,
        grammar: 0.0,
        structure: 0.0,
        overall: 0.0,
    };
}

/// A generated paraphrase together with its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub text: String,
    pub score: ScoreBreakdown,
}
