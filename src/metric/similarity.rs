use crate::error::{ReflectError, RlResult};

/// Cosine similarity, i.e. one minus the cosine distance.
///
/// A zero-norm vector has no direction; it is treated as unrelated (0.0).
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> RlResult<f64> {
    if a.is_empty() || a.len() != b.len() {
        return Err(ReflectError::Embedding(format!(
            "cannot compare embeddings of dimension {} and {}",
            a.len(),
            b.len()
        )));
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (x as f64, y as f64);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }
    Ok(dot / (norm_a.sqrt() * norm_b.sqrt()))
}
