mod common;

use common::{approx_eq, FailingEmbedder, FailingGrammar, StubEmbedder, StubGrammar};
use reflective_listening::config::ScoringWeights;
use reflective_listening::error::ReflectError;
use reflective_listening::metric::{select_best, ParaMetric, ScoreBreakdown, ScoredCandidate};

fn metric() -> ParaMetric<StubEmbedder, StubGrammar> {
    ParaMetric::new(StubEmbedder::uniform(), StubGrammar::default())
}

// --- GRAMMAR ---

#[test]
fn test_grammar_no_issues_is_perfect() {
    let m = metric();
    assert_eq!(m.grammar_score("The cat sat on the mat.").unwrap(), 1.0);
}

#[test]
fn test_grammar_without_words_is_perfect() {
    let grammar = StubGrammar::default().with("123 456", 2).with("", 1);
    let m = ParaMetric::new(StubEmbedder::uniform(), grammar);

    assert_eq!(m.grammar_score("123 456").unwrap(), 1.0);
    assert_eq!(m.grammar_score("").unwrap(), 1.0);
}

#[test]
fn test_grammar_ratio_uses_alphabetic_tokens() {
    let grammar = StubGrammar::default().with("he go home 42 .", 1);
    let m = ParaMetric::new(StubEmbedder::uniform(), grammar);

    // "42" and "." are not words: 1 issue over 3 tokens.
    let score = m.grammar_score("he go home 42 .").unwrap();
    assert!(approx_eq(score, 1.0 - 1.0 / 3.0), "got {}", score);
}

#[test]
fn test_grammar_can_go_negative() {
    let grammar = StubGrammar::default().with("bad", 3);
    let m = ParaMetric::new(StubEmbedder::uniform(), grammar);
    assert!(approx_eq(m.grammar_score("bad").unwrap(), -2.0));
}

// --- SIMILARITY & STRUCTURE ---

#[test]
fn test_similarity_is_cosine_of_embeddings() {
    let embedder = StubEmbedder::uniform()
        .with("a", vec![1.0, 0.0])
        .with("b", vec![0.0, 1.0])
        .with("c", vec![2.0, 0.0]);
    let m = ParaMetric::new(embedder, StubGrammar::default());

    assert!(approx_eq(m.similarity_score("a", "b").unwrap(), 0.0));
    assert!(approx_eq(m.similarity_score("a", "c").unwrap(), 1.0));
}

#[test]
fn test_structure_of_copy_is_zero() {
    let m = metric();
    let text = "I have been feeling tired lately";
    assert!(approx_eq(m.structure_score(text, text), 0.0));
}

// --- AGGREGATE ---

#[test]
fn test_empty_paraphrase_scores_zero() {
    let m = metric();
    let odd = ScoringWeights::builder()
        .similarity(-4.0)
        .grammar(7.5)
        .structure(100.0)
        .build();

    assert_eq!(m.aggregate_score("I am sad.", "").unwrap(), ScoreBreakdown::ZERO);
    assert_eq!(
        m.aggregate_score_with("I am sad.", "", &odd).unwrap(),
        ScoreBreakdown::default()
    );
}

#[test]
fn test_empty_paraphrase_skips_services() {
    let m = ParaMetric::new(FailingEmbedder, FailingGrammar);
    assert_eq!(m.aggregate_score("anything", "").unwrap(), ScoreBreakdown::ZERO);
}

#[test]
fn test_aggregate_default_weights() {
    let m = metric();
    let s = m
        .aggregate_score("I am happy today.", "You are glad today.")
        .unwrap();

    assert!(approx_eq(s.similarity, 1.0));
    assert!(approx_eq(s.grammar, 1.0));
    assert!(approx_eq(s.structure, 1.0));
    assert!(approx_eq(s.overall, 0.8 + 0.1 + 0.1));
}

#[test]
fn test_aggregate_per_call_weights() {
    let embedder = StubEmbedder::uniform().with("You are glad today.", vec![0.0, 1.0, 0.0]);
    let m = ParaMetric::new(embedder, StubGrammar::default());
    let only_structure = ScoringWeights::builder()
        .similarity(0.0)
        .grammar(0.0)
        .structure(1.0)
        .build();

    let s = m
        .aggregate_score_with("I am happy today.", "You are glad today.", &only_structure)
        .unwrap();
    assert!(approx_eq(s.similarity, 0.0));
    assert!(approx_eq(s.overall, s.structure));
}

#[test]
fn test_configured_weights_apply_to_aggregate() {
    let weights = ScoringWeights::builder().similarity(0.5).build();
    let m = metric().with_weights(weights);

    assert_eq!(m.weights().grammar, 0.1);
    let s = m.aggregate_score("a b c d", "w x y z").unwrap();
    assert!(approx_eq(s.overall, 0.5 + 0.1 + 0.1));
}

#[test]
fn test_weights_are_not_validated() {
    let negative = ScoringWeights::builder()
        .similarity(-1.0)
        .grammar(-1.0)
        .structure(-1.0)
        .build();
    let s = metric()
        .aggregate_score_with("a b c d", "w x y z", &negative)
        .unwrap();
    assert!(approx_eq(s.overall, -3.0));
}

#[test]
fn test_service_failures_propagate() {
    let m = ParaMetric::new(FailingEmbedder, StubGrammar::default());
    assert!(matches!(
        m.aggregate_score("I am sad.", "You are sad."),
        Err(ReflectError::Embedding(_))
    ));

    let m = ParaMetric::new(StubEmbedder::uniform(), FailingGrammar);
    assert!(matches!(
        m.aggregate_score("I am sad.", "You are sad."),
        Err(ReflectError::Grammar(_))
    ));
}

// --- CANDIDATES ---

#[test]
fn test_score_candidates_keeps_order() {
    let m = metric();
    let scored = m
        .score_candidates("I am sad.", vec!["one two three", "", "four"])
        .unwrap();

    let texts: Vec<&str> = scored.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["one two three", "", "four"]);
    assert_eq!(scored[1].score, ScoreBreakdown::ZERO);
}

fn candidate(text: &str, overall: f64) -> ScoredCandidate {
    ScoredCandidate {
        text: text.to_string(),
        score: ScoreBreakdown {
            overall,
            ..Default::default()
        },
    }
}

#[test]
fn test_select_best_is_stable() {
    assert_eq!(select_best(&[]), None);

    let scored = vec![
        candidate("a", 0.2),
        candidate("b", 0.9),
        candidate("c", 0.9),
        candidate("d", -1.0),
    ];
    assert_eq!(select_best(&scored), Some(1));

    let negative = vec![candidate("a", -0.5), candidate("b", -0.1)];
    assert_eq!(select_best(&negative), Some(1));
}

#[test]
fn test_select_best_never_picks_nan() {
    let trailing = vec![candidate("a", 0.4), candidate("b", f64::NAN)];
    assert_eq!(select_best(&trailing), Some(0));

    let leading = vec![
        candidate("a", f64::NAN),
        candidate("b", 0.1),
        candidate("c", 0.3),
    ];
    assert_eq!(select_best(&leading), Some(2));

    let all_nan = vec![candidate("a", f64::NAN), candidate("b", f64::NAN)];
    assert_eq!(select_best(&all_nan), Some(0));
}
