// Unit tests for the individual analyzers through the public API.
//
// Tests invariant properties of each analyzer in isolation: keyword ranking
// and caps, theme clustering determinism and degenerate inputs, sentiment
// thresholds, and sensory counting.

use ink_insights::error::AnalysisError;
use ink_insights::keywords::KeywordExtractor;
use ink_insights::sensory::{self, EMOTION_WORDS, VISUAL};
use ink_insights::sentiment::{LexiconScorer, Mood, SentimentResult, SentimentScore, SentimentScorer};
use ink_insights::text::Tokenizer;
use ink_insights::themes::kmeans::KMeans;
use ink_insights::themes::ThemeClusterer;

// ============================================================
// KeywordExtractor
// ============================================================

#[test]
fn keywords_descending_and_capped() {
    let text = "walrus walrus walrus otter otter heron badger badger ferret";
    let extractor = KeywordExtractor::with_top_n(4);
    let vocab = extractor.extract(&[text]).unwrap().vocabulary;

    assert_eq!(vocab.len(), 4);
    assert_eq!(vocab[0].term, "walrus");
    assert_eq!(vocab[0].freq, 3);
    for pair in vocab.windows(2) {
        assert!(pair[0].freq >= pair[1].freq);
    }
}

#[test]
fn keywords_equal_frequency_keep_discovery_order() {
    let extractor = KeywordExtractor::default();
    let vocab = extractor
        .extract(&["zebra walrus", "walrus zebra"])
        .unwrap()
        .vocabulary;

    // Not alphabetical: zebra was discovered before walrus
    assert_eq!(vocab[0].term, "zebra");
    assert_eq!(vocab[1].term, "walrus");
}

#[test]
fn keywords_are_case_folded() {
    let extractor = KeywordExtractor::default();
    let vocab = extractor.extract(&["Walrus WALRUS walrus"]).unwrap().vocabulary;
    assert_eq!(vocab[0].term, "walrus");
    assert_eq!(vocab[0].freq, 3);
}

#[test]
fn keywords_max_features_bounds_output() {
    let extractor = KeywordExtractor {
        top_n: 50,
        max_features: 2,
        tokenizer: Tokenizer::english(),
    };
    let vocab = extractor
        .extract(&["walrus otter heron badger"])
        .unwrap()
        .vocabulary;
    assert_eq!(vocab.len(), 2);
}

#[test]
fn keywords_punctuation_only_is_empty_vocabulary() {
    let extractor = KeywordExtractor::default();
    assert_eq!(
        extractor.extract(&["... !!! 123 ?"]).unwrap_err(),
        AnalysisError::EmptyVocabulary
    );
}

// ============================================================
// ThemeClusterer
// ============================================================

const TWO_TOPICS: &str = "\
walrus otter walrus ice

otter walrus ice floe

sourdough bread oven flour

bread sourdough flour starter";

#[test]
fn themes_separate_distinct_topics() {
    let themes = ThemeClusterer::default().cluster(TWO_TOPICS).unwrap();

    // 4 paragraphs -> k = 2
    assert_eq!(themes.clusters.len(), 2);
    let mut sizes: Vec<usize> = themes.clusters.iter().map(|c| c.size).collect();
    sizes.sort();
    assert_eq!(sizes, vec![2, 2]);

    let has_walrus = themes
        .clusters
        .iter()
        .position(|c| c.top_terms.contains(&"walrus".to_string()))
        .unwrap();
    let has_bread = themes
        .clusters
        .iter()
        .position(|c| c.top_terms.contains(&"bread".to_string()))
        .unwrap();
    assert_ne!(has_walrus, has_bread);
}

#[test]
fn themes_same_seed_same_output() {
    let a = ThemeClusterer::with_seed(7).cluster(TWO_TOPICS).unwrap();
    let b = ThemeClusterer::with_seed(7).cluster(TWO_TOPICS).unwrap();
    assert_eq!(a, b);
}

#[test]
fn themes_two_paragraphs_two_clusters() {
    let themes = ThemeClusterer::default()
        .cluster("walrus otter\n\nbread oven")
        .unwrap();
    assert_eq!(themes.clusters.len(), 2);
    assert_eq!(themes.clusters.iter().map(|c| c.size).sum::<usize>(), 2);
}

#[test]
fn themes_reduce_k_when_features_are_scarce() {
    // Three paragraphs but a single distinct feature
    let themes = ThemeClusterer::default()
        .cluster("walrus\n\nwalrus\n\nwalrus")
        .unwrap();
    assert_eq!(themes.clusters.len(), 1);
    assert_eq!(themes.clusters[0].size, 3);
    assert_eq!(themes.clusters[0].top_terms, vec!["walrus"]);
}

#[test]
fn themes_duplicate_paragraphs_still_cover_all() {
    let themes = ThemeClusterer::default()
        .cluster("walrus otter\n\nwalrus otter")
        .unwrap();
    let total: usize = themes.clusters.iter().map(|c| c.size).sum();
    assert_eq!(total, 2);
}

#[test]
fn kmeans_rejects_more_clusters_than_rows() {
    let err = KMeans::new(3, 42)
        .fit(&[vec![1.0], vec![0.0]])
        .unwrap_err();
    assert!(matches!(err, AnalysisError::DegenerateCluster { requested: 3, .. }));
}

// ============================================================
// Sentiment
// ============================================================

#[test]
fn mood_is_a_function_of_polarity() {
    let mut p = -1.0;
    while p <= 1.0 {
        let expected = if p > 0.1 {
            Mood::Positive
        } else if p < -0.1 {
            Mood::Negative
        } else {
            Mood::Neutral
        };
        assert_eq!(Mood::from_polarity(p), expected, "polarity {p}");
        p += 0.01;
    }
}

#[test]
fn lexicon_scores_stay_in_range() {
    let scorer = LexiconScorer::new();
    for text in [
        "",
        "terrible awful horrible miserable",
        "extremely very really excellent wonderful",
        "not not not bad",
        "It was a plain day with a table and a chair.",
    ] {
        let s = scorer.score(text).unwrap();
        assert!((-1.0..=1.0).contains(&s.polarity), "{text}: {}", s.polarity);
        assert!((0.0..=1.0).contains(&s.subjectivity), "{text}: {}", s.subjectivity);
    }
}

#[test]
fn lexicon_negative_text_is_negative() {
    let s = LexiconScorer::new()
        .score("The food was terrible and the service was awful.")
        .unwrap();
    assert_eq!(SentimentResult::from(s).overview, Mood::Negative);
}

#[test]
fn sentiment_result_from_zero_score_is_neutral() {
    let result = SentimentResult::from(SentimentScore::default());
    assert_eq!(result.overview, Mood::Neutral);
    assert_eq!(result.polarity, 0.0);
}

// ============================================================
// Sensory profile
// ============================================================

#[test]
fn sensory_counts_are_occurrence_sums() {
    let text = "See the light, see the dark! Love and fear, love.";
    let p = sensory::profile(text);

    let words: Vec<String> = text
        .split_whitespace()
        .map(|w| w.trim_matches(&['.', ',', '!', '?', ';', ':'][..]).to_lowercase())
        .collect();
    let count_in = |lexicon: &[&str]| -> u64 {
        words.iter().filter(|w| lexicon.contains(&w.as_str())).count() as u64
    };

    assert_eq!(p.sensory.visual, count_in(VISUAL));
    assert_eq!(p.sensory.visual, 4);
    assert_eq!(p.emotion_word_hits, count_in(EMOTION_WORDS));
    assert_eq!(p.emotion_word_hits, 3);
}

#[test]
fn sensory_each_modality() {
    let p = sensory::profile("whisper echo; smooth texture; fragrance; sour salty bitter");
    assert_eq!(p.sensory.auditory, 2);
    assert_eq!(p.sensory.tactile, 2);
    assert_eq!(p.sensory.olfactory, 1);
    assert_eq!(p.sensory.gustatory, 3);
    assert_eq!(p.sensory.visual, 0);
}
