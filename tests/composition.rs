// Composition tests — the orchestrator end to end.
//
// These run raw text through normalization and all four analyzers and check
// the assembled report, including its JSON shape. No network or filesystem.

use ink_insights::pipeline::{AnalysisSettings, Analyzer, Document, Section};
use ink_insights::sentiment::Mood;
use ink_insights::text::{clean_text, split_paragraphs};

const MULTI_PARAGRAPH: &str = "\
The walrus rested on the ice floe while the walrus calf watched the otters.

Otters and walrus herds share the icy northern coast every winter season.

A walrus uses its tusks to haul itself onto the ice beside the otters.

Sourdough bread needs flour, water, salt and a lively starter culture.

Bakers fold the sourdough dough and proof the bread overnight before baking.

Crusty bread comes from a hot oven and a long slow sourdough fermentation.";

fn analyze(text: &str) -> ink_insights::AnalysisReport {
    Analyzer::default().analyze("doc.txt", text)
}

// ============================================================
// Reference scenarios
// ============================================================

#[test]
fn bright_light_scenario() {
    let report = analyze("I love the bright light. I love the bright light.");

    let sensory = report.sensory.ok().unwrap();
    assert_eq!(sensory.sensory.visual, 4);
    assert_eq!(sensory.emotion_word_hits, 2);

    let sentiment = report.sentiment.ok().unwrap();
    assert_eq!(sentiment.overview, Mood::Positive);
    assert_eq!(report.meta.word_count, 10);
}

#[test]
fn empty_input_scenario() {
    let report = analyze("");

    assert_eq!(report.meta.word_count, 0);
    assert_eq!(report.original_text, "");
    assert!(report.keywords.ok().unwrap().vocabulary.is_empty());

    let sentiment = report.sentiment.ok().unwrap();
    assert_eq!(sentiment.overview, Mood::Neutral);
    assert_eq!(sentiment.polarity, 0.0);
    assert_eq!(sentiment.subjectivity, 0.0);

    let themes = report.themes.ok().unwrap();
    assert_eq!(themes.clusters.len(), 1);
    assert_eq!(themes.clusters[0].label, "Theme 1");
    assert!(themes.clusters[0].top_terms.is_empty());
}

#[test]
fn stopwords_only_input_is_not_an_error() {
    let report = analyze("the and of, to the!");
    assert!(!report.keywords.is_failed());
    assert!(!report.themes.is_failed());
    assert!(report.keywords.ok().unwrap().vocabulary.is_empty());
}

// ============================================================
// Report invariants
// ============================================================

#[test]
fn word_count_matches_normalized_tokens() {
    for raw in [
        "",
        "one",
        "  spaced\t\tout   words  ",
        "line one\r\nline two\r\n\r\nline three",
        MULTI_PARAGRAPH,
    ] {
        let report = analyze(raw);
        let expected = clean_text(raw).split_whitespace().count();
        assert_eq!(report.meta.word_count, expected, "input {raw:?}");
        assert_eq!(report.original_text, clean_text(raw));
    }
}

#[test]
fn cluster_sizes_cover_every_paragraph() {
    let report = analyze(MULTI_PARAGRAPH);
    let themes = report.themes.ok().unwrap();
    let paragraphs = split_paragraphs(&report.original_text).len();

    assert_eq!(paragraphs, 6);
    // 6 paragraphs -> k = 6 / 2 = 3
    assert_eq!(themes.clusters.len(), 3);
    let total: usize = themes.clusters.iter().map(|c| c.size).sum();
    assert_eq!(total, paragraphs);

    for (i, cluster) in themes.clusters.iter().enumerate() {
        assert_eq!(cluster.label, format!("Theme {}", i + 1));
        assert!(cluster.top_terms.len() <= 10);
    }
}

#[test]
fn cluster_count_stays_within_bounds() {
    let many: Vec<String> = (0..20)
        .map(|i| format!("paragraph number walrus{} otter heron", "x".repeat(i % 5)))
        .collect();
    let report = analyze(&many.join("\n\n"));
    let themes = report.themes.ok().unwrap();
    assert!((1..=4).contains(&themes.clusters.len()));
    assert_eq!(themes.clusters.iter().map(|c| c.size).sum::<usize>(), 20);
}

#[test]
fn keywords_sorted_with_first_seen_ties() {
    let report = analyze("walrus zebra walrus zebra heron");
    let vocab = &report.keywords.ok().unwrap().vocabulary;

    assert_eq!(vocab[0].term, "walrus");
    assert_eq!(vocab[1].term, "zebra");
    for pair in vocab.windows(2) {
        assert!(pair[0].freq >= pair[1].freq);
    }
}

#[test]
fn top_n_setting_is_respected() {
    let settings = AnalysisSettings {
        top_n: 3,
        ..AnalysisSettings::default()
    };
    let report = Analyzer::new(settings).analyze("doc.txt", MULTI_PARAGRAPH);
    assert_eq!(report.keywords.ok().unwrap().vocabulary.len(), 3);
}

#[test]
fn repeated_runs_are_byte_identical() {
    let a = serde_json::to_string(&analyze(MULTI_PARAGRAPH)).unwrap();
    let b = serde_json::to_string(&analyze(MULTI_PARAGRAPH)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn analyze_document_uses_filename() {
    let doc = Document::new("notes.md", "walrus");
    let report = Analyzer::default().analyze_document(&doc);
    assert_eq!(report.meta.filename, "notes.md");
}

// ============================================================
// JSON shape
// ============================================================

#[test]
fn report_json_shape() {
    let report = analyze("I love the bright light.\n\nThe walrus can hear a whisper.");
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["meta"]["filename"], "doc.txt");
    assert_eq!(json["meta"]["word_count"], 11);
    assert!(json["original_text"].is_string());
    assert!(json["keywords"]["vocabulary"][0]["term"].is_string());
    assert!(json["keywords"]["vocabulary"][0]["freq"].is_u64());
    assert!(json["themes"]["clusters"][0]["top_terms"].is_array());
    assert_eq!(json["sentiment"]["overview"], "Positive");
    assert!(json["sentiment"]["polarity"].is_f64());
    assert_eq!(json["sensory"]["sensory"]["visual"], 2);
    assert_eq!(json["sensory"]["sensory"]["auditory"], 2);
    assert_eq!(json["sensory"]["emotion_word_hits"], 1);
}

#[test]
fn report_round_trips_through_json() {
    let report = analyze(MULTI_PARAGRAPH);
    let json = serde_json::to_string(&report).unwrap();
    let back: ink_insights::AnalysisReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back.meta, report.meta);
    assert_eq!(back.keywords, report.keywords);
    assert_eq!(back.themes, report.themes);
    assert_eq!(back.sensory, report.sensory);
    assert!(matches!(back.sentiment, Section::Ok(_)));
}
