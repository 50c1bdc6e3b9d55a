// Colored terminal output for analysis reports.
//
// main.rs delegates all report display here: colors, tables, bars.

use colored::Colorize;

use crate::keywords::Keywords;
use crate::pipeline::{AnalysisReport, Section};
use crate::sensory::SensoryProfile;
use crate::sentiment::{Mood, SentimentResult};
use crate::themes::Themes;

const KEYWORDS_SHOWN: usize = 15;
const BAR_WIDTH: usize = 20;

/// Display a full analysis report in the terminal.
pub fn display_report(report: &AnalysisReport) {
    println!(
        "\n{}",
        format!(
            "=== {} ({} words) ===",
            report.meta.filename, report.meta.word_count
        )
        .bold()
    );

    if !report.original_text.is_empty() {
        let preview = super::truncate_chars(&report.original_text.replace('\n', " "), 120);
        println!("  {}", preview.dimmed());
    }

    section("Keywords", &report.keywords, display_keywords);
    section("Themes", &report.themes, display_themes);
    section("Sentiment", &report.sentiment, display_sentiment);
    section("Sensory language", &report.sensory, display_sensory);
    println!();
}

fn section<T>(title: &str, result: &Section<T>, show: fn(&T)) {
    println!("\n{}", format!("--- {title} ---").bold());
    match result {
        Section::Ok(value) => show(value),
        Section::Failed { error } => {
            println!("  {} {}", "Failed:".red().bold(), error.red());
        }
    }
}

fn display_keywords(keywords: &Keywords) {
    if keywords.vocabulary.is_empty() {
        println!("  {}", "No keywords found.".dimmed());
        return;
    }

    println!("  {:>4}  {:<32} {:>5}", "#".dimmed(), "Term".dimmed(), "Freq".dimmed());
    for (i, entry) in keywords.vocabulary.iter().take(KEYWORDS_SHOWN).enumerate() {
        println!("  {:>4}. {:<32} {:>5}", i + 1, entry.term, entry.freq);
    }

    let hidden = keywords.vocabulary.len().saturating_sub(KEYWORDS_SHOWN);
    if hidden > 0 {
        println!("  {}", format!("... and {hidden} more").dimmed());
    }
}

fn display_themes(themes: &Themes) {
    for cluster in &themes.clusters {
        let noun = if cluster.size == 1 { "paragraph" } else { "paragraphs" };
        println!(
            "  {:<10} {}",
            cluster.label.bold(),
            format!("{} {noun}", cluster.size).dimmed()
        );
        if !cluster.top_terms.is_empty() {
            println!("      Terms: {}", cluster.top_terms.join(", "));
        }
    }
}

fn display_sentiment(sentiment: &SentimentResult) {
    println!(
        "  Overview: {}  (polarity {:+.3}, subjectivity {:.3})",
        colorize_mood(sentiment.overview),
        sentiment.polarity,
        sentiment.subjectivity
    );
}

fn display_sensory(profile: &SensoryProfile) {
    let max = profile
        .sensory
        .entries()
        .iter()
        .map(|(_, n)| *n)
        .max()
        .unwrap_or(0);

    for (name, count) in profile.sensory.entries() {
        let filled = if max > 0 {
            ((count as f64 / max as f64) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(BAR_WIDTH - filled));
        println!("  {:<10} {} {}", name, bar.bright_blue(), count);
    }
    println!("  Sensory words: {}", profile.sensory.total());
    println!("  Emotion words: {}", profile.emotion_word_hits);
}

/// Colorize a mood label.
fn colorize_mood(mood: Mood) -> colored::ColoredString {
    match mood {
        Mood::Positive => mood.as_str().green().bold(),
        Mood::Negative => mood.as_str().red().bold(),
        Mood::Neutral => mood.as_str().yellow(),
    }
}
