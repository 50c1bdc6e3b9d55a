// Word-lexicon sentiment scoring.
//
// Each lexicon word carries a polarity and a subjectivity. The text score is
// the mean over every lexicon word found. Two modifiers act on the next
// lexicon word:
//
//   - intensifiers ("very", "extremely", ...) multiply both scores by their
//     intensity; several in a row compound
//   - negations ("not", "never", "n't" contractions, ...) multiply polarity
//     by -0.5, so "not good" reads mildly negative rather than as bad as "bad"
//
// Articles between a modifier and its word are skipped; any other word
// clears pending modifiers.

use std::collections::HashMap;

use super::traits::{SentimentScore, SentimentScorer};
use crate::error::Result;

const NEGATION_FACTOR: f64 = -0.5;

// (word, polarity, subjectivity)
#[rustfmt::skip]
const LEXICON: &[(&str, f64, f64)] = &[
    ("love", 0.5, 0.6), ("loved", 0.7, 0.8), ("lovely", 0.5, 0.75),
    ("like", 0.2, 0.4), ("liked", 0.3, 0.5), ("enjoy", 0.4, 0.5), ("enjoyed", 0.4, 0.5),
    ("good", 0.7, 0.6), ("great", 0.8, 0.75), ("excellent", 1.0, 1.0),
    ("wonderful", 1.0, 1.0), ("amazing", 0.6, 0.9), ("awesome", 1.0, 1.0),
    ("fantastic", 0.4, 0.9), ("beautiful", 0.85, 1.0), ("brilliant", 0.9, 1.0),
    ("bright", 0.7, 0.8), ("happy", 0.8, 1.0), ("glad", 0.5, 1.0),
    ("joy", 0.8, 0.9), ("joyful", 0.8, 0.9), ("delight", 0.7, 0.8), ("delightful", 0.8, 0.9),
    ("hope", 0.3, 0.5), ("hopeful", 0.5, 0.6), ("proud", 0.8, 1.0),
    ("best", 1.0, 0.3), ("better", 0.5, 0.5), ("perfect", 1.0, 1.0),
    ("nice", 0.6, 1.0), ("pleasant", 0.73, 0.97), ("kind", 0.6, 0.9),
    ("gentle", 0.3, 0.6), ("warm", 0.6, 0.6), ("sweet", 0.35, 0.65),
    ("calm", 0.3, 0.75), ("peaceful", 0.5, 0.6), ("fresh", 0.3, 0.5),
    ("fun", 0.3, 0.2), ("funny", 0.25, 0.75), ("exciting", 0.3, 0.8), ("excited", 0.4, 0.75),
    ("success", 0.3, 0.0), ("successful", 0.75, 0.95), ("win", 0.8, 0.4),
    ("strong", 0.43, 0.73), ("clever", 0.5, 0.5), ("smart", 0.21, 0.64),
    ("easy", 0.43, 0.83), ("free", 0.4, 0.8), ("safe", 0.5, 0.5),
    ("grateful", 0.6, 0.7), ("thankful", 0.6, 0.7), ("charming", 0.6, 0.8),
    ("magnificent", 1.0, 1.0), ("superb", 1.0, 1.0), ("glorious", 0.8, 0.9),
    ("tender", 0.2, 0.6), ("soft", 0.1, 0.4), ("shine", 0.3, 0.5), ("radiant", 0.6, 0.8),
    ("bad", -0.7, 0.67), ("worse", -0.4, 0.6), ("worst", -1.0, 1.0),
    ("terrible", -1.0, 1.0), ("awful", -1.0, 1.0), ("horrible", -1.0, 1.0),
    ("poor", -0.4, 0.6), ("sad", -0.5, 1.0), ("unhappy", -0.6, 0.9),
    ("hate", -0.8, 0.9), ("hated", -0.9, 0.7), ("angry", -0.5, 1.0), ("anger", -0.5, 0.7),
    ("fear", -0.4, 0.6), ("afraid", -0.6, 0.9), ("scared", -0.5, 0.8),
    ("grief", -0.6, 0.8), ("lonely", -0.5, 0.9), ("cruel", -1.0, 1.0),
    ("ugly", -0.7, 1.0), ("dull", -0.3, 0.6), ("boring", -1.0, 1.0),
    ("wrong", -0.5, 0.9), ("fail", -0.5, 0.3), ("failed", -0.5, 0.3), ("failure", -0.3, 0.3),
    ("pain", -0.5, 0.7), ("painful", -0.7, 0.9), ("hurt", -0.5, 0.6),
    ("cold", -0.6, 1.0), ("bitter", -0.1, 0.4), ("dark", -0.15, 0.4),
    ("harsh", -0.4, 0.7), ("rough", -0.1, 0.4), ("broken", -0.4, 0.4),
    ("dead", -0.2, 0.4), ("sick", -0.71, 0.86), ("tired", -0.4, 0.7),
    ("weak", -0.38, 0.63), ("difficult", -0.5, 1.0), ("hard", -0.29, 0.54),
    ("stupid", -0.8, 1.0), ("annoying", -0.8, 0.9), ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7), ("miserable", -1.0, 1.0), ("nasty", -1.0, 1.0),
    ("gloomy", -0.6, 0.8), ("dreadful", -1.0, 1.0), ("desperate", -0.6, 0.9),
    ("anxious", -0.25, 0.5), ("worried", -0.5, 0.8), ("lost", 0.0, 0.0),
];

// (word, intensity)
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("absolutely", 1.4),
    ("so", 1.3),
    ("too", 1.2),
    ("truly", 1.2),
    ("highly", 1.3),
    ("deeply", 1.3),
    ("quite", 1.1),
    ("somewhat", 0.8),
    ("slightly", 0.7),
    ("barely", 0.5),
];

const NEGATIONS: &[&str] = &["not", "no", "never", "neither", "nor", "without", "hardly"];

const SKIPPABLE: &[&str] = &["a", "an", "the"];

#[derive(Debug, Clone, Copy)]
struct Entry {
    polarity: f64,
    subjectivity: f64,
}

/// Default sentiment scorer backed by a built-in English word lexicon.
pub struct LexiconScorer {
    words: HashMap<&'static str, Entry>,
    intensifiers: HashMap<&'static str, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            words: LEXICON
                .iter()
                .map(|&(w, polarity, subjectivity)| {
                    (
                        w,
                        Entry {
                            polarity,
                            subjectivity,
                        },
                    )
                })
                .collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    fn score_words<'a>(&self, words: impl Iterator<Item = &'a str>) -> SentimentScore {
        let mut polarities = Vec::new();
        let mut subjectivities = Vec::new();
        let mut intensity = 1.0;
        let mut negated = false;

        for word in words {
            if let Some(entry) = self.words.get(word) {
                let mut polarity = entry.polarity * intensity;
                if negated {
                    polarity *= NEGATION_FACTOR;
                }
                polarities.push(polarity);
                subjectivities.push(entry.subjectivity * intensity);
                intensity = 1.0;
                negated = false;
            } else if let Some(&boost) = self.intensifiers.get(word) {
                intensity *= boost;
            } else if is_negation(word) {
                negated = true;
            } else if !SKIPPABLE.contains(&word) {
                intensity = 1.0;
                negated = false;
            }
        }

        if polarities.is_empty() {
            return SentimentScore::default();
        }

        let n = polarities.len() as f64;
        SentimentScore {
            polarity: (polarities.iter().sum::<f64>() / n).clamp(-1.0, 1.0),
            subjectivity: (subjectivities.iter().sum::<f64>() / n).clamp(0.0, 1.0),
        }
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<SentimentScore> {
        let lower = text.to_lowercase().replace('\u{2019}', "'");
        let words = lower
            .split(|c: char| !(c.is_alphabetic() || c == '\''))
            .map(|w| w.trim_matches('\''))
            .filter(|w| !w.is_empty());
        Ok(self.score_words(words))
    }
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.ends_with("n't")
}
