// Sensory and emotional language profiling.
//
// Counts exact, case-folded word matches against five sensory lexicons and
// one emotion lexicon. No stemming and no substring matching: "lights" and
// "delightful" do not count toward "light" or "delight".

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const VISUAL: &[&str] = &[
    "see", "look", "light", "dark", "bright", "color", "shadow", "eyes", "shine",
];
pub const AUDITORY: &[&str] = &["hear", "sound", "whisper", "ring", "echo", "noise", "voice"];
pub const TACTILE: &[&str] = &[
    "touch", "soft", "hard", "rough", "smooth", "warm", "cold", "texture",
];
pub const OLFACTORY: &[&str] = &["smell", "odor", "fragrance", "scent"];
pub const GUSTATORY: &[&str] = &["taste", "sweet", "bitter", "sour", "salty"];
pub const EMOTION_WORDS: &[&str] = &[
    "love", "fear", "joy", "sad", "anger", "hope", "grief", "delight", "proud",
];

const STRIP_CHARS: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Occurrence counts per sensory modality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensoryCounts {
    pub visual: u64,
    pub auditory: u64,
    pub tactile: u64,
    pub olfactory: u64,
    pub gustatory: u64,
}

impl SensoryCounts {
    pub fn total(&self) -> u64 {
        self.visual + self.auditory + self.tactile + self.olfactory + self.gustatory
    }

    /// (modality name, count) pairs in display order.
    pub fn entries(&self) -> [(&'static str, u64); 5] {
        [
            ("visual", self.visual),
            ("auditory", self.auditory),
            ("tactile", self.tactile),
            ("olfactory", self.olfactory),
            ("gustatory", self.gustatory),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensoryProfile {
    pub sensory: SensoryCounts,
    pub emotion_word_hits: u64,
}

/// Build the sensory profile of a normalized text.
pub fn profile(text: &str) -> SensoryProfile {
    let mut freq: HashMap<String, u64> = HashMap::new();
    for token in text.split_whitespace() {
        let word = token.trim_matches(STRIP_CHARS).to_lowercase();
        *freq.entry(word).or_insert(0) += 1;
    }

    let hits = |lexicon: &[&str]| -> u64 {
        lexicon
            .iter()
            .map(|w| freq.get(*w).copied().unwrap_or(0))
            .sum()
    };

    SensoryProfile {
        sensory: SensoryCounts {
            visual: hits(VISUAL),
            auditory: hits(AUDITORY),
            tactile: hits(TACTILE),
            olfactory: hits(OLFACTORY),
            gustatory: hits(GUSTATORY),
        },
        emotion_word_hits: hits(EMOTION_WORDS),
    }
}
