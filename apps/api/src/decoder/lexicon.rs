//! Lexicon tables for the gender decoder.
//!
//! Word lists follow Gaucher, Friesen & Kay (2011), "Evidence That Gendered
//! Wording in Job Advertisements Exists and Sustains Gender Inequality".
//! Entries are stems: `nurtur` covers nurture, nurturing, nurtures.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

pub const MASCULINE_CODED_WORDS: &[&str] = &[
    "active",
    "adventurous",
    "aggressive",
    "ambitious",
    "analytical",
    "assertive",
    "athletic",
    "autonomous",
    "battle",
    "boast",
    "challenge",
    "champion",
    "competitive",
    "confident",
    "courageous",
    "decide",
    "decisive",
    "defend",
    "determine",
    "dominant",
    "dominate",
    "driven",
    "fearless",
    "fight",
    "force",
    "greedy",
    "head-strong",
    "headstrong",
    "hierarchy",
    "hostile",
    "impulsive",
    "independent",
    "individual",
    "intellect",
    "lead",
    "leader",
    "logic",
    "ninja",
    "objective",
    "opinion",
    "outspoken",
    "persist",
    "principle",
    "reckless",
    "rockstar",
    "self-confident",
    "selfconfident",
    "self-reliant",
    "selfreliant",
    "self-sufficient",
    "selfsufficient",
    "stubborn",
    "superior",
    "tackle",
    "thriving",
    "unreasonable",
    "warrior",
];

pub const FEMININE_CODED_WORDS: &[&str] = &[
    "affectionate",
    "agree",
    "caring",
    "child",
    "cheer",
    "collaborate",
    "collaborative",
    "commit",
    "communal",
    "compassion",
    "compassionate",
    "connect",
    "considerate",
    "cooperate",
    "cooperative",
    "depend",
    "emotional",
    "empath",
    "empathy",
    "feel",
    "flatterer",
    "gentle",
    "honest",
    "inclusive",
    "interdependent",
    "interpersonal",
    "kind",
    "kinship",
    "loyal",
    "modesty",
    "nag",
    "nurtur",
    "pleasant",
    "polite",
    "quiet",
    "respond",
    "sensitive",
    "share",
    "sharing",
    "submissive",
    "support",
    "supportive",
    "sympathy",
    "tender",
    "together",
    "trust",
    "understand",
    "warm",
    "whin",
    "yield",
];

/// Neutral replacements for common biased terms. Only a handful of
/// masculine-coded stems have entries; gendered job titles (chairman,
/// salesman, ...) are kept as data for callers that surface them directly.
pub static NEUTRAL_ALTERNATIVES: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        let entries: &[(&str, &[&str])] = &[
            ("aggressive", &["proactive", "driven", "results-oriented"]),
            ("rockstar", &["high-performer", "skilled professional", "expert"]),
            ("ninja", &["specialist", "expert", "skilled"]),
            ("dominant", &["influential", "impactful", "effective"]),
            ("competitive", &["motivated", "goal-oriented", "ambitious"]),
            ("assertive", &["confident", "self-assured", "decisive"]),
            ("chairman", &["chairperson", "chair", "head"]),
            ("manpower", &["workforce", "staff", "team"]),
            ("mankind", &["humanity", "people", "humankind"]),
            ("guys", &["team", "folks", "everyone"]),
            (
                "salesman",
                &["salesperson", "sales representative", "sales professional"],
            ),
            ("spokesman", &["spokesperson", "representative"]),
            ("fireman", &["firefighter"]),
            ("policeman", &["police officer"]),
            ("businessman", &["business professional", "entrepreneur"]),
            ("manmade", &["artificial", "synthetic", "manufactured"]),
        ];
        entries.iter().copied().collect()
    });

/// One compiled matcher per lexicon stem: a left word boundary, the stem,
/// then any run of trailing word characters. Deliberately conflating:
/// `support` also consumes `supportive`, so overlapping stems each count.
fn compile(words: &'static [&'static str]) -> Vec<(&'static str, Regex)> {
    words
        .iter()
        .map(|&word| {
            let pattern = format!(r"\b{}\w*\b", regex::escape(word));
            // Static lexicon data; a failure here is a programming error.
            let regex = Regex::new(&pattern).expect("lexicon stem must compile");
            (word, regex)
        })
        .collect()
}

pub static MASCULINE_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> =
    LazyLock::new(|| compile(MASCULINE_CODED_WORDS));

pub static FEMININE_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> =
    LazyLock::new(|| compile(FEMININE_CODED_WORDS));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicon_sizes() {
        assert_eq!(MASCULINE_CODED_WORDS.len(), 57);
        assert_eq!(FEMININE_CODED_WORDS.len(), 50);
    }

    #[test]
    fn test_lexicons_are_disjoint() {
        for word in MASCULINE_CODED_WORDS {
            assert!(
                !FEMININE_CODED_WORDS.contains(word),
                "{word} appears in both lists"
            );
        }
    }

    #[test]
    fn test_one_pattern_per_stem() {
        assert_eq!(MASCULINE_PATTERNS.len(), MASCULINE_CODED_WORDS.len());
        assert_eq!(FEMININE_PATTERNS.len(), FEMININE_CODED_WORDS.len());
    }

    #[test]
    fn test_stem_pattern_matches_word_family() {
        let (_, regex) = FEMININE_PATTERNS
            .iter()
            .find(|(w, _)| *w == "nurtur")
            .unwrap();
        assert!(regex.is_match("nurture"));
        assert!(regex.is_match("nurturing"));
        assert!(regex.is_match("nurtures"));
        assert!(!regex.is_match("unnurtured")); // left boundary is anchored
    }

    #[test]
    fn test_hyphenated_stems_compile_and_match() {
        let (_, regex) = MASCULINE_PATTERNS
            .iter()
            .find(|(w, _)| *w == "self-confident")
            .unwrap();
        assert!(regex.is_match("a self-confident person"));
    }

    #[test]
    fn test_reachable_alternatives_are_masculine_stems() {
        // The stems that can surface in suggestions all have map entries.
        for stem in ["aggressive", "rockstar", "ninja", "dominant", "competitive", "assertive"] {
            assert!(MASCULINE_CODED_WORDS.contains(&stem));
            assert!(NEUTRAL_ALTERNATIVES.contains_key(stem));
        }
        // No feminine stem has an alternatives entry.
        for word in FEMININE_CODED_WORDS {
            assert!(!NEUTRAL_ALTERNATIVES.contains_key(word));
        }
    }
}
