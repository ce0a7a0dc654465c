#![allow(dead_code)]

//! Gender decoder: scores free text on a masculine/feminine lexical axis
//! and produces replacement suggestions for biased wording.
//!
//! A pure, single-pass transform: no state, no I/O, identical input yields
//! an identical result. Callers re-run it per keystroke if they like.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::decoder::lexicon::{FEMININE_PATTERNS, MASCULINE_PATTERNS, NEUTRAL_ALTERNATIVES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coding {
    Masculine,
    Feminine,
}

/// Five-band classification of the bipolar score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rating {
    StronglyMasculine,
    Masculine,
    Neutral,
    Feminine,
    StronglyFeminine,
}

impl Rating {
    pub const ALL: [Rating; 5] = [
        Rating::StronglyMasculine,
        Rating::Masculine,
        Rating::Neutral,
        Rating::Feminine,
        Rating::StronglyFeminine,
    ];

    /// Band thresholds on the score. Ties resolve toward the outer band:
    /// -60 is strongly-masculine, -20 is masculine, 20 is feminine, 60 is
    /// strongly-feminine.
    pub fn from_score(score: i32) -> Rating {
        if score <= -60 {
            Rating::StronglyMasculine
        } else if score <= -20 {
            Rating::Masculine
        } else if score >= 60 {
            Rating::StronglyFeminine
        } else if score >= 20 {
            Rating::Feminine
        } else {
            Rating::Neutral
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rating::StronglyMasculine => "Strongly Masculine-Coded",
            Rating::Masculine => "Masculine-Coded",
            Rating::Neutral => "Gender Neutral",
            Rating::Feminine => "Feminine-Coded",
            Rating::StronglyFeminine => "Strongly Feminine-Coded",
        }
    }

    /// Display color token consumed opaquely by the presentation layer.
    pub fn color(self) -> &'static str {
        match self {
            Rating::StronglyMasculine => "text-blue-600 dark:text-blue-400",
            Rating::Masculine => "text-blue-500 dark:text-blue-300",
            Rating::Neutral => "text-green-600 dark:text-green-400",
            Rating::Feminine => "text-purple-500 dark:text-purple-300",
            Rating::StronglyFeminine => "text-purple-600 dark:text-purple-400",
        }
    }
}

/// A lexicon stem found in the analyzed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderCodedWord {
    pub word: String,
    pub coding: Coding,
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// -100 (all matches masculine-coded) to +100 (all feminine-coded).
    pub score: i32,
    pub rating: Rating,
    pub masculine_words: Vec<GenderCodedWord>,
    pub feminine_words: Vec<GenderCodedWord>,
    pub total_masculine_count: usize,
    pub total_feminine_count: usize,
    pub suggestions: Vec<String>,
    pub summary: String,
}

/// Analyzes text for gendered language. Total over every input, including
/// the empty string. There is no failure mode.
pub fn analyze(text: &str) -> AnalysisResult {
    let lower = text.to_lowercase();

    let mut masculine_words = collect_matches(&lower, &MASCULINE_PATTERNS, Coding::Masculine);
    let mut feminine_words = collect_matches(&lower, &FEMININE_PATTERNS, Coding::Feminine);

    let total_masculine_count: usize = masculine_words.iter().map(|w| w.count).sum();
    let total_feminine_count: usize = feminine_words.iter().map(|w| w.count).sum();
    let total_coded = total_masculine_count + total_feminine_count;

    let score = if total_coded > 0 {
        let diff = total_feminine_count as f64 - total_masculine_count as f64;
        (diff / total_coded as f64 * 100.0).round() as i32
    } else {
        0
    };

    let rating = Rating::from_score(score);
    // Suggestions walk the matches in lexicon order; sorting happens after.
    let suggestions = build_suggestions(rating, &masculine_words);
    let summary = build_summary(rating, total_masculine_count, total_feminine_count);

    masculine_words.sort_by(|a, b| b.count.cmp(&a.count));
    feminine_words.sort_by(|a, b| b.count.cmp(&a.count));

    AnalysisResult {
        score,
        rating,
        masculine_words,
        feminine_words,
        total_masculine_count,
        total_feminine_count,
        suggestions,
        summary,
    }
}

fn collect_matches(
    lower_text: &str,
    patterns: &[(&'static str, Regex)],
    coding: Coding,
) -> Vec<GenderCodedWord> {
    let mut found = Vec::new();
    for (word, regex) in patterns {
        let count = regex.find_iter(lower_text).count();
        if count == 0 {
            continue;
        }
        let alternatives = match coding {
            Coding::Masculine => NEUTRAL_ALTERNATIVES
                .get(word)
                .map(|alts| alts.iter().map(|s| s.to_string()).collect()),
            Coding::Feminine => None,
        };
        found.push(GenderCodedWord {
            word: (*word).to_string(),
            coding,
            count,
            alternatives,
        });
    }
    found
}

fn build_suggestions(rating: Rating, masculine_words: &[GenderCodedWord]) -> Vec<String> {
    let mut suggestions = Vec::new();

    match rating {
        Rating::StronglyMasculine | Rating::Masculine => {
            suggestions.push(
                "This job description uses more masculine-coded language, which research shows \
                 can discourage women and non-binary individuals from applying."
                    .to_string(),
            );

            let with_alternatives = masculine_words
                .iter()
                .filter_map(|w| w.alternatives.as_ref().map(|alts| (&w.word, alts)));
            for (word, alts) in with_alternatives.take(3) {
                suggestions.push(format!(
                    "Consider replacing \"{word}\" with: {}",
                    alts.join(", ")
                ));
            }

            suggestions.push(
                "Try adding collaborative language like 'team', 'support', 'together', or \
                 'community'."
                    .to_string(),
            );
        }
        Rating::StronglyFeminine | Rating::Feminine => {
            suggestions.push(
                "This description uses more feminine-coded language. While inclusive, balance \
                 with some achievement-oriented terms may broaden appeal."
                    .to_string(),
            );
        }
        Rating::Neutral => {
            suggestions.push(
                "Great job! This description uses balanced, inclusive language that should \
                 appeal to candidates of all genders."
                    .to_string(),
            );
        }
    }

    suggestions
}

fn build_summary(rating: Rating, masculine: usize, feminine: usize) -> String {
    if masculine + feminine == 0 {
        return "No gendered language detected. This is a neutral job description.".to_string();
    }
    match rating {
        Rating::Neutral => format!(
            "Good balance! Found {masculine} masculine-coded and {feminine} feminine-coded terms."
        ),
        Rating::Masculine | Rating::StronglyMasculine => format!(
            "This description leans masculine with {masculine} masculine-coded vs {feminine} \
             feminine-coded terms."
        ),
        Rating::Feminine | Rating::StronglyFeminine => format!(
            "This description leans feminine with {feminine} feminine-coded vs {masculine} \
             masculine-coded terms."
        ),
    }
}
