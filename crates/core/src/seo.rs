//! Heuristic SEO scoring of a title, description and hashtag set.
//!
//! Scoring is deterministic and does not call the LLM provider.

use std::collections::HashSet;

use crate::content::{SeoReport, SeoScores};
use crate::language::Language;

const MAX_SCORE: u32 = 100;

/// Base clickbait score with no trigger words.
const CLICKBAIT_BASE: u32 = 40;
/// Added per trigger word found in the title.
const CLICKBAIT_PER_WORD: u32 = 20;

/// Base keyword relevance score with no shared words.
const RELEVANCE_BASE: u32 = 30;
/// Added per word shared between title and hashtags.
const RELEVANCE_PER_WORD: u32 = 15;

/// Title length range that scores full marks.
const IDEAL_TITLE_LEN: std::ops::RangeInclusive<usize> = 50..=70;
/// Title length range that scores [`ACCEPTABLE_LENGTH_SCORE`].
const ACCEPTABLE_TITLE_LEN: std::ops::RangeInclusive<usize> = 40..=80;
const ACCEPTABLE_LENGTH_SCORE: u32 = 80;
/// Target length used for the penalty outside the acceptable range.
const TARGET_TITLE_LEN: i64 = 60;
const LENGTH_PENALTY_PER_CHAR: i64 = 3;

/// Recommendation thresholds: a score below these triggers a hint.
pub const CLICKBAIT_HINT_BELOW: u8 = 60;
pub const LENGTH_HINT_BELOW: u8 = 80;
pub const RELEVANCE_HINT_BELOW: u8 = 70;

const CLICKBAIT_WORDS_EN: &[&str] = &[
    "amazing",
    "incredible",
    "shocking",
    "ultimate",
    "secret",
    "revealed",
    "must-see",
    "unbelievable",
    "epic",
    "insane",
];

// Each word is listed once, so a title matching "inanılmaz" counts one hit.
const CLICKBAIT_WORDS_TR: &[&str] = &[
    "inanılmaz",
    "muhteşem",
    "şok",
    "son",
    "gizli",
    "açığa çıktı",
    "mutlaka izle",
    "epik",
    "çılgın",
];

fn clickbait_words(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => CLICKBAIT_WORDS_EN,
        Language::Tr => CLICKBAIT_WORDS_TR,
    }
}

/// Score how attention-grabbing a title is.
pub fn clickbait_score(title: &str, language: Language) -> u8 {
    let lowered = title.to_lowercase();
    let hits = clickbait_words(language)
        .iter()
        .filter(|word| lowered.contains(*word))
        .count() as u32;
    (CLICKBAIT_BASE + CLICKBAIT_PER_WORD * hits).min(MAX_SCORE) as u8
}

/// Score a title by its length in characters.
pub fn length_score(title: &str) -> u8 {
    let len = title.chars().count();
    if IDEAL_TITLE_LEN.contains(&len) {
        MAX_SCORE as u8
    } else if ACCEPTABLE_TITLE_LEN.contains(&len) {
        ACCEPTABLE_LENGTH_SCORE as u8
    } else {
        let distance = (TARGET_TITLE_LEN - len as i64).abs();
        (MAX_SCORE as i64 - distance * LENGTH_PENALTY_PER_CHAR).max(0) as u8
    }
}

/// Score how many title words also appear in the hashtags.
pub fn keyword_relevance_score(title: &str, hashtags: &[String]) -> u8 {
    let title_lower = title.to_lowercase();
    let title_words: HashSet<&str> = title_lower.split_whitespace().collect();

    let tags_lower = hashtags.join(" ").to_lowercase().replace('#', "");
    let tag_words: HashSet<&str> = tags_lower.split_whitespace().collect();

    let shared = title_words.intersection(&tag_words).count() as u32;
    (RELEVANCE_BASE + RELEVANCE_PER_WORD * shared).min(MAX_SCORE) as u8
}

/// Compute all scores for a piece of content.
///
/// The description is accepted for completeness but does not currently
/// influence any score.
pub fn calculate_scores(
    title: &str,
    _description: &str,
    hashtags: &[String],
    language: Language,
) -> SeoScores {
    let clickbait = clickbait_score(title, language);
    let length = length_score(title);
    let relevance = keyword_relevance_score(title, hashtags);
    let overall = (u32::from(clickbait) + u32::from(length) + u32::from(relevance)) / 3;

    SeoScores {
        clickbait_score: clickbait,
        keyword_relevance_score: relevance,
        length_score: length,
        overall_seo_score: overall as u8,
    }
}

/// Localized improvement hints for low scores, in a fixed order.
pub fn recommendations(scores: &SeoScores, language: Language) -> Vec<String> {
    let mut hints = Vec::new();
    if scores.clickbait_score < CLICKBAIT_HINT_BELOW {
        hints.push(match language {
            Language::En => "Make your title more attention-grabbing",
            Language::Tr => "Başlığınızı daha dikkat çekici hale getirin",
        });
    }
    if scores.length_score < LENGTH_HINT_BELOW {
        hints.push(match language {
            Language::En => "Keep title length between 50-70 characters",
            Language::Tr => "Başlık uzunluğunu 50-70 karakter arasında tutun",
        });
    }
    if scores.keyword_relevance_score < RELEVANCE_HINT_BELOW {
        hints.push(match language {
            Language::En => "Make hashtags more relevant to your title",
            Language::Tr => "Hashtag'lerinizin başlıkla daha uyumlu olmasını sağlayın",
        });
    }
    hints.into_iter().map(str::to_string).collect()
}

/// Score content and derive recommendations in one call.
pub fn analyze(
    title: &str,
    description: &str,
    hashtags: &[String],
    language: Language,
) -> SeoReport {
    let scores = calculate_scores(title, description, hashtags, language);
    let recommendations = recommendations(&scores, language);
    SeoReport {
        scores,
        recommendations,
    }
}
