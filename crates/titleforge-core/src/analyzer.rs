//! Title analyzer: structural metrics and the heuristic SEO score.
//!
//! Matching is case-insensitive throughout. The score starts at a base of 50
//! and is clamped to [0, 100] after all adjustments.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicon::POWER_WORDS;
use crate::types::{PowerWordHit, Rating, TitleAnalysis};

/// Year pattern is intentionally the literal range 2024-2029, not derived
/// from the current date. Known staleness risk, kept as-is.
static YEAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"202[4-9]").expect("valid year pattern"));

const BASE_SCORE: i32 = 50;
const KEYWORD_BONUS: i32 = 20;
const EARLY_KEYWORD_BONUS: i32 = 10;
const LENGTH_BONUS: i32 = 15;
const NUMBER_BONUS: i32 = 5;
const YEAR_BONUS: i32 = 5;
const POWER_WORD_BONUS: i32 = 10;

/// Analyzes one rendered title against the main keyword.
pub fn analyze_title(title: &str, keyword: &str) -> TitleAnalysis {
    let lower_title = title.to_lowercase();
    let lower_keyword = keyword.to_lowercase();

    let character_count = title.chars().count();
    let word_count = title.split(' ').count();
    // Position in chars, the same unit as character_count, so the early
    // placement check is not skewed by multi-byte characters.
    let keyword_position = lower_title
        .find(&lower_keyword)
        .map(|pos| lower_title[..pos].chars().count() as i64)
        .unwrap_or(-1);
    let has_keyword = keyword_position >= 0;
    let has_number = title.chars().any(|c| c.is_ascii_digit());
    let has_year = YEAR_PATTERN.is_match(title);

    let mut power_words_used = Vec::new();
    for (category, words) in POWER_WORDS {
        for word in words {
            if lower_title.contains(&word.to_lowercase()) {
                power_words_used.push(PowerWordHit {
                    word: (*word).to_string(),
                    category,
                });
            }
        }
    }
    let has_power_word = !power_words_used.is_empty();

    let mut issues = Vec::new();
    let mut score = BASE_SCORE;

    if has_keyword {
        score += KEYWORD_BONUS;
        if keyword_position < 20 {
            score += EARLY_KEYWORD_BONUS;
        }
    }

    // 66-70 characters get neither bonus nor penalty.
    if (45..=65).contains(&character_count) {
        score += LENGTH_BONUS;
    } else if character_count > 70 {
        score -= 10;
        issues.push("Title may be truncated in search results".to_string());
    } else if character_count < 30 {
        score -= 5;
        issues.push("Title might be too short for SEO".to_string());
    }

    if has_number {
        score += NUMBER_BONUS;
    }
    if has_year {
        score += YEAR_BONUS;
    }
    if has_power_word {
        score += POWER_WORD_BONUS;
    }

    let seo_score = score.clamp(0, 100) as u8;

    TitleAnalysis {
        character_count,
        word_count,
        has_keyword,
        keyword_position,
        has_number,
        has_year,
        has_power_word,
        power_words_used,
        seo_score,
        rating: Rating::from_score(seo_score),
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PowerWordCategory;

    #[test]
    fn test_full_bonus_title_clamps_to_100() {
        // 48 chars, keyword at position 0, number, in-range year, power word:
        // 50 + 20 + 10 + 15 + 5 + 5 + 10 = 115, clamped to 100.
        let title = "Video Editing 2025: 7 Proven Tips You Should Use";
        let analysis = analyze_title(title, "video editing");
        assert!(analysis.character_count >= 45 && analysis.character_count <= 65);
        assert!(analysis.has_keyword);
        assert_eq!(analysis.keyword_position, 0);
        assert!(analysis.has_number);
        assert!(analysis.has_year);
        assert!(analysis.has_power_word);
        assert_eq!(analysis.seo_score, 100);
        assert_eq!(analysis.rating, Rating::Excellent);
    }

    #[test]
    fn test_keyword_matching_is_case_insensitive() {
        let analysis = analyze_title("VIDEO EDITING explained", "video editing");
        assert!(analysis.has_keyword);
        assert_eq!(analysis.keyword_position, 0);

        let missing = analyze_title("Color Grading Explained", "video editing");
        assert!(!missing.has_keyword);
        assert_eq!(missing.keyword_position, -1);
    }

    #[test]
    fn test_long_title_penalized_with_issue() {
        let title = "This Extremely Long Video Editing Title Keeps Going Well Past Any Limit";
        assert!(title.chars().count() > 70);
        let analysis = analyze_title(title, "video editing");
        assert_eq!(
            analysis.issues,
            vec!["Title may be truncated in search results".to_string()]
        );
        // Keyword sits at position 20, just outside the early-placement
        // bonus: 50 + 20 - 10 = 60.
        assert_eq!(analysis.keyword_position, 20);
        assert_eq!(analysis.seo_score, 60);
    }

    #[test]
    fn test_short_title_penalized_with_issue() {
        let analysis = analyze_title("Editing Tips", "video editing");
        assert!(analysis.character_count < 30);
        assert_eq!(
            analysis.issues,
            vec!["Title might be too short for SEO".to_string()]
        );
        // 50 - 5, no keyword, no bonuses.
        assert_eq!(analysis.seo_score, 45);
        assert_eq!(analysis.rating, Rating::Fair);
    }

    #[test]
    fn test_length_gap_66_to_70_gets_nothing() {
        // 68 characters, no keyword, no other features.
        let title = "abcdefgh abcdefgh abcdefgh abcdefgh abcdefgh abcdefgh abcdefgh abcde";
        assert_eq!(title.chars().count(), 68);
        let analysis = analyze_title(title, "video editing");
        assert!(analysis.issues.is_empty());
        assert_eq!(analysis.seo_score, 50);
    }

    #[test]
    fn test_year_range_is_hard_coded() {
        assert!(analyze_title("Guide 2024", "guide").has_year);
        assert!(analyze_title("Guide 2029", "guide").has_year);
        assert!(!analyze_title("Guide 2030", "guide").has_year);
        assert!(!analyze_title("Guide 2023", "guide").has_year);
    }

    #[test]
    fn test_power_word_scan_records_every_hit() {
        let analysis = analyze_title("Proven Secret Tips", "tips");
        assert!(analysis.has_power_word);
        let hits: Vec<_> = analysis
            .power_words_used
            .iter()
            .map(|h| (h.word.as_str(), h.category))
            .collect();
        assert!(hits.contains(&("Secret", PowerWordCategory::Exclusivity)));
        assert!(hits.contains(&("Proven", PowerWordCategory::Trust)));
    }

    #[test]
    fn test_keyword_position_counts_chars_not_bytes() {
        // 18 chars (21 bytes) precede the keyword; the early-placement
        // bonus must use the char position, same unit as character_count.
        let title = "Crème Brûlée Tips café tutorial guide";
        let analysis = analyze_title(title, "café tutorial");
        assert!(analysis.has_keyword);
        assert_eq!(analysis.keyword_position, 18);
        assert_eq!(analysis.character_count, 37);
        // 50 + 20 keyword + 10 early placement, no other features.
        assert_eq!(analysis.seo_score, 80);
    }

    #[test]
    fn test_word_count_splits_on_spaces() {
        let analysis = analyze_title("One Two Three", "one");
        assert_eq!(analysis.word_count, 3);
        assert_eq!(analysis.character_count, 13);
    }
}
