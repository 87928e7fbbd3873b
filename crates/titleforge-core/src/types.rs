//! Shared types for the title pipeline: request, candidate, and result shapes.
//!
//! Everything wire-facing serializes camelCase so the gateway can hand the
//! structures straight to the JSON-RPC envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rhetorical genre of the video. Selects which template bucket applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentStyle {
    Tutorial,
    Review,
    Listicle,
    HowTo,
    Entertainment,
    Educational,
}

impl ContentStyle {
    /// Resolves a style name. Unknown names fall back to `Tutorial`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "tutorial" => Self::Tutorial,
            "review" => Self::Review,
            "listicle" => Self::Listicle,
            "howTo" => Self::HowTo,
            "entertainment" => Self::Entertainment,
            "educational" => Self::Educational,
            _ => Self::Tutorial,
        }
    }
}

/// Tone of the generated titles. Selects a fixed pair of hand-authored
/// variation titles. An unrecognized tone selects nothing (no fallback).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Professional,
    Casual,
    Clickbait,
    Educational,
    Unknown,
}

impl Tone {
    pub fn from_name(name: &str) -> Self {
        match name {
            "professional" => Self::Professional,
            "casual" => Self::Casual,
            "clickbait" => Self::Clickbait,
            "educational" => Self::Educational,
            _ => Self::Unknown,
        }
    }
}

/// Qualitative rating derived from the SEO score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Rating {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            _ => Self::Poor,
        }
    }
}

/// Rhetorical category of a power word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerWordCategory {
    Urgency,
    Exclusivity,
    Value,
    Emotion,
    Trust,
}

/// One power-word match found in a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerWordHit {
    pub word: String,
    pub category: PowerWordCategory,
}

/// Structural metrics and score for a single rendered title.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleAnalysis {
    pub character_count: usize,
    pub word_count: usize,
    pub has_keyword: bool,
    /// First case-insensitive match position, or -1 when absent.
    pub keyword_position: i64,
    pub has_number: bool,
    pub has_year: bool,
    pub has_power_word: bool,
    pub power_words_used: Vec<PowerWordHit>,
    pub seo_score: u8,
    pub rating: Rating,
    pub issues: Vec<String>,
}

/// One fully analyzed title candidate. Created once, never mutated after
/// analysis, ordered by descending `seo_score` for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleCandidate {
    pub title: String,
    #[serde(flatten)]
    pub analysis: TitleAnalysis,
    /// The source template, or `"custom"` for tone/audience variations.
    pub template: String,
}

/// Aggregate returned to the caller for one generation request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub concept: String,
    pub main_keyword: String,
    pub content_style: String,
    pub target_audience: String,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub titles: Vec<TitleCandidate>,
    pub best_title: TitleCandidate,
    pub alternative_titles: Vec<TitleCandidate>,
    pub tips: Vec<&'static str>,
    pub warnings: Vec<String>,
}

/// Caller-supplied generation request. Only `concept` is required; every
/// other field silently falls back to its documented default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleRequest {
    #[serde(default)]
    pub concept: String,
    /// Loosely structured keyword analysis; only
    /// `recommended.primary[0].keyword` is ever read.
    #[serde(default)]
    pub keywords: Option<Value>,
    #[serde(default)]
    pub content_style: Option<String>,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub tone: Option<String>,
}

impl TitleRequest {
    pub fn new(concept: impl Into<String>) -> Self {
        Self {
            concept: concept.into(),
            ..Self::default()
        }
    }

    /// Builds a request from raw tool-call arguments. Each field is read
    /// defensively; a missing or mistyped optional field degrades to its
    /// default instead of failing the request.
    pub fn from_args(args: &Value) -> Self {
        let get_str = |key: &str| {
            args.get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        Self {
            concept: get_str("concept").unwrap_or_default(),
            keywords: args.get("keywords").cloned(),
            content_style: get_str("contentStyle"),
            target_audience: get_str("targetAudience"),
            count: args
                .get("count")
                .and_then(Value::as_u64)
                .map(|n| n as usize),
            tone: get_str("tone"),
        }
    }

    /// Primary keyword: `keywords.recommended.primary[0].keyword` when
    /// present and non-empty, otherwise the raw concept.
    pub fn main_keyword(&self) -> &str {
        self.keywords
            .as_ref()
            .and_then(|k| k.get("recommended"))
            .and_then(|r| r.get("primary"))
            .and_then(|p| p.get(0))
            .and_then(|e| e.get("keyword"))
            .and_then(Value::as_str)
            .filter(|k| !k.is_empty())
            .unwrap_or(&self.concept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_content_style_falls_back_to_tutorial() {
        assert_eq!(ContentStyle::from_name("review"), ContentStyle::Review);
        assert_eq!(ContentStyle::from_name("howTo"), ContentStyle::HowTo);
        assert_eq!(ContentStyle::from_name("vlog"), ContentStyle::Tutorial);
        // Style names are exact; case variants are unknown.
        assert_eq!(ContentStyle::from_name("HowTo"), ContentStyle::Tutorial);
    }

    #[test]
    fn test_tone_unrecognized_is_unknown() {
        assert_eq!(Tone::from_name("clickbait"), Tone::Clickbait);
        assert_eq!(Tone::from_name("sarcastic"), Tone::Unknown);
    }

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(Rating::from_score(100), Rating::Excellent);
        assert_eq!(Rating::from_score(80), Rating::Excellent);
        assert_eq!(Rating::from_score(79), Rating::Good);
        assert_eq!(Rating::from_score(60), Rating::Good);
        assert_eq!(Rating::from_score(59), Rating::Fair);
        assert_eq!(Rating::from_score(40), Rating::Fair);
        assert_eq!(Rating::from_score(39), Rating::Poor);
        assert_eq!(Rating::from_score(0), Rating::Poor);
    }

    #[test]
    fn test_main_keyword_from_recommendation() {
        let mut req = TitleRequest::new("video editing");
        req.keywords = Some(json!({
            "recommended": { "primary": [{ "keyword": "premiere pro" }] }
        }));
        assert_eq!(req.main_keyword(), "premiere pro");
    }

    #[test]
    fn test_main_keyword_falls_back_to_concept() {
        // No keywords at all.
        let req = TitleRequest::new("video editing");
        assert_eq!(req.main_keyword(), "video editing");

        // Malformed structure degrades instead of erroring.
        let mut req = TitleRequest::new("video editing");
        req.keywords = Some(json!("not an object"));
        assert_eq!(req.main_keyword(), "video editing");

        // Empty primary list.
        let mut req = TitleRequest::new("video editing");
        req.keywords = Some(json!({ "recommended": { "primary": [] } }));
        assert_eq!(req.main_keyword(), "video editing");

        // Empty keyword string is treated as absent.
        let mut req = TitleRequest::new("video editing");
        req.keywords = Some(json!({ "recommended": { "primary": [{ "keyword": "" }] } }));
        assert_eq!(req.main_keyword(), "video editing");
    }

    #[test]
    fn test_from_args_defensive_extraction() {
        let args = json!({
            "concept": "home coffee brewing",
            "contentStyle": "listicle",
            "count": 3,
            "tone": "casual",
            "keywords": { "recommended": { "primary": [{ "keyword": "pour over" }] } }
        });
        let req = TitleRequest::from_args(&args);
        assert_eq!(req.concept, "home coffee brewing");
        assert_eq!(req.content_style.as_deref(), Some("listicle"));
        assert_eq!(req.count, Some(3));
        assert_eq!(req.main_keyword(), "pour over");

        // Mistyped optional fields fall back to defaults.
        let args = json!({ "concept": "x", "count": "three", "tone": 7 });
        let req = TitleRequest::from_args(&args);
        assert_eq!(req.count, None);
        assert_eq!(req.tone, None);
    }
}
