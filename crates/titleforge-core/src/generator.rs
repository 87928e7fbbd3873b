//! Pipeline orchestration: render, vary, analyze, rank, and diagnose.

use std::collections::HashSet;

use chrono::{Datelike, Utc};
use rand::Rng;
use serde_json::Value;
use thiserror::Error;

use crate::analyzer::analyze_title;
use crate::lexicon::{pick, result_phrases, BENEFITS, NUMBERS, OBSTACLES, TIME_PHRASES};
use crate::templates::{capitalize_words, fill_template};
use crate::types::{ContentStyle, GenerationResult, TitleCandidate, TitleRequest, Tone};
use crate::variations::custom_titles;

pub const DEFAULT_COUNT: usize = 5;

/// Template tag for titles produced by the variation generator.
pub const CUSTOM_TEMPLATE: &str = "custom";

/// Static guidance attached to every result.
pub const TIPS: [&str; 5] = [
    "Keep titles under 60 characters for full visibility",
    "Place primary keyword near the beginning",
    "Use numbers when possible (e.g., \"5 Tips\")",
    "Include the year for evergreen content",
    "Create curiosity without being misleading",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// The only hard failure at this layer; every other input falls back to
    /// a documented default.
    #[error("Concept is required")]
    MissingConcept,
}

/// Runs the full pipeline with the process RNG.
pub fn generate_titles(request: &TitleRequest) -> Result<GenerationResult, GenerateError> {
    generate_titles_with(&mut rand::thread_rng(), request)
}

/// Runs the full pipeline with a caller-supplied RNG (seedable in tests).
pub fn generate_titles_with<R: Rng + ?Sized>(
    rng: &mut R,
    request: &TitleRequest,
) -> Result<GenerationResult, GenerateError> {
    if request.concept.is_empty() {
        return Err(GenerateError::MissingConcept);
    }

    let count = request.count.unwrap_or(DEFAULT_COUNT).max(1);
    let content_style = request.content_style.as_deref().unwrap_or("tutorial");
    let target_audience = request.target_audience.as_deref().unwrap_or("general");
    let tone = Tone::from_name(request.tone.as_deref().unwrap_or("professional"));
    let main_keyword = request.main_keyword().to_string();

    tracing::debug!(
        concept = %request.concept,
        keyword = %main_keyword,
        style = content_style,
        count,
        "generating titles"
    );

    let templates = ContentStyle::from_name(content_style).templates();
    let year = Utc::now().year();
    let mut candidates: Vec<TitleCandidate> = Vec::new();

    // One fresh set of pool samples per template; repeats across templates
    // in the same request are expected.
    for template in templates.iter().take(count.min(templates.len())) {
        let vars = [
            ("keyword", capitalize_words(&main_keyword)),
            ("audience", capitalize_words(target_audience)),
            ("year", year.to_string()),
            ("time", pick(&TIME_PHRASES, rng).to_string()),
            ("number", pick(&NUMBERS, rng).to_string()),
            ("benefit", pick(&BENEFITS, rng).to_string()),
            ("result", pick(&result_phrases(&main_keyword), rng).clone()),
            ("obstacle", pick(&OBSTACLES, rng).to_string()),
        ];
        let title = fill_template(template, &vars);
        candidates.push(TitleCandidate {
            analysis: analyze_title(&title, &main_keyword),
            title,
            template: (*template).to_string(),
        });
    }

    for title in custom_titles(&main_keyword, tone, target_audience) {
        candidates.push(TitleCandidate {
            analysis: analyze_title(&title, &main_keyword),
            title,
            template: CUSTOM_TEMPLATE.to_string(),
        });
    }

    // Stable: candidates with equal scores keep generation order.
    candidates.sort_by(|a, b| b.analysis.seo_score.cmp(&a.analysis.seo_score));
    candidates.truncate(count);

    let warnings = generate_warnings(&candidates);
    let best_title = candidates[0].clone();
    let alternative_titles = candidates[1..].to_vec();

    Ok(GenerationResult {
        concept: request.concept.clone(),
        main_keyword,
        content_style: content_style.to_string(),
        target_audience: target_audience.to_string(),
        generated_at: Utc::now(),
        titles: candidates,
        best_title,
        alternative_titles,
        tips: TIPS.to_vec(),
        warnings,
    })
}

/// Convenience wrapper for loosely-typed tool-call arguments.
pub fn generate_titles_from_args(args: &Value) -> Result<GenerationResult, GenerateError> {
    generate_titles(&TitleRequest::from_args(args))
}

/// Cross-candidate diagnostics over the selected (post-truncation) set.
pub fn generate_warnings(selected: &[TitleCandidate]) -> Vec<String> {
    let mut warnings = Vec::new();

    let openings: Vec<String> = selected
        .iter()
        .map(|c| c.title.split(' ').take(3).collect::<Vec<_>>().join(" "))
        .collect();
    let distinct: HashSet<&String> = openings.iter().collect();
    if distinct.len() < selected.len() {
        warnings.push("Some titles have similar beginnings - consider more variety".to_string());
    }

    let long = selected
        .iter()
        .filter(|c| c.analysis.character_count > 60)
        .count();
    if long > 0 {
        warnings.push(format!("{long} title(s) may be truncated in search results"));
    }

    let missing = selected.iter().filter(|c| !c.analysis.has_keyword).count();
    if missing > 0 {
        warnings.push(format!("{missing} title(s) missing the primary keyword"));
    }

    warnings
}
