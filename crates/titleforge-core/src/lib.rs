//! titleforge — Title generation core.
//! Template catalog, lexicon pools, SEO analyzer, and ranking for one
//! request-scoped, synchronous pipeline run.

pub mod analyzer;
pub mod generator;
pub mod lexicon;
pub mod templates;
pub mod types;
pub mod variations;

pub use analyzer::analyze_title;
pub use generator::{
    generate_titles, generate_titles_from_args, generate_titles_with, generate_warnings,
    GenerateError, CUSTOM_TEMPLATE, DEFAULT_COUNT, TIPS,
};
pub use templates::{capitalize_words, fill_template};
pub use types::{
    ContentStyle, GenerationResult, PowerWordCategory, PowerWordHit, Rating, TitleAnalysis,
    TitleCandidate, TitleRequest, Tone,
};
pub use variations::custom_titles;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
