//! Static title template catalog plus the placeholder renderer.
//!
//! Templates are read-only process-wide data. Each content style owns an
//! ordered bucket of five templates; selection is by index, never mutation.

use crate::types::ContentStyle;

pub const TUTORIAL: [&str; 5] = [
    "{keyword} - Complete Guide for {audience}",
    "How to {keyword} (Step-by-Step Tutorial)",
    "{keyword} Tutorial: {benefit} in {time}",
    "Learn {keyword} - {audience} Guide {year}",
    "Master {keyword}: From Beginner to Pro",
];

pub const REVIEW: [&str; 5] = [
    "{keyword} Review: Is It Worth It? ({year})",
    "I Tried {keyword} for {time} - Honest Review",
    "{keyword}: The Truth Nobody Tells You",
    "{keyword} vs Competition - Which Is Better?",
    "My Honest {keyword} Review After {time}",
];

pub const LISTICLE: [&str; 5] = [
    "Top {number} {keyword} Tips You Need to Know",
    "{number} {keyword} Mistakes to Avoid in {year}",
    "{number} Best {keyword} Secrets Revealed",
    "{keyword}: {number} Things I Wish I Knew Earlier",
    "The {number} Most Important {keyword} Tips",
];

pub const HOW_TO: [&str; 5] = [
    "How I {result} with {keyword}",
    "How to {keyword} (The RIGHT Way)",
    "{keyword}: How to Get {result} Fast",
    "The Easy Way to {keyword} ({year})",
    "How to {keyword} Without {obstacle}",
];

pub const ENTERTAINMENT: [&str; 5] = [
    "I Tried {keyword} and THIS Happened...",
    "{keyword} Challenge Gone Wrong?!",
    "You Won't Believe This {keyword} Result",
    "Testing {keyword} So You Don't Have To",
    "What Happens When You {keyword}?",
];

pub const EDUCATIONAL: [&str; 5] = [
    "{keyword} Explained Simply",
    "What is {keyword}? Everything You Need to Know",
    "{keyword} for Beginners: Complete Overview",
    "Understanding {keyword}: A Deep Dive",
    "The Science Behind {keyword}",
];

impl ContentStyle {
    /// Template bucket for this style.
    pub fn templates(self) -> &'static [&'static str] {
        match self {
            Self::Tutorial => &TUTORIAL,
            Self::Review => &REVIEW,
            Self::Listicle => &LISTICLE,
            Self::HowTo => &HOW_TO,
            Self::Entertainment => &ENTERTAINMENT,
            Self::Educational => &EDUCATIONAL,
        }
    }
}

/// Replaces every `{name}` token with its value. Tokens without a supplied
/// value are left in place. Pure and deterministic.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (name, value) in vars {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

/// Title Case per space-delimited word: first letter upper, rest lower.
pub fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
