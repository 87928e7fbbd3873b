//! Fixed word pools and power-word lists.
//!
//! Pools are sampled uniformly and independently per rendering; repeats
//! across templates in the same request are allowed. Sampling goes through
//! [`pick`] so tests can substitute a seeded generator.

use rand::Rng;

use crate::types::PowerWordCategory;

pub const TIME_PHRASES: [&str; 5] = ["30 Days", "1 Week", "24 Hours", "1 Month", "10 Minutes"];

pub const NUMBERS: [u32; 6] = [3, 5, 7, 10, 12, 15];

pub const BENEFITS: [&str; 5] = ["Results", "Success", "Mastery", "Progress", "Growth"];

pub const OBSTACLES: [&str; 5] = [
    "Spending Money",
    "Wasting Time",
    "Common Mistakes",
    "Confusion",
    "Frustration",
];

/// Result phrases embed the raw (non-title-cased) keyword in some entries.
pub fn result_phrases(keyword: &str) -> [String; 5] {
    [
        format!("Mastered {keyword}"),
        "Got Amazing Results".to_string(),
        "Achieved Success".to_string(),
        "Made Real Progress".to_string(),
        "Changed Everything".to_string(),
    ]
}

/// Power words grouped by rhetorical category, scanned in this order.
pub const POWER_WORDS: [(PowerWordCategory, &[&str]); 5] = [
    (
        PowerWordCategory::Urgency,
        &["Now", "Today", "Immediately", "Quick", "Fast", "Instant"],
    ),
    (
        PowerWordCategory::Exclusivity,
        &["Secret", "Hidden", "Exclusive", "Insider", "Unknown"],
    ),
    (
        PowerWordCategory::Value,
        &["Free", "Ultimate", "Complete", "Essential", "Best"],
    ),
    (
        PowerWordCategory::Emotion,
        &["Amazing", "Incredible", "Mind-Blowing", "Shocking", "Surprising"],
    ),
    (
        PowerWordCategory::Trust,
        &["Proven", "Tested", "Official", "Expert", "Professional"],
    ),
];

/// Uniformly picks one element from a non-empty pool.
pub fn pick<'a, T, R: Rng + ?Sized>(pool: &'a [T], rng: &mut R) -> &'a T {
    &pool[rng.gen_range(0..pool.len())]
}
