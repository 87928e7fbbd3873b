//! Tone/audience variation titles that bypass the template catalog.

use chrono::{Datelike, Utc};

use crate::templates::capitalize_words;
use crate::types::Tone;

/// Hand-authored variation titles: a fixed pair per tone (an unrecognized
/// tone selects nothing), plus one audience-specific title when the audience
/// is present and not the literal `"general"`.
pub fn custom_titles(main_keyword: &str, tone: Tone, audience: &str) -> Vec<String> {
    let keyword = capitalize_words(main_keyword);
    let year = Utc::now().year();
    let mut titles = Vec::new();

    match tone {
        Tone::Clickbait => {
            titles.push(format!("This {keyword} Trick Changes EVERYTHING"));
            titles.push(format!("Why Nobody Talks About {keyword} (Secrets Revealed)"));
        }
        Tone::Professional => {
            titles.push(format!("{keyword}: A Comprehensive Guide ({year})"));
            titles.push(format!("Professional {keyword} Techniques Explained"));
        }
        Tone::Casual => {
            titles.push(format!("Let's Talk About {keyword}"));
            titles.push(format!("My {keyword} Journey - What I Learned"));
        }
        Tone::Educational => {
            titles.push(format!("Understanding {keyword}: Complete Breakdown"));
            titles.push(format!("{keyword} 101: Everything You Need to Know"));
        }
        Tone::Unknown => {}
    }

    if !audience.is_empty() && audience != "general" {
        titles.push(format!(
            "{keyword} for {}: Complete Guide",
            capitalize_words(audience)
        ));
    }

    titles
}
