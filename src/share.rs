//! Pre-formatted social-share text for the summary screens.
//!
//! Only the text is built here. Turning it into an intent link (percent
//! encoding and all) is the hosting layer's business.

use crate::game::Ending;

/// Public URL of the game, embedded in every share text.
pub const SITE_URL: &str = "https://despot-game.onrender.com/";

/// Hashtag appended to every share text.
pub const HASHTAG: &str = "#DespotGame";

/// Share text for a normal ending, embedding rank, title, and the final
/// happiness as `h/100`.
#[must_use]
pub fn share_text(ending: &Ending, happiness: u32) -> String {
    format!(
        "[Despot] Rank \"{}: {}\"\nFinal happiness: {happiness}/100\n{HASHTAG}\n{SITE_URL}",
        ending.rank, ending.title
    )
}

/// Share text for the collapse ending. Fixed message; the final happiness
/// figure is not something the deposed author wants published.
#[must_use]
pub fn collapse_share_text() -> String {
    format!(
        "[URGENT: seeking asylum] Botched the happiness arithmetic and got \
         revolutioned. Do not come looking for me. {HASHTAG}\n{SITE_URL}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Ending;

    #[test]
    fn test_share_text_embeds_rank_and_happiness() {
        let text = share_text(&Ending::for_happiness(96), 96);
        assert!(text.contains("Rank \"A: Living God\""));
        assert!(text.contains("96/100"));
        assert!(text.contains(HASHTAG));
        assert!(text.contains(SITE_URL));
    }

    #[test]
    fn test_collapse_share_text_is_fixed() {
        let text = collapse_share_text();
        assert!(text.contains("asylum"));
        assert!(text.contains(HASHTAG));
        assert!(!text.contains("/100"));
    }
}
