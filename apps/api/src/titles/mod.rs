//! Title and background-prompt selection.
//!
//! Randomness always comes from a caller-supplied RNG seeded with
//! `seed_from_text`, so the same résumé yields the same title and template.

mod tables;

use rand::Rng;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::analysis::{Category, TechStats};

pub use tables::FALLBACK_TITLE;

/// Stable 64-bit seed derived from the SHA-256 of `text`.
pub fn seed_from_text(text: &str) -> u64 {
    let digest = Sha256::digest(text.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TitleTheme {
    /// Frontend and Backend share the lead.
    Fullstack,
    Category(Category),
}

/// Picks the title bank for a profile. `None` when nothing was detected.
pub fn theme_for(stats: &TechStats) -> Option<TitleTheme> {
    let dominant = stats.dominant_category?;
    let count = |c: Category| stats.category_distribution.get(&c).copied().unwrap_or(0);
    let frontend = count(Category::Frontend);

    if matches!(dominant, Category::Frontend | Category::Backend)
        && frontend > 0
        && frontend == count(Category::Backend)
    {
        return Some(TitleTheme::Fullstack);
    }
    Some(TitleTheme::Category(dominant))
}

pub fn pick_title<R: Rng>(stats: &TechStats, rng: &mut R) -> &'static str {
    let Some(theme) = theme_for(stats) else {
        warn!("No dominant category, using fallback title");
        return FALLBACK_TITLE;
    };

    let bank = match theme {
        TitleTheme::Fullstack => &tables::FULLSTACK_TITLES,
        TitleTheme::Category(c) => tables::category_titles(c),
    };
    let title = bank[rng.gen_range(0..bank.len())];
    info!("Generated title for {theme:?}: {title}");
    title
}

/// Nebula-only prompt: the stars and lines are drawn locally, so the remote
/// model is asked for an empty sky tinted after the dominant category.
pub fn background_prompt(dominant: Option<Category>) -> String {
    let hint = tables::color_hint(dominant.unwrap_or(Category::Other));
    format!(
        "Beautiful deep space nebula background.\n\
         Magnificent cosmic nebula with {hint}.\n\
         Rich colors, swirling gas clouds, cosmic dust.\n\
         No stars, no constellations, just pure nebula.\n\
         Professional, stunning, high quality."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::ExperienceLevel;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeMap;

    fn stats(dominant: Option<Category>, dist: &[(Category, usize)]) -> TechStats {
        TechStats {
            total_technologies: dist.iter().map(|(_, n)| n).sum(),
            dominant_category: dominant,
            experience_level: ExperienceLevel::Junior,
            category_distribution: dist.iter().copied().collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn test_seed_is_stable_and_text_sensitive() {
        assert_eq!(seed_from_text("rust docker"), seed_from_text("rust docker"));
        assert_ne!(seed_from_text("rust docker"), seed_from_text("rust docker "));
        // SHA-256("") starts with e3b0c44298fc1c14.
        assert_eq!(seed_from_text(""), 0xe3b0_c442_98fc_1c14);
    }

    #[test]
    fn test_fallback_title_without_dominant_category() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_title(&stats(None, &[]), &mut rng), FALLBACK_TITLE);
    }

    #[test]
    fn test_title_comes_from_category_bank() {
        let s = stats(Some(Category::Database), &[(Category::Database, 3)]);
        let mut rng = StdRng::seed_from_u64(7);
        let title = pick_title(&s, &mut rng);
        assert!(tables::category_titles(Category::Database).contains(&title));
    }

    #[test]
    fn test_same_seed_same_title() {
        let s = stats(Some(Category::Cloud), &[(Category::Cloud, 4)]);
        let a = pick_title(&s, &mut StdRng::seed_from_u64(seed_from_text("cv")));
        let b = pick_title(&s, &mut StdRng::seed_from_u64(seed_from_text("cv")));
        assert_eq!(a, b);
    }

    #[test]
    fn test_balanced_frontend_backend_is_fullstack() {
        let s = stats(
            Some(Category::Frontend),
            &[(Category::Frontend, 3), (Category::Backend, 3), (Category::DevOps, 1)],
        );
        assert_eq!(theme_for(&s), Some(TitleTheme::Fullstack));
        let title = pick_title(&s, &mut StdRng::seed_from_u64(3));
        assert!(tables::FULLSTACK_TITLES.contains(&title));

        let skewed = stats(
            Some(Category::Frontend),
            &[(Category::Frontend, 4), (Category::Backend, 3)],
        );
        assert_eq!(theme_for(&skewed), Some(TitleTheme::Category(Category::Frontend)));
    }

    #[test]
    fn test_background_prompt_uses_color_hint() {
        let prompt = background_prompt(Some(Category::Backend));
        assert!(prompt.contains("cool colors (blue, teal, cyan)"));
        assert!(prompt.contains("No stars, no constellations"));
        assert!(background_prompt(None).contains("multicolor spectrum"));
    }

    #[test]
    fn test_every_bank_has_twelve_distinct_titles() {
        for c in Category::ALL {
            let bank = tables::category_titles(c);
            let mut sorted = bank.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), 12, "{c:?} bank has duplicates");
        }
    }
}
