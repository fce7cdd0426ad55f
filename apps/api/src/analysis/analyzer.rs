//! Keyword-frequency technology scoring.
//!
//! Each dictionary keyword is matched as a whole word, case-insensitively.
//! Patterns are compiled once when the analyzer is built and shared read-only
//! across requests.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashSet};

use regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::debug;

use crate::analysis::dictionary::Category;

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StarSize {
    Large,
    Medium,
    Small,
    Tiny,
}

impl StarSize {
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => StarSize::Large,
            50.. => StarSize::Medium,
            20.. => StarSize::Small,
            _ => StarSize::Tiny,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExperienceLevel {
    Junior,
    Intermediate,
    Senior,
    Expert,
}

impl ExperienceLevel {
    /// Estimated from the number of distinct technologies found.
    pub fn from_technology_count(count: usize) -> Self {
        match count {
            20.. => ExperienceLevel::Expert,
            12.. => ExperienceLevel::Senior,
            6.. => ExperienceLevel::Intermediate,
            _ => ExperienceLevel::Junior,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Technology {
    pub name: String,
    pub category: Category,
    pub raw_count: usize,
    /// 0–100, relative to the most frequent technology.
    pub score: u32,
    pub size: StarSize,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechStats {
    pub total_technologies: usize,
    pub dominant_category: Option<Category>,
    pub experience_level: ExperienceLevel,
    pub category_distribution: BTreeMap<Category, usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TechAnalysis {
    /// Sorted by `raw_count` descending; ties keep dictionary order.
    pub technologies: Vec<Technology>,
    pub stats: TechStats,
}

// ────────────────────────────────────────────────────────────────────────────
// Analyzer
// ────────────────────────────────────────────────────────────────────────────

struct KeywordPattern {
    keyword: &'static str,
    category: Category,
    regex: Regex,
}

pub struct TechAnalyzer {
    patterns: Vec<KeywordPattern>,
}

impl TechAnalyzer {
    /// Compiles one whole-word pattern per distinct dictionary keyword.
    pub fn new() -> Result<Self, regex::Error> {
        let mut seen = HashSet::new();
        let mut patterns = Vec::new();

        for category in Category::ALL {
            for &keyword in category.keywords() {
                if !seen.insert(keyword) {
                    continue;
                }
                let regex = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(keyword)))
                    .case_insensitive(true)
                    .build()?;
                patterns.push(KeywordPattern {
                    keyword,
                    category,
                    regex,
                });
            }
        }

        debug!("TechAnalyzer compiled {} keyword patterns", patterns.len());
        Ok(Self { patterns })
    }

    pub fn analyze(&self, text: &str) -> TechAnalysis {
        let mut counts: Vec<(&KeywordPattern, usize)> = self
            .patterns
            .iter()
            .filter_map(|p| {
                let n = p.regex.find_iter(text).count();
                (n > 0).then_some((p, n))
            })
            .collect();
        counts.sort_by_key(|&(_, n)| Reverse(n));

        let max_count = counts.first().map(|&(_, n)| n).unwrap_or(0);
        let technologies: Vec<Technology> = counts
            .into_iter()
            .map(|(pattern, n)| {
                let score = (n * 100 / max_count) as u32;
                Technology {
                    name: title_case(pattern.keyword),
                    category: pattern.category,
                    raw_count: n,
                    score,
                    size: StarSize::from_score(score),
                    color: pattern.category.color(),
                }
            })
            .collect();

        let stats = compute_stats(&technologies);
        TechAnalysis {
            technologies,
            stats,
        }
    }
}

fn compute_stats(technologies: &[Technology]) -> TechStats {
    // Insertion-ordered so that the dominant-category tie-break is "first seen".
    let mut per_category: Vec<(Category, usize)> = Vec::new();
    for tech in technologies {
        match per_category.iter_mut().find(|(c, _)| *c == tech.category) {
            Some(entry) => entry.1 += 1,
            None => per_category.push((tech.category, 1)),
        }
    }

    let dominant_category = per_category
        .iter()
        .fold(None, |best: Option<(Category, usize)>, &(c, n)| match best {
            Some((_, best_n)) if best_n >= n => best,
            _ => Some((c, n)),
        })
        .map(|(c, _)| c);

    TechStats {
        total_technologies: technologies.len(),
        dominant_category,
        experience_level: ExperienceLevel::from_technology_count(technologies.len()),
        category_distribution: per_category.into_iter().collect(),
    }
}

/// Upper-cases the first letter of every alphabetic run: "node.js" → "Node.Js".
fn title_case(keyword: &str) -> String {
    let mut out = String::with_capacity(keyword.len());
    let mut in_word = false;
    for c in keyword.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
