//! Technology detection: a static keyword dictionary and the frequency analyzer.

pub mod analyzer;
pub mod dictionary;

pub use analyzer::{TechAnalyzer, TechStats, Technology};
pub use dictionary::Category;
