//! Descriptor vocabularies
//!
//! Words that sit where a unit would but actually describe the ingredient
//! ("2 fresh mint leaves", "1 ceremonial matcha"). Each caller supplies its own
//! set; presets cover the drink categories the catalog uses.

use std::collections::BTreeSet;

use serde::Serialize;

/// Names of the built-in presets
pub const PRESET_NAMES: &[&str] = &["empty", "coffee", "matcha", "smoothie", "cocktail"];

const COFFEE_WORDS: &[&str] = &["cold", "hot", "iced", "fresh", "brewed", "strong", "organic"];
const MATCHA_WORDS: &[&str] = &["ceremonial", "culinary", "premium", "organic", "hot", "cold"];
const SMOOTHIE_WORDS: &[&str] = &["fresh", "frozen", "ripe", "organic", "large", "small"];
const COCKTAIL_WORDS: &[&str] = &["fresh", "chilled", "aged", "large", "cold"];

/// Set of lowercase descriptor words
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DescriptorSet {
    words: BTreeSet<String>,
}

impl DescriptorSet {
    /// Build a set from words; matching is case-insensitive
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn coffee() -> Self {
        Self::new(COFFEE_WORDS)
    }

    pub fn matcha() -> Self {
        Self::new(MATCHA_WORDS)
    }

    pub fn smoothie() -> Self {
        Self::new(SMOOTHIE_WORDS)
    }

    pub fn cocktail() -> Self {
        Self::new(COCKTAIL_WORDS)
    }

    /// Resolve a preset by name
    pub fn preset(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "empty" | "none" => Some(Self::empty()),
            "coffee" => Some(Self::coffee()),
            "matcha" => Some(Self::matcha()),
            "smoothie" | "protein_shake" => Some(Self::smoothie()),
            "cocktail" | "mocktail" => Some(Self::cocktail()),
            _ => None,
        }
    }

    /// Return a copy extended with extra words
    pub fn with_words<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut merged = self.clone();
        merged.words.extend(Self::new(extra).words);
        merged
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
