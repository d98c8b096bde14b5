use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The five scoring categories. Exhaustive; adding a category is a compile
/// error everywhere a match exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    KeywordOptimization,
    ContentStructure,
    ContentLength,
    MetaQuality,
    Enrichment,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::KeywordOptimization => "keyword_optimization",
            Category::ContentStructure => "content_structure",
            Category::ContentLength => "content_length",
            Category::MetaQuality => "meta_quality",
            Category::Enrichment => "enrichment",
        }
    }

    pub const ALL: [Category; 5] = [
        Category::KeywordOptimization,
        Category::ContentStructure,
        Category::ContentLength,
        Category::MetaQuality,
        Category::Enrichment,
    ];
}

/// A single value in a category's `details` map. Closed union instead of the
/// free-form maps the UI used to receive; serializes transparently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Detail {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<bool> for Detail {
    fn from(v: bool) -> Self {
        Detail::Bool(v)
    }
}

impl From<i64> for Detail {
    fn from(v: i64) -> Self {
        Detail::Int(v)
    }
}

impl From<usize> for Detail {
    fn from(v: usize) -> Self {
        Detail::Int(v as i64)
    }
}

impl From<f64> for Detail {
    fn from(v: f64) -> Self {
        Detail::Float(v)
    }
}

impl From<&str> for Detail {
    fn from(v: &str) -> Self {
        Detail::Text(v.to_string())
    }
}

/// One category's contribution: points earned, the category maximum, and the
/// per-signal details consumers render in the score breakdown UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub score: u32,
    pub max: u32,
    pub details: BTreeMap<String, Detail>,
}

impl CategoryScore {
    pub fn new(max: u32) -> Self {
        Self {
            score: 0,
            max,
            details: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, points: u32) {
        self.score += points;
    }

    pub fn detail(&mut self, key: &str, value: impl Into<Detail>) {
        self.details.insert(key.to_string(), value.into());
    }
}

/// Full scoring output: normalized 0..=100 total plus per-category breakdown.
/// Serializes as `{"score": .., "breakdown": {category: {score, max, details}}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub score: u32,
    pub breakdown: BTreeMap<String, CategoryScore>,
}

impl ScoreBreakdown {
    /// Normalize category scores into a 0..=100 total. The category maxima
    /// sum to 100 today, but the rounding formula is kept so the weights can
    /// change without touching this.
    pub fn from_categories(categories: Vec<(Category, CategoryScore)>) -> Self {
        let earned: u32 = categories.iter().map(|(_, c)| c.score).sum();
        let possible: u32 = categories.iter().map(|(_, c)| c.max).sum();
        let score = if possible == 0 {
            0
        } else {
            ((100.0 * earned as f64 / possible as f64).round()) as u32
        };
        let breakdown = categories
            .into_iter()
            .map(|(cat, score)| (cat.name().to_string(), score))
            .collect();
        Self { score, breakdown }
    }

    pub fn category(&self, category: Category) -> Option<&CategoryScore> {
        self.breakdown.get(category.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_normalized_and_rounded() {
        let mut a = CategoryScore::new(35);
        a.add(20);
        let mut b = CategoryScore::new(25);
        b.add(21);
        let c = CategoryScore::new(20);
        let d = CategoryScore::new(12);
        let e = CategoryScore::new(8);

        let breakdown = ScoreBreakdown::from_categories(vec![
            (Category::KeywordOptimization, a),
            (Category::ContentStructure, b),
            (Category::ContentLength, c),
            (Category::MetaQuality, d),
            (Category::Enrichment, e),
        ]);
        // 41/100 earned
        assert_eq!(breakdown.score, 41);
    }

    #[test]
    fn test_empty_categories_score_zero() {
        let breakdown = ScoreBreakdown::from_categories(vec![]);
        assert_eq!(breakdown.score, 0);
    }

    #[test]
    fn test_serialized_shape() {
        let mut cat = CategoryScore::new(8);
        cat.add(4);
        cat.detail("has_image", true);
        let breakdown = ScoreBreakdown::from_categories(vec![(Category::Enrichment, cat)]);

        let json = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(json["score"], 50);
        assert_eq!(json["breakdown"]["enrichment"]["score"], 4);
        assert_eq!(json["breakdown"]["enrichment"]["max"], 8);
        assert_eq!(json["breakdown"]["enrichment"]["details"]["has_image"], true);
    }
}
