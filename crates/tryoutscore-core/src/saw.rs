//! SAW (Simple Additive Weighting) learning-priority ranking.
//!
//! Converts category scores into a ranked list of study
//! recommendations. Each category's room for improvement is treated as
//! a cost criterion, multiplied by the category weight, and amplified
//! when the student struggles at the foundation tier.

use serde::{Deserialize, Serialize};

use crate::cefr::{determine_cefr, CefrLevel};
use crate::model::Category;
use crate::scorer::{DifficultyBreakdown, ExamScores};

/// Per-category criterion weights. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SawWeights {
    pub cloze: f64,
    pub grammar: f64,
    pub reading: f64,
    pub vocab: f64,
}

impl Default for SawWeights {
    /// Cloze carries the most weight: it is usually the hardest section.
    fn default() -> Self {
        Self {
            cloze: 0.30,
            grammar: 0.25,
            reading: 0.25,
            vocab: 0.20,
        }
    }
}

impl SawWeights {
    /// Weight for one category.
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Grammar => self.grammar,
            Category::Vocab => self.vocab,
            Category::Reading => self.reading,
            Category::Cloze => self.cloze,
        }
    }

    /// Whether the four weights sum to 1 within a 0.001 tolerance.
    pub fn is_normalized(&self) -> bool {
        let sum = self.cloze + self.grammar + self.reading + self.vocab;
        (sum - 1.0).abs() <= 1e-3
    }
}

/// Priority-score thresholds, checked in descending order.
pub const CRITICAL_THRESHOLD: f64 = 0.25;
pub const HIGH_THRESHOLD: f64 = 0.20;
pub const MEDIUM_THRESHOLD: f64 = 0.15;

/// Severity band of a priority score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    Critical,
    High,
    Medium,
    Low,
}

impl PriorityLevel {
    /// Band for a priority score; first matching threshold wins.
    pub fn from_priority(score: f64) -> Self {
        if score >= CRITICAL_THRESHOLD {
            PriorityLevel::Critical
        } else if score >= HIGH_THRESHOLD {
            PriorityLevel::High
        } else if score >= MEDIUM_THRESHOLD {
            PriorityLevel::Medium
        } else {
            PriorityLevel::Low
        }
    }

    /// Fixed display color.
    pub fn color_hex(self) -> &'static str {
        match self {
            PriorityLevel::Critical => "#ef4444",
            PriorityLevel::High => "#f97316",
            PriorityLevel::Medium => "#eab308",
            PriorityLevel::Low => "#22c55e",
        }
    }
}

/// Which kind of study guidance applies to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advice {
    /// Weak at the easiest tier: revisit the basics.
    ReinforceFoundation,
    /// The foundation holds but the score has room: broaden context
    /// and question variety.
    BuildContext,
    /// Strong performance: polish details toward the advanced tiers.
    Maintain,
}

/// One ranked study recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriorityRecommendation {
    pub category: Category,
    /// The category's exam score, 0-100.
    pub raw_score: u8,
    /// cost x weight x foundation multiplier, rounded to 3 decimals.
    pub priority_score: f64,
    pub level: PriorityLevel,
    pub cefr: CefrLevel,
    pub advice: Advice,
}

/// Rank categories by study priority using the default weights.
pub fn rank(scores: &ExamScores) -> Vec<PriorityRecommendation> {
    rank_weighted(scores, &SawWeights::default())
}

/// Rank categories by study priority.
///
/// The overall total is not a criterion; only the four categories
/// compete. Output is sorted by descending priority score; ties keep
/// the canonical category order.
pub fn rank_weighted(scores: &ExamScores, weights: &SawWeights) -> Vec<PriorityRecommendation> {
    let mut recommendations: Vec<PriorityRecommendation> = Category::ALL
        .iter()
        .map(|&category| {
            let entry = scores.category(category);

            let raw_cost = (100.0 - f64::from(entry.score)) / 100.0;
            // Failing the easiest tier signals a structural gap, so the
            // priority is amplified by up to 1.5x.
            let foundation_multiplier = 1.0 + entry.difficulty.foundation.error_rate() * 0.5;
            let priority = raw_cost * weights.get(category) * foundation_multiplier;

            // The severity band is taken from the unrounded score, the
            // stored value is rounded.
            PriorityRecommendation {
                category,
                raw_score: entry.score,
                priority_score: round3(priority),
                level: PriorityLevel::from_priority(priority),
                cefr: determine_cefr(&entry.difficulty),
                advice: advice_for(entry.score, &entry.difficulty),
            }
        })
        .collect();

    recommendations.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));
    recommendations
}

/// Pick the advice tier for a category.
///
/// With no foundation-tier data the rate is assumed perfect (1.0),
/// unlike the CEFR estimate which assumes 0. The asymmetry matches the
/// product behavior and is pinned by tests.
fn advice_for(score: u8, difficulty: &DifficultyBreakdown) -> Advice {
    let l1_rate = if difficulty.foundation.total > 0 {
        difficulty.foundation.rate()
    } else {
        1.0
    };

    if l1_rate < 0.7 {
        Advice::ReinforceFoundation
    } else if score < 80 {
        Advice::BuildContext
    } else {
        Advice::Maintain
    }
}

/// Round to three decimal places.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
