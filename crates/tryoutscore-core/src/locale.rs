//! Display-string tables for the supported locales.
//!
//! The scoring engine deals only in canonical keys and typed levels;
//! every human-readable string lives here.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidField;
use crate::model::Category;
use crate::saw::{Advice, PriorityLevel, PriorityRecommendation};

/// Supported display languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Bahasa Indonesia, the platform's primary language.
    #[default]
    Id,
    /// English.
    En,
}

impl FromStr for Locale {
    type Err = InvalidField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" => Ok(Locale::Id),
            "en" => Ok(Locale::En),
            other => Err(InvalidField::Locale(other.to_string())),
        }
    }
}

impl Locale {
    /// Localized category display name.
    pub fn category_name(self, category: Category) -> &'static str {
        match (self, category) {
            (Locale::Id, Category::Grammar) => "Tata Bahasa",
            (Locale::Id, Category::Vocab) => "Kosakata",
            (Locale::Id, Category::Reading) => "Pemahaman Bacaan",
            (Locale::Id, Category::Cloze) => "Tes Rumpang",
            (Locale::En, Category::Grammar) => "Grammar",
            (Locale::En, Category::Vocab) => "Vocabulary",
            (Locale::En, Category::Reading) => "Reading Comprehension",
            (Locale::En, Category::Cloze) => "Cloze Test",
        }
    }

    /// Localized severity label.
    pub fn priority_label(self, level: PriorityLevel) -> &'static str {
        match (self, level) {
            (Locale::Id, PriorityLevel::Critical) => "Prioritas Kritis",
            (Locale::Id, PriorityLevel::High) => "Prioritas Tinggi",
            (Locale::Id, PriorityLevel::Medium) => "Prioritas Sedang",
            (Locale::Id, PriorityLevel::Low) => "Prioritas Rendah",
            (Locale::En, PriorityLevel::Critical) => "Critical Priority",
            (Locale::En, PriorityLevel::High) => "High Priority",
            (Locale::En, PriorityLevel::Medium) => "Medium Priority",
            (Locale::En, PriorityLevel::Low) => "Low Priority",
        }
    }

    /// Localized study guidance for a category.
    pub fn advice_text(self, advice: Advice, category: Category) -> String {
        let name = self.category_name(category);
        match (self, advice) {
            (Locale::Id, Advice::ReinforceFoundation) => format!(
                "Fokus kembali pada konsep dasar {name}. \
                 Fondasi Anda di level A1/A2 masih perlu diperkuat."
            ),
            (Locale::Id, Advice::BuildContext) => format!(
                "Tingkatkan pemahaman konteks dan variasi soal untuk {name} \
                 level Menengah (B1/B2)."
            ),
            (Locale::Id, Advice::Maintain) => {
                "Pertahankan performa! Fokus pada detail halus dan pengecualian \
                 aturan untuk mencapai level Advanced (C1/C2)."
                    .to_string()
            }
            (Locale::En, Advice::ReinforceFoundation) => format!(
                "Go back to the fundamentals of {name}. \
                 Your A1/A2 foundation still needs strengthening."
            ),
            (Locale::En, Advice::BuildContext) => format!(
                "Work on context comprehension and question variety for {name} \
                 at the intermediate (B1/B2) level."
            ),
            (Locale::En, Advice::Maintain) => {
                "Keep up the performance! Focus on fine details and rule \
                 exceptions to reach the advanced (C1/C2) level."
                    .to_string()
            }
        }
    }

    /// Overall score band label, used for the total and per-category
    /// scores.
    pub fn score_band_label(self, score: u8) -> &'static str {
        match self {
            Locale::Id => {
                if score >= 80 {
                    "Sangat Baik"
                } else if score >= 60 {
                    "Baik"
                } else {
                    "Perlu Peningkatan"
                }
            }
            Locale::En => {
                if score >= 80 {
                    "Excellent"
                } else if score >= 60 {
                    "Good"
                } else {
                    "Needs Improvement"
                }
            }
        }
    }
}

/// Display color for a score band.
pub fn score_band_color(score: u8) -> &'static str {
    if score >= 80 {
        "#16a34a"
    } else if score >= 60 {
        "#ca8a04"
    } else {
        "#dc2626"
    }
}

/// A recommendation rendered for one locale, ready for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedRecommendation {
    /// Localized display name.
    pub category: String,
    /// Canonical category key.
    pub category_key: String,
    /// The category's exam score, 0-100.
    pub raw_score: u8,
    pub priority_score: f64,
    /// Hex color of the severity band.
    pub color: String,
    /// Localized severity label.
    pub label: String,
    /// Localized study guidance.
    pub recommendation: String,
    /// CEFR estimate, e.g. "B1" or "C1/C2".
    pub cefr_level: String,
}

impl PriorityRecommendation {
    /// Render with one locale's string tables.
    pub fn localized(&self, locale: Locale) -> LocalizedRecommendation {
        LocalizedRecommendation {
            category: locale.category_name(self.category).to_string(),
            category_key: self.category.key().to_string(),
            raw_score: self.raw_score,
            priority_score: self.priority_score,
            color: self.level.color_hex().to_string(),
            label: locale.priority_label(self.level).to_string(),
            recommendation: locale.advice_text(self.advice, self.category),
            cefr_level: self.cefr.to_string(),
        }
    }
}

/// Localize a full ranking, preserving order.
pub fn localize_all(
    recommendations: &[PriorityRecommendation],
    locale: Locale,
) -> Vec<LocalizedRecommendation> {
    recommendations.iter().map(|r| r.localized(locale)).collect()
}
