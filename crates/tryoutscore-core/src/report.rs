//! Exam report artifact with JSON persistence and attempt comparison.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::locale::{Locale, LocalizedRecommendation};
use crate::model::Category;
use crate::scorer::ExamScores;

/// A complete scored exam attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the attempt was scored.
    pub created_at: DateTime<Utc>,
    /// Summary of the exam package.
    pub exam: ExamSummary,
    /// Locale the recommendation strings were rendered with.
    pub locale: Locale,
    /// Per-category scores plus total.
    pub scores: ExamScores,
    /// Ranked study recommendations.
    pub recommendations: Vec<LocalizedRecommendation>,
}

/// Summary of an exam package (without the question definitions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamSummary {
    pub id: String,
    pub name: String,
    pub question_count: usize,
    pub answered_count: usize,
}

impl ExamReport {
    /// Assemble a freshly scored attempt.
    pub fn new(
        exam: ExamSummary,
        locale: Locale,
        scores: ExamScores,
        recommendations: Vec<LocalizedRecommendation>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            exam,
            locale,
            scores,
            recommendations,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: ExamReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Compare this attempt against an earlier one.
    ///
    /// `threshold` is in score points; category moves within it count
    /// as unchanged.
    pub fn compare(&self, baseline: &ExamReport, threshold: u8) -> ProgressReport {
        let mut improved = Vec::new();
        let mut declined = Vec::new();
        let mut unchanged = 0usize;

        for category in Category::ALL {
            let baseline_score = baseline.scores.category(category).score;
            let current_score = self.scores.category(category).score;
            let delta = i32::from(current_score) - i32::from(baseline_score);

            let entry = CategoryDelta {
                category: category.key().to_string(),
                baseline_score,
                current_score,
                delta,
            };

            if delta > i32::from(threshold) {
                improved.push(entry);
            } else if delta < -i32::from(threshold) {
                declined.push(entry);
            } else {
                unchanged += 1;
            }
        }

        ProgressReport {
            improved,
            declined,
            unchanged,
            total_delta: i32::from(self.scores.total) - i32::from(baseline.scores.total),
        }
    }
}

/// Result of comparing two attempts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Categories that moved up past the threshold.
    pub improved: Vec<CategoryDelta>,
    /// Categories that moved down past the threshold.
    pub declined: Vec<CategoryDelta>,
    /// Categories within the threshold.
    pub unchanged: usize,
    /// Total-score movement.
    pub total_delta: i32,
}

/// One category's movement between attempts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDelta {
    pub category: String,
    pub baseline_score: u8,
    pub current_score: u8,
    pub delta: i32,
}

impl ProgressReport {
    /// Format the progress report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**Summary:** {} improved, {} declined, {} unchanged (total {:+})\n\n",
            self.improved.len(),
            self.declined.len(),
            self.unchanged,
            self.total_delta,
        ));

        if !self.declined.is_empty() {
            md.push_str("### Declined\n\n");
            md.push_str("| Category | Baseline | Current | Delta |\n");
            md.push_str("|----------|----------|---------|-------|\n");
            for d in &self.declined {
                md.push_str(&format!(
                    "| {} | {} | {} | {:+} |\n",
                    d.category, d.baseline_score, d.current_score, d.delta
                ));
            }
            md.push('\n');
        }

        if !self.improved.is_empty() {
            md.push_str("### Improved\n\n");
            md.push_str("| Category | Baseline | Current | Delta |\n");
            md.push_str("|----------|----------|---------|-------|\n");
            for i in &self.improved {
                md.push_str(&format!(
                    "| {} | {} | {} | {:+} |\n",
                    i.category, i.baseline_score, i.current_score, i.delta
                ));
            }
        }

        md
    }

    /// Returns true if any category declined.
    pub fn has_declines(&self) -> bool {
        !self.declined.is_empty()
    }
}
