//! Weighted category scoring over answered exam questions.
//!
//! Aggregates raw answers into per-category scores and per-difficulty
//! accuracy counters. Scoring is total: structurally incomplete input
//! degrades to neutral defaults and never fails.

use serde::{Deserialize, Serialize};

use crate::model::{AnswerSheet, Category, Difficulty, Question};

/// Correct/total counters for one difficulty tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelTally {
    pub correct: u32,
    pub total: u32,
}

impl LevelTally {
    /// Fraction answered correctly, 0 when the tier is empty.
    pub fn rate(&self) -> f64 {
        if self.total > 0 {
            f64::from(self.correct) / f64::from(self.total)
        } else {
            0.0
        }
    }

    /// Fraction answered incorrectly, 0 when the tier is empty.
    pub fn error_rate(&self) -> f64 {
        if self.total > 0 {
            f64::from(self.total - self.correct) / f64::from(self.total)
        } else {
            0.0
        }
    }
}

/// Accuracy counters keyed by difficulty level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyBreakdown {
    #[serde(rename = "1")]
    pub foundation: LevelTally,
    #[serde(rename = "2")]
    pub intermediate: LevelTally,
    #[serde(rename = "3")]
    pub advanced: LevelTally,
}

impl DifficultyBreakdown {
    /// Counters for one tier.
    pub fn tally(&self, level: Difficulty) -> &LevelTally {
        match level {
            Difficulty::Foundation => &self.foundation,
            Difficulty::Intermediate => &self.intermediate,
            Difficulty::Advanced => &self.advanced,
        }
    }

    pub fn tally_mut(&mut self, level: Difficulty) -> &mut LevelTally {
        match level {
            Difficulty::Foundation => &mut self.foundation,
            Difficulty::Intermediate => &mut self.intermediate,
            Difficulty::Advanced => &mut self.advanced,
        }
    }
}

/// Final score and difficulty accuracy for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    /// 0-100, rounded half away from zero.
    pub score: u8,
    #[serde(rename = "difficultyStats")]
    pub difficulty: DifficultyBreakdown,
}

/// Per-category scores plus the overall total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamScores {
    pub grammar: CategoryScore,
    pub vocab: CategoryScore,
    pub reading: CategoryScore,
    pub cloze: CategoryScore,
    /// Weighted total over every scored question, 0-100.
    pub total: u8,
}

impl ExamScores {
    /// Score entry for one category.
    pub fn category(&self, category: Category) -> &CategoryScore {
        match category {
            Category::Grammar => &self.grammar,
            Category::Vocab => &self.vocab,
            Category::Reading => &self.reading,
            Category::Cloze => &self.cloze,
        }
    }
}

/// Running totals while scoring one category.
#[derive(Debug, Clone, Copy, Default)]
struct CategoryTally {
    earned: u32,
    max: u32,
    difficulty: DifficultyBreakdown,
}

/// round(earned / max * 100) with the zero-denominator guard.
fn percentage(earned: u32, max: u32) -> u8 {
    if max == 0 {
        return 0;
    }
    ((f64::from(earned) / f64::from(max)) * 100.0).round() as u8
}

/// Score an exam: fold every question into its category bucket.
///
/// A question whose category is not one of the four known keys
/// contributes nothing anywhere. An absent answer counts as incorrect.
pub fn score_exam(questions: &[Question], answers: &AnswerSheet) -> ExamScores {
    let mut tallies = [CategoryTally::default(); 4];

    for question in questions {
        let Some(category) = question.scored_category() else {
            continue;
        };
        let weight = question.effective_weight();
        let level = question.effective_difficulty();

        let tally = &mut tallies[category as usize];
        tally.max += weight;
        tally.difficulty.tally_mut(level).total += 1;

        if answers.get(&question.id) == Some(&question.correct_answer) {
            tally.earned += weight;
            tally.difficulty.tally_mut(level).correct += 1;
        }
    }

    let total_earned: u32 = tallies.iter().map(|t| t.earned).sum();
    let total_max: u32 = tallies.iter().map(|t| t.max).sum();

    let entry = |t: &CategoryTally| CategoryScore {
        score: percentage(t.earned, t.max),
        difficulty: t.difficulty,
    };

    ExamScores {
        grammar: entry(&tallies[Category::Grammar as usize]),
        vocab: entry(&tallies[Category::Vocab as usize]),
        reading: entry(&tallies[Category::Reading as usize]),
        cloze: entry(&tallies[Category::Cloze as usize]),
        total: percentage(total_earned, total_max),
    }
}
