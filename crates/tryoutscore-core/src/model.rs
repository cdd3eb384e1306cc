//! Core data model types for tryoutscore.
//!
//! These are the fundamental types the whole system uses to represent
//! exam questions, student answers, and question banks.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidField;

/// The four scored exam categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Grammar,
    Vocab,
    Reading,
    Cloze,
}

impl Category {
    /// Canonical processing order. The ranker relies on it for stable
    /// tie-breaking.
    pub const ALL: [Category; 4] = [
        Category::Grammar,
        Category::Vocab,
        Category::Reading,
        Category::Cloze,
    ];

    /// Canonical lowercase key.
    pub fn key(self) -> &'static str {
        match self {
            Category::Grammar => "grammar",
            Category::Vocab => "vocab",
            Category::Reading => "reading",
            Category::Cloze => "cloze",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = InvalidField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "grammar" => Ok(Category::Grammar),
            "vocab" => Ok(Category::Vocab),
            "reading" => Ok(Category::Reading),
            "cloze" => Ok(Category::Cloze),
            other => Err(InvalidField::Category(other.to_string())),
        }
    }
}

/// One of the five multiple-choice answer letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Choice {
    A,
    B,
    C,
    D,
    E,
}

impl Choice {
    /// The uppercase letter.
    pub fn letter(self) -> char {
        match self {
            Choice::A => 'A',
            Choice::B => 'B',
            Choice::C => 'C',
            Choice::D => 'D',
            Choice::E => 'E',
        }
    }

    /// Zero-based position among the five options.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Choice {
    type Err = InvalidField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(Choice::A),
            "B" => Ok(Choice::B),
            "C" => Ok(Choice::C),
            "D" => Ok(Choice::D),
            "E" => Ok(Choice::E),
            other => Err(InvalidField::Choice(other.to_string())),
        }
    }
}

impl TryFrom<String> for Choice {
    type Error = InvalidField;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Choice> for String {
    fn from(choice: Choice) -> String {
        choice.letter().to_string()
    }
}

/// CEFR-aligned difficulty tier of a question.
///
/// Level 1 maps to A1/A2, level 2 to B1/B2, level 3 to C1/C2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Foundation,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Numeric level as stored in question data.
    pub fn level(self) -> u8 {
        match self {
            Difficulty::Foundation => 1,
            Difficulty::Intermediate => 2,
            Difficulty::Advanced => 3,
        }
    }

    /// Map a raw level, clamping out-of-range values. Zero counts as
    /// level 1, anything above 3 as level 3.
    pub fn from_level(level: u8) -> Difficulty {
        match level {
            0 | 1 => Difficulty::Foundation,
            2 => Difficulty::Intermediate,
            _ => Difficulty::Advanced,
        }
    }
}

/// One exam item as entered by administrators.
///
/// `category` stays a raw string: categorization is a lookup that may
/// miss, and questions with an unrecognized category are skipped by the
/// scorer rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier.
    pub id: String,
    /// Category name, matched case-insensitively against the four known
    /// keys.
    pub category: String,
    /// Difficulty level 1-3. Missing means level 1.
    #[serde(default)]
    pub difficulty: Option<u8>,
    /// Point value. Missing or zero means 1.
    #[serde(default)]
    pub weight: Option<u32>,
    /// The letter of the correct option.
    pub correct_answer: Choice,
    /// Question text shown to the student.
    #[serde(default)]
    pub text: String,
    /// Option texts in A-E order.
    #[serde(default)]
    pub options: Vec<String>,
}

impl Question {
    /// Effective point value.
    pub fn effective_weight(&self) -> u32 {
        match self.weight {
            Some(w) if w > 0 => w,
            _ => 1,
        }
    }

    /// Effective difficulty tier.
    pub fn effective_difficulty(&self) -> Difficulty {
        Difficulty::from_level(self.difficulty.unwrap_or(1))
    }

    /// Resolve the category against the known set.
    pub fn scored_category(&self) -> Option<Category> {
        self.category.parse().ok()
    }
}

/// Mapping from question id to the letter the student picked.
/// Unanswered questions are simply absent.
pub type AnswerSheet = HashMap<String, Choice>;

/// A named collection of questions, the unit admins assemble into
/// tryout packages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBank {
    /// Unique identifier for this bank.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Description of the package.
    #[serde(default)]
    pub description: String,
    /// The questions in this bank.
    #[serde(default)]
    pub questions: Vec<Question>,
}
