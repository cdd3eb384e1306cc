//! TOML question-bank parser and validation.
//!
//! Loads banks from TOML files and directories, and checks them for
//! the data-entry problems admins commonly introduce. Also loads JSON
//! answer sheets.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{AnswerSheet, Choice, Question, QuestionBank};

/// Intermediate TOML structure for bank files.
#[derive(Debug, Deserialize)]
struct TomlBankFile {
    bank: TomlBankHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlBankHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    category: String,
    #[serde(default)]
    difficulty: Option<u8>,
    #[serde(default)]
    weight: Option<u32>,
    correct_answer: String,
    #[serde(default)]
    text: String,
    #[serde(default)]
    options: Vec<String>,
}

/// Parse a single TOML file into a `QuestionBank`.
pub fn parse_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read bank file: {}", path.display()))?;

    parse_bank_str(&content, path)
}

/// Parse a TOML string into a `QuestionBank` (useful for testing).
pub fn parse_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let correct_answer: Choice = q.correct_answer.parse().with_context(|| {
                format!(
                    "question '{}': bad correct_answer '{}'",
                    q.id, q.correct_answer
                )
            })?;

            Ok(Question {
                id: q.id,
                category: q.category,
                difficulty: q.difficulty,
                weight: q.weight,
                correct_answer,
                text: q.text,
                options: q.options,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(QuestionBank {
        id: parsed.bank.id,
        name: parsed.bank.name,
        description: parsed.bank.description,
        questions,
    })
}

/// Recursively load all `.toml` bank files from a directory.
pub fn load_bank_directory(dir: &Path) -> Result<Vec<QuestionBank>> {
    let mut banks = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            banks.extend(load_bank_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_bank(&path) {
                Ok(bank) => banks.push(bank),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(banks)
}

/// A warning from bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a bank for common data-entry issues.
///
/// These are warnings, not errors: the scorer degrades gracefully on
/// all of them, but an admin probably wants to know.
pub fn validate_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let mut warn = |question_id: Option<&str>, message: String| {
        warnings.push(ValidationWarning {
            question_id: question_id.map(str::to_string),
            message,
        });
    };

    let mut seen_ids = HashSet::new();
    for q in &bank.questions {
        if !seen_ids.insert(&q.id) {
            warn(Some(&q.id), format!("duplicate question ID: {}", q.id));
        }
    }

    for q in &bank.questions {
        if q.scored_category().is_none() {
            warn(
                Some(&q.id),
                format!("category '{}' is not scored and will be ignored", q.category),
            );
        }

        if let Some(d) = q.difficulty {
            if !(1..=3).contains(&d) {
                warn(
                    Some(&q.id),
                    format!("difficulty {d} is outside 1-3 and will be clamped"),
                );
            }
        }

        if q.weight == Some(0) {
            warn(Some(&q.id), "weight 0 counts as 1 when scoring".into());
        }

        if q.text.trim().is_empty() {
            warn(Some(&q.id), "question text is empty".into());
        }

        if !q.options.is_empty() {
            if q.options.len() != 5 {
                warn(
                    Some(&q.id),
                    format!("expected 5 options, found {}", q.options.len()),
                );
            }
            if q.correct_answer.index() >= q.options.len() {
                warn(
                    Some(&q.id),
                    format!("correct answer {} has no option text", q.correct_answer),
                );
            }
        }
    }

    if bank.questions.is_empty() {
        warn(None, "bank contains no questions".into());
    }

    warnings
}

/// Load a student answer sheet from a JSON file.
pub fn parse_answer_sheet(path: &Path) -> Result<AnswerSheet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answer sheet: {}", path.display()))?;

    parse_answer_sheet_str(&content)
        .with_context(|| format!("failed to parse answer sheet: {}", path.display()))
}

/// Parse a JSON answer sheet string.
///
/// The sheet maps question id to the chosen letter. Entries with an
/// unparseable letter are skipped with a warning: a partially usable
/// sheet still gets scored.
pub fn parse_answer_sheet_str(content: &str) -> Result<AnswerSheet> {
    let raw: HashMap<String, String> =
        serde_json::from_str(content).context("answer sheet is not a JSON object of strings")?;

    let mut sheet = AnswerSheet::new();
    for (question_id, letter) in raw {
        match letter.parse::<Choice>() {
            Ok(choice) => {
                sheet.insert(question_id, choice);
            }
            Err(e) => {
                tracing::warn!("skipping answer for '{question_id}': {e}");
            }
        }
    }

    Ok(sheet)
}
