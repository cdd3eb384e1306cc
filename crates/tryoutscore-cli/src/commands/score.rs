//! The `tryoutscore score` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use tryoutscore_core::locale::{localize_all, Locale};
use tryoutscore_core::model::Category;
use tryoutscore_core::parser;
use tryoutscore_core::report::{ExamReport, ExamSummary};
use tryoutscore_core::saw::{rank_weighted, SawWeights};
use tryoutscore_core::scorer::score_exam;
use tryoutscore_report::html::write_html_report;

pub fn execute(
    bank_path: PathBuf,
    answers_path: PathBuf,
    locale_str: String,
    weights_str: Option<String>,
    output: PathBuf,
    format: String,
) -> Result<()> {
    let locale: Locale = locale_str.parse()?;

    let weights = match &weights_str {
        Some(s) => parse_weights(s)?,
        None => SawWeights::default(),
    };
    anyhow::ensure!(
        weights.is_normalized(),
        "category weights must sum to 1.0"
    );

    let bank = parser::parse_bank(&bank_path)?;
    let answers = parser::parse_answer_sheet(&answers_path)?;

    let scores = score_exam(&bank.questions, &answers);
    let ranked = rank_weighted(&scores, &weights);
    let recommendations = localize_all(&ranked, locale);

    let answered_count = bank
        .questions
        .iter()
        .filter(|q| answers.contains_key(&q.id))
        .count();

    let report = ExamReport::new(
        ExamSummary {
            id: bank.id.clone(),
            name: bank.name.clone(),
            question_count: bank.questions.len(),
            answered_count,
        },
        locale,
        scores,
        recommendations,
    );

    print_summary(&report);

    std::fs::create_dir_all(&output)?;
    let timestamp = report.created_at.format("%Y-%m-%dT%H%M%S");

    let formats: Vec<&str> = if format == "all" {
        vec!["json", "html"]
    } else {
        format.split(',').map(|s| s.trim()).collect()
    };

    for fmt in &formats {
        match *fmt {
            "json" => {
                let path = output.join(format!("report-{timestamp}.json"));
                report.save_json(&path)?;
                eprintln!("Report saved to: {}", path.display());
            }
            "html" => {
                let path = output.join(format!("report-{timestamp}.html"));
                write_html_report(&report, &path)?;
                eprintln!("HTML report: {}", path.display());
            }
            _ => {
                eprintln!("Unknown format: {fmt}");
            }
        }
    }

    Ok(())
}

/// Parse "cloze=0.3,grammar=0.25,..." into a full weight set. Unlisted
/// categories keep their default weight.
fn parse_weights(s: &str) -> Result<SawWeights> {
    let mut weights = SawWeights::default();

    for pair in s.split(',') {
        let (key, value) = pair
            .trim()
            .split_once('=')
            .with_context(|| format!("invalid weight entry: '{}'", pair.trim()))?;
        let value: f64 = value
            .trim()
            .parse()
            .with_context(|| format!("invalid weight value: '{}'", value.trim()))?;

        match key.trim().parse::<Category>()? {
            Category::Grammar => weights.grammar = value,
            Category::Vocab => weights.vocab = value,
            Category::Reading => weights.reading = value,
            Category::Cloze => weights.cloze = value,
        }
    }

    Ok(weights)
}

fn print_summary(report: &ExamReport) {
    let locale = report.locale;

    let mut table = Table::new();
    table.set_header(vec!["Category", "Score", "CEFR", "Priority", "Label"]);

    for rec in &report.recommendations {
        table.add_row(vec![
            Cell::new(&rec.category),
            Cell::new(rec.raw_score),
            Cell::new(&rec.cefr_level),
            Cell::new(format!("{:.3}", rec.priority_score)),
            Cell::new(&rec.label),
        ]);
    }

    eprintln!("\n{table}");
    eprintln!(
        "Total: {} ({}) — answered {}/{}",
        report.scores.total,
        locale.score_band_label(report.scores.total),
        report.exam.answered_count,
        report.exam.question_count
    );
    eprintln!();
    for rec in &report.recommendations {
        eprintln!("  [{}] {}: {}", rec.label, rec.category, rec.recommendation);
    }
    eprintln!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_weights_overrides_listed_categories() {
        let weights = parse_weights("cloze=0.4, grammar=0.2").unwrap();
        assert!((weights.cloze - 0.4).abs() < 1e-9);
        assert!((weights.grammar - 0.2).abs() < 1e-9);
        assert!((weights.reading - 0.25).abs() < 1e-9);
        assert!((weights.vocab - 0.2).abs() < 1e-9);
    }

    #[test]
    fn parse_weights_rejects_garbage() {
        assert!(parse_weights("cloze").is_err());
        assert!(parse_weights("cloze=abc").is_err());
        assert!(parse_weights("listening=0.5").is_err());
    }
}
