//! The `tryoutscore compare` command.

use std::path::PathBuf;

use anyhow::Result;

use tryoutscore_core::report::ExamReport;

pub fn execute(
    baseline_path: PathBuf,
    current_path: PathBuf,
    threshold: u8,
    fail_on_decline: bool,
    format: String,
) -> Result<()> {
    let baseline = ExamReport::load_json(&baseline_path)?;
    let current = ExamReport::load_json(&current_path)?;

    let progress = current.compare(&baseline, threshold);

    match format.as_str() {
        "markdown" | "md" => {
            println!("{}", progress.to_markdown());
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&progress)?);
        }
        _ => {
            // text format
            println!(
                "Comparison: {} improved, {} declined, {} unchanged (total {:+})",
                progress.improved.len(),
                progress.declined.len(),
                progress.unchanged,
                progress.total_delta
            );

            if !progress.declined.is_empty() {
                println!("\nDeclined:");
                for d in &progress.declined {
                    println!(
                        "  {} {} -> {} ({:+})",
                        d.category, d.baseline_score, d.current_score, d.delta
                    );
                }
            }

            if !progress.improved.is_empty() {
                println!("\nImproved:");
                for i in &progress.improved {
                    println!(
                        "  {} {} -> {} ({:+})",
                        i.category, i.baseline_score, i.current_score, i.delta
                    );
                }
            }
        }
    }

    if fail_on_decline && progress.has_declines() {
        std::process::exit(1);
    }

    Ok(())
}
