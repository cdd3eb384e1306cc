//! HTML result-page generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use std::path::Path;

use anyhow::{Context, Result};

use tryoutscore_core::locale::score_band_color;
use tryoutscore_core::model::Category;
use tryoutscore_core::report::ExamReport;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML result page from an exam report.
pub fn generate_html(report: &ExamReport) -> String {
    let locale = report.locale;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>tryoutscore result — {}</title>\n",
        html_escape(&report.exam.name)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>Exam Result</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Exam: <strong>{}</strong> | {}/{} answered | {}</p>\n",
        html_escape(&report.exam.name),
        report.exam.answered_count,
        report.exam.question_count,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Total score hero
    let total = report.scores.total;
    html.push_str("<section class=\"hero\">\n");
    html.push_str(&format!(
        "<span class=\"total\" style=\"color:{}\">{}</span>\n",
        score_band_color(total),
        total
    ));
    html.push_str(&format!(
        "<span class=\"band\" style=\"color:{}\">{}</span>\n",
        score_band_color(total),
        html_escape(locale.score_band_label(total))
    ));
    html.push_str("</section>\n");

    // Per-category score bars
    html.push_str("<section class=\"categories\">\n");
    html.push_str("<h2>Category Scores</h2>\n");
    for category in Category::ALL {
        let entry = report.scores.category(category);
        html.push_str("<div class=\"category\">\n");
        html.push_str(&format!(
            "<div class=\"category-head\"><span>{}</span><span>{}</span></div>\n",
            html_escape(locale.category_name(category)),
            entry.score
        ));
        html.push_str(&format!(
            "<div class=\"bar\"><div class=\"fill\" style=\"width:{}%;background:{}\"></div></div>\n",
            entry.score,
            score_band_color(entry.score)
        ));
        html.push_str("</div>\n");
    }
    html.push_str("</section>\n");

    // Recommendations, already ordered by priority
    html.push_str("<section class=\"recommendations\">\n");
    html.push_str("<h2>Study Priorities</h2>\n");
    for rec in &report.recommendations {
        html.push_str(&format!(
            "<div class=\"card\" style=\"border-left-color:{}\">\n",
            html_escape(&rec.color)
        ));
        html.push_str(&format!(
            "<h3>{} <span class=\"cefr\">{}</span></h3>\n",
            html_escape(&rec.category),
            html_escape(&rec.cefr_level)
        ));
        html.push_str(&format!(
            "<p class=\"label\" style=\"color:{}\">{} ({:.3})</p>\n",
            html_escape(&rec.color),
            html_escape(&rec.label),
            rec.priority_score
        ));
        html.push_str(&format!(
            "<p>{}</p>\n",
            html_escape(&rec.recommendation)
        ));
        html.push_str("</div>\n");
    }
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>\n");
    html
}

/// Write an HTML result page to a file.
pub fn write_html_report(report: &ExamReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write HTML report to {}", path.display()))?;
    Ok(())
}

const CSS: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    max-width: 860px;
    margin: 0 auto;
    padding: 24px;
    color: #1f2937;
    background: #f9fafb;
}
header h1 { margin-bottom: 4px; }
.meta { color: #6b7280; margin-top: 0; }
.hero {
    text-align: center;
    background: #fff;
    border-radius: 12px;
    padding: 24px;
    margin: 16px 0;
    box-shadow: 0 1px 3px rgba(0,0,0,0.1);
}
.hero .total { font-size: 64px; font-weight: 700; display: block; }
.hero .band { font-size: 18px; font-weight: 600; }
.categories, .recommendations, .raw-data {
    background: #fff;
    border-radius: 12px;
    padding: 16px 24px;
    margin: 16px 0;
    box-shadow: 0 1px 3px rgba(0,0,0,0.1);
}
.category { margin: 12px 0; }
.category-head {
    display: flex;
    justify-content: space-between;
    font-weight: 600;
    margin-bottom: 4px;
}
.bar {
    height: 10px;
    background: #e5e7eb;
    border-radius: 5px;
    overflow: hidden;
}
.fill { height: 100%; border-radius: 5px; }
.card {
    border-left: 4px solid #e5e7eb;
    background: #f9fafb;
    border-radius: 0 8px 8px 0;
    padding: 8px 16px;
    margin: 12px 0;
}
.card h3 { margin: 4px 0; }
.card .label { font-weight: 600; margin: 4px 0; }
.cefr {
    font-size: 12px;
    font-weight: 600;
    background: #e5e7eb;
    border-radius: 9999px;
    padding: 2px 8px;
    vertical-align: middle;
}
pre { overflow-x: auto; font-size: 12px; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tryoutscore_core::locale::{localize_all, Locale};
    use tryoutscore_core::report::ExamSummary;
    use tryoutscore_core::saw::rank;
    use tryoutscore_core::scorer::{CategoryScore, ExamScores};

    fn make_report(name: &str) -> ExamReport {
        let entry = |score| CategoryScore {
            score,
            ..Default::default()
        };
        let scores = ExamScores {
            grammar: entry(40),
            vocab: entry(90),
            reading: entry(70),
            cloze: entry(55),
            total: 64,
        };
        let recommendations = localize_all(&rank(&scores), Locale::Id);
        ExamReport::new(
            ExamSummary {
                id: "tryout-1".into(),
                name: name.into(),
                question_count: 40,
                answered_count: 38,
            },
            Locale::Id,
            scores,
            recommendations,
        )
    }

    #[test]
    fn html_contains_scores_and_names() {
        let html = generate_html(&make_report("Paket Tryout 1"));
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("Paket Tryout 1"));
        assert!(html.contains("Tata Bahasa"));
        assert!(html.contains("Tes Rumpang"));
        assert!(html.contains("38/40 answered"));
        // Total 64 sits in the yellow band.
        assert!(html.contains("#ca8a04"));
    }

    #[test]
    fn html_orders_recommendations_by_priority() {
        let report = make_report("Paket");
        let html = generate_html(&report);
        // Grammar (score 40) must be rendered before vocab (score 90).
        let grammar_card = html.find("<h3>Tata Bahasa").unwrap();
        let vocab_card = html.find("<h3>Kosakata").unwrap();
        assert!(grammar_card < vocab_card);
    }

    #[test]
    fn html_escapes_exam_name() {
        let html = generate_html(&make_report("<script>alert(1)</script>"));
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("result.html");
        write_html_report(&make_report("Paket"), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Exam Result"));
    }
}
