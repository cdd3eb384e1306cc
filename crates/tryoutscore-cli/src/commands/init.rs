//! The `tryoutscore init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create example bank
    std::fs::create_dir_all("banks")?;
    let bank_path = std::path::Path::new("banks/example.toml");
    if bank_path.exists() {
        println!("banks/example.toml already exists, skipping.");
    } else {
        std::fs::write(bank_path, EXAMPLE_BANK)?;
        println!("Created banks/example.toml");
    }

    // Create example answer sheet
    std::fs::create_dir_all("answers")?;
    let answers_path = std::path::Path::new("answers/example.json");
    if answers_path.exists() {
        println!("answers/example.json already exists, skipping.");
    } else {
        std::fs::write(answers_path, EXAMPLE_ANSWERS)?;
        println!("Created answers/example.json");
    }

    println!("\nNext steps:");
    println!("  1. Run: tryoutscore validate --bank banks/example.toml");
    println!("  2. Run: tryoutscore score --bank banks/example.toml --answers answers/example.json");

    Ok(())
}

const EXAMPLE_BANK: &str = r#"[bank]
id = "example"
name = "Example Tryout Package"
description = "A small package covering all four categories"

[[questions]]
id = "g1"
category = "grammar"
difficulty = 1
weight = 1
text = "She ___ to the office every day."
options = ["go", "goes", "going", "gone", "went"]
correct_answer = "B"

[[questions]]
id = "g2"
category = "grammar"
difficulty = 3
weight = 2
text = "Had I ___ about the delay, I would have left earlier."
options = ["know", "knew", "known", "knowing", "knows"]
correct_answer = "C"

[[questions]]
id = "v1"
category = "vocab"
difficulty = 1
weight = 1
text = "Choose the word closest in meaning to 'rapid'."
options = ["slow", "quick", "heavy", "dull", "late"]
correct_answer = "B"

[[questions]]
id = "v2"
category = "vocab"
difficulty = 2
weight = 1
text = "The committee finally reached a unanimous ___."
options = ["decision", "decide", "decisive", "decidedly", "deciding"]
correct_answer = "A"

[[questions]]
id = "r1"
category = "reading"
difficulty = 2
weight = 2
text = "According to the passage, why did the factory reduce its output?"
options = [
    "Falling demand",
    "New regulations",
    "A labor strike",
    "Equipment failure",
    "Rising material costs",
]
correct_answer = "E"

[[questions]]
id = "r2"
category = "reading"
difficulty = 2
weight = 1
text = "What is the main idea of the second paragraph?"
options = [
    "The history of the company",
    "The impact of automation on workers",
    "A comparison of two production methods",
    "The author's personal experience",
    "Future plans for expansion",
]
correct_answer = "B"

[[questions]]
id = "c1"
category = "cloze"
difficulty = 2
weight = 1
text = "The project was completed ___ schedule despite the setbacks."
options = ["ahead of", "ahead on", "before of", "forward of", "in front of"]
correct_answer = "A"

[[questions]]
id = "c2"
category = "cloze"
difficulty = 3
weight = 2
text = "___ the evidence presented, the committee remained unconvinced."
options = ["Despite of", "Notwithstanding", "Even", "Whereas", "Albeit"]
correct_answer = "B"
"#;

const EXAMPLE_ANSWERS: &str = r#"{
  "g1": "B",
  "g2": "A",
  "v1": "B",
  "v2": "A",
  "r1": "E",
  "c1": "C",
  "c2": "B"
}
"#;
