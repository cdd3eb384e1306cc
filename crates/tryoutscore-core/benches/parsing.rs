use std::fmt::Write as _;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tryoutscore_core::parser::parse_bank_str;

fn make_bank_toml(n: usize) -> String {
    let categories = ["grammar", "vocab", "reading", "cloze"];
    let mut toml = String::from(
        "[bank]\nid = \"bench\"\nname = \"Bench Bank\"\ndescription = \"generated\"\n",
    );

    for i in 0..n {
        let _ = write!(
            toml,
            "\n[[questions]]\nid = \"q{i}\"\ncategory = \"{}\"\ndifficulty = {}\nweight = {}\n\
             text = \"Question number {i}\"\n\
             options = [\"one\", \"two\", \"three\", \"four\", \"five\"]\ncorrect_answer = \"A\"\n",
            categories[i % 4],
            i % 3 + 1,
            i % 3 + 1,
        );
    }

    toml
}

fn bench_parse_bank(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_bank");
    let path = PathBuf::from("bench.toml");

    for &n in &[40usize, 400] {
        let content = make_bank_toml(n);
        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| parse_bank_str(black_box(&content), black_box(&path)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_bank);
criterion_main!(benches);
