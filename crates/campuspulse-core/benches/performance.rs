// Rust guideline compliant 2026-10-16

use campuspulse_core::{classify, Category, Issue, Storage, StressLevel};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::TempDir;

const DESCRIPTIONS: [&str; 4] = [
    "Water leakage in Block B Room 302 causing electrical sparks.",
    "Feeling overwhelmed with exams and having severe panic attacks.",
    "Inquiry regarding credit transfer for summer internship.",
    "Broken AC in library common area.",
];

fn build_issues(count: usize) -> Vec<Issue> {
    (0..count)
        .map(|i| {
            let mut issue = Issue::new(
                format!("ROLL{}", i),
                Category::ALL[i % Category::ALL.len()],
                DESCRIPTIONS[i % DESCRIPTIONS.len()].to_string(),
                StressLevel::ALL[i % StressLevel::ALL.len()],
                i % 3 == 0,
                "Engineering".to_string(),
                1_700_000_000 + i as i64,
            );
            issue.id = format!("iss-{:06x}", i);
            issue
        })
        .collect()
}

fn bench_classify_short(c: &mut Criterion) {
    c.bench_function("classify_short", |b| {
        b.iter(|| {
            classify(
                black_box("Broken AC in library common area."),
                black_box(StressLevel::Low),
                black_box(Category::Facilities),
            )
        })
    });
}

fn bench_classify_long_keyword_free(c: &mut Criterion) {
    let text = "nothing to report here ".repeat(400);
    c.bench_function("classify_long_keyword_free", |b| {
        b.iter(|| classify(black_box(&text), StressLevel::Low, Category::Academic))
    });
}

fn bench_load_all(c: &mut Criterion) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let storage =
        Storage::new(temp_dir.path().join("issues.jsonl")).expect("Failed to create storage");
    storage
        .save_all(&build_issues(1000))
        .expect("Failed to save benchmark issues");

    c.bench_function("load_all_1000", |b| b.iter(|| black_box(storage.load_all())));
}

criterion_group!(
    benches,
    bench_classify_short,
    bench_classify_long_keyword_free,
    bench_load_all
);
criterion_main!(benches);
