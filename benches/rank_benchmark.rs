//! Benchmarks for docrank scoring and ranking.
//!
//! Run with: cargo bench
//!
//! Documents are synthetic and held in memory, so only the analysis stages
//! are measured.

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use docrank::analysis::rank_sections;
use docrank::{
    Analyzer, DocumentSet, KeywordProvider, MemoryPage, MemorySource, PageScorer, RunInputs,
    ScoredSection, StaticKeywords,
};

const FILLER: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do \
                      eiusmod tempor incididunt ut labore et dolore magna aliqua.";

/// Creates a synthetic document where every third page mentions kinetics.
fn create_test_document(page_count: usize) -> MemorySource {
    (0..page_count)
        .map(|i| {
            let body = if i % 3 == 0 {
                format!(
                    "Section {}\nThe reaction rate follows a first-order rate law. {}",
                    i + 1,
                    FILLER
                )
            } else {
                format!("Section {}\n{}", i + 1, FILLER.repeat(4))
            };
            MemoryPage::with_text(body)
                .with_run(format!("Section {} Heading", i + 1), 16.0)
                .with_run(FILLER, 10.0)
        })
        .collect()
}

fn create_test_set(documents: usize, pages: usize) -> DocumentSet {
    (0..documents).fold(DocumentSet::new(), |set, i| {
        set.with_document(format!("doc_{:03}.pdf", i), create_test_document(pages))
    })
}

/// Benchmark keyword scoring of a single page.
fn bench_page_scoring(c: &mut Criterion) {
    let scorer = PageScorer::new(StaticKeywords::kinetics().keywords(""));
    let relevant = format!("Activation energy and the Arrhenius equation. {}", FILLER);
    let irrelevant = FILLER.repeat(8);

    c.bench_function("score_relevant_page", |b| {
        b.iter(|| scorer.score(black_box(&relevant)));
    });

    c.bench_function("score_irrelevant_page", |b| {
        b.iter(|| scorer.score(black_box(&irrelevant)));
    });
}

/// Benchmark the stable sort and rank assignment.
fn bench_ranking(c: &mut Criterion) {
    let sections: Vec<ScoredSection> = (0..1000u32)
        .map(|i| ScoredSection::new(format!("doc_{}.pdf", i / 50), i % 50 + 1, "Heading", i % 13))
        .collect();

    c.bench_function("rank_1000_sections", |b| {
        b.iter(|| rank_sections(black_box(sections.clone())));
    });
}

/// Benchmark full runs at various batch sizes.
fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run");
    let analyzer = Analyzer::default();
    let inputs = RunInputs::new("Student", "Prepare for the kinetics exam");

    for (documents, pages) in [(1, 10), (5, 20), (20, 50)].iter() {
        let set = create_test_set(*documents, *pages);

        group.bench_function(format!("{}x{}_pages", documents, pages), |b| {
            b.iter(|| {
                analyzer
                    .run_at(black_box(&inputs), black_box(&set), Utc::now())
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_page_scoring, bench_ranking, bench_full_run);
criterion_main!(benches);
