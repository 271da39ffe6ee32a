use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glint::behavior::RevealAnimator;
use glint::capability::{SimulatedViewport, ViewportIntersection};
use glint::page;

/// Build a results page with `count` result items
fn results_page(count: usize) -> String {
    let mut html = String::from(
        r#"<html><body><form class="search-form"><input class="search-input" name="q"></form>"#,
    );
    for i in 0..count {
        html.push_str(&format!(r#"<div class="result-item">Result {}</div>"#, i));
    }
    html.push_str("</body></html>");
    html
}

/// Parsing a large results page into the element arena
fn benchmark_parsing(c: &mut Criterion) {
    let html = results_page(1000);
    c.bench_function("parse_results_page", |b| {
        b.iter(|| page::html::parse(black_box(&html)).unwrap())
    });
}

/// Revealing a full batch of intersecting result items
fn benchmark_reveal(c: &mut Criterion) {
    let mut group = c.benchmark_group("reveal");

    for count in [100, 1000] {
        let html = results_page(count);
        group.bench_function(format!("apply_{}_entries", count), |b| {
            b.iter_batched(
                || {
                    let doc = page::html::parse(&html).unwrap();
                    let mut viewport = SimulatedViewport::new();
                    let animator = RevealAnimator::new("result-item", "visible");
                    animator.arm(&doc, &mut viewport, 0.1);
                    for item in doc.all_by_class("result-item") {
                        viewport.scroll_to(item, 0.5);
                    }
                    let entries = viewport.take_entries();
                    (doc, entries, animator)
                },
                |(mut doc, entries, animator)| animator.apply(&mut doc, black_box(&entries)),
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_parsing, benchmark_reveal);
criterion_main!(benches);
