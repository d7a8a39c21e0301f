//! Benchmarks for summark segmentation and rendering performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic summary text shaped like real assessment
//! output: short headings, bullet runs, and prose paragraphs.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic summary with the given number of sections.
fn create_test_summary(section_count: usize) -> String {
    let mut content = String::new();

    for i in 0..section_count {
        match i % 3 {
            0 => {
                content.push_str(&format!("Assessment Area {}\n\n", i + 1));
            }
            1 => {
                content.push_str(
                    "Your responses in this area suggest steady habits and a \
                     consistent routine. Keep monitoring how these patterns \
                     shift under pressure.\n\n",
                );
            }
            _ => {
                content.push_str(&format!(
                    "Focus points for this area:\n- Point one for section {}.\n- Point two for section {}.\n- Point three for section {}.\n\n",
                    i, i, i
                ));
            }
        }
    }

    content
}

/// Benchmark segmentation at various input sizes.
fn bench_segmentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmentation");

    for section_count in [3, 30, 300].iter() {
        let raw = create_test_summary(*section_count);

        group.bench_function(format!("{}_sections", section_count), |b| {
            b.iter(|| summark::format_str(black_box(&raw)));
        });
    }

    group.finish();
}

/// Benchmark full text-to-HTML conversion.
fn bench_html_rendering(c: &mut Criterion) {
    let raw = create_test_summary(30);
    let options = summark::RenderOptions::default();
    let doc = summark::format_str(&raw);

    c.bench_function("render_html", |b| {
        b.iter(|| summark::render::to_html(black_box(&doc), &options).unwrap());
    });

    c.bench_function("format_and_render", |b| {
        b.iter(|| {
            let doc = summark::format_str(black_box(&raw));
            summark::render::to_html(&doc, &options).unwrap()
        });
    });
}

/// Benchmark builder pattern overhead.
fn bench_builder_creation(c: &mut Criterion) {
    c.bench_function("builder_creation", |b| {
        b.iter(|| {
            let _builder = summark::Summark::new()
                .heading_level(3)
                .section_class("prose");
        });
    });
}

criterion_group!(
    benches,
    bench_segmentation,
    bench_html_rendering,
    bench_builder_creation,
);
criterion_main!(benches);
