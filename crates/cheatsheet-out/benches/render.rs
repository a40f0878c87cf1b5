use cheatsheet_core::Document;
use cheatsheet_out::{RenderConfig, Renderer};
use cheatsheet_registry::build_index;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample(language: &str, topics: usize) -> Document {
    let mut doc = Document::new(format!("Rust for {}", language), language);
    for i in 0..topics {
        doc.add_entry(
            &format!("Topic {}", i),
            &format!("x{} = {}", i, i),
            &format!("let x{} = {};", i, i),
            Some("Bindings are immutable by default."),
        )
        .unwrap();
    }
    doc
}

fn bench_render(c: &mut Criterion) {
    let renderer = Renderer::new(RenderConfig::default()).unwrap();
    let doc = sample("Ruby", 200);

    c.bench_function("render_document_200", |b| {
        b.iter(|| renderer.render_document(black_box(&doc)).unwrap())
    });

    let index = build_index(vec![
        sample("Ruby", 50),
        sample("JavaScript", 50),
        sample("C#", 50),
    ])
    .unwrap();

    c.bench_function("render_site_3x50", |b| {
        b.iter(|| renderer.render_site(black_box(&index)).unwrap())
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
