use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use zsvg::from_str;
use zsvg::svg::decode;

const ILLUSTRATOR_SVG: &str = include_str!("../tests/fixtures/valid/illustrator_export.svg");
const POINTS: &str = "108.5,132.4289 87.777,120.4644 84.5711,108.5 87.777,96.5356 108.5,84.5711 129.223,96.5356 132.4289,108.5 120.4644,129.223 108.5,132.4289";

fn many_shapes(count: usize) -> String {
    let mut markup = String::from("<svg viewBox=\"0 0 1000 1000\">");
    for i in 0..count {
        markup.push_str(&format!(
            "<rect x=\"{i}\" y=\"{i}\" width=\"10\" height=\"10\" style=\"fill:#606060\"/>\
             <line x1=\"0\" y1=\"{i}\" x2=\"1000\" y2=\"{i}\"/>\
             <circle r=\"{i}\"/>"
        ));
    }
    markup.push_str("</svg>");
    markup
}

fn bench_document(c: &mut Criterion) {
    c.bench_function("zsvg_illustrator_export", |b| {
        b.iter(|| from_str(black_box(ILLUSTRATOR_SVG)))
    });
}

fn bench_many_shapes(c: &mut Criterion) {
    let markup = many_shapes(1_000);
    c.bench_function("zsvg_many_shapes", |b| b.iter(|| from_str(black_box(&markup))));
}

fn bench_decoders(c: &mut Criterion) {
    c.bench_function("zsvg_decode_points", |b| {
        b.iter(|| decode::points(black_box(POINTS)))
    });
    c.bench_function("zsvg_decode_style", |b| {
        b.iter(|| decode::style(black_box(Some("fill:none;stroke:#DDB34A;stroke-width:0.1"))))
    });
}

criterion_group!(benches, bench_document, bench_many_shapes, bench_decoders);
criterion_main!(benches);
