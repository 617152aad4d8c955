use criterion::{criterion_group, criterion_main, Criterion};

use titlecraft_core::{compute_visuals, find_preset, TitleConfig};
use titlecraft_render::build_html;

fn long_title() -> TitleConfig {
    let mut config = TitleConfig::default();
    config.merge(&find_preset("deep").unwrap().patch);
    config.text = "The quick brown fox jumps over the lazy dog".repeat(4);
    config.glow_effect = true;
    config
}

fn bench_compute_visuals(c: &mut Criterion) {
    let config = long_title();
    c.bench_function("compute_visuals_172_chars", |b| {
        b.iter(|| compute_visuals(&config));
    });
}

fn bench_build_html(c: &mut Criterion) {
    let config = long_title();
    let visuals = compute_visuals(&config);
    c.bench_function("build_html_172_chars", |b| {
        b.iter(|| build_html(&config, &visuals));
    });
}

criterion_group!(benches, bench_compute_visuals, bench_build_html);
criterion_main!(benches);
