use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reelscript_core::catalog::{stock_visuals, VisualMatcher};
use reelscript_core::segment::{KeywordExtractor, Segmenter};
use reelscript_core::storyboard::Pipeline;

const PARAGRAPHS: &str = "Welcome to our company overview.\n\n\
    Our business team meets every morning in the office.\n\n\
    We build modern digital technology for city lifestyles;\n\
    our creative workspace inspires design.\n\n\
    On weekends we recharge in peaceful nature.";

const RUN_ON: &str = "Our company started in a small garage with two friends and a dream. \
    Over ten years we grew into a global team serving customers on every continent! \
    How did we get here? It took patience, curiosity and a lot of late nights \
    spent rewriting the same code over and over. And we are just getting started";

fn bench_segment(c: &mut Criterion) {
    let segmenter = Segmenter::new().unwrap();

    c.bench_function("segment_paragraphs", |b| {
        b.iter(|| segmenter.segment(black_box(PARAGRAPHS)));
    });

    c.bench_function("segment_sentence_fallback", |b| {
        b.iter(|| segmenter.segment(black_box(RUN_ON)));
    });
}

fn bench_keywords_and_match(c: &mut Criterion) {
    let extractor = KeywordExtractor::new().unwrap();
    let matcher = VisualMatcher::new();

    c.bench_function("extract_and_match", |b| {
        b.iter(|| {
            let keywords = extractor.extract(black_box(
                "We build modern digital technology for city lifestyles",
            ));
            matcher.match_visuals(&keywords, stock_visuals()).len()
        });
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let pipeline = Pipeline::with_defaults().unwrap();

    c.bench_function("pipeline_build", |b| {
        b.iter(|| pipeline.build(black_box(PARAGRAPHS), stock_visuals()));
    });
}

criterion_group!(benches, bench_segment, bench_keywords_and_match, bench_pipeline);
criterion_main!(benches);
