use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stackcalc_rs::{evaluate_expression, Evaluator, Tokenizer};

/// Benchmark simple arithmetic expressions
fn benchmark_simple_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simple arithmetic Expression Evaluation");

    let expr = "2 + 3 * 4";
    let tokens = Tokenizer::tokenize(expr).unwrap();
    let evaluator = Evaluator::new();

    group.bench_function("tokenize_and_evaluate", |b| {
        b.iter(|| evaluate_expression(black_box(expr)))
    });

    group.bench_function("pretokenized_evaluate", |b| {
        b.iter(|| evaluator.evaluate(black_box(&tokens)))
    });

    group.bench_function("native_rust_arithmetic", |b| {
        b.iter(|| black_box(2.0) + black_box(3.0) * black_box(4.0))
    });

    group.bench_function("meval_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });
}

/// Benchmark grouped arithmetic expressions
fn benchmark_grouped_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Grouped arithmetic Expression Evaluation");

    let expr = "(10 + 20) * 3 / (4 - 1) + 5";

    group.bench_function("tokenize_and_evaluate", |b| {
        b.iter(|| evaluate_expression(black_box(expr)))
    });

    group.bench_function("meval_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });
}

/// Benchmark a long left-associative chain
fn benchmark_long_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("Long chain Expression Evaluation");

    let expr = (1..=500)
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" + 2 * ");
    let tokens = Tokenizer::tokenize(&expr).unwrap();
    let evaluator = Evaluator::new();

    group.bench_function("tokenize", |b| {
        b.iter(|| Tokenizer::tokenize(black_box(&expr)))
    });

    group.bench_function("pretokenized_evaluate", |b| {
        b.iter(|| evaluator.evaluate(black_box(&tokens)))
    });

    group.bench_function("meval_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(&expr)).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_simple_arithmetic,
    benchmark_grouped_arithmetic,
    benchmark_long_chain
);
criterion_main!(benches);
