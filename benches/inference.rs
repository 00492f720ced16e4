//! Benchmark: Edge Inference
//!
//! Measures registry + inference cost on generated pipelines.
//! Run: cargo bench --bench inference

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use plumbline::{build_graph, infer, NodeRegistry, Pipeline, RegistryOptions};

/// Generate a linear pipeline (step_0 -> step_1 -> ...)
fn generate_linear_pipeline(size: usize) -> Pipeline {
    let mut yaml = String::from("schema: plumbline/pipeline@0.1\nsteps:\n");
    for i in 0..size {
        yaml.push_str(&format!(
            "  - id: step_{i}\n    inputs: [data_{i}]\n    outputs: [data_{}]\n",
            i + 1
        ));
    }
    Pipeline::from_yaml(&yaml).unwrap()
}

/// Generate a fan-out/fan-in pipeline: source -> N middles -> sink
fn generate_diamond_pipeline(width: usize) -> Pipeline {
    let mut yaml = String::from(
        r#"schema: plumbline/pipeline@0.1
steps:
  - id: source
    outputs: [seed]
"#,
    );
    let mut parts = Vec::with_capacity(width);
    for i in 0..width {
        yaml.push_str(&format!(
            "  - id: middle_{i}\n    inputs: [seed]\n    outputs: [part_{i}]\n"
        ));
        parts.push(format!("part_{i}"));
    }
    yaml.push_str(&format!("  - id: sink\n    inputs: [{}]\n", parts.join(", ")));
    Pipeline::from_yaml(&yaml).unwrap()
}

/// Generate a dense pipeline: every step shares one hub artifact both ways
fn generate_hub_pipeline(size: usize) -> Pipeline {
    let mut yaml = String::from("schema: plumbline/pipeline@0.1\nsteps:\n");
    for i in 0..size {
        yaml.push_str(&format!(
            "  - id: step_{i}\n    inputs: [hub]\n    outputs: [hub, own_{i}]\n"
        ));
    }
    Pipeline::from_yaml(&yaml).unwrap()
}

fn bench_build_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_graph");
    let options = RegistryOptions::default();

    for size in [10, 50, 100, 250].iter() {
        let pipeline = generate_linear_pipeline(*size);
        group.bench_with_input(BenchmarkId::new("linear", size), &pipeline, |b, p| {
            b.iter(|| black_box(build_graph(black_box(p.steps()), &options)))
        });
    }

    for width in [10, 50, 100].iter() {
        let pipeline = generate_diamond_pipeline(*width);
        group.bench_with_input(BenchmarkId::new("diamond", width), &pipeline, |b, p| {
            b.iter(|| black_box(build_graph(black_box(p.steps()), &options)))
        });
    }

    group.finish();
}

fn bench_infer_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("infer");

    // Quadratic edge count: size² edges on `hub`
    for size in [10, 50, 100].iter() {
        let pipeline = generate_hub_pipeline(*size);
        let registry = NodeRegistry::build(pipeline.steps(), &RegistryOptions::default()).unwrap();
        group.bench_with_input(BenchmarkId::new("hub", size), &registry, |b, r| {
            b.iter(|| black_box(infer(black_box(r.steps()))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_graph, bench_infer_only);
criterion_main!(benches);
