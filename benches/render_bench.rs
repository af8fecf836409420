//! Benchmarks for dashboard rendering
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use vista::chart::{BarChart, LineChart};
use vista::counter::CounterPlan;
use vista::dashboard::{ChartOptions, DashboardView, DataSource, Fixture};
use vista::strength;

fn create_series(count: usize) -> Vec<f64> {
    (0..count).map(|i| ((i * 37) % 1000) as f64).collect()
}

fn bench_charts(c: &mut Criterion) {
    let mut group = c.benchmark_group("charts");

    for size in [7, 100, 1000] {
        let values = create_series(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("bar_{}", size), |b| {
            b.iter(|| BarChart::layout(black_box(&values), "Users", 200.0).to_html())
        });

        group.bench_function(format!("line_{}", size), |b| {
            b.iter(|| LineChart::layout(black_box(&values), "Revenue", "$", 600.0, 200.0).to_svg())
        });
    }

    group.finish();
}

fn bench_counter(c: &mut Criterion) {
    let mut group = c.benchmark_group("counter");

    group.bench_function("frames_125000", |b| {
        let plan = CounterPlan::standard(125_000, "$");
        b.iter(|| black_box(&plan).frames().count())
    });

    group.finish();
}

fn bench_dashboard(c: &mut Criterion) {
    let bytes = include_bytes!("../data/mock-data.json");
    let options = ChartOptions::default();

    c.bench_function("dashboard_parse_render", |b| {
        b.iter(|| {
            let fixture = Fixture::parse(black_box(bytes)).unwrap();
            DashboardView::render(&fixture, DataSource::Fixture, &options)
        })
    });
}

fn bench_strength(c: &mut Criterion) {
    c.bench_function("strength_score", |b| {
        b.iter(|| strength::score(black_box("Correct-Horse-Battery-9")))
    });
}

criterion_group!(benches, bench_charts, bench_counter, bench_dashboard, bench_strength);
criterion_main!(benches);
