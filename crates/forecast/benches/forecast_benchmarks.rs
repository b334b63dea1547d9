use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};

use demandcast_core::Metric;
use demandcast_forecast::{ForecastModel, SeasonalTrendModel};

fn bench_model() -> SeasonalTrendModel {
    SeasonalTrendModel {
        metric: Metric::Sales,
        history_end: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        history_len: 730,
        level: 1250.0,
        trend: 1.8,
        weekly: [4.0, 2.0, 0.5, -1.0, 3.5, 12.0, -21.0],
        sigma: 42.0,
        confidence_level: 0.95,
    }
}

fn predict_30_days(c: &mut Criterion) {
    let model = bench_model();
    let index = model.future_index(30);

    c.bench_function("predict_30_days", |b| {
        b.iter(|| model.predict(std::hint::black_box(&index)).unwrap())
    });
}

fn future_index_30_days(c: &mut Criterion) {
    let model = bench_model();

    c.bench_function("future_index_30_days", |b| {
        b.iter(|| model.future_index(std::hint::black_box(30)))
    });
}

criterion_group!(benches, predict_30_days, future_index_30_days);
criterion_main!(benches);
