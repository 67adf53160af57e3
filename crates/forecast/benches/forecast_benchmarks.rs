use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Days, NaiveDate, NaiveTime};

use stockcast_forecast::{ExactEcho, forecast_series};
use stockcast_inventory::{DailyDemand, Movement, MovementType, RawMovement, RawQuantity, parse_movements};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// Synthetic movement history: `per_day` demand movements per day over `days`.
fn synthetic_movements(days: u64, per_day: u64) -> Vec<Movement> {
    let mut movements = Vec::with_capacity((days * per_day) as usize);
    for offset in 0..days {
        let day = base_date() + Days::new(offset);
        for unit in 0..per_day {
            let movement_type = if unit % 4 == 0 {
                MovementType::Outbound
            } else {
                MovementType::Sale
            };
            movements.push(Movement::new(
                day.and_time(NaiveTime::MIN),
                movement_type,
                1.0 + (unit % 7) as f64,
            ));
        }
    }
    movements
}

fn synthetic_raw_records(count: u64) -> Vec<RawMovement> {
    (0..count)
        .map(|i| {
            let day = base_date() + Days::new(i % 90);
            RawMovement {
                movement_date: day.to_string(),
                movement_type: "SALE".to_string(),
                quantity: RawQuantity::Number(1.0 + (i % 9) as f64),
            }
        })
        .collect()
}

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("daily_demand_aggregation");

    for &movement_count in &[1_000u64, 10_000, 50_000] {
        let movements = synthetic_movements(90, movement_count / 90);
        group.throughput(Throughput::Elements(movements.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(movement_count),
            &movements,
            |b, movements| {
                b.iter(|| DailyDemand::from_movements(black_box(movements)));
            },
        );
    }

    group.finish();
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("raw_record_parsing");

    let records = synthetic_raw_records(10_000);
    group.throughput(Throughput::Elements(records.len() as u64));
    group.bench_function("parse_10k_records", |b| {
        b.iter(|| parse_movements(black_box(&records)));
    });

    group.finish();
}

fn bench_forecast_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("forecast_series");

    let movements = synthetic_movements(90, 20);
    let demand = DailyDemand::from_movements(&movements);
    let window_start = base_date() + Days::new(60);

    group.bench_function("sixty_day_series", |b| {
        b.iter(|| {
            let mut strategy = ExactEcho;
            forecast_series(black_box(&demand), black_box(window_start), &mut strategy)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_aggregation,
    bench_parsing,
    bench_forecast_series
);
criterion_main!(benches);
