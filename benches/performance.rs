use asset_depreciation::{
    domain::{AssetRecord, Granularity},
    schedule::ScheduleAssembler,
    time::FixedClock,
};
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const METHODS: [&str; 3] = ["SL", "DDB", "SYD"];

fn build_portfolio(count: usize) -> Vec<AssetRecord> {
    let start = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
    (0..count)
        .map(|idx| {
            let commissioned = start + Duration::days((idx * 37 % 3_650) as i64);
            AssetRecord::new(
                format!("ASSET-{idx:05}"),
                5_000.0 + (idx % 250) as f64 * 100.0,
                (idx % 10) as f64 * 50.0,
                3 + (idx % 12) as i32,
                METHODS[idx % METHODS.len()],
                commissioned.format("%Y-%m-%d").to_string(),
            )
        })
        .collect()
}

fn bench_schedule(c: &mut Criterion) {
    let portfolio = build_portfolio(black_box(1_000));
    let clock = FixedClock::new(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
    let assembler = ScheduleAssembler::new(&clock);

    c.bench_function("schedule_1k_assets_annual_20y", |b| {
        b.iter(|| {
            let grid = assembler.build(&portfolio, 2015, 2034, Granularity::Annual);
            black_box(grid);
        })
    });

    c.bench_function("schedule_1k_assets_monthly_20y", |b| {
        b.iter(|| {
            let grid = assembler.build(&portfolio, 2015, 2034, Granularity::Monthly);
            black_box(grid);
        })
    });
}

criterion_group!(benches, bench_schedule);
criterion_main!(benches);
