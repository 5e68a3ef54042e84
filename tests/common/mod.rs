#![allow(dead_code)]

use asset_depreciation::{
    domain::{AssetId, AssetRecord, Granularity},
    schedule::{ScheduleAssembler, ScheduleGrid},
    time::FixedClock,
};
use chrono::NaiveDate;

pub const TOLERANCE: f64 = 1e-6;

/// Clock pinned to a date well after every fixture's commissioning date.
pub fn fixed_clock() -> FixedClock {
    FixedClock::new(NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date"))
}

pub fn build(records: &[AssetRecord], from: i32, to: i32, granularity: Granularity) -> ScheduleGrid {
    let clock = fixed_clock();
    ScheduleAssembler::new(&clock).build(records, from, to, granularity)
}

pub fn record(
    id: &str,
    cost: f64,
    salvage: f64,
    life: i32,
    method: &str,
    commissioned: &str,
) -> AssetRecord {
    AssetRecord::new(id, cost, salvage, life, method, commissioned)
        .with_name(format!("{id} fixture"))
}

pub fn amount(grid: &ScheduleGrid, id: &str, label: &str) -> f64 {
    grid.amount(&AssetId::new(id), label)
        .unwrap_or_else(|| panic!("no amount for {id} in {label}"))
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual} (tolerance {tolerance})"
    );
}

/// A small mixed portfolio covering every method.
pub fn mixed_portfolio() -> Vec<AssetRecord> {
    vec![
        record("SL-1", 12_000.0, 0.0, 10, "SL", "2020-01-01"),
        record("SL-2", 1_200.0, 0.0, 10, "straight_line", "2020-07-01"),
        record("DDB-1", 10_000.0, 1_000.0, 5, "DDB", "2021-01-01"),
        record("DDB-2", 48_000.0, 3_000.0, 8, "DDB", "2019-03-15"),
        record("SYD-1", 16_000.0, 1_000.0, 5, "SYD", "2020-04-01"),
        record("ODD-1", 5_000.0, 500.0, 3, "MACRS", "2022-02-28"),
    ]
}
