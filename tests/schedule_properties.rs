mod common;

use asset_depreciation::{
    domain::{Asset, AssetRecord, Granularity, InvalidDatePolicy},
    methods::RunningDepreciationState,
    schedule::schedule_asset,
    time::Clock,
};
use common::{assert_close, build, fixed_clock, mixed_portfolio, record, TOLERANCE};

fn resolve(record: &AssetRecord) -> Asset {
    Asset::resolve(record, fixed_clock().today(), InvalidDatePolicy::default())
        .asset
        .expect("fixture resolves")
}

#[test]
fn straight_line_over_whole_life_recovers_depreciable_base() {
    let assets = vec![
        record("A", 10_000.0, 500.0, 5, "SL", "2020-01-01"),
        record("B", 7_300.0, 0.0, 3, "SL", "2021-01-01"),
    ];
    for granularity in [
        Granularity::Annual,
        Granularity::SemiAnnual,
        Granularity::Quarterly,
        Granularity::Monthly,
    ] {
        let grid = build(&assets, 2018, 2027, granularity);
        assert_close(grid.rows[0].total(), 9_500.0, TOLERANCE * 10_000.0);
        assert_close(grid.rows[1].total(), 7_300.0, TOLERANCE * 7_300.0);
    }
}

#[test]
fn periods_outside_lifespan_are_exactly_zero() {
    let assets = mixed_portfolio();
    let grid = build(&assets, 2015, 2035, Granularity::Monthly);
    for (record, row) in assets.iter().zip(&grid.rows) {
        let lifespan = resolve(record).lifespan().expect("positive life");
        for (period, amount) in grid.periods.iter().zip(&row.amounts) {
            if !lifespan.intersects(period) {
                assert_eq!(*amount, 0.0, "{} charged in {}", record.id, period.label);
            }
        }
    }
}

#[test]
fn declining_balance_book_value_never_rises_or_drops_below_salvage() {
    let record = record("DDB", 48_000.0, 3_000.0, 8, "DDB", "2019-03-15");
    let asset = resolve(&record);
    let periods = asset_depreciation::domain::generate_periods(2019, 2030, Granularity::Monthly);
    let mut state = RunningDepreciationState::new();
    let mut previous = asset.acquisition_cost;
    for period in periods.chunks(1) {
        schedule_asset(&asset, period, &mut state);
        let book = state.book_value(&asset.id).unwrap_or(asset.acquisition_cost);
        assert!(book <= previous, "book value rose in {}", period[0].label);
        assert!(book >= asset.salvage_value - 1e-9, "below salvage in {}", period[0].label);
        previous = book;
    }
}

#[test]
fn repeated_runs_are_bit_identical() {
    let assets = mixed_portfolio();
    let first = build(&assets, 2019, 2028, Granularity::Quarterly);
    let second = build(&assets, 2019, 2028, Granularity::Quarterly);
    assert_eq!(first, second);
    for (a, b) in first.rows.iter().zip(&second.rows) {
        let a_bits: Vec<u64> = a.amounts.iter().map(|v| v.to_bits()).collect();
        let b_bits: Vec<u64> = b.amounts.iter().map(|v| v.to_bits()).collect();
        assert_eq!(a_bits, b_bits);
    }
}

#[test]
fn cumulative_charges_never_decrease() {
    let grid = build(&mixed_portfolio(), 2018, 2032, Granularity::Monthly);
    for row in &grid.rows {
        assert!(row.amounts.iter().all(|amount| *amount >= 0.0));
        for pair in row.cumulative().windows(2) {
            assert!(pair[1] >= pair[0], "{} cumulative decreased", row.asset_id);
        }
    }
}

#[test]
fn quarters_add_up_to_the_year_for_straight_line() {
    let assets = vec![record("A", 50_000.0, 2_000.0, 7, "SL", "2020-05-15")];
    let annual = build(&assets, 2020, 2022, Granularity::Annual);
    let quarterly = build(&assets, 2020, 2022, Granularity::Quarterly);
    let monthly_charge = 48_000.0 / 7.0 / 12.0;
    for (year_index, yearly) in annual.rows[0].amounts.iter().enumerate() {
        let quarters: f64 = quarterly.rows[0].amounts[year_index * 4..year_index * 4 + 4]
            .iter()
            .sum();
        let tolerance = if year_index == 0 { monthly_charge } else { 1e-9 };
        assert_close(quarters, *yearly, tolerance);
    }
}

#[test]
fn totals_row_sums_columns_and_rows() {
    let grid = build(&mixed_portfolio(), 2019, 2026, Granularity::SemiAnnual);
    for (column, total) in grid.totals.amounts.iter().enumerate() {
        let expected: f64 = grid.rows.iter().map(|row| row.amounts[column]).sum();
        assert_close(*total, expected, 1e-9);
    }
    let row_sum: f64 = grid.rows.iter().map(|row| row.total()).sum();
    assert_close(grid.grand_total(), row_sum, 1e-6);
}

#[test]
fn concurrent_runs_do_not_share_state() {
    let assets = mixed_portfolio();
    let expected = build(&assets, 2019, 2028, Granularity::Monthly);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let assets = assets.clone();
            std::thread::spawn(move || build(&assets, 2019, 2028, Granularity::Monthly))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("thread completes"), expected);
    }
}
