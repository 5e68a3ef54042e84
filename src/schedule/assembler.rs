//! Drives period generation, overlap proration and the method strategies over
//! an asset list to produce a [`ScheduleGrid`].

use tracing::{debug, warn};

use super::grid::{AssetRow, ScheduleGrid, TotalsRow};
use crate::domain::{
    asset::{Asset, AssetRecord, InvalidDatePolicy},
    period::{generate_periods, Granularity, Period},
};
use crate::methods::RunningDepreciationState;
use crate::time::{Clock, SystemClock};

/// Builds depreciation grids. Holds no mutable state of its own, so one
/// assembler can serve any number of independent (or concurrent) runs.
pub struct ScheduleAssembler<'a> {
    clock: &'a dyn Clock,
    date_policy: InvalidDatePolicy,
}

impl<'a> ScheduleAssembler<'a> {
    pub fn new(clock: &'a dyn Clock) -> Self {
        Self {
            clock,
            date_policy: InvalidDatePolicy::default(),
        }
    }

    pub fn with_date_policy(mut self, policy: InvalidDatePolicy) -> Self {
        self.date_policy = policy;
        self
    }

    pub fn date_policy(&self) -> InvalidDatePolicy {
        self.date_policy
    }

    /// Computes the grid for `records` over `from_year..=to_year`.
    ///
    /// Never fails: an inverted year range produces a grid without periods,
    /// and per-asset data problems are reported as warnings on the grid.
    pub fn build(
        &self,
        records: &[AssetRecord],
        from_year: i32,
        to_year: i32,
        granularity: Granularity,
    ) -> ScheduleGrid {
        let periods = generate_periods(from_year, to_year, granularity);
        let mut state = RunningDepreciationState::new();
        let today = self.clock.today();

        let mut rows = Vec::with_capacity(records.len());
        let mut totals = TotalsRow::zeroed(periods.len());
        let mut warnings = Vec::new();
        let mut excluded = Vec::new();

        for record in records {
            let resolution = Asset::resolve(record, today, self.date_policy);
            for warning in &resolution.warnings {
                warn!(%warning, "asset data quality issue");
            }
            warnings.extend(resolution.warnings);

            let Some(asset) = resolution.asset else {
                excluded.push(record.id.clone());
                continue;
            };
            let amounts = schedule_asset(&asset, &periods, &mut state);
            totals.add_row(&amounts);
            rows.push(AssetRow::for_asset(&asset, amounts));
        }

        debug!(
            assets = rows.len(),
            excluded = excluded.len(),
            periods = periods.len(),
            %granularity,
            grand_total = totals.total(),
            "depreciation schedule built"
        );

        ScheduleGrid {
            from_year,
            to_year,
            granularity,
            periods,
            rows,
            totals,
            warnings,
            excluded,
        }
    }
}

/// Charges for one asset across `periods`, which must be in chronological order.
pub fn schedule_asset(
    asset: &Asset,
    periods: &[Period],
    state: &mut RunningDepreciationState,
) -> Vec<f64> {
    let Some(lifespan) = asset.lifespan() else {
        return vec![0.0; periods.len()];
    };
    periods
        .iter()
        .map(|period| {
            let months = lifespan.months_within(period);
            if months <= 0.0 {
                return 0.0;
            }
            asset
                .method
                .compute_amount(asset, months, period.start, period.end, state)
        })
        .collect()
}

/// Builds a grid with the wall clock and the default date policy.
pub fn build_schedule(
    records: &[AssetRecord],
    from_year: i32,
    to_year: i32,
    granularity: Granularity,
) -> ScheduleGrid {
    ScheduleAssembler::new(&SystemClock).build(records, from_year, to_year, granularity)
}
