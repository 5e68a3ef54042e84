//! Usable-month overlap between an asset's depreciable lifespan and a period.
//!
//! Day counts are converted to months with a fixed 30-day month. Historical
//! schedules were produced with this approximation, so it is reproduced as-is
//! rather than replaced with calendar-month arithmetic.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::period::Period;

pub const DAYS_PER_MONTH: f64 = 30.0;

/// Half-open interval `[start, end)` during which an asset accrues depreciation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DepreciableLifespan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DepreciableLifespan {
    /// Lifespan starting at `commissioning` and lasting `useful_life_years`.
    ///
    /// Returns `None` for a non-positive life, which never accrues depreciation,
    /// and for a life whose end date falls outside the calendar.
    pub fn new(commissioning: NaiveDate, useful_life_years: i32) -> Option<Self> {
        if useful_life_years <= 0 {
            return None;
        }
        let months = u32::try_from(useful_life_years).ok()?.checked_mul(12)?;
        let end = commissioning.checked_add_months(Months::new(months))?;
        Some(Self {
            start: commissioning,
            end,
        })
    }

    /// Last day on which the asset still depreciates.
    pub fn last_day(&self) -> NaiveDate {
        self.end.pred_opt().unwrap_or(self.end)
    }

    pub fn intersects(&self, period: &Period) -> bool {
        self.start <= period.end && self.last_day() >= period.start
    }

    /// Month-equivalent overlap with `period`.
    ///
    /// A period lying entirely inside the lifespan counts as its nominal months,
    /// whatever its day count. Partial periods use the 30-day approximation,
    /// still capped at the nominal months.
    pub fn months_within(&self, period: &Period) -> f64 {
        let nominal = period.nominal_months();
        if self.start <= period.start && self.last_day() >= period.end {
            return nominal;
        }
        overlap_months(self.start, self.last_day(), period.start, period.end).min(nominal)
    }
}

/// Month-equivalent length of the intersection of two inclusive date ranges.
///
/// Disjoint ranges yield `0.0`; the result is never negative.
pub fn overlap_months(
    lifespan_start: NaiveDate,
    lifespan_end: NaiveDate,
    period_start: NaiveDate,
    period_end: NaiveDate,
) -> f64 {
    if lifespan_start > period_end || lifespan_end < period_start {
        return 0.0;
    }
    let effective_start = lifespan_start.max(period_start);
    let effective_end = lifespan_end.min(period_end);
    if effective_start > effective_end {
        return 0.0;
    }
    let days = (effective_end - effective_start).num_days() + 1;
    days as f64 / DAYS_PER_MONTH
}
