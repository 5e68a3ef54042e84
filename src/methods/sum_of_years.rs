use chrono::NaiveDate;

use crate::domain::asset::Asset;

const DAYS_PER_YEAR: f64 = 365.25;

/// Sum-of-years-digits charge for a period starting on `period_start`.
///
/// The remaining-life weight is measured in fractional years between
/// commissioning and the period start, so the result depends on the absolute
/// calendar date rather than the position of the period in a sequence. A
/// period that starts before commissioning has negative elapsed years and so
/// carries more than the full remaining life.
pub fn amount(asset: &Asset, period_months: f64, period_start: NaiveDate) -> f64 {
    let life = asset.useful_life_years;
    if life <= 0 {
        return 0.0;
    }
    let life = life as f64;
    let sum_of_years = life * (life + 1.0) / 2.0;
    let elapsed_days = (period_start - asset.commissioning_date).num_days();
    let years_elapsed = elapsed_days as f64 / DAYS_PER_YEAR;
    if years_elapsed >= life {
        return 0.0;
    }
    let fraction = (life - years_elapsed) / sum_of_years;
    let annual = fraction * asset.depreciable_base();
    annual / 12.0 * period_months
}
