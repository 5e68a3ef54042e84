use crate::domain::asset::Asset;

/// Even charge of `(cost - salvage) / life` per year, prorated by month.
pub fn amount(asset: &Asset, period_months: f64) -> f64 {
    if asset.useful_life_years <= 0 {
        return 0.0;
    }
    let annual = asset.depreciable_base() / asset.useful_life_years as f64;
    annual / 12.0 * period_months
}
