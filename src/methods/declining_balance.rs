use super::RunningDepreciationState;
use crate::domain::asset::Asset;

const FACTOR: f64 = 2.0;

/// Double-declining-balance charge for one period.
///
/// The running book value starts at acquisition cost and is reduced by every
/// charge. A charge never takes the book value below salvage; once salvage is
/// reached every later period charges nothing.
pub fn amount(asset: &Asset, period_months: f64, state: &mut RunningDepreciationState) -> f64 {
    if asset.useful_life_years <= 0 {
        return 0.0;
    }
    let book_value = state.book_value_or_insert(&asset.id, asset.acquisition_cost);
    if book_value <= asset.salvage_value {
        return 0.0;
    }
    let rate = FACTOR / asset.useful_life_years as f64;
    let raw = book_value * rate * (period_months / 12.0);
    let charge = raw.min(book_value - asset.salvage_value).max(0.0);
    state.charge(&asset.id, charge);
    charge
}
