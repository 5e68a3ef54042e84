use std::collections::HashMap;

use crate::domain::asset::AssetId;

/// Running book values carried by declining balance, keyed by asset.
///
/// One instance belongs to exactly one schedule run. It starts empty and each
/// entry only ever decreases.
#[derive(Debug, Default, Clone)]
pub struct RunningDepreciationState {
    book_values: HashMap<AssetId, f64>,
}

impl RunningDepreciationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current running book value, seeding it with `initial` on first encounter.
    pub fn book_value_or_insert(&mut self, id: &AssetId, initial: f64) -> f64 {
        *self.book_values.entry(id.clone()).or_insert(initial)
    }

    pub fn book_value(&self, id: &AssetId) -> Option<f64> {
        self.book_values.get(id).copied()
    }

    /// Records `amount` as charged against the asset's running book value.
    pub fn charge(&mut self, id: &AssetId, amount: f64) {
        if let Some(value) = self.book_values.get_mut(id) {
            *value -= amount;
        }
    }

    pub fn len(&self) -> usize {
        self.book_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.book_values.is_empty()
    }
}
