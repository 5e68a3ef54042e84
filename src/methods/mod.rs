//! Depreciation method strategies.
//!
//! The three supported methods form a closed set dispatched through
//! [`DepreciationMethod::compute_amount`]. Only declining balance carries
//! state between periods; it reads and updates the per-run
//! [`RunningDepreciationState`].

pub mod declining_balance;
pub mod state;
pub mod straight_line;
pub mod sum_of_years;

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::asset::Asset;

pub use state::RunningDepreciationState;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum DepreciationMethod {
    #[default]
    StraightLine,
    DoubleDecliningBalance,
    SumOfYearsDigits,
}

impl DepreciationMethod {
    pub const ALL: [DepreciationMethod; 3] = [
        DepreciationMethod::StraightLine,
        DepreciationMethod::DoubleDecliningBalance,
        DepreciationMethod::SumOfYearsDigits,
    ];

    /// Maps a repository method code onto a supported method.
    ///
    /// Matching ignores case, spaces, dashes and underscores. Returns `None` for
    /// codes that are not recognised; callers fall back to straight-line.
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized: String = code
            .chars()
            .filter(|ch| ch.is_ascii_alphanumeric())
            .map(|ch| ch.to_ascii_uppercase())
            .collect();
        match normalized.as_str() {
            "SL" | "SLN" | "STRAIGHTLINE" | "LINEAR" => Some(DepreciationMethod::StraightLine),
            "DDB" | "DB" | "DECLINING" | "DECLININGBALANCE" | "DOUBLEDECLININGBALANCE" => {
                Some(DepreciationMethod::DoubleDecliningBalance)
            }
            "SYD" | "SUMOFYEARS" | "SUMOFYEARSDIGITS" => Some(DepreciationMethod::SumOfYearsDigits),
            _ => None,
        }
    }

    /// Short code written back to repositories and exports.
    pub fn code(self) -> &'static str {
        match self {
            DepreciationMethod::StraightLine => "SL",
            DepreciationMethod::DoubleDecliningBalance => "DDB",
            DepreciationMethod::SumOfYearsDigits => "SYD",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DepreciationMethod::StraightLine => "Straight Line",
            DepreciationMethod::DoubleDecliningBalance => "Double Declining Balance",
            DepreciationMethod::SumOfYearsDigits => "Sum of Years Digits",
        }
    }

    /// Depreciation charged to `asset` for one period.
    ///
    /// `period_months` is the month-equivalent overlap between the asset's
    /// lifespan and the period. Periods for one asset must be fed in
    /// chronological order because declining balance mutates `state`.
    pub fn compute_amount(
        self,
        asset: &Asset,
        period_months: f64,
        period_start: NaiveDate,
        _period_end: NaiveDate,
        state: &mut RunningDepreciationState,
    ) -> f64 {
        let amount = match self {
            DepreciationMethod::StraightLine => straight_line::amount(asset, period_months),
            DepreciationMethod::DoubleDecliningBalance => {
                declining_balance::amount(asset, period_months, state)
            }
            DepreciationMethod::SumOfYearsDigits => {
                sum_of_years::amount(asset, period_months, period_start)
            }
        };
        amount.max(0.0)
    }
}

impl fmt::Display for DepreciationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
