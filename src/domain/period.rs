use std::{fmt, str::FromStr};

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::DepreciationError;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Reporting bucket size used to slice a year range into periods.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Granularity {
    #[default]
    Annual,
    SemiAnnual,
    Quarterly,
    Monthly,
}

impl Granularity {
    /// Calendar months covered by one period of this granularity.
    pub fn months_per_period(self) -> u32 {
        match self {
            Granularity::Annual => 12,
            Granularity::SemiAnnual => 6,
            Granularity::Quarterly => 3,
            Granularity::Monthly => 1,
        }
    }

    pub fn periods_per_year(self) -> u32 {
        12 / self.months_per_period()
    }

    fn label(self, year: i32, index: u32) -> String {
        match self {
            Granularity::Annual => year.to_string(),
            Granularity::SemiAnnual => format!("H{} {}", index + 1, year),
            Granularity::Quarterly => format!("Q{} {}", index + 1, year),
            Granularity::Monthly => format!("{} {}", MONTH_ABBREVIATIONS[index as usize], year),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Granularity::Annual => "Annual",
            Granularity::SemiAnnual => "SemiAnnual",
            Granularity::Quarterly => "Quarterly",
            Granularity::Monthly => "Monthly",
        };
        f.write_str(label)
    }
}

impl FromStr for Granularity {
    type Err = DepreciationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|ch| ch.is_ascii_alphanumeric())
            .map(|ch| ch.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "annual" | "annually" | "yearly" | "year" => Ok(Granularity::Annual),
            "semiannual" | "semiannually" | "half" | "halfyearly" => Ok(Granularity::SemiAnnual),
            "quarterly" | "quarter" => Ok(Granularity::Quarterly),
            "monthly" | "month" => Ok(Granularity::Monthly),
            _ => Err(DepreciationError::InvalidInput(format!(
                "unknown granularity `{}`",
                value.trim()
            ))),
        }
    }
}

/// A labelled reporting interval with inclusive bounds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Period {
    pub label: String,
    pub granularity: Granularity,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Nominal calendar months the period stands for, regardless of day count.
    pub fn nominal_months(&self) -> f64 {
        self.granularity.months_per_period() as f64
    }

    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Builds the ordered, gap-free sequence of periods covering `from_year..=to_year`.
///
/// An inverted range yields an empty sequence. Years outside the calendar
/// `NaiveDate` can represent are skipped.
pub fn generate_periods(from_year: i32, to_year: i32, granularity: Granularity) -> Vec<Period> {
    let from_year = from_year.max(NaiveDate::MIN.year());
    let to_year = to_year.min(NaiveDate::MAX.year());
    if from_year > to_year {
        return Vec::new();
    }
    let step = granularity.months_per_period();
    let years = i64::from(to_year) - i64::from(from_year) + 1;
    let capacity = years * i64::from(granularity.periods_per_year());
    let mut periods = Vec::with_capacity(usize::try_from(capacity).unwrap_or(0));
    for year in from_year..=to_year {
        for index in 0..granularity.periods_per_year() {
            let first_month = index * step + 1;
            let last_month = first_month + step - 1;
            let (Some(start), Some(end)) = (
                NaiveDate::from_ymd_opt(year, first_month, 1),
                last_day_of_month(year, last_month),
            ) else {
                continue;
            };
            periods.push(Period {
                label: granularity.label(year, index),
                granularity,
                start,
                end,
            });
        }
    }
    periods
}

/// Last calendar day of `month` in `year`, leap-year aware.
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1).map(|first| first - Duration::days(1))
}
