use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    asset::{Asset, AssetId, AssetWarning},
    period::{Granularity, Period},
};
use crate::methods::DepreciationMethod;

/// One asset's fixed attributes plus its charge in every period of the grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetRow {
    pub asset_id: AssetId,
    pub name: String,
    pub acquisition_cost: f64,
    pub salvage_value: f64,
    pub current_book_value: f64,
    pub accumulated_depreciation: f64,
    pub useful_life_years: i32,
    pub method: DepreciationMethod,
    pub method_name: String,
    pub acquisition_date: NaiveDate,
    pub commissioning_date: NaiveDate,
    pub amounts: Vec<f64>,
}

impl AssetRow {
    pub(crate) fn for_asset(asset: &Asset, amounts: Vec<f64>) -> Self {
        Self {
            asset_id: asset.id.clone(),
            name: asset.name.clone(),
            acquisition_cost: asset.acquisition_cost,
            salvage_value: asset.salvage_value,
            current_book_value: asset.current_book_value,
            accumulated_depreciation: asset.accumulated_depreciation,
            useful_life_years: asset.useful_life_years,
            method: asset.method,
            method_name: asset.method.name().to_string(),
            acquisition_date: asset.acquisition_date,
            commissioning_date: asset.commissioning_date,
            amounts,
        }
    }

    /// Sum of the row across every period.
    pub fn total(&self) -> f64 {
        self.amounts.iter().sum()
    }

    /// Running total up to and including each period.
    pub fn cumulative(&self) -> Vec<f64> {
        self.amounts
            .iter()
            .scan(0.0, |running, amount| {
                *running += amount;
                Some(*running)
            })
            .collect()
    }
}

/// Column sums across all asset rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TotalsRow {
    pub amounts: Vec<f64>,
}

impl TotalsRow {
    pub(crate) fn zeroed(columns: usize) -> Self {
        Self {
            amounts: vec![0.0; columns],
        }
    }

    pub(crate) fn add_row(&mut self, amounts: &[f64]) {
        for (total, amount) in self.amounts.iter_mut().zip(amounts) {
            *total += amount;
        }
    }

    pub fn total(&self) -> f64 {
        self.amounts.iter().sum()
    }
}

/// Complete output of a schedule run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleGrid {
    pub from_year: i32,
    pub to_year: i32,
    pub granularity: Granularity,
    pub periods: Vec<Period>,
    pub rows: Vec<AssetRow>,
    pub totals: TotalsRow,
    #[serde(default)]
    pub warnings: Vec<AssetWarning>,
    #[serde(default)]
    pub excluded: Vec<AssetId>,
}

impl ScheduleGrid {
    pub fn period_labels(&self) -> Vec<&str> {
        self.periods.iter().map(|p| p.label.as_str()).collect()
    }

    pub fn row(&self, id: &AssetId) -> Option<&AssetRow> {
        self.rows.iter().find(|row| &row.asset_id == id)
    }

    /// Charge for `id` in the period labelled `label`.
    pub fn amount(&self, id: &AssetId, label: &str) -> Option<f64> {
        let column = self.periods.iter().position(|p| p.label == label)?;
        self.row(id)?.amounts.get(column).copied()
    }

    pub fn grand_total(&self) -> f64 {
        self.totals.total()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Tab-separated table: one line per asset with its row total, then a
    /// `TOTAL` line of column sums and the grand total.
    pub fn render_table(&self, precision: u8) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        let mut header = vec!["asset", "method"];
        header.extend(self.period_labels());
        header.push("total");
        lines.push(header.join("\t"));

        for row in &self.rows {
            let mut cells = vec![row.asset_id.to_string(), row.method.code().to_string()];
            cells.extend(row.amounts.iter().map(|amount| format_amount(*amount, precision)));
            cells.push(format_amount(row.total(), precision));
            lines.push(cells.join("\t"));
        }

        let mut totals = vec!["TOTAL".to_string(), String::new()];
        totals.extend(self.totals.amounts.iter().map(|amount| format_amount(*amount, precision)));
        totals.push(format_amount(self.grand_total(), precision));
        lines.push(totals.join("\t"));
        lines.join("\n")
    }
}

/// Renders a monetary value with `precision` decimals and comma grouping.
pub fn format_amount(value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value.abs());
    let (int_part, fraction) = match body.find('.') {
        Some(pos) => body.split_at(pos),
        None => (body.as_str(), ""),
    };
    let mut grouped = String::with_capacity(body.len() + int_part.len() / 3);
    for (count, ch) in int_part.chars().enumerate() {
        if count != 0 && (int_part.len() - count) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let negative = value < 0.0 && body.chars().any(|ch| ch.is_ascii_digit() && ch != '0');
    format!("{}{}{}", if negative { "-" } else { "" }, grouped, fraction)
}
