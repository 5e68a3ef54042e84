use std::fmt;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use super::lifespan::DepreciableLifespan;
use crate::methods::DepreciationMethod;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y"];

/// Opaque asset key supplied by the asset repository.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct AssetId(pub String);

impl AssetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Asset row as delivered by the repository. Dates arrive as text and are
/// validated during resolution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetRecord {
    pub id: AssetId,
    #[serde(default)]
    pub name: String,
    pub acquisition_cost: f64,
    #[serde(default)]
    pub salvage_value: f64,
    pub useful_life_years: i32,
    #[serde(default)]
    pub method_code: String,
    pub acquisition_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commissioning_date: Option<String>,
    #[serde(default)]
    pub current_book_value: f64,
    #[serde(default)]
    pub accumulated_depreciation: f64,
}

impl AssetRecord {
    pub fn new(
        id: impl Into<String>,
        acquisition_cost: f64,
        salvage_value: f64,
        useful_life_years: i32,
        method_code: impl Into<String>,
        acquisition_date: impl Into<String>,
    ) -> Self {
        Self {
            id: AssetId::new(id),
            name: String::new(),
            acquisition_cost,
            salvage_value,
            useful_life_years,
            method_code: method_code.into(),
            acquisition_date: acquisition_date.into(),
            commissioning_date: None,
            current_book_value: acquisition_cost,
            accumulated_depreciation: 0.0,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_commissioning_date(mut self, date: impl Into<String>) -> Self {
        self.commissioning_date = Some(date.into());
        self
    }
}

/// How the assembler treats records whose dates cannot be parsed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum InvalidDatePolicy {
    /// Substitute today's date for both acquisition and commissioning.
    #[default]
    DefaultToToday,
    /// Leave the asset out of the grid.
    Exclude,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum WarningKind {
    UnparseableAcquisitionDate(String),
    UnparseableCommissioningDate(String),
    NonPositiveUsefulLife(i32),
    UnknownMethodCode(String),
    SalvageExceedsCost { cost: f64, salvage: f64 },
}

/// Data-quality finding attached to one asset. Never aborts a schedule run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetWarning {
    pub asset_id: AssetId,
    pub kind: WarningKind,
}

impl fmt::Display for AssetWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WarningKind::UnparseableAcquisitionDate(raw) => {
                write!(f, "asset {}: unparseable acquisition date `{}`", self.asset_id, raw)
            }
            WarningKind::UnparseableCommissioningDate(raw) => {
                write!(f, "asset {}: unparseable commissioning date `{}`", self.asset_id, raw)
            }
            WarningKind::NonPositiveUsefulLife(life) => write!(
                f,
                "asset {}: useful life {} is not positive, no depreciation accrues",
                self.asset_id, life
            ),
            WarningKind::UnknownMethodCode(code) => write!(
                f,
                "asset {}: unknown method code `{}`, using straight-line",
                self.asset_id, code
            ),
            WarningKind::SalvageExceedsCost { cost, salvage } => write!(
                f,
                "asset {}: salvage {:.2} exceeds cost {:.2}",
                self.asset_id, salvage, cost
            ),
        }
    }
}

/// Asset with validated dates and a resolved depreciation method.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    pub acquisition_cost: f64,
    pub salvage_value: f64,
    pub useful_life_years: i32,
    pub method: DepreciationMethod,
    pub acquisition_date: NaiveDate,
    pub commissioning_date: NaiveDate,
    pub current_book_value: f64,
    pub accumulated_depreciation: f64,
}

/// Outcome of resolving one record: the best-effort asset (absent when the
/// record was excluded) plus whatever warnings were raised on the way.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub asset: Option<Asset>,
    pub warnings: Vec<AssetWarning>,
}

impl Asset {
    /// Validates a repository record. Bad dates are handled per `policy`; an
    /// unknown method code falls back to straight-line.
    pub fn resolve(
        record: &AssetRecord,
        today: NaiveDate,
        policy: InvalidDatePolicy,
    ) -> Resolution {
        let mut warnings = Vec::new();
        let warn = |warnings: &mut Vec<AssetWarning>, kind| {
            warnings.push(AssetWarning {
                asset_id: record.id.clone(),
                kind,
            })
        };

        let acquisition = parse_date(&record.acquisition_date);
        if acquisition.is_none() {
            warn(
                &mut warnings,
                WarningKind::UnparseableAcquisitionDate(record.acquisition_date.clone()),
            );
        }
        let commissioning = match record
            .commissioning_date
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
        {
            Some(raw) => {
                let parsed = parse_date(raw);
                if parsed.is_none() {
                    warn(&mut warnings, WarningKind::UnparseableCommissioningDate(raw.to_string()));
                }
                parsed
            }
            None => acquisition,
        };

        let (acquisition_date, commissioning_date) = match (acquisition, commissioning) {
            (Some(acquired), Some(commissioned)) => (acquired, commissioned),
            _ => match policy {
                InvalidDatePolicy::DefaultToToday => (today, today),
                InvalidDatePolicy::Exclude => {
                    return Resolution {
                        asset: None,
                        warnings,
                    }
                }
            },
        };

        let method = DepreciationMethod::from_code(&record.method_code).unwrap_or_else(|| {
            warn(&mut warnings, WarningKind::UnknownMethodCode(record.method_code.clone()));
            DepreciationMethod::StraightLine
        });
        if record.useful_life_years <= 0 {
            warn(&mut warnings, WarningKind::NonPositiveUsefulLife(record.useful_life_years));
        }
        if record.salvage_value > record.acquisition_cost {
            warn(
                &mut warnings,
                WarningKind::SalvageExceedsCost {
                    cost: record.acquisition_cost,
                    salvage: record.salvage_value,
                },
            );
        }

        Resolution {
            asset: Some(Asset {
                id: record.id.clone(),
                name: record.name.clone(),
                acquisition_cost: record.acquisition_cost,
                salvage_value: record.salvage_value,
                useful_life_years: record.useful_life_years,
                method,
                acquisition_date,
                commissioning_date,
                current_book_value: record.current_book_value,
                accumulated_depreciation: record.accumulated_depreciation,
            }),
            warnings,
        }
    }

    pub fn lifespan(&self) -> Option<DepreciableLifespan> {
        DepreciableLifespan::new(self.commissioning_date, self.useful_life_years)
    }

    /// Amount to spread over the useful life.
    pub fn depreciable_base(&self) -> f64 {
        self.acquisition_cost - self.salvage_value
    }
}

/// Parses the date spellings the repository is known to emit.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
}
