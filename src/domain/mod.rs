//! Asset, period and lifespan models consumed by the schedule engine.

pub mod asset;
pub mod lifespan;
pub mod period;

pub use asset::{
    parse_date, Asset, AssetId, AssetRecord, AssetWarning, InvalidDatePolicy, Resolution,
    WarningKind,
};
pub use lifespan::{overlap_months, DepreciableLifespan};
pub use period::{generate_periods, Granularity, Period};
