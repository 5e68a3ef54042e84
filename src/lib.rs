#![doc(test(attr(deny(warnings))))]

//! Asset Depreciation computes period-by-period depreciation schedules for a
//! portfolio of fixed assets under straight-line, double-declining-balance and
//! sum-of-years-digits methods.

pub mod config;
pub mod domain;
pub mod errors;
pub mod methods;
pub mod schedule;
pub mod storage;
pub mod time;
pub mod utils;

pub use domain::{AssetRecord, Granularity};
pub use errors::{DepreciationError, Result};
pub use methods::DepreciationMethod;
pub use schedule::{build_schedule, ScheduleAssembler, ScheduleGrid};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Asset Depreciation tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
