//! Schedule assembly and the grid it produces.

pub mod assembler;
pub mod grid;

pub use assembler::{build_schedule, schedule_asset, ScheduleAssembler};
pub use grid::{format_amount, AssetRow, ScheduleGrid, TotalsRow};
