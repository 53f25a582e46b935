pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::rates::RateSchedule;
pub use crate::core::calculator::{
    calculate_breakdown, calculate_cost, calculate_cost_in, calculate_interval_cost, FeeCalculator,
};
pub use crate::core::day_rate::day_cost;
pub use crate::domain::model::{CostBreakdown, DayCharge, DayKind, Instant, Interval};
pub use crate::utils::error::{ParkingError, Result};
pub use crate::utils::validation::{parse_interval, IntoEpochSeconds};
