pub mod calculator;
pub mod day_rate;

pub use crate::config::rates::RateSchedule;
pub use crate::domain::model::{CostBreakdown, DayCharge, DayKind, Instant, Interval};
pub use crate::utils::error::Result;
