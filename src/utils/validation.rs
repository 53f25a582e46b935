use crate::domain::model::{Instant, Interval};
use crate::utils::error::{ParkingError, Result};
use chrono::TimeZone;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Raw timestamp as handed over by a caller: an integer or an integer-like string.
pub trait IntoEpochSeconds {
    fn into_epoch_seconds(self) -> Result<i64>;
}

impl IntoEpochSeconds for i64 {
    fn into_epoch_seconds(self) -> Result<i64> {
        Ok(self)
    }
}

impl IntoEpochSeconds for i32 {
    fn into_epoch_seconds(self) -> Result<i64> {
        Ok(i64::from(self))
    }
}

impl IntoEpochSeconds for u32 {
    fn into_epoch_seconds(self) -> Result<i64> {
        Ok(i64::from(self))
    }
}

impl IntoEpochSeconds for u64 {
    fn into_epoch_seconds(self) -> Result<i64> {
        i64::try_from(self).map_err(|_| ParkingError::invalid_input(self.to_string()))
    }
}

impl IntoEpochSeconds for &str {
    fn into_epoch_seconds(self) -> Result<i64> {
        self.trim()
            .parse::<i64>()
            .map_err(|_| ParkingError::invalid_input(self))
    }
}

impl IntoEpochSeconds for &String {
    fn into_epoch_seconds(self) -> Result<i64> {
        self.as_str().into_epoch_seconds()
    }
}

impl IntoEpochSeconds for String {
    fn into_epoch_seconds(self) -> Result<i64> {
        self.as_str().into_epoch_seconds()
    }
}

/// Parses both raw values and decodes them in `tz`.
///
/// Ordering is checked on the integers before decoding, so a reversed pair
/// fails with `InvalidInterval` even when one side would not decode.
pub fn parse_interval<S, E, Tz>(start_raw: S, end_raw: E, tz: &Tz) -> Result<Interval>
where
    S: IntoEpochSeconds,
    E: IntoEpochSeconds,
    Tz: TimeZone,
{
    let start = start_raw.into_epoch_seconds().inspect_err(|e| {
        tracing::warn!("Rejected start timestamp: {}", e);
    })?;
    let end = end_raw.into_epoch_seconds().inspect_err(|e| {
        tracing::warn!("Rejected end timestamp: {}", e);
    })?;

    if start > end {
        tracing::warn!("Rejected interval: start {} is after end {}", start, end);
        return Err(ParkingError::InvalidInterval {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let start = Instant::from_epoch_seconds(start, tz)?;
    let end = Instant::from_epoch_seconds(end, tz)?;
    Interval::new(start, end)
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ParkingError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
