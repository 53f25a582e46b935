use crate::utils::error::{ParkingError, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Timelike};
use serde::Serialize;
use std::fmt;

/// Wall-clock point in time in the zone the stay was decoded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Instant(NaiveDateTime);

impl Instant {
    pub fn new(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }

    /// Decodes unix seconds into local wall-clock time of `tz`.
    pub fn from_epoch_seconds<Tz: TimeZone>(secs: i64, tz: &Tz) -> Result<Self> {
        tz.timestamp_opt(secs, 0)
            .single()
            .map(|dt| Self(dt.naive_local()))
            .ok_or_else(|| ParkingError::invalid_input(secs.to_string()))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }

    /// Same day at `hour`:00:00. `hour` must be below 24.
    pub fn at_hour(&self, hour: u32) -> Self {
        self.start_of_day() + TimeDelta::hours(i64::from(hour))
    }

    /// Same day at 00:00:00.
    pub fn start_of_day(&self) -> Self {
        Self(self.0.date().and_time(NaiveTime::MIN))
    }

    /// Same day at 23:59:59.
    pub fn end_of_day(&self) -> Self {
        self.start_of_day() + TimeDelta::seconds(86_399)
    }

    pub fn seconds_until(&self, later: &Instant) -> i64 {
        (later.0 - self.0).num_seconds()
    }
}

impl std::ops::Add<TimeDelta> for Instant {
    type Output = Instant;

    fn add(self, rhs: TimeDelta) -> Instant {
        Instant(self.0 + rhs)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Ordered stay, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interval {
    start: Instant,
    end: Instant,
}

impl Interval {
    pub fn new(start: Instant, end: Instant) -> Result<Self> {
        if start > end {
            return Err(ParkingError::InvalidInterval {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn end(&self) -> Instant {
        self.end
    }

    /// Calendar days between the start date and the end date.
    pub fn day_span(&self) -> i64 {
        (self.end.date() - self.start.date()).num_days()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// First or last day of the stay, priced by the hour.
    Boundary,
    /// Day strictly inside the stay, charged the daily cap.
    Full,
}

/// Charge for a run of consecutive days, `from..=to`.
///
/// A boundary day is a run of one; all full days of a stay share one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCharge {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub count: u64,
    pub kind: DayKind,
    pub cost: u64,
}

impl DayCharge {
    pub fn boundary(date: NaiveDate, cost: u64) -> Self {
        Self {
            from: date,
            to: date,
            count: 1,
            kind: DayKind::Boundary,
            cost,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostBreakdown {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub days: Vec<DayCharge>,
    pub total: u64,
}

impl CostBreakdown {
    /// Calendar days touched by the stay.
    pub fn days_spanned(&self) -> u64 {
        self.days
            .iter()
            .fold(0u64, |acc, charge| acc.saturating_add(charge.count))
    }
}
