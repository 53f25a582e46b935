use crate::config::rates::RateSchedule;
use crate::core::day_rate::day_cost;
use crate::domain::model::{CostBreakdown, DayCharge, DayKind, Interval};
use crate::utils::error::Result;
use crate::utils::validation::{parse_interval, IntoEpochSeconds};
use chrono::{Local, TimeZone};

fn full_days(span: i64) -> u64 {
    u64::try_from(span - 1).unwrap_or(0)
}

/// Total cost of a stay: its first day and last day priced by the hour,
/// every day strictly in between charged the daily cap.
///
/// Runs in constant time whatever the length of the stay.
pub fn calculate_interval_cost(interval: &Interval, rates: &RateSchedule) -> u64 {
    let start = interval.start();
    let end = interval.end();
    let span = interval.day_span();

    if span == 0 {
        return day_cost(&start, &end, rates);
    }

    day_cost(&start, &start.end_of_day(), rates)
        .saturating_add(full_days(span).saturating_mul(rates.daily_cap))
        .saturating_add(day_cost(&end.start_of_day(), &end, rates))
}

/// Same pricing as [`calculate_interval_cost`], itemised: one entry per
/// boundary day and a single entry for the run of full days in between.
pub fn calculate_breakdown(interval: &Interval, rates: &RateSchedule) -> CostBreakdown {
    let start = interval.start();
    let end = interval.end();
    let span = interval.day_span();

    let mut days = Vec::with_capacity(3);

    if span == 0 {
        days.push(DayCharge::boundary(
            start.date(),
            day_cost(&start, &end, rates),
        ));
    } else {
        days.push(DayCharge::boundary(
            start.date(),
            day_cost(&start, &start.end_of_day(), rates),
        ));

        let count = full_days(span);
        if count > 0 {
            if let (Some(from), Some(to)) = (start.date().succ_opt(), end.date().pred_opt()) {
                days.push(DayCharge {
                    from,
                    to,
                    count,
                    kind: DayKind::Full,
                    cost: count.saturating_mul(rates.daily_cap),
                });
            }
        }

        days.push(DayCharge::boundary(
            end.date(),
            day_cost(&end.start_of_day(), &end, rates),
        ));
    }

    for day in &days {
        tracing::debug!(
            "{} - {} ({:?}, {} day(s)): {}",
            day.from,
            day.to,
            day.kind,
            day.count,
            day.cost
        );
    }

    let total = days
        .iter()
        .fold(0u64, |acc, day| acc.saturating_add(day.cost));

    CostBreakdown {
        start: start.datetime(),
        end: end.datetime(),
        days,
        total,
    }
}

/// Calculator bound to one rate schedule and one time zone.
pub struct FeeCalculator<Tz: TimeZone> {
    rates: RateSchedule,
    tz: Tz,
}

impl<Tz: TimeZone> FeeCalculator<Tz> {
    pub fn new(rates: RateSchedule, tz: Tz) -> Self {
        Self { rates, tz }
    }

    pub fn rates(&self) -> &RateSchedule {
        &self.rates
    }

    pub fn interval<S, E>(&self, start_raw: S, end_raw: E) -> Result<Interval>
    where
        S: IntoEpochSeconds,
        E: IntoEpochSeconds,
    {
        parse_interval(start_raw, end_raw, &self.tz)
    }

    pub fn quote<S, E>(&self, start_raw: S, end_raw: E) -> Result<CostBreakdown>
    where
        S: IntoEpochSeconds,
        E: IntoEpochSeconds,
    {
        let interval = self.interval(start_raw, end_raw)?;
        Ok(calculate_breakdown(&interval, &self.rates))
    }

    pub fn cost<S, E>(&self, start_raw: S, end_raw: E) -> Result<u64>
    where
        S: IntoEpochSeconds,
        E: IntoEpochSeconds,
    {
        let interval = self.interval(start_raw, end_raw)?;
        Ok(calculate_interval_cost(&interval, &self.rates))
    }
}

impl Default for FeeCalculator<Local> {
    fn default() -> Self {
        Self::new(RateSchedule::default(), Local)
    }
}

/// Cost of a stay given as two unix timestamps, read in the local time zone
/// with the standard rates.
pub fn calculate_cost<S, E>(start_raw: S, end_raw: E) -> Result<u64>
where
    S: IntoEpochSeconds,
    E: IntoEpochSeconds,
{
    FeeCalculator::<Local>::default().cost(start_raw, end_raw)
}

pub fn calculate_cost_in<Tz, S, E>(
    tz: &Tz,
    start_raw: S,
    end_raw: E,
    rates: &RateSchedule,
) -> Result<u64>
where
    Tz: TimeZone,
    S: IntoEpochSeconds,
    E: IntoEpochSeconds,
{
    let interval = parse_interval(start_raw, end_raw, tz)?;
    Ok(calculate_interval_cost(&interval, rates))
}
