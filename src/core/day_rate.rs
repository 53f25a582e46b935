use crate::config::rates::RateSchedule;
use crate::domain::model::Instant;

const SECONDS_PER_HOUR: u64 = 3600;

/// Prices a sub-interval lying within one calendar day.
///
/// The caller guarantees `start` and `end` share a date; this is not
/// re-checked. A stay whose two ends both sit before opening, or both after
/// closing, is free. Anything else is clamped to the billable window, rounded
/// up to whole hours, charged per hour plus the first-hour surcharge, and
/// capped at the daily maximum.
pub fn day_cost(start: &Instant, end: &Instant, rates: &RateSchedule) -> u64 {
    let open = rates.billable_start_hour;
    let close = rates.billable_end_hour;

    if (start.hour() < open && end.hour() < open) || (start.hour() > close && end.hour() > close)
    {
        tracing::trace!("{} - {} lies in the free window", start, end);
        return 0;
    }

    let start = if start.hour() < open {
        start.at_hour(open)
    } else {
        *start
    };
    let end = if end.hour() > close {
        end.at_hour(close)
    } else {
        *end
    };

    // A start inside the closing hour can sit past the clamped end.
    let seconds = u64::try_from(start.seconds_until(&end)).unwrap_or(0);
    let hours = seconds.div_ceil(SECONDS_PER_HOUR);

    let cost = hours
        .saturating_mul(rates.hourly_rate)
        .saturating_add(rates.first_hour_surcharge);

    cost.min(rates.daily_cap)
}
