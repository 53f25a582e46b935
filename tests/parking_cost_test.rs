use chrono::FixedOffset;
use parking_fee::{
    calculate_cost, calculate_cost_in, DayKind, FeeCalculator, ParkingError, RateSchedule,
};

// Timestamps below were recorded in Central European time: UTC+1 in winter,
// UTC+2 in summer.
fn cet() -> FixedOffset {
    FixedOffset::east_opt(3600).unwrap()
}

fn cest() -> FixedOffset {
    FixedOffset::east_opt(2 * 3600).unwrap()
}

fn cost_in(tz: FixedOffset, start: i64, end: i64) -> u64 {
    calculate_cost_in(&tz, start, end, &RateSchedule::default()).unwrap()
}

#[test]
fn test_invalid_dates() {
    // 2015-04-11 13:10:31 -> 2015-04-11 11:10:31
    let result = calculate_cost(1428754231i64, 1428747031i64);
    assert!(matches!(result, Err(ParkingError::InvalidInterval { .. })));

    let result = calculate_cost("foo", 1428747031i64);
    assert!(matches!(result, Err(ParkingError::InvalidInput { .. })));

    let result = calculate_cost("1428747031", "12:10");
    assert!(matches!(result, Err(ParkingError::InvalidInput { .. })));
}

#[test]
fn test_dates_within_day() {
    // 2013-01-04 09:03:02 -> 12:59:02
    assert_eq!(cost_in(cet(), 1357286582, 1357300742), 4 * 5 + 5);
    // 2013-01-04 14:59:02 -> 16:23:02
    assert_eq!(cost_in(cet(), 1357307942, 1357312982), 2 * 5 + 5);
}

#[test]
fn test_dates_1_day_apart() {
    // 2015-03-08 12:55:03 -> 2015-03-09 09:55:55
    assert_eq!(cost_in(cet(), 1425815703, 1425891355), 25 + 10);
}

#[test]
fn test_dates_multiple_days_apart() {
    // 2015-06-05 20:03:04 -> 2015-06-08 12:55:03
    assert_eq!(cost_in(cest(), 1433527384, 1433760903), 25 + 25 + 4 * 5 + 5);
}

#[test]
fn test_free_hours() {
    // 2015-04-11 05:14:56 -> 07:44:23
    assert_eq!(cost_in(cest(), 1428722096, 1428731063), 0);
}

#[test]
fn test_less_than_an_hour() {
    // 2015-04-11 17:00:00 -> 17:07:04
    assert_eq!(cost_in(cest(), 1428764400, 1428764824), 10);
}

#[test]
fn test_minute_over() {
    // 2015-04-11 11:01:00 -> 12:00:00
    assert_eq!(cost_in(cest(), 1428742860, 1428746400), 10);
}

#[test]
fn test_second_over() {
    // 2015-04-11 13:01:23 -> 16:00:23
    assert_eq!(cost_in(cest(), 1428750083, 1428760823), 5 + 3 * 5);
}

#[test]
fn test_hours_exceed_max() {
    // 2015-04-11 08:03:04 -> 20:03:04
    assert_eq!(cost_in(cest(), 1428732184, 1428775384), 25);
}

#[test]
fn test_string_inputs() {
    let tz = cet();
    let rates = RateSchedule::default();
    assert_eq!(
        calculate_cost_in(&tz, "1425815703", String::from("1425891355"), &rates).unwrap(),
        35
    );
}

#[test]
fn test_same_instant() {
    // 2015-04-11 05:14:56, free window
    assert_eq!(cost_in(cest(), 1428722096, 1428722096), 0);
    // 2015-04-11 17:00:00, billable: no hours, only the surcharge
    assert_eq!(cost_in(cest(), 1428764400, 1428764400), 5);
}

#[test]
fn test_plain_integer_literals() {
    // 2015-04-11 17:00:00 -> 17:07:04
    let rates = RateSchedule::default();
    assert_eq!(
        calculate_cost_in(&cest(), 1428764400, 1428764824, &rates).unwrap(),
        10
    );
    assert_eq!(
        calculate_cost(1428764400, 1428764824).unwrap(),
        calculate_cost(1428764400u64, 1428764824u32).unwrap()
    );
}

#[test]
fn test_local_time_is_pure() {
    let first = calculate_cost(1428764400i64, 1428764824i64).unwrap();
    let second = calculate_cost("1428764400", "1428764824").unwrap();
    assert_eq!(first, second);
    assert!(first <= 2 * 25);
}

#[test]
fn test_month_boundary() {
    // 2015-01-31 12:00:00 -> 2015-02-01 12:00:00
    let calculator = FeeCalculator::new(RateSchedule::default(), cet());
    let breakdown = calculator.quote(1422702000i64, 1422788400i64).unwrap();
    assert_eq!(breakdown.days.len(), 2);
    assert!(breakdown.days.iter().all(|d| d.kind == DayKind::Boundary));
    // 12:00 - 18:00 capped, then 09:00 - 12:00
    assert_eq!(breakdown.total, 25 + 3 * 5 + 5);
}

#[test]
fn test_custom_rates_from_toml() {
    let rates = RateSchedule::from_toml_str(
        r#"
[rates]
hourly_rate = 10
first_hour_surcharge = 0
daily_cap = 60
"#,
    )
    .unwrap();
    let calculator = FeeCalculator::new(rates, cest());
    // 2015-04-11 13:01:23 -> 16:00:23
    assert_eq!(calculator.cost(1428750083i64, 1428760823i64).unwrap(), 30);
    // 2015-06-05 20:03:04 -> 2015-06-08 12:55:03
    assert_eq!(
        calculator.cost(1433527384i64, 1433760903i64).unwrap(),
        60 + 60 + 40
    );
}

#[test]
fn test_breakdown_serializes() {
    let calculator = FeeCalculator::new(RateSchedule::default(), cest());
    let breakdown = calculator.quote(1433527384i64, 1433760903i64).unwrap();
    let json = serde_json::to_value(&breakdown).unwrap();

    assert_eq!(json["total"], 75);
    assert_eq!(json["start"], "2015-06-05T20:03:04");
    assert_eq!(json["days"].as_array().unwrap().len(), 3);
    assert_eq!(json["days"][1]["kind"], "full");
    assert_eq!(json["days"][1]["from"], "2015-06-06");
    assert_eq!(json["days"][1]["to"], "2015-06-07");
    assert_eq!(json["days"][1]["count"], 2);
    assert_eq!(json["days"][1]["cost"], 50);
    assert_eq!(json["days"][2]["cost"], 25);
}
