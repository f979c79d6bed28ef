//! Synthesizer properties: sample counts per window, long-horizon totals,
//! and the two-train combination. Time is pinned and the RNG seeded so
//! every assertion is deterministic.

use chrono::{DateTime, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use ccs_telemetry::series::{
    capture_outlet_series, combine_outlet, facility_series, injection_site_outlet_series,
    injector_series, interval_hours, pump_station_series, sample_count,
    INJECTION_SITE_OUTLET_CO2_TPH,
};

fn midnight(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

// ---------------------------------------------------------------------------
// Sample counts per window
// ---------------------------------------------------------------------------
#[test]
fn one_day_window_is_hourly() {
    let series = injector_series(1, 1, midnight(2026, 8, 24), &mut rng(1));
    assert_eq!(series.len(), 24);
    assert_eq!(interval_hours(1), 1);
}

#[test]
fn one_week_window_is_two_hourly() {
    let series = pump_station_series(7, midnight(2026, 8, 24), &mut rng(1));
    assert_eq!(series.len(), 84);
}

#[test]
fn long_window_is_weekly() {
    assert_eq!(interval_hours(400), 168);
    assert_eq!(sample_count(400), 400 * 24 / 168);
    let series = injection_site_outlet_series(400, midnight(2026, 8, 24), &mut rng(1));
    assert_eq!(series.len(), 57);
}

// ---------------------------------------------------------------------------
// Long-horizon totals track the target
// ---------------------------------------------------------------------------
#[test]
fn yearly_total_within_two_percent_of_target() {
    // Midnight start keeps the diurnal term at zero for the weekly walk;
    // the seasonal term averages out over a full year.
    let now = midnight(2026, 6, 15);
    let days = 365;
    let series = injection_site_outlet_series(days, now, &mut rng(42));

    let total_hours = series.len() as f64 * interval_hours(days) as f64;
    let expected = INJECTION_SITE_OUTLET_CO2_TPH * total_hours;
    let actual: f64 = series.iter().filter_map(|p| p.co2_mass_flow).sum();

    let deviation = (actual - expected).abs() / expected;
    assert!(
        deviation < 0.02,
        "yearly total off target: expected={expected:.1} actual={actual:.1} deviation={deviation:.4}"
    );
}

// ---------------------------------------------------------------------------
// Combined two-train outlet
// ---------------------------------------------------------------------------
#[test]
fn combined_outlet_sums_same_index_masses() {
    let now = midnight(2026, 8, 24);
    let train1 = facility_series(14, 1, now, &mut rng(5));
    let train2 = facility_series(14, 2, now, &mut rng(6));

    let combined = combine_outlet(&train1, &train2, &mut rng(7));
    assert_eq!(combined.len(), train1.len().min(train2.len()));
    for (i, point) in combined.iter().enumerate() {
        let expected = train1[i].co2_outlet_mass + train2[i].co2_outlet_mass;
        let actual = point.co2_mass_flow.unwrap();
        assert!(
            (actual - expected).abs() < 1e-9,
            "sample {i}: expected {expected}, got {actual}"
        );
        assert_eq!(point.timestamp, train1[i].timestamp);
    }
}

#[test]
fn combined_outlet_truncates_to_shorter_series() {
    let now = midnight(2026, 8, 24);
    let train1 = facility_series(14, 1, now, &mut rng(5));
    let train2 = facility_series(10, 2, now, &mut rng(6));
    let combined = combine_outlet(&train1, &train2, &mut rng(7));
    assert_eq!(combined.len(), 10);
}

#[test]
fn capture_outlet_series_matches_facility_cadence() {
    let now = midnight(2026, 8, 24);
    let series = capture_outlet_series(7, now, &mut rng(9));
    // Facility series are daily, so the combined outlet is too.
    assert_eq!(series.len(), 7);
    assert!(series.iter().all(|p| p.co2_mass_flow.is_some()));
}
