//! Synthetic telemetry generation for every dashboard node.
//!
//! All generators take an explicit `now` and a caller-supplied [`rand::Rng`]
//! so tests can pin time and seed the noise terms. Values are re-drawn on
//! every call; callers that need stable totals must cache the result.

use chrono::{DateTime, Datelike, Duration, Timelike, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

// CO2 throughput targets, derived from the plant's YTD balance
// (1,250,000 t captured over 328 days, 0.1% transport loss, 0.3%
// injection loss, wells split 50/50).
pub const TRAIN_1_CO2_TPD: f64 = 2286.59;
pub const TRAIN_2_CO2_TPD: f64 = 1524.39;
pub const PUMP_STATION_CO2_TPH: f64 = 158.7367;
pub const INJECTION_SITE_OUTLET_CO2_TPH: f64 = 158.6573;
pub const INJECTOR_WELL_CO2_TPH: f64 = 79.078;

/// Sample interval as a step function of the window length.
pub fn interval_hours(days: u32) -> u32 {
    if days <= 1 {
        1
    } else if days <= 7 {
        2
    } else if days <= 30 {
        6
    } else if days <= 180 {
        24
    } else {
        24 * 7
    }
}

/// Number of samples an hourly-walk series produces for a window.
pub fn sample_count(days: u32) -> u32 {
    days * 24 / interval_hours(days)
}

/// Annual sinusoid over the day of year.
pub fn seasonal_factor(ts: DateTime<Utc>, amplitude: f64) -> f64 {
    (ts.ordinal() as f64 / 365.0 * TAU).sin() * amplitude
}

/// Diurnal sinusoid over the hour of day.
pub fn diurnal_factor(ts: DateTime<Utc>, amplitude: f64) -> f64 {
    (ts.hour() as f64 / 24.0 * TAU).sin() * amplitude
}

/// Bounded noise: uniform(-0.5, 0.5) scaled by `amplitude`.
fn jitter<R: Rng>(rng: &mut R, amplitude: f64) -> f64 {
    (rng.gen::<f64>() - 0.5) * amplitude
}

/// Noise amplitude for a throughput channel. Suppressed on long windows so
/// window totals land close to the annual targets.
fn throughput_noise<R: Rng>(rng: &mut R, days: u32) -> f64 {
    jitter(rng, if days > 180 { 0.01 } else { 0.1 })
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Sample timestamps, oldest first, stepping backward from `now` in whole
/// intervals. Gauge-only nodes use the inclusive walk (one extra sample at
/// the far end of the window).
fn window_timestamps(days: u32, now: DateTime<Utc>, inclusive: bool) -> Vec<DateTime<Utc>> {
    let step = interval_hours(days) as i64;
    let count = sample_count(days) as i64;
    let last = if inclusive { count } else { count - 1 };
    if last < 0 {
        return Vec::new();
    }
    (0..=last)
        .rev()
        .map(|i| now - Duration::hours(i * step))
        .collect()
}

// =============================================================================
// Point types
// =============================================================================

/// One daily sample from an AGRU capture train.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityPoint {
    pub timestamp: DateTime<Utc>,
    pub sour_gas_inlet_mass: f64,
    pub sweet_gas_outlet_mass: f64,
    pub sweet_gas_ch4_content: f64,
    pub co2_outlet_mass: f64,
    pub co2_outlet_pressure: f64,
}

/// One sample from an injector well.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WellPoint {
    pub timestamp: DateTime<Utc>,
    pub co2_mass_injected: f64,
    pub fluid_density: f64,
    pub co2_composition: f64,
    pub injection_pressure: f64,
    pub injection_temperature: f64,
}

/// One sample from a monitoring well.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringPoint {
    pub timestamp: DateTime<Utc>,
    pub tracer_detector: f64,
    pub co2_composition: f64,
    pub monitoring_pressure: f64,
    pub monitoring_temperature: f64,
}

/// One sample from a transport node. Channels differ per node kind, hence
/// the optional fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransportPoint {
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub co2_mass_flow: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fluid_density: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fluid_inlet_density: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fluid_outlet_density: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub co2_composition: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inlet_pressure: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlet_pressure: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inlet_temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlet_temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_emission: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_vibration: Option<f64>,
}

// =============================================================================
// Capture facilities
// =============================================================================

/// Daily series for one AGRU train. Train 1 carries 60% of the capture
/// target, train 2 the remaining 40%. The mass balance derives sour-gas
/// inlet (sour gas is ~10% CO2) and sweet-gas outlet from the CO2 output.
pub fn facility_series<R: Rng>(
    days: u32,
    facility_id: u32,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<FacilityPoint> {
    let co2_daily_target = if facility_id == 1 {
        TRAIN_1_CO2_TPD
    } else {
        TRAIN_2_CO2_TPD
    };

    let mut data = Vec::with_capacity(days as usize);
    for i in (0..days as i64).rev() {
        let ts = now - Duration::days(i);
        let seasonal = seasonal_factor(ts, 0.05);
        let co2_output = co2_daily_target * (1.0 + seasonal + throughput_noise(rng, days));
        let sour_gas_inlet = co2_output * 10.0 * (1.0 + jitter(rng, 0.05));
        let sweet_gas_outlet = sour_gas_inlet - co2_output * (1.0 + jitter(rng, 0.02));

        data.push(FacilityPoint {
            timestamp: ts,
            sour_gas_inlet_mass: round1(sour_gas_inlet),
            sweet_gas_outlet_mass: round1(sweet_gas_outlet),
            sweet_gas_ch4_content: round2(85.0 + rng.gen::<f64>() * 10.0),
            co2_outlet_mass: round1(co2_output),
            co2_outlet_pressure: round1(120.0 + rng.gen::<f64>() * 20.0),
        });
    }
    data
}

// =============================================================================
// Transport nodes
// =============================================================================

/// Combine the two trains' outputs into the capture plant outlet series:
/// same-index CO2 masses are summed, truncated to the shorter series, and
/// the outlet's own gauge channels are drawn fresh.
pub fn combine_outlet<R: Rng>(
    train1: &[FacilityPoint],
    train2: &[FacilityPoint],
    rng: &mut R,
) -> Vec<TransportPoint> {
    let len = train1.len().min(train2.len());
    let mut data = Vec::with_capacity(len);
    for i in 0..len {
        data.push(TransportPoint {
            timestamp: train1[i].timestamp,
            co2_mass_flow: Some(train1[i].co2_outlet_mass + train2[i].co2_outlet_mass),
            fluid_density: Some(0.85 * (1.0 + jitter(rng, 0.02))),
            co2_composition: Some(99.2 + jitter(rng, 0.5)),
            inlet_pressure: Some(125.0 * (1.0 + jitter(rng, 0.08))),
            inlet_temperature: Some(42.0 + jitter(rng, 2.0)),
            ..TransportPoint::default()
        });
    }
    data
}

/// Capture plant outlet: the sum of both AGRU trains, so the outlet total
/// stays consistent with the facility dashboards.
pub fn capture_outlet_series<R: Rng>(
    days: u32,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<TransportPoint> {
    let train1 = facility_series(days, 1, now, rng);
    let train2 = facility_series(days, 2, now, rng);
    combine_outlet(&train1, &train2, rng)
}

/// Shared shape of the two single-point mass-flow transport nodes (pump
/// station and injection site outlet): a per-interval CO2 mass total plus
/// density, composition, pressure and temperature gauges.
fn mass_flow_node_series<R: Rng>(
    days: u32,
    now: DateTime<Utc>,
    target_tph: f64,
    pump_station: bool,
    rng: &mut R,
) -> Vec<TransportPoint> {
    let step_hours = interval_hours(days) as f64;
    let mut data = Vec::new();

    for ts in window_timestamps(days, now, false) {
        let seasonal = seasonal_factor(ts, 0.1);
        let daily = diurnal_factor(ts, 0.05);
        let rate = target_tph * (1.0 + seasonal + daily + throughput_noise(rng, days));
        // Period total, not an instantaneous rate.
        let mass_for_interval = rate * step_hours;

        let mut point = TransportPoint {
            timestamp: ts,
            co2_mass_flow: Some(mass_for_interval),
            co2_composition: Some(99.2 + jitter(rng, 0.5)),
            ..TransportPoint::default()
        };
        if pump_station {
            point.fluid_inlet_density = Some(0.85 * (1.0 + seasonal * 0.5 + jitter(rng, 0.02)));
            point.fluid_outlet_density = Some(0.84 * (1.0 + seasonal * 0.5 + jitter(rng, 0.02)));
            point.inlet_pressure = Some(85.0 * (1.0 + daily + jitter(rng, 0.08)));
            point.inlet_temperature = Some(38.0 + seasonal * 5.0 + jitter(rng, 2.0));
            point.outlet_pressure = Some(126.0 * (1.0 + daily + jitter(rng, 0.08)));
            point.outlet_temperature = Some(42.0 + seasonal * 5.0 + jitter(rng, 2.0));
        } else {
            point.fluid_density = Some(0.85 * (1.0 + seasonal * 0.5 + jitter(rng, 0.02)));
            point.inlet_pressure = Some(125.0 * (1.0 + daily + jitter(rng, 0.08)));
            point.inlet_temperature = Some(42.0 + seasonal * 5.0 + jitter(rng, 2.0));
        }
        data.push(point);
    }
    data
}

/// Injection site outlet: end of the transport chain, after 0.1% loss.
pub fn injection_site_outlet_series<R: Rng>(
    days: u32,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<TransportPoint> {
    mass_flow_node_series(days, now, INJECTION_SITE_OUTLET_CO2_TPH, false, rng)
}

/// Pump station: midpoint of the transport chain, half the loss.
pub fn pump_station_series<R: Rng>(
    days: u32,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<TransportPoint> {
    mass_flow_node_series(days, now, PUMP_STATION_CO2_TPH, true, rng)
}

/// Pipeline segment: gauge-only integrity channels.
pub fn pipeline_series<R: Rng>(days: u32, now: DateTime<Utc>, rng: &mut R) -> Vec<TransportPoint> {
    let mut data = Vec::new();
    for ts in window_timestamps(days, now, true) {
        let seasonal = seasonal_factor(ts, 0.1);
        data.push(TransportPoint {
            timestamp: ts,
            peak_temperature: Some(40.0 + seasonal * 5.0 + jitter(rng, 3.0)),
            peak_emission: Some(rng.gen::<f64>() * 0.01),
            max_vibration: Some(0.12 + jitter(rng, 0.05)),
            ..TransportPoint::default()
        });
    }
    data
}

// =============================================================================
// Wells
// =============================================================================

/// Injector well series. Both wells carry the same target (50/50 split of
/// the injected total); `well_id` is accepted for call-site symmetry.
pub fn injector_series<R: Rng>(
    days: u32,
    _well_id: u32,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<WellPoint> {
    let step_hours = interval_hours(days) as f64;
    let mut data = Vec::new();

    for ts in window_timestamps(days, now, false) {
        let seasonal = seasonal_factor(ts, 0.1);
        let daily = diurnal_factor(ts, 0.05);
        let rate = INJECTOR_WELL_CO2_TPH * (1.0 + seasonal + daily + throughput_noise(rng, days));

        data.push(WellPoint {
            timestamp: ts,
            co2_mass_injected: rate * step_hours,
            fluid_density: 0.85 * (1.0 + seasonal * 0.5 + jitter(rng, 0.02)),
            co2_composition: 98.5 + jitter(rng, 0.5),
            injection_pressure: 125.0 * (1.0 + daily + jitter(rng, 0.08)),
            injection_temperature: 45.0 + seasonal * 5.0 + jitter(rng, 2.0),
        });
    }
    data
}

/// Monitoring well series: trace gas and reservoir condition gauges.
pub fn monitoring_series<R: Rng>(
    days: u32,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<MonitoringPoint> {
    let mut data = Vec::new();
    for ts in window_timestamps(days, now, true) {
        let seasonal = seasonal_factor(ts, 0.1);
        let daily = diurnal_factor(ts, 0.05);
        data.push(MonitoringPoint {
            timestamp: ts,
            tracer_detector: 0.05 * (1.0 + seasonal * 0.5 + jitter(rng, 0.2)),
            co2_composition: 2.5 + jitter(rng, 0.4),
            monitoring_pressure: 85.0 * (1.0 + daily + jitter(rng, 0.08)),
            monitoring_temperature: 38.5 + seasonal * 3.0 + jitter(rng, 1.5),
        });
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn interval_step_function_boundaries() {
        assert_eq!(interval_hours(1), 1);
        assert_eq!(interval_hours(2), 2);
        assert_eq!(interval_hours(7), 2);
        assert_eq!(interval_hours(8), 6);
        assert_eq!(interval_hours(30), 6);
        assert_eq!(interval_hours(31), 24);
        assert_eq!(interval_hours(180), 24);
        assert_eq!(interval_hours(181), 24 * 7);
    }

    #[test]
    fn timestamps_are_evenly_spaced_and_end_at_now() {
        let now = Utc::now();
        let ts = window_timestamps(7, now, false);
        assert_eq!(ts.len(), 84);
        assert_eq!(*ts.last().unwrap(), now);
        for pair in ts.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::hours(2));
        }
    }

    #[test]
    fn facility_series_one_point_per_day() {
        let now = Utc::now();
        let series = facility_series(30, 1, now, &mut rng());
        assert_eq!(series.len(), 30);
        assert_eq!(series.last().unwrap().timestamp, now);
    }

    #[test]
    fn facility_mass_balance_holds() {
        let now = Utc::now();
        for p in facility_series(14, 2, now, &mut rng()) {
            // Sour gas carries ~10x the CO2; sweet gas is the remainder.
            assert!(p.sour_gas_inlet_mass > p.co2_outlet_mass * 9.0);
            assert!(p.sweet_gas_outlet_mass < p.sour_gas_inlet_mass);
            assert!((85.0..=95.0).contains(&p.sweet_gas_ch4_content));
        }
    }

    #[test]
    fn gauge_nodes_use_inclusive_walk() {
        let now = Utc::now();
        assert_eq!(pipeline_series(1, now, &mut rng()).len(), 25);
        assert_eq!(monitoring_series(1, now, &mut rng()).len(), 25);
        // Mass-flow nodes do not.
        assert_eq!(pump_station_series(1, now, &mut rng()).len(), 24);
    }

    #[test]
    fn pipeline_channels_stay_in_range() {
        let now = Utc::now();
        for p in pipeline_series(7, now, &mut rng()) {
            let emission = p.peak_emission.unwrap();
            assert!((0.0..=0.01).contains(&emission));
            let vibration = p.max_vibration.unwrap();
            assert!((0.095..=0.145).contains(&vibration));
            assert!(p.co2_mass_flow.is_none());
        }
    }

    #[test]
    fn mass_channel_scales_with_interval() {
        let now = Utc::now();
        // 6h interval: each sample is a 6-hour total, so it must sit near
        // target * 6 even with full noise amplitude.
        let series = injection_site_outlet_series(30, now, &mut rng());
        for p in &series {
            let mass = p.co2_mass_flow.unwrap();
            let center = INJECTION_SITE_OUTLET_CO2_TPH * 6.0;
            assert!(mass > center * 0.7 && mass < center * 1.3, "mass={mass}");
        }
    }
}
