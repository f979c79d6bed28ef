//! Window aggregation: reduce a synthesized series into the summary tiles
//! shown at the top of each dashboard.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::compliance::{measurement_is_valid, ComplianceDocument, DependencyMap};
use crate::series::{FacilityPoint, MonitoringPoint, TransportPoint, WellPoint};

/// How a channel is reduced over the selected window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Calculation {
    Total,
    Average,
    Peak,
}

/// Reduce a channel's samples. Empty input yields 0.
pub fn reduce(values: &[f64], calculation: Calculation) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    match calculation {
        Calculation::Total => values.iter().sum(),
        Calculation::Average => values.iter().sum::<f64>() / values.len() as f64,
        Calculation::Peak => values.iter().copied().fold(f64::MIN, f64::max),
    }
}

/// A summary tile: aggregated value plus its compliance standing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementReading {
    pub label: String,
    pub value: f64,
    pub unit: String,
    pub calculation: Calculation,
    pub is_valid: bool,
    pub required_documents: Vec<String>,
}

fn reading(
    key: &str,
    label: &str,
    unit: &str,
    calculation: Calculation,
    values: &[f64],
    documents: &[ComplianceDocument],
    dependencies: &DependencyMap,
    today: NaiveDate,
) -> MeasurementReading {
    MeasurementReading {
        label: label.to_string(),
        value: reduce(values, calculation),
        unit: unit.to_string(),
        calculation,
        is_valid: measurement_is_valid(key, documents, dependencies, today),
        required_documents: dependencies
            .get(key)
            .map(|deps| deps.iter().map(|d| d.to_string()).collect())
            .unwrap_or_default(),
    }
}

fn channel<T>(series: &[T], f: impl Fn(&T) -> f64) -> Vec<f64> {
    series.iter().map(f).collect()
}

fn opt_channel<T>(series: &[T], f: impl Fn(&T) -> Option<f64>) -> Vec<f64> {
    series.iter().filter_map(f).collect()
}

/// Injector well tiles: injected mass is a window total, everything else an
/// average over the window.
pub fn injector_readings(
    series: &[WellPoint],
    documents: &[ComplianceDocument],
    dependencies: &DependencyMap,
    today: NaiveDate,
) -> Vec<MeasurementReading> {
    vec![
        reading(
            "co2_mass_injected",
            "CO2 Mass Injected",
            "t",
            Calculation::Total,
            &channel(series, |p| p.co2_mass_injected),
            documents,
            dependencies,
            today,
        ),
        reading(
            "fluid_density",
            "Fluid Density",
            "g/cm³",
            Calculation::Average,
            &channel(series, |p| p.fluid_density),
            documents,
            dependencies,
            today,
        ),
        reading(
            "co2_composition",
            "CO2 Composition",
            "% purity",
            Calculation::Average,
            &channel(series, |p| p.co2_composition),
            documents,
            dependencies,
            today,
        ),
        reading(
            "injection_pressure",
            "Avg Inj Pressure",
            "bar",
            Calculation::Average,
            &channel(series, |p| p.injection_pressure),
            documents,
            dependencies,
            today,
        ),
        reading(
            "injection_temperature",
            "Avg Temp",
            "°C",
            Calculation::Average,
            &channel(series, |p| p.injection_temperature),
            documents,
            dependencies,
            today,
        ),
    ]
}

pub fn monitoring_readings(
    series: &[MonitoringPoint],
    documents: &[ComplianceDocument],
    dependencies: &DependencyMap,
    today: NaiveDate,
) -> Vec<MeasurementReading> {
    vec![
        reading(
            "tracer_detector",
            "Tracer Detector",
            "ppm",
            Calculation::Average,
            &channel(series, |p| p.tracer_detector),
            documents,
            dependencies,
            today,
        ),
        reading(
            "co2_composition",
            "CO2 Composition",
            "%",
            Calculation::Average,
            &channel(series, |p| p.co2_composition),
            documents,
            dependencies,
            today,
        ),
        reading(
            "monitoring_pressure",
            "Average Pressure",
            "bar",
            Calculation::Average,
            &channel(series, |p| p.monitoring_pressure),
            documents,
            dependencies,
            today,
        ),
        reading(
            "monitoring_temperature",
            "Avg Temp",
            "°C",
            Calculation::Average,
            &channel(series, |p| p.monitoring_temperature),
            documents,
            dependencies,
            today,
        ),
    ]
}

pub fn facility_readings(
    series: &[FacilityPoint],
    documents: &[ComplianceDocument],
    dependencies: &DependencyMap,
    today: NaiveDate,
) -> Vec<MeasurementReading> {
    vec![
        reading(
            "sour_gas_inlet_mass",
            "Sour Gas Inlet Mass",
            "t",
            Calculation::Total,
            &channel(series, |p| p.sour_gas_inlet_mass),
            documents,
            dependencies,
            today,
        ),
        reading(
            "sweet_gas_outlet_mass",
            "Sweet Gas Outlet Mass (CH4)",
            "t",
            Calculation::Total,
            &channel(series, |p| p.sweet_gas_outlet_mass),
            documents,
            dependencies,
            today,
        ),
        reading(
            "sweet_gas_ch4_content",
            "Sweet Gas CH4 Content",
            "%",
            Calculation::Average,
            &channel(series, |p| p.sweet_gas_ch4_content),
            documents,
            dependencies,
            today,
        ),
        reading(
            "co2_outlet_mass",
            "CO₂ Outlet Mass",
            "t",
            Calculation::Total,
            &channel(series, |p| p.co2_outlet_mass),
            documents,
            dependencies,
            today,
        ),
        reading(
            "co2_outlet_pressure",
            "CO₂ Outlet Pressure",
            "bar",
            Calculation::Average,
            &channel(series, |p| p.co2_outlet_pressure),
            documents,
            dependencies,
            today,
        ),
    ]
}

/// Tiles shared by the mass-flow transport nodes (plant outlet, pump
/// station, injection site outlet).
pub fn transport_outlet_readings(
    series: &[TransportPoint],
    documents: &[ComplianceDocument],
    dependencies: &DependencyMap,
    today: NaiveDate,
) -> Vec<MeasurementReading> {
    vec![
        reading(
            "co2_mass_flow",
            "CO2 Mass Flow",
            "t",
            Calculation::Total,
            &opt_channel(series, |p| p.co2_mass_flow),
            documents,
            dependencies,
            today,
        ),
        reading(
            "fluid_density",
            "Fluid Density",
            "g/cm³",
            Calculation::Average,
            &opt_channel(series, |p| p.fluid_density),
            documents,
            dependencies,
            today,
        ),
        reading(
            "co2_composition",
            "CO2 Composition",
            "% purity",
            Calculation::Average,
            &opt_channel(series, |p| p.co2_composition),
            documents,
            dependencies,
            today,
        ),
        reading(
            "inlet_pressure",
            "Avg Pressure",
            "bar",
            Calculation::Average,
            &opt_channel(series, |p| p.inlet_pressure),
            documents,
            dependencies,
            today,
        ),
        reading(
            "inlet_temperature",
            "Avg Temp",
            "°C",
            Calculation::Average,
            &opt_channel(series, |p| p.inlet_temperature),
            documents,
            dependencies,
            today,
        ),
    ]
}

/// Pipeline segment tiles: integrity peaks over the window.
pub fn pipeline_readings(
    series: &[TransportPoint],
    documents: &[ComplianceDocument],
    dependencies: &DependencyMap,
    today: NaiveDate,
) -> Vec<MeasurementReading> {
    vec![
        reading(
            "peak_temperature",
            "Peak Temperature",
            "°C",
            Calculation::Peak,
            &opt_channel(series, |p| p.peak_temperature),
            documents,
            dependencies,
            today,
        ),
        reading(
            "peak_emission",
            "Peak Emission",
            "ppm",
            Calculation::Peak,
            &opt_channel(series, |p| p.peak_emission),
            documents,
            dependencies,
            today,
        ),
        reading(
            "max_vibration",
            "Max Vibration",
            "g",
            Calculation::Peak,
            &opt_channel(series, |p| p.max_vibration),
            documents,
            dependencies,
            today,
        ),
    ]
}
