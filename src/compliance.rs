//! Compliance documents: calibration/test reports with validity windows.
//!
//! A document's status is never stored; it is always derived from
//! `date_of_test + validity_period_days` against an explicit "today", so
//! editing the test date can never leave a stale status behind.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Lookback horizon used by every backfill call site.
pub const LOOKBACK_DAYS: i64 = 2 * 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocStatus {
    Valid,
    Expired,
}

/// Expiration date for a report: plain calendar-day arithmetic.
pub fn valid_until(date_of_test: NaiveDate, validity_days: i64) -> NaiveDate {
    date_of_test + Duration::days(validity_days)
}

/// A report is valid while its expiration date has not passed.
pub fn is_report_valid(date_of_test: NaiveDate, validity_days: i64, today: NaiveDate) -> bool {
    valid_until(date_of_test, validity_days) >= today
}

// =============================================================================
// Documents and templates
// =============================================================================

/// Per-document-type template: everything but the test date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentTemplate {
    pub document_type: String,
    pub display_name: String,
    pub validity_period_days: i64,
    pub validity_period_text: String,
}

impl DocumentTemplate {
    pub fn new(document_type: &str, display_name: &str, validity_days: i64, text: &str) -> Self {
        Self {
            document_type: document_type.to_string(),
            display_name: display_name.to_string(),
            validity_period_days: validity_days,
            validity_period_text: text.to_string(),
        }
    }
}

/// One calibration/test event. Identity is immutable; the test date may be
/// edited at runtime, which changes the derived status with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceDocument {
    pub document_id: u32,
    pub document_type: String,
    pub display_name: String,
    pub date_of_test: NaiveDate,
    pub validity_period_days: i64,
    pub validity_period_text: String,
    pub file_name: String,
}

impl ComplianceDocument {
    pub fn valid_until(&self) -> NaiveDate {
        valid_until(self.date_of_test, self.validity_period_days)
    }

    pub fn status(&self, today: NaiveDate) -> DocStatus {
        if self.valid_until() >= today {
            DocStatus::Valid
        } else {
            DocStatus::Expired
        }
    }

    pub fn is_valid(&self, today: NaiveDate) -> bool {
        self.status(today) == DocStatus::Valid
    }

    pub fn set_date_of_test(&mut self, date: NaiveDate) {
        self.date_of_test = date;
    }

    /// Serializable view with the status evaluated at `today`.
    pub fn row(&self, today: NaiveDate) -> DocumentRow {
        DocumentRow {
            document_id: self.document_id,
            document_type: self.document_type.clone(),
            display_name: self.display_name.clone(),
            date_of_test: self.date_of_test,
            validity_period_days: self.validity_period_days,
            validity_period_text: self.validity_period_text.clone(),
            status: self.status(today),
            file_name: self.file_name.clone(),
        }
    }
}

/// Flat document record for the dashboard, status included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRow {
    pub document_id: u32,
    pub document_type: String,
    pub display_name: String,
    pub date_of_test: NaiveDate,
    pub validity_period_days: i64,
    pub validity_period_text: String,
    pub status: DocStatus,
    pub file_name: String,
}

// =============================================================================
// Historical backfill
// =============================================================================

/// Generate historical reports for one template, stepping backward from
/// `today` in whole validity periods until the lookback horizon is covered.
///
/// Record 0 is dated `today`, so the most recent report is always valid at
/// generation time. `next_id` keeps ids unique across templates within one
/// generation run.
pub fn backfill_reports(
    template: &DocumentTemplate,
    today: NaiveDate,
    horizon_days: i64,
    next_id: &mut u32,
) -> Vec<ComplianceDocument> {
    let validity = template.validity_period_days.max(1);
    let count = (horizon_days + validity - 1) / validity + 1;

    let mut reports = Vec::with_capacity(count as usize);
    for i in 0..count {
        let date_of_test = today - Duration::days(i * validity);
        reports.push(ComplianceDocument {
            document_id: *next_id,
            document_type: template.document_type.clone(),
            display_name: template.display_name.clone(),
            date_of_test,
            validity_period_days: template.validity_period_days,
            validity_period_text: template.validity_period_text.clone(),
            file_name: format!("{}_{}.pdf", template.document_type, date_of_test),
        });
        *next_id += 1;
    }
    reports
}

/// Backfill a whole template catalog with a shared id sequence.
pub fn backfill_catalog(templates: &[DocumentTemplate], today: NaiveDate) -> Vec<ComplianceDocument> {
    let mut next_id = 1;
    let mut all = Vec::new();
    for template in templates {
        all.extend(backfill_reports(template, today, LOOKBACK_DAYS, &mut next_id));
    }
    all
}

// =============================================================================
// Dependency validation
// =============================================================================

pub type DependencyMap = HashMap<&'static str, Vec<&'static str>>;

/// A measurement is valid iff, for every required document type, the most
/// recent report of that type is currently valid. Measurements with no
/// registered dependencies are vacuously valid.
pub fn measurement_is_valid(
    measurement: &str,
    documents: &[ComplianceDocument],
    dependencies: &DependencyMap,
    today: NaiveDate,
) -> bool {
    let Some(required) = dependencies.get(measurement) else {
        return true;
    };
    required.iter().all(|doc_type| {
        documents
            .iter()
            .filter(|d| d.document_type == *doc_type)
            .max_by_key(|d| d.date_of_test)
            .map(|d| d.is_valid(today))
            .unwrap_or(false)
    })
}

// =============================================================================
// Built-in catalogs
// =============================================================================

/// Capture facility (AGRU train) calibration documents.
pub fn capture_document_templates() -> Vec<DocumentTemplate> {
    vec![
        DocumentTemplate::new(
            "gas_analyzer_calibration",
            "Gas Analyzer Calibration Report",
            90,
            "3 months",
        ),
        DocumentTemplate::new(
            "inlet_sour_gas_coriolis",
            "Inlet Sour Gas Coriolis Meter Calibration",
            365,
            "1 Year",
        ),
        DocumentTemplate::new(
            "outlet_sweet_gas_coriolis",
            "Outlet Sweet Gas Coriolis Meter Calibration",
            365,
            "1 Year",
        ),
        DocumentTemplate::new(
            "co2_outlet_coriolis",
            "CO2 Outlet Coriolis Meter Calibration",
            365,
            "1 Year",
        ),
        DocumentTemplate::new(
            "pt_transducer_calibration",
            "P&T Transducer Calibration Report",
            365,
            "1 Year",
        ),
    ]
}

/// Capture plant outlet, injection site outlet, and pump stations share one
/// document set.
pub fn outlet_document_templates() -> Vec<DocumentTemplate> {
    vec![
        DocumentTemplate::new(
            "coriolis_meter_calibration",
            "Coriolis Meter Calibration Report",
            365,
            "1 Year",
        ),
        DocumentTemplate::new(
            "gas_analyzer_calibration",
            "Gas Analyzer Calibration Report",
            90,
            "3 months",
        ),
        DocumentTemplate::new(
            "pt_meter_calibration",
            "P&T Transducer Calibration Report",
            365,
            "1 Year",
        ),
    ]
}

pub fn pipeline_document_templates() -> Vec<DocumentTemplate> {
    vec![
        DocumentTemplate::new(
            "corrosion_monitoring_report",
            "Corrosion Monitoring Report",
            365,
            "1 Year",
        ),
        DocumentTemplate::new(
            "das_calibration",
            "Distributed Acoustic Sensing (DAS) Calibration",
            365,
            "1 Year",
        ),
        DocumentTemplate::new(
            "acoustic_emission_calibration",
            "Acoustic Emission Sensors Calibration Report",
            365,
            "1 Year",
        ),
        DocumentTemplate::new(
            "dts_fiber_calibration",
            "Distributed Temperature Sensing (DTS) Fiber Calibration",
            365,
            "1 Year",
        ),
    ]
}

pub fn injector_document_templates() -> Vec<DocumentTemplate> {
    vec![
        DocumentTemplate::new(
            "wellbore_integrity_log",
            "Wellbore Integrity - Cased-hole Logging (Annually)",
            365,
            "1 Year",
        ),
        DocumentTemplate::new("pressure_falloff_test", "Pressure Fall off Test", 90, "3 months"),
        DocumentTemplate::new(
            "coriolis_meter_calibration",
            "Coriolis Meter Calibration Report",
            365,
            "1 Year",
        ),
        DocumentTemplate::new(
            "gas_analyzer_calibration",
            "Gas Analyzer Calibration Report",
            90,
            "3 months",
        ),
        DocumentTemplate::new(
            "pt_meter_calibration",
            "P&T Transducer Calibration Report",
            365,
            "1 Year",
        ),
    ]
}

pub fn monitoring_document_templates() -> Vec<DocumentTemplate> {
    vec![
        DocumentTemplate::new(
            "tracer_detector_calibration",
            "Tracer Detector Calibration Report",
            90,
            "3 months",
        ),
        DocumentTemplate::new(
            "gas_analyzer_calibration",
            "Gas Analyzer Calibration Report",
            90,
            "3 months",
        ),
        DocumentTemplate::new(
            "pt_meter_calibration",
            "P&T Transducer Calibration Report",
            365,
            "1 Year",
        ),
    ]
}

pub fn facility_dependencies() -> DependencyMap {
    HashMap::from([
        ("sour_gas_inlet_mass", vec!["inlet_sour_gas_coriolis"]),
        ("sweet_gas_outlet_mass", vec!["outlet_sweet_gas_coriolis"]),
        ("sweet_gas_ch4_content", vec!["gas_analyzer_calibration"]),
        ("co2_outlet_mass", vec!["co2_outlet_coriolis"]),
        ("co2_outlet_pressure", vec!["pt_transducer_calibration"]),
    ])
}

pub fn outlet_dependencies() -> DependencyMap {
    HashMap::from([
        ("co2_mass_flow", vec!["coriolis_meter_calibration"]),
        ("fluid_density", vec!["coriolis_meter_calibration"]),
        ("co2_composition", vec!["gas_analyzer_calibration"]),
        ("inlet_pressure", vec!["pt_meter_calibration"]),
        ("inlet_temperature", vec!["pt_meter_calibration"]),
    ])
}

pub fn pipeline_dependencies() -> DependencyMap {
    HashMap::from([
        (
            "peak_temperature",
            vec!["corrosion_monitoring_report", "dts_fiber_calibration"],
        ),
        (
            "peak_emission",
            vec!["corrosion_monitoring_report", "acoustic_emission_calibration"],
        ),
        (
            "max_vibration",
            vec!["corrosion_monitoring_report", "das_calibration"],
        ),
    ])
}

pub fn pump_station_dependencies() -> DependencyMap {
    HashMap::from([
        ("co2_mass_flow", vec!["coriolis_meter_calibration"]),
        ("fluid_inlet_density", vec!["coriolis_meter_calibration"]),
        ("fluid_outlet_density", vec!["coriolis_meter_calibration"]),
        ("co2_composition", vec!["gas_analyzer_calibration"]),
        ("inlet_pressure", vec!["pt_meter_calibration"]),
        ("inlet_temperature", vec!["pt_meter_calibration"]),
        ("outlet_pressure", vec!["pt_meter_calibration"]),
        ("outlet_temperature", vec!["pt_meter_calibration"]),
    ])
}

pub fn injector_dependencies() -> DependencyMap {
    let integrity = |extra: &'static str| {
        vec!["wellbore_integrity_log", "pressure_falloff_test", extra]
    };
    HashMap::from([
        ("co2_mass_injected", integrity("coriolis_meter_calibration")),
        ("fluid_density", integrity("coriolis_meter_calibration")),
        ("co2_composition", integrity("gas_analyzer_calibration")),
        ("injection_pressure", integrity("pt_meter_calibration")),
        ("injection_temperature", integrity("pt_meter_calibration")),
    ])
}

pub fn monitoring_dependencies() -> DependencyMap {
    HashMap::from([
        ("tracer_detector", vec!["tracer_detector_calibration"]),
        ("co2_composition", vec!["gas_analyzer_calibration"]),
        ("monitoring_pressure", vec!["pt_meter_calibration"]),
        ("monitoring_temperature", vec!["pt_meter_calibration"]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn valid_until_is_calendar_addition() {
        assert_eq!(date(2026, 1, 1) + Duration::days(90), valid_until(date(2026, 1, 1), 90));
        assert_eq!(valid_until(date(2025, 12, 31), 1), date(2026, 1, 1));
    }

    #[test]
    fn status_flips_exactly_at_expiration() {
        let doc_date = date(2026, 1, 1);
        // Valid on the expiration day itself, expired the day after.
        assert!(is_report_valid(doc_date, 30, date(2026, 1, 31)));
        assert!(!is_report_valid(doc_date, 30, date(2026, 2, 1)));
    }

    #[test]
    fn backfill_covers_horizon_and_newest_is_valid() {
        let today = date(2026, 8, 24);
        let template = DocumentTemplate::new("t", "T", 90, "3 months");
        let mut next_id = 1;
        let reports = backfill_reports(&template, today, LOOKBACK_DAYS, &mut next_id);

        // ceil(730 / 90) + 1 = 10
        assert_eq!(reports.len(), 10);
        assert_eq!(reports[0].date_of_test, today);
        assert!(reports[0].is_valid(today));
        let oldest = reports.last().unwrap();
        assert!(today - oldest.date_of_test >= Duration::days(LOOKBACK_DAYS));
    }

    #[test]
    fn backfill_long_validity_yields_two_reports() {
        let today = date(2026, 8, 24);
        let template = DocumentTemplate::new("t", "T", 800, "~2 Years");
        let mut next_id = 1;
        let reports = backfill_reports(&template, today, LOOKBACK_DAYS, &mut next_id);
        assert_eq!(reports.len(), 2);
    }

    #[test]
    fn catalog_ids_are_unique_across_templates() {
        let today = date(2026, 8, 24);
        let docs = backfill_catalog(&injector_document_templates(), today);
        let mut ids: Vec<u32> = docs.iter().map(|d| d.document_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), docs.len());
    }

    #[test]
    fn editing_test_date_rederives_status() {
        let today = date(2026, 8, 24);
        let template = DocumentTemplate::new("t", "T", 30, "1 month");
        let mut next_id = 1;
        let mut doc = backfill_reports(&template, today, 30, &mut next_id).remove(0);
        assert_eq!(doc.status(today), DocStatus::Valid);
        doc.set_date_of_test(today - Duration::days(120));
        assert_eq!(doc.status(today), DocStatus::Expired);
    }

    #[test]
    fn most_recent_report_decides_validity() {
        let today = date(2026, 8, 24);
        let template = DocumentTemplate::new("coriolis_meter_calibration", "C", 365, "1 Year");
        let mut next_id = 1;
        let docs = backfill_reports(&template, today, LOOKBACK_DAYS, &mut next_id);
        let deps: DependencyMap =
            HashMap::from([("co2_mass_flow", vec!["coriolis_meter_calibration"])]);
        assert!(measurement_is_valid("co2_mass_flow", &docs, &deps, today));

        // Only expired instances left: invalid.
        let expired: Vec<_> = docs
            .into_iter()
            .filter(|d| !d.is_valid(today))
            .collect();
        assert!(!measurement_is_valid("co2_mass_flow", &expired, &deps, today));
    }

    #[test]
    fn unknown_measurement_is_vacuously_valid() {
        let deps = monitoring_dependencies();
        assert!(measurement_is_valid("not_registered", &[], &deps, date(2026, 1, 1)));
    }
}
