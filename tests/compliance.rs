//! Compliance invariants: expiration arithmetic, backfill coverage, and
//! dependency validation, all evaluated against a pinned "today".

use chrono::{Duration, NaiveDate};

use ccs_telemetry::compliance::{
    backfill_catalog, backfill_reports, capture_document_templates, injector_document_templates,
    is_report_valid, measurement_is_valid, monitoring_document_templates,
    outlet_document_templates, pipeline_document_templates, valid_until, ComplianceDocument,
    DependencyMap, DocStatus, DocumentTemplate, LOOKBACK_DAYS,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn doc(id: u32, doc_type: &str, date_of_test: NaiveDate, validity_days: i64) -> ComplianceDocument {
    ComplianceDocument {
        document_id: id,
        document_type: doc_type.to_string(),
        display_name: doc_type.to_string(),
        date_of_test,
        validity_period_days: validity_days,
        validity_period_text: String::new(),
        file_name: format!("{doc_type}_{date_of_test}.pdf"),
    }
}

// ---------------------------------------------------------------------------
// Expiration is exact calendar arithmetic and validity flips exactly once
// ---------------------------------------------------------------------------
#[test]
fn expiration_is_exact_calendar_addition() {
    let cases = [
        (date(2026, 1, 1), 90, date(2026, 4, 1)),
        (date(2026, 2, 27), 2, date(2026, 3, 1)),
        (date(2024, 2, 28), 1, date(2024, 2, 29)), // leap year
        (date(2025, 12, 31), 365, date(2026, 12, 31)),
    ];
    for (test_date, days, expected) in cases {
        assert_eq!(valid_until(test_date, days), expected);
    }
}

#[test]
fn validity_is_monotonic_in_now() {
    let test_date = date(2026, 3, 10);
    let days = 45;
    let mut flips = 0;
    let mut prev = is_report_valid(test_date, days, test_date);
    assert!(prev, "valid on the day of test");

    for offset in 1..200 {
        let now = test_date + Duration::days(offset);
        let current = is_report_valid(test_date, days, now);
        if current != prev {
            assert!(prev && !current, "validity may only flip valid -> expired");
            flips += 1;
        }
        prev = current;
    }
    assert_eq!(flips, 1, "validity must flip exactly once");
    assert!(is_report_valid(test_date, days, valid_until(test_date, days)));
    assert!(!is_report_valid(test_date, days, valid_until(test_date, days) + Duration::days(1)));
}

// ---------------------------------------------------------------------------
// Backfill: non-empty, horizon covered, most recent record always valid
// ---------------------------------------------------------------------------
#[test]
fn every_builtin_catalog_backfills_with_a_current_report() {
    let today = date(2026, 8, 24);
    let catalogs = [
        capture_document_templates(),
        outlet_document_templates(),
        pipeline_document_templates(),
        injector_document_templates(),
        monitoring_document_templates(),
    ];

    for templates in catalogs {
        let docs = backfill_catalog(&templates, today);
        assert!(!docs.is_empty());

        for template in &templates {
            let of_type: Vec<_> = docs
                .iter()
                .filter(|d| d.document_type == template.document_type)
                .collect();
            assert!(!of_type.is_empty(), "{} missing", template.document_type);

            let newest = of_type.iter().max_by_key(|d| d.date_of_test).unwrap();
            assert_eq!(
                newest.status(today),
                DocStatus::Valid,
                "{} has no current report",
                template.document_type
            );

            let oldest = of_type.iter().min_by_key(|d| d.date_of_test).unwrap();
            assert!(
                today - oldest.date_of_test >= Duration::days(LOOKBACK_DAYS),
                "{} does not cover the lookback horizon",
                template.document_type
            );
        }
    }
}

#[test]
fn backfill_with_validity_beyond_horizon_emits_two_records() {
    let today = date(2026, 8, 24);
    let template = DocumentTemplate::new("long_lived", "Long Lived", LOOKBACK_DAYS + 10, "2+ Years");
    let mut next_id = 1;
    let reports = backfill_reports(&template, today, LOOKBACK_DAYS, &mut next_id);
    assert_eq!(reports.len(), 2);
    assert!(reports[0].is_valid(today));
}

#[test]
fn backfill_file_names_embed_type_and_date() {
    let today = date(2026, 8, 24);
    let template = DocumentTemplate::new("pressure_falloff_test", "PFT", 90, "3 months");
    let mut next_id = 1;
    let reports = backfill_reports(&template, today, LOOKBACK_DAYS, &mut next_id);
    assert_eq!(reports[0].file_name, "pressure_falloff_test_2026-08-24.pdf");
}

// ---------------------------------------------------------------------------
// Dependency validation: both branches with literal fixtures
// ---------------------------------------------------------------------------
#[test]
fn missing_required_type_invalidates_measurement() {
    let today = date(2026, 8, 24);
    let deps: DependencyMap = DependencyMap::from([("m", vec!["t1", "t2"])]);

    // Only t1 present and valid: still false, t2 is missing.
    let docs = vec![doc(1, "t1", today, 90)];
    assert!(!measurement_is_valid("m", &docs, &deps, today));

    // Add a valid t2: true.
    let docs = vec![doc(1, "t1", today, 90), doc(2, "t2", today, 90)];
    assert!(measurement_is_valid("m", &docs, &deps, today));
}

#[test]
fn expired_required_type_invalidates_measurement() {
    let today = date(2026, 8, 24);
    let deps: DependencyMap = DependencyMap::from([("m", vec!["t1"])]);

    let docs = vec![doc(1, "t1", today - Duration::days(120), 90)];
    assert!(!measurement_is_valid("m", &docs, &deps, today));
}

#[test]
fn newest_report_per_type_wins() {
    let today = date(2026, 8, 24);
    let deps: DependencyMap = DependencyMap::from([("m", vec!["t1"])]);

    // An expired old report plus a fresh one: valid.
    let docs = vec![
        doc(1, "t1", today - Duration::days(400), 90),
        doc(2, "t1", today - Duration::days(10), 90),
    ];
    assert!(measurement_is_valid("m", &docs, &deps, today));
}
