//! Dashboard snapshot: one self-contained JSON document with everything a
//! dashboard render needs — assets, compliance rows, summary tiles, and
//! synthesized series for every node.
//!
//! Nothing here is persisted; a snapshot is recomputed per request with
//! fresh randomness unless the caller seeds the generator.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use crate::aggregate::{
    facility_readings, injector_readings, monitoring_readings, pipeline_readings,
    transport_outlet_readings, MeasurementReading,
};
use crate::assets::{
    capture_facilities, injector_wells, monitoring_wells, pipelines, transport_nodes,
    vehicle_fleets, CaptureFacility, Pipeline, TransportNode, VehicleFleet, Well,
};
use crate::compliance::{
    backfill_catalog, capture_document_templates, facility_dependencies, injector_dependencies,
    injector_document_templates, monitoring_dependencies, monitoring_document_templates,
    outlet_dependencies, outlet_document_templates, pipeline_dependencies,
    pipeline_document_templates, pump_station_dependencies, ComplianceDocument, DocumentRow,
};
use crate::logging::{log, obj, v_num, Domain, Level};
use crate::series::{
    capture_outlet_series, facility_series, injection_site_outlet_series, injector_series,
    monitoring_series, pipeline_series, pump_station_series, FacilityPoint, MonitoringPoint,
    TransportPoint, WellPoint,
};

#[derive(Debug, Clone, Serialize)]
pub struct FacilityDashboard {
    pub facility: CaptureFacility,
    pub readings: Vec<MeasurementReading>,
    pub series: Vec<FacilityPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaptureDashboard {
    /// Calibration documents shared by both AGRU trains.
    pub documents: Vec<DocumentRow>,
    pub facilities: Vec<FacilityDashboard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransportNodeView {
    pub node: TransportNode,
    pub route: String,
    pub readings: Vec<MeasurementReading>,
    pub series: Vec<TransportPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransportDashboard {
    /// Outlet documents, shared by the plant outlet, pump station, and
    /// injection site outlet.
    pub outlet_documents: Vec<DocumentRow>,
    pub pipeline_documents: Vec<DocumentRow>,
    pub nodes: Vec<TransportNodeView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InjectorDashboard {
    pub well: Well,
    pub readings: Vec<MeasurementReading>,
    pub series: Vec<WellPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonitoringDashboard {
    pub well: Well,
    pub readings: Vec<MeasurementReading>,
    pub series: Vec<MonitoringPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SequestrationDashboard {
    pub injector_documents: Vec<DocumentRow>,
    pub monitoring_documents: Vec<DocumentRow>,
    pub injectors: Vec<InjectorDashboard>,
    pub monitoring: Vec<MonitoringDashboard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub generated_at: DateTime<Utc>,
    pub window_days: u32,
    pub capture: CaptureDashboard,
    pub transport: TransportDashboard,
    pub sequestration: SequestrationDashboard,
    pub pipelines: Vec<Pipeline>,
    pub vehicle_fleets: Vec<VehicleFleet>,
}

fn rows(documents: &[ComplianceDocument], today: chrono::NaiveDate) -> Vec<DocumentRow> {
    documents.iter().map(|d| d.row(today)).collect()
}

/// Build the full snapshot for a window ending at `now`.
pub fn build_snapshot<R: Rng>(days: u32, now: DateTime<Utc>, rng: &mut R) -> DashboardSnapshot {
    let today = now.date_naive();

    // Capture
    let capture_docs = backfill_catalog(&capture_document_templates(), today);
    let facility_deps = facility_dependencies();
    let facilities = capture_facilities()
        .into_iter()
        .map(|facility| {
            let series = facility_series(days, facility.facility_id, now, rng);
            let readings = facility_readings(&series, &capture_docs, &facility_deps, today);
            FacilityDashboard {
                facility,
                readings,
                series,
            }
        })
        .collect();

    // Transport
    let outlet_docs = backfill_catalog(&outlet_document_templates(), today);
    let pipeline_docs = backfill_catalog(&pipeline_document_templates(), today);
    let outlet_deps = outlet_dependencies();
    let pump_deps = pump_station_dependencies();
    let pipe_deps = pipeline_dependencies();

    let nodes = transport_nodes()
        .into_iter()
        .map(|node| {
            use crate::assets::TransportNodeKind::*;
            let (series, readings) = match node.node_type {
                CapturePlantOutlet => {
                    let s = capture_outlet_series(days, now, rng);
                    let r = transport_outlet_readings(&s, &outlet_docs, &outlet_deps, today);
                    (s, r)
                }
                PumpStation => {
                    let s = pump_station_series(days, now, rng);
                    let r = transport_outlet_readings(&s, &outlet_docs, &pump_deps, today);
                    (s, r)
                }
                InjectionSiteOutlet => {
                    let s = injection_site_outlet_series(days, now, rng);
                    let r = transport_outlet_readings(&s, &outlet_docs, &outlet_deps, today);
                    (s, r)
                }
                PipelineSegment => {
                    let s = pipeline_series(days, now, rng);
                    let r = pipeline_readings(&s, &pipeline_docs, &pipe_deps, today);
                    (s, r)
                }
            };
            let route = node.route();
            TransportNodeView {
                node,
                route,
                readings,
                series,
            }
        })
        .collect();

    // Sequestration
    let injector_docs = backfill_catalog(&injector_document_templates(), today);
    let monitoring_docs = backfill_catalog(&monitoring_document_templates(), today);
    let injector_deps = injector_dependencies();
    let monitoring_deps = monitoring_dependencies();

    let injectors = injector_wells()
        .into_iter()
        .map(|well| {
            let series = injector_series(days, well.well_id, now, rng);
            let readings = injector_readings(&series, &injector_docs, &injector_deps, today);
            InjectorDashboard {
                well,
                readings,
                series,
            }
        })
        .collect();

    let monitoring = monitoring_wells()
        .into_iter()
        .map(|well| {
            let series = monitoring_series(days, now, rng);
            let readings = monitoring_readings(&series, &monitoring_docs, &monitoring_deps, today);
            MonitoringDashboard {
                well,
                readings,
                series,
            }
        })
        .collect();

    let snapshot = DashboardSnapshot {
        generated_at: now,
        window_days: days,
        capture: CaptureDashboard {
            documents: rows(&capture_docs, today),
            facilities,
        },
        transport: TransportDashboard {
            outlet_documents: rows(&outlet_docs, today),
            pipeline_documents: rows(&pipeline_docs, today),
            nodes,
        },
        sequestration: SequestrationDashboard {
            injector_documents: rows(&injector_docs, today),
            monitoring_documents: rows(&monitoring_docs, today),
            injectors,
            monitoring,
        },
        pipelines: pipelines(),
        vehicle_fleets: vehicle_fleets(),
    };

    log(
        Level::Debug,
        Domain::Snapshot,
        "built",
        obj(&[
            ("window_days", v_num(days as f64)),
            (
                "transport_nodes",
                v_num(snapshot.transport.nodes.len() as f64),
            ),
            (
                "injectors",
                v_num(snapshot.sequestration.injectors.len() as f64),
            ),
        ]),
    );
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn snapshot_covers_every_dashboard() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(11);
        let snap = build_snapshot(7, now, &mut rng);

        assert_eq!(snap.capture.facilities.len(), 2);
        assert_eq!(snap.transport.nodes.len(), 5);
        assert_eq!(snap.sequestration.injectors.len(), 2);
        assert_eq!(snap.sequestration.monitoring.len(), 2);
        assert!(!snap.capture.documents.is_empty());
        assert!(!snap.transport.outlet_documents.is_empty());

        // Every node view carries a series and a route.
        for node in &snap.transport.nodes {
            assert!(!node.series.is_empty());
            assert!(node.route.starts_with("/transport"));
        }
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(11);
        let snap = build_snapshot(1, now, &mut rng);
        let json = serde_json::to_value(&snap).unwrap();
        assert!(json["capture"]["facilities"].is_array());
        assert!(json["transport"]["nodes"][0]["series"].is_array());
    }
}
