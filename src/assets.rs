//! Static asset catalog: the physical fleet the dashboards navigate over.
//! Node identities and nameplate metrics are fixed; live values come from
//! the series generators.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    Operational,
    Maintenance,
    Inactive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureFacility {
    pub facility_id: u32,
    pub facility_name: String,
    pub technology_type: String,
    pub capacity_tpd: f64,
    pub status: AssetStatus,
    pub current_rate_tpd: f64,
    pub efficiency_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WellKind {
    Injector,
    Monitoring,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Well {
    pub well_id: u32,
    pub well_name: String,
    pub well_type: WellKind,
    pub status: AssetStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_rate_tpd: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reading: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportNodeKind {
    CapturePlantOutlet,
    PipelineSegment,
    PumpStation,
    InjectionSiteOutlet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeMetric {
    pub value: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportNode {
    pub node_id: u32,
    pub node_type: TransportNodeKind,
    pub node_name: String,
    /// Position in the capture-to-injection chain, 1-based.
    pub node_order: u32,
    pub status: AssetStatus,
    pub current_metrics: BTreeMap<String, NodeMetric>,
}

impl TransportNode {
    /// Dashboard path for this node (internal navigation key).
    pub fn route(&self) -> String {
        match self.node_type {
            TransportNodeKind::CapturePlantOutlet => "/transport/capture-plant-outlet".to_string(),
            TransportNodeKind::PipelineSegment => {
                let segment = if self.node_order == 2 { 1 } else { 2 };
                format!("/transport/pipeline-segment/{segment}")
            }
            TransportNodeKind::PumpStation => "/transport/pump-station-1".to_string(),
            TransportNodeKind::InjectionSiteOutlet => {
                "/transport/injection-site-outlet".to_string()
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipeline {
    pub pipeline_id: u32,
    pub asset_name: String,
    pub length_km: f64,
    pub diameter_inches: f64,
    pub status: AssetStatus,
    pub current_flow_tpd: f64,
    pub pressure_bar: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FleetKind {
    Truck,
    Rail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleFleet {
    pub fleet_type: FleetKind,
    pub vehicle_count: u32,
    pub active_count: u32,
    pub maintenance_count: u32,
    pub idle_count: u32,
    pub total_capacity_tpd: f64,
}

pub fn capture_facilities() -> Vec<CaptureFacility> {
    vec![
        CaptureFacility {
            facility_id: 1,
            facility_name: "AGRU Train #1".to_string(),
            technology_type: "MEA Absorption".to_string(),
            capacity_tpd: 25_000.0,
            status: AssetStatus::Operational,
            current_rate_tpd: 2287.0,
            efficiency_percent: 90.0,
        },
        CaptureFacility {
            facility_id: 2,
            facility_name: "AGRU Train #2".to_string(),
            technology_type: "Membrane Separation".to_string(),
            capacity_tpd: 25_000.0,
            status: AssetStatus::Operational,
            current_rate_tpd: 1524.0,
            efficiency_percent: 92.0,
        },
    ]
}

pub fn injector_wells() -> Vec<Well> {
    vec![
        Well {
            well_id: 1,
            well_name: "Injector Well #1".to_string(),
            well_type: WellKind::Injector,
            status: AssetStatus::Operational,
            current_rate_tpd: Some(150.0),
            monitoring_type: None,
            last_reading: Some("2 min ago".to_string()),
        },
        Well {
            well_id: 2,
            well_name: "Injector Well #2".to_string(),
            well_type: WellKind::Injector,
            status: AssetStatus::Maintenance,
            current_rate_tpd: Some(0.0),
            monitoring_type: None,
            last_reading: Some("1 hour ago".to_string()),
        },
    ]
}

pub fn monitoring_wells() -> Vec<Well> {
    vec![
        Well {
            well_id: 3,
            well_name: "Monitoring Well #1".to_string(),
            well_type: WellKind::Monitoring,
            status: AssetStatus::Operational,
            current_rate_tpd: None,
            monitoring_type: Some("Pressure Monitoring".to_string()),
            last_reading: Some("2 min ago".to_string()),
        },
        Well {
            well_id: 4,
            well_name: "Monitoring Well #2".to_string(),
            well_type: WellKind::Monitoring,
            status: AssetStatus::Operational,
            current_rate_tpd: None,
            monitoring_type: Some("Geochemical Monitoring".to_string()),
            last_reading: Some("5 min ago".to_string()),
        },
    ]
}

fn metric(value: f64, unit: &str) -> NodeMetric {
    NodeMetric {
        value,
        unit: unit.to_string(),
    }
}

pub fn transport_nodes() -> Vec<TransportNode> {
    vec![
        TransportNode {
            node_id: 1,
            node_type: TransportNodeKind::CapturePlantOutlet,
            node_name: "Capture Plant Outlet".to_string(),
            node_order: 1,
            status: AssetStatus::Operational,
            current_metrics: BTreeMap::from([
                ("mass_rate".to_string(), metric(150.5, "t/hr")),
                ("pressure".to_string(), metric(125.3, "bar")),
            ]),
        },
        TransportNode {
            node_id: 2,
            node_type: TransportNodeKind::PipelineSegment,
            node_name: "Pipeline Segment #1".to_string(),
            node_order: 2,
            status: AssetStatus::Operational,
            current_metrics: BTreeMap::from([
                ("segment_length".to_string(), metric(53.0, "mi")),
                ("diameter".to_string(), metric(16.0, "in")),
                ("peak_emission_24hr".to_string(), metric(0.0, "ppm")),
                ("inlet_pressure".to_string(), metric(125.3, "bar")),
                ("outlet_pressure".to_string(), metric(85.1, "bar")),
            ]),
        },
        TransportNode {
            node_id: 3,
            node_type: TransportNodeKind::PumpStation,
            node_name: "Pump Station #1".to_string(),
            node_order: 3,
            status: AssetStatus::Operational,
            current_metrics: BTreeMap::from([
                ("mass_rate".to_string(), metric(150.2, "t/hr")),
                ("inlet_pressure".to_string(), metric(85.1, "bar")),
                ("outlet_pressure".to_string(), metric(125.8, "bar")),
            ]),
        },
        TransportNode {
            node_id: 4,
            node_type: TransportNodeKind::PipelineSegment,
            node_name: "Pipeline Segment #2".to_string(),
            node_order: 4,
            status: AssetStatus::Operational,
            current_metrics: BTreeMap::from([
                ("segment_length".to_string(), metric(53.0, "mi")),
                ("diameter".to_string(), metric(16.0, "in")),
                ("peak_emission_24hr".to_string(), metric(0.0, "ppm")),
                ("inlet_pressure".to_string(), metric(125.8, "bar")),
                ("outlet_pressure".to_string(), metric(124.8, "bar")),
            ]),
        },
        TransportNode {
            node_id: 5,
            node_type: TransportNodeKind::InjectionSiteOutlet,
            node_name: "Injection Site Outlet".to_string(),
            node_order: 5,
            status: AssetStatus::Operational,
            current_metrics: BTreeMap::from([
                ("mass_rate".to_string(), metric(150.1, "t/hr")),
                ("pressure".to_string(), metric(124.8, "bar")),
            ]),
        },
    ]
}

pub fn pipelines() -> Vec<Pipeline> {
    vec![
        Pipeline {
            pipeline_id: 1,
            asset_name: "Pipeline 1 (Main Line)".to_string(),
            length_km: 45.0,
            diameter_inches: 16.0,
            status: AssetStatus::Operational,
            current_flow_tpd: 600.0,
            pressure_bar: 120.0,
        },
        Pipeline {
            pipeline_id: 2,
            asset_name: "Pipeline 2 (Secondary)".to_string(),
            length_km: 25.0,
            diameter_inches: 12.0,
            status: AssetStatus::Operational,
            current_flow_tpd: 350.0,
            pressure_bar: 115.0,
        },
    ]
}

pub fn vehicle_fleets() -> Vec<VehicleFleet> {
    vec![
        VehicleFleet {
            fleet_type: FleetKind::Truck,
            vehicle_count: 12,
            active_count: 8,
            maintenance_count: 2,
            idle_count: 2,
            total_capacity_tpd: 240.0,
        },
        VehicleFleet {
            fleet_type: FleetKind::Rail,
            vehicle_count: 6,
            active_count: 4,
            maintenance_count: 1,
            idle_count: 1,
            total_capacity_tpd: 180.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_chain_is_ordered() {
        let nodes = transport_nodes();
        assert_eq!(nodes.len(), 5);
        for (i, node) in nodes.iter().enumerate() {
            assert_eq!(node.node_order as usize, i + 1);
        }
        assert_eq!(nodes[0].node_type, TransportNodeKind::CapturePlantOutlet);
        assert_eq!(nodes[4].node_type, TransportNodeKind::InjectionSiteOutlet);
    }

    #[test]
    fn pipeline_segments_route_by_order() {
        let nodes = transport_nodes();
        assert_eq!(nodes[1].route(), "/transport/pipeline-segment/1");
        assert_eq!(nodes[3].route(), "/transport/pipeline-segment/2");
        assert_eq!(nodes[0].route(), "/transport/capture-plant-outlet");
    }
}
