//! Data layer for a CCS (carbon capture and sequestration) operations
//! dashboard: synthetic telemetry for capture facilities, transport nodes,
//! and injection/monitoring wells, plus compliance-document validity
//! tracking and a typed client for the sensor-data service.

pub mod aggregate;
pub mod api;
pub mod assets;
pub mod compliance;
pub mod config;
pub mod logging;
pub mod series;
pub mod snapshot;
