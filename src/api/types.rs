//! Wire types for the sensor-data service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct Health {
    pub status: String,
    pub database: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SensorReading {
    pub id: u64,
    pub sensor_type: String,
    pub device_id: String,
    pub timestamp: String,
    pub temperature_c: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure_hpa: Option<f64>,
    pub metadata: Option<Value>,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProcessedData {
    pub id: u64,
    pub processor_name: String,
    pub processor_version: String,
    pub start_time: String,
    pub end_time: String,
    pub sensor_type: String,
    pub device_id: Option<String>,
    pub result: Value,
    pub raw_count: u64,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProcessorInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawDataResponse {
    pub count: u64,
    pub data: Vec<SensorReading>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProcessedDataResponse {
    pub count: u64,
    pub data: Vec<ProcessedData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProcessorsResponse {
    pub processors: Vec<ProcessorInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProcessingJobResponse {
    pub job_id: u64,
    pub status: String,
    pub result: Value,
    pub raw_count: u64,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessingRequest {
    pub processor: String,
    pub start_time: String,
    pub end_time: String,
    pub sensor_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

/// Query parameters for the raw-data endpoints.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RawDataQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensor_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Query parameters for processed-result lookups.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResultsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensor_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
