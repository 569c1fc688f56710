// src/core/status.rs

use chrono::{DateTime, Local};
use serde::Serialize;

use super::gpu::GpuInfo;
use super::temperature::Temperature;

/// One status line for the bar. Field order here is the emitted key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusRecord {
    pub text: String,
    pub tooltip: String,
    pub class: String,
    pub alt: String,
}

/// Project the resolved temperatures into the record the bar displays.
pub fn render(cpu: Temperature, gpu: &GpuInfo, now: DateTime<Local>) -> StatusRecord {
    let text = format!("CPU: {cpu} | GPU: {}", gpu.temperature);
    let tooltip = format!(
        "Hardware Info\nCPU Temp: {cpu}\nGPU: {}\nGPU Temp: {}\nUpdated: {}",
        gpu.name,
        gpu.temperature,
        now.format("%H:%M:%S")
    );
    StatusRecord {
        text,
        tooltip,
        class: "hwinfo".to_owned(),
        alt: "hwinfo".to_owned(),
    }
}

/// Degraded record emitted when a whole cycle fails, so the consuming bar
/// sees an error state instead of stalling.
pub fn error_record(err: &anyhow::Error) -> StatusRecord {
    StatusRecord {
        text: "CPU: N/A | GPU: N/A".to_owned(),
        tooltip: format!("Error: {err}"),
        class: "hwinfo-error".to_owned(),
        alt: "hwinfo-error".to_owned(),
    }
}
