// src/core/gpu/probe.rs

use async_trait::async_trait;
use std::time::Duration;

use crate::core::temperature::Temperature;

/// Hard deadline for one vendor tool invocation.
pub(crate) const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Vendor label and temperature, always resolved together by one probe.
/// The name stays set even when the temperature could not be read, which
/// is what distinguishes "no GPU tooling" from "GPU present, read failed".
#[derive(Debug, Clone, PartialEq)]
pub struct GpuInfo {
    pub name: String,
    pub temperature: Temperature,
}

impl GpuInfo {
    pub fn unavailable(name: &str) -> Self {
        GpuInfo {
            name: name.to_owned(),
            temperature: Temperature::Unavailable,
        }
    }
}

// One way of asking a specific vendor tool about the GPU.
//
// `None` means the tool is not installed on this host; `Some` is the
// tool's atomic answer, including the degraded answer when the tool ran
// but its output could not be used.
#[async_trait]
pub trait GpuProbe: Send + Sync {
    fn name(&self) -> &'static str;

    async fn probe(&self) -> Option<GpuInfo>;
}
