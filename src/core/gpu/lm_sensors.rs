// src/core/gpu/lm_sensors.rs

use async_trait::async_trait;
use tracing::{debug, warn};

use super::probe::{GpuInfo, GpuProbe, PROBE_TIMEOUT};
use crate::core::command::{CommandError, run_with_timeout};
use crate::core::temperature::Temperature;

// Lines scanned after an adapter marker before giving up on its reading.
const ADAPTER_WINDOW: usize = 4;

/// Scans free-text `sensors` output for an AMD or Intel graphics adapter.
pub struct LmSensorsProbe {
    program: String,
}

impl LmSensorsProbe {
    pub fn new() -> Self {
        LmSensorsProbe {
            program: "sensors".to_owned(),
        }
    }

    pub fn with_command(program: impl Into<String>) -> Self {
        LmSensorsProbe {
            program: program.into(),
        }
    }
}

fn vendor_for_line(line: &str) -> Option<&'static str> {
    let lower = line.to_lowercase();
    if lower.contains("amdgpu") || lower.contains("radeon") {
        Some("AMD")
    } else if lower.contains("i915") {
        Some("Intel")
    } else {
        None
    }
}

// Pulls the number out of a line like
// "temp1:       +55.0°C  (crit = +100.0°C, hyst = +90.0°C)".
fn extract_temp(line: &str) -> Option<f64> {
    if !line.contains("temp1:") || !line.contains("°C") {
        return None;
    }
    let field = line.split('+').nth(1)?.split("°C").next()?;
    field.parse().ok().filter(|t: &f64| t.is_finite())
}

fn scan_output(stdout: &str) -> Option<GpuInfo> {
    let lines: Vec<&str> = stdout.lines().collect();
    for (i, line) in lines.iter().enumerate() {
        let Some(vendor) = vendor_for_line(line) else {
            continue;
        };

        let window = &lines[i + 1..(i + 1 + ADAPTER_WINDOW).min(lines.len())];
        for candidate in window {
            if let Some(temp) = extract_temp(candidate) {
                debug!(vendor, temp, "GPU temperature from sensors");
                return Some(GpuInfo {
                    name: vendor.to_owned(),
                    temperature: Temperature::from_reading(temp),
                });
            }
        }

        // The first adapter marker decides the vendor, even when no
        // readable temperature follows it within the window.
        return Some(GpuInfo::unavailable(vendor));
    }
    None
}

#[async_trait]
impl GpuProbe for LmSensorsProbe {
    fn name(&self) -> &'static str {
        "sensors"
    }

    async fn probe(&self) -> Option<GpuInfo> {
        let stdout = match run_with_timeout(&self.program, &[], PROBE_TIMEOUT).await {
            Ok(stdout) => stdout,
            Err(CommandError::NotFound(_)) => return None,
            Err(e) => {
                warn!(error = %e, "sensors probe failed");
                return Some(GpuInfo::unavailable("AMD/Intel"));
            }
        };

        scan_output(&stdout).or_else(|| {
            debug!("No GPU adapter in sensors output");
            Some(GpuInfo::unavailable("AMD/Intel"))
        })
    }
}
