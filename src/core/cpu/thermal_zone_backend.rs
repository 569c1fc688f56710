// src/core/cpu/thermal_zone_backend.rs

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::{debug, warn};

use super::CPU_SENSOR_KEYS;
use super::backend::CpuTempBackend;

/// Reads raw kernel thermal zones and averages the CPU-flavoured ones.
pub struct ThermalZoneBackend {
    base: PathBuf,
}

impl ThermalZoneBackend {
    pub fn new() -> Self {
        ThermalZoneBackend {
            base: PathBuf::from("/sys/class/thermal"),
        }
    }

    pub fn with_base(base: PathBuf) -> Self {
        ThermalZoneBackend { base }
    }
}

impl CpuTempBackend for ThermalZoneBackend {
    fn name(&self) -> &'static str {
        "thermal-zone"
    }

    fn read(&self) -> Result<Option<f64>> {
        let entries = match fs::read_dir(&self.base) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("Reading {}", self.base.display()));
            }
        };

        let mut zones: Vec<PathBuf> = entries
            .flatten()
            .map(|e| e.path())
            .filter(|dir| {
                let name = dir.file_name().and_then(|s| s.to_str()).unwrap_or("");
                name.starts_with("thermal_zone")
            })
            .collect();
        zones.sort();

        let mut total = 0.0;
        let mut count = 0;
        for dir in &zones {
            let temp_path = dir.join("temp");
            if !temp_path.exists() {
                continue;
            }

            let type_path = dir.join("type");
            let sensor_type = match fs::read_to_string(&type_path) {
                Ok(raw) => raw.trim().to_lowercase(),
                Err(e) => {
                    warn!(file = %type_path.display(), error = %e, "Could not read zone type");
                    continue;
                }
            };
            if !CPU_SENSOR_KEYS.iter().any(|key| sensor_type.contains(key)) {
                continue;
            }

            match fs::read_to_string(&temp_path) {
                Ok(raw) => match raw.trim().parse::<i64>() {
                    Ok(milli) => {
                        let celsius = milli as f64 / 1000.0;
                        debug!(zone = %sensor_type, temp = celsius, "Thermal zone reading");
                        total += celsius;
                        count += 1;
                    }
                    Err(e) => {
                        warn!(file = %temp_path.display(), error = %e, "Could not parse zone temperature");
                    }
                },
                Err(e) => {
                    warn!(file = %temp_path.display(), error = %e, "Could not read zone temperature");
                }
            }
        }

        if count == 0 {
            if zones.is_empty() {
                warn!(base = %self.base.display(), "No thermal zones found");
            } else {
                warn!(base = %self.base.display(), "No CPU-typed thermal zones found");
            }
            return Ok(None);
        }
        Ok(Some(total / count as f64))
    }
}
