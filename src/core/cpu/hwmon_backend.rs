// src/core/cpu/hwmon_backend.rs

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::CPU_SENSOR_KEYS;
use super::backend::CpuTempBackend;
use crate::core::temperature::SensorGroup;

/// Reads the hwmon sensor tree, grouped by chip name the way the kernel
/// reports it.
pub struct HwmonBackend {
    base: PathBuf,
}

impl HwmonBackend {
    pub fn new() -> Self {
        HwmonBackend {
            base: PathBuf::from("/sys/class/hwmon"),
        }
    }

    pub fn with_base(base: PathBuf) -> Self {
        HwmonBackend { base }
    }

    fn collect_groups(&self) -> Result<Vec<SensorGroup>> {
        let entries = match fs::read_dir(&self.base) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("Reading {}", self.base.display()));
            }
        };

        let mut dirs: Vec<PathBuf> = entries
            .flatten()
            .map(|e| e.path())
            .filter(|dir| {
                let name = dir.file_name().and_then(|s| s.to_str()).unwrap_or("");
                name.starts_with("hwmon")
            })
            .collect();
        dirs.sort();

        // Chips sharing a name report into one group
        let mut groups: Vec<SensorGroup> = Vec::new();
        for dir in dirs {
            let chip = match fs::read_to_string(dir.join("name")) {
                Ok(raw) => raw.trim().to_owned(),
                Err(e) => {
                    debug!(dir = %dir.display(), error = %e, "Skipping hwmon entry without a name");
                    continue;
                }
            };
            let readings = read_chip_inputs(&dir);
            match groups.iter_mut().find(|g| g.name == chip) {
                Some(group) => group.readings.extend(readings),
                None => groups.push(SensorGroup {
                    name: chip,
                    readings,
                }),
            }
        }
        if groups.is_empty() {
            warn!(base = %self.base.display(), "Sensor tree reported no data");
        }
        Ok(groups)
    }
}

// Collect every temp*_input reading under one chip directory, skipping
// entries that cannot be read or parsed.
fn read_chip_inputs(dir: &Path) -> Vec<f64> {
    let mut files: Vec<PathBuf> = match fs::read_dir(dir) {
        Ok(entries) => entries
            .flatten()
            .map(|e| e.path())
            .filter(|path| {
                let fname = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
                fname.starts_with("temp") && fname.ends_with("_input")
            })
            .collect(),
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "Could not scan hwmon chip");
            return Vec::new();
        }
    };
    files.sort();

    let mut readings = Vec::new();
    for path in files {
        match fs::read_to_string(&path) {
            Ok(raw) => match raw.trim().parse::<f64>() {
                Ok(milli) if milli.is_finite() => readings.push(milli / 1000.0),
                _ => warn!(file = %path.display(), "Skipping unparseable sensor reading"),
            },
            Err(e) => {
                warn!(file = %path.display(), error = %e, "Skipping unreadable sensor reading");
            }
        }
    }
    readings
}

impl CpuTempBackend for HwmonBackend {
    fn name(&self) -> &'static str {
        "hwmon"
    }

    fn read(&self) -> Result<Option<f64>> {
        let groups = self.collect_groups()?;
        if groups.is_empty() {
            return Ok(None);
        }

        // First pass: well-known CPU chips, in priority order
        for key in CPU_SENSOR_KEYS {
            if let Some(avg) = groups
                .iter()
                .find(|g| g.name == key)
                .and_then(SensorGroup::average)
            {
                debug!(chip = key, temp = avg, "CPU temperature from priority chip");
                return Ok(Some(avg));
            }
        }

        // Second pass: anything that merely sounds like a CPU sensor
        for group in &groups {
            let name = group.name.to_lowercase();
            if !name.contains("cpu") && !name.contains("core") {
                continue;
            }
            if let Some(avg) = group.average() {
                debug!(chip = %group.name, temp = avg, "CPU temperature from detected chip");
                return Ok(Some(avg));
            }
        }

        Ok(None)
    }
}
