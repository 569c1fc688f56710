// src/core/cpu/backend.rs

use anyhow::Result;

// A unified interface over one source of CPU temperature data.
//
// `Ok(None)` means the source is healthy but has nothing CPU-shaped to
// report, which sends the resolver to the next tier; `Err` is a failure
// of the source itself and is treated the same way after a warning.
pub trait CpuTempBackend: Send + Sync {
    fn name(&self) -> &'static str;

    /// Averaged reading in degrees Celsius, unrounded.
    fn read(&self) -> Result<Option<f64>>;
}
