// src/core/cpu/resolver.rs

use tracing::{debug, warn};

use super::backend::CpuTempBackend;
use super::hwmon_backend::HwmonBackend;
use super::thermal_zone_backend::ThermalZoneBackend;
use crate::core::temperature::Temperature;

/// Tries each backend in order and keeps the first reading. Sources are
/// never merged; a failing source only costs a warning.
pub struct CpuTempResolver {
    backends: Vec<Box<dyn CpuTempBackend>>,
}

impl CpuTempResolver {
    pub fn new() -> Self {
        CpuTempResolver::with_backends(vec![
            Box::new(HwmonBackend::new()),
            Box::new(ThermalZoneBackend::new()),
        ])
    }

    pub fn with_backends(backends: Vec<Box<dyn CpuTempBackend>>) -> Self {
        CpuTempResolver { backends }
    }

    pub fn resolve(&self) -> Temperature {
        for backend in &self.backends {
            match backend.read() {
                Ok(Some(avg)) => return Temperature::from_reading(avg),
                Ok(None) => debug!(backend = backend.name(), "No CPU reading from backend"),
                Err(e) => warn!(backend = backend.name(), error = %e, "CPU backend failed"),
            }
        }
        Temperature::Unavailable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, anyhow};

    struct Fixed(Option<f64>);

    impl CpuTempBackend for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn read(&self) -> Result<Option<f64>> {
            Ok(self.0)
        }
    }

    struct Failing;

    impl CpuTempBackend for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn read(&self) -> Result<Option<f64>> {
            Err(anyhow!("boom"))
        }
    }

    #[test]
    fn first_reading_wins_and_is_rounded() {
        let resolver = CpuTempResolver::with_backends(vec![
            Box::new(Fixed(Some(41.04))),
            Box::new(Fixed(Some(99.0))),
        ]);
        assert_eq!(resolver.resolve(), Temperature::Celsius(41.0));
    }

    #[test]
    fn empty_source_falls_through() {
        let resolver = CpuTempResolver::with_backends(vec![
            Box::new(Fixed(None)),
            Box::new(Fixed(Some(36.0))),
        ]);
        assert_eq!(resolver.resolve(), Temperature::Celsius(36.0));
    }

    #[test]
    fn failed_source_falls_through() {
        let resolver = CpuTempResolver::with_backends(vec![
            Box::new(Failing),
            Box::new(Fixed(Some(36.0))),
        ]);
        assert_eq!(resolver.resolve(), Temperature::Celsius(36.0));
    }

    #[test]
    fn no_data_anywhere_is_unavailable() {
        let resolver =
            CpuTempResolver::with_backends(vec![Box::new(Fixed(None)), Box::new(Failing)]);
        assert_eq!(resolver.resolve(), Temperature::Unavailable);
    }
}
