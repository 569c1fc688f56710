// src/core/gpu/resolver.rs

use tracing::{debug, info};

use super::lm_sensors::LmSensorsProbe;
use super::nvidia_smi::NvidiaSmiProbe;
use super::probe::{GpuInfo, GpuProbe};

/// Asks each probe in order. The first one whose tool is installed answers
/// for the whole cycle, whether or not its read succeeds; probes further
/// down the list are never consulted after that.
pub struct GpuResolver {
    probes: Vec<Box<dyn GpuProbe>>,
}

impl GpuResolver {
    pub fn new() -> Self {
        GpuResolver::with_probes(vec![
            Box::new(NvidiaSmiProbe::new()),
            Box::new(LmSensorsProbe::new()),
        ])
    }

    pub fn with_probes(probes: Vec<Box<dyn GpuProbe>>) -> Self {
        GpuResolver { probes }
    }

    pub async fn resolve(&self) -> GpuInfo {
        for probe in &self.probes {
            match probe.probe().await {
                Some(info) => return info,
                None => debug!(probe = probe.name(), "Probe tool not installed"),
            }
        }
        info!("No GPU tooling found on this host");
        GpuInfo::unavailable("N/A")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::temperature::Temperature;
    use async_trait::async_trait;

    struct Absent;

    #[async_trait]
    impl GpuProbe for Absent {
        fn name(&self) -> &'static str {
            "absent"
        }

        async fn probe(&self) -> Option<GpuInfo> {
            None
        }
    }

    struct Answering(&'static str, f64);

    #[async_trait]
    impl GpuProbe for Answering {
        fn name(&self) -> &'static str {
            "answering"
        }

        async fn probe(&self) -> Option<GpuInfo> {
            Some(GpuInfo {
                name: self.0.to_owned(),
                temperature: Temperature::from_reading(self.1),
            })
        }
    }

    #[tokio::test]
    async fn first_installed_probe_answers() {
        let resolver = GpuResolver::with_probes(vec![
            Box::new(Answering("NVIDIA", 55.0)),
            Box::new(Answering("AMD", 60.0)),
        ]);
        let info = resolver.resolve().await;
        assert_eq!(info.name, "NVIDIA");
        assert_eq!(info.temperature, Temperature::Celsius(55.0));
    }

    #[tokio::test]
    async fn absent_tool_falls_through() {
        let resolver = GpuResolver::with_probes(vec![
            Box::new(Absent),
            Box::new(Answering("AMD", 60.0)),
        ]);
        let info = resolver.resolve().await;
        assert_eq!(info.name, "AMD");
        assert_eq!(info.temperature, Temperature::Celsius(60.0));
    }

    #[tokio::test]
    async fn no_tools_reports_placeholder_name() {
        let resolver = GpuResolver::with_probes(vec![Box::new(Absent), Box::new(Absent)]);
        let info = resolver.resolve().await;
        assert_eq!(info.name, "N/A");
        assert_eq!(info.temperature, Temperature::Unavailable);
    }
}
