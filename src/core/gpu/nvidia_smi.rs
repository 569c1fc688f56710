// src/core/gpu/nvidia_smi.rs

use async_trait::async_trait;
use tracing::warn;

use super::probe::{GpuInfo, GpuProbe, PROBE_TIMEOUT};
use crate::core::command::{CommandError, run_with_timeout};
use crate::core::temperature::Temperature;

const QUERY_ARGS: [&str; 2] = [
    "--query-gpu=name,temperature.gpu",
    "--format=csv,noheader,nounits",
];

/// Queries the NVIDIA management tool for name and temperature in one shot.
pub struct NvidiaSmiProbe {
    program: String,
}

impl NvidiaSmiProbe {
    pub fn new() -> Self {
        NvidiaSmiProbe {
            program: "nvidia-smi".to_owned(),
        }
    }

    pub fn with_command(program: impl Into<String>) -> Self {
        NvidiaSmiProbe {
            program: program.into(),
        }
    }
}

// Expects a single CSV line like "GeForce RTX 3070, 55". Anything that is
// not exactly two fields with a numeric second field is rejected.
fn parse_query_line(stdout: &str) -> Option<GpuInfo> {
    let line = stdout.lines().next()?;
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return None;
    }
    let temp: f64 = parts[1].parse().ok()?;
    Some(GpuInfo {
        name: parts[0].to_owned(),
        temperature: Temperature::from_reading(temp),
    })
}

#[async_trait]
impl GpuProbe for NvidiaSmiProbe {
    fn name(&self) -> &'static str {
        "nvidia-smi"
    }

    async fn probe(&self) -> Option<GpuInfo> {
        let stdout = match run_with_timeout(&self.program, &QUERY_ARGS, PROBE_TIMEOUT).await {
            Ok(stdout) => stdout,
            Err(CommandError::NotFound(_)) => return None,
            Err(e) => {
                warn!(error = %e, "nvidia-smi probe failed");
                return Some(GpuInfo::unavailable("NVIDIA"));
            }
        };

        parse_query_line(&stdout).or_else(|| {
            warn!(output = stdout.trim(), "Unexpected nvidia-smi output");
            Some(GpuInfo::unavailable("NVIDIA"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_and_temperature() {
        let info = parse_query_line("GeForce RTX 3070, 55\n").unwrap();
        assert_eq!(info.name, "GeForce RTX 3070");
        assert_eq!(info.temperature, Temperature::Celsius(55.0));
    }

    #[test]
    fn uses_only_the_first_line() {
        let info = parse_query_line("GeForce RTX 3070, 55\nGeForce RTX 3080, 60\n").unwrap();
        assert_eq!(info.name, "GeForce RTX 3070");
        assert_eq!(info.temperature, Temperature::Celsius(55.0));
    }

    #[test]
    fn rejects_wrong_field_counts() {
        assert!(parse_query_line("").is_none());
        assert!(parse_query_line("only-a-name\n").is_none());
        assert!(parse_query_line("a, b, c\n").is_none());
    }

    #[test]
    fn rejects_unparseable_temperature() {
        assert!(parse_query_line("GeForce RTX 3070, warm\n").is_none());
    }

    #[tokio::test]
    async fn missing_tool_reports_absent() {
        let probe = NvidiaSmiProbe::with_command("hwinfo-test-no-such-tool");
        assert!(probe.probe().await.is_none());
    }

    #[tokio::test]
    async fn failing_tool_still_names_the_vendor() {
        let probe = NvidiaSmiProbe::with_command("false");
        let info = probe.probe().await.unwrap();
        assert_eq!(info.name, "NVIDIA");
        assert_eq!(info.temperature, Temperature::Unavailable);
    }
}
