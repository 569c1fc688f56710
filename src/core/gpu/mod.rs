// src/core/gpu/mod.rs

pub mod lm_sensors;
pub mod nvidia_smi;
pub mod probe;
pub mod resolver;

pub use lm_sensors::LmSensorsProbe;
pub use nvidia_smi::NvidiaSmiProbe;
pub use probe::{GpuInfo, GpuProbe};
pub use resolver::GpuResolver;
