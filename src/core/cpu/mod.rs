// src/core/cpu/mod.rs

pub mod backend;
pub mod hwmon_backend;
pub mod resolver;
pub mod thermal_zone_backend;

pub use backend::CpuTempBackend;
pub use hwmon_backend::HwmonBackend;
pub use resolver::CpuTempResolver;
pub use thermal_zone_backend::ThermalZoneBackend;

// Chip and zone labels that identify a CPU package sensor, in priority
// order. The hwmon pass matches them exactly; the thermal-zone pass by
// substring.
const CPU_SENSOR_KEYS: [&str; 4] = ["coretemp", "k10temp", "acpi", "x86_pkg_temp"];
