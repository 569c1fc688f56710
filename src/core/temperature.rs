// src/core/temperature.rs

use std::fmt;

/// A resolved reading in degrees Celsius, or an explicit unknown.
///
/// Readings are rounded to one decimal place exactly once, when they are
/// accepted; everything downstream sees the rounded value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Temperature {
    Celsius(f64),
    Unavailable,
}

impl Temperature {
    /// Accept a raw reading. Non-finite input becomes `Unavailable` so no
    /// NaN or infinity ever reaches the output.
    pub fn from_reading(value: f64) -> Self {
        if value.is_finite() {
            Temperature::Celsius((value * 10.0).round() / 10.0)
        } else {
            Temperature::Unavailable
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Temperature::Celsius(value) => write!(f, "{value:.1}°C"),
            Temperature::Unavailable => write!(f, "N/A"),
        }
    }
}

/// A named cluster of readings reported together, e.g. one sensor chip
/// exposing several cores. Only lives long enough to be folded into a
/// single average.
#[derive(Debug, Clone)]
pub struct SensorGroup {
    pub name: String,
    pub readings: Vec<f64>,
}

impl SensorGroup {
    /// Mean of the group's readings, or `None` when it has none.
    pub fn average(&self) -> Option<f64> {
        if self.readings.is_empty() {
            return None;
        }
        Some(self.readings.iter().sum::<f64>() / self.readings.len() as f64)
    }
}
