// tests/status_record.rs

use chrono::{Local, TimeZone};
use hwinfo_rs::core::gpu::GpuInfo;
use hwinfo_rs::core::status;
use hwinfo_rs::core::temperature::Temperature;

#[test]
fn record_shape_matches_bar_contract() {
    let gpu = GpuInfo {
        name: "GeForce RTX 3070".to_owned(),
        temperature: Temperature::Celsius(55.0),
    };
    let record = status::render(
        Temperature::Celsius(45.2),
        &gpu,
        Local.with_ymd_and_hms(2024, 5, 1, 12, 34, 56).unwrap(),
    );

    let json = serde_json::to_string(&record).unwrap();
    assert!(!json.contains('\n'), "record must stay on one line");

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_object().unwrap().len(), 4);
    assert_eq!(value["text"], "CPU: 45.2°C | GPU: 55.0°C");
    assert_eq!(
        value["tooltip"],
        "Hardware Info\nCPU Temp: 45.2°C\nGPU: GeForce RTX 3070\nGPU Temp: 55.0°C\nUpdated: 12:34:56"
    );
    assert_eq!(value["class"], "hwinfo");
    assert_eq!(value["alt"], "hwinfo");
}

#[test]
fn degraded_record_keeps_the_bar_alive() {
    let record = status::error_record(&anyhow::anyhow!("sensor tree went away"));

    let json = serde_json::to_string(&record).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["text"], "CPU: N/A | GPU: N/A");
    assert_eq!(value["tooltip"], "Error: sensor tree went away");
    assert_eq!(value["class"], "hwinfo-error");
    assert_eq!(value["alt"], "hwinfo-error");
}
