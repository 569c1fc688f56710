// src/core/mod.rs

pub mod cli;
pub mod command;
pub mod cpu;
pub mod gpu;
pub mod poller;
pub mod status;
pub mod temperature;
