// src/core/cli.rs

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "hwinfo-rs", version)]
#[command(about = "Display CPU and GPU temperatures in Waybar")]
pub struct Args {
    /// Update interval in seconds
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,
}
