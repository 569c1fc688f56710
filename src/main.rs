// src/main.rs
extern crate anyhow;
extern crate hwinfo_rs;

use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use hwinfo_rs::core::cli::Args;
use hwinfo_rs::core::poller::Poller;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries nothing but status records
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    Poller::new(Duration::from_secs(args.interval)).run().await
}
