// src/core/poller.rs

use anyhow::{Context, Result};
use chrono::Local;
use std::io::{self, Write};
use std::time::Duration;
use tracing::{error, info};

use super::cpu::CpuTempResolver;
use super::gpu::GpuResolver;
use super::status::{self, StatusRecord};

/// Drives the sample/format/emit cycle until interrupted.
pub struct Poller {
    interval: Duration,
    cpu: CpuTempResolver,
    gpu: GpuResolver,
}

impl Poller {
    pub fn new(interval: Duration) -> Self {
        Poller::with_resolvers(interval, CpuTempResolver::new(), GpuResolver::new())
    }

    pub fn with_resolvers(interval: Duration, cpu: CpuTempResolver, gpu: GpuResolver) -> Self {
        Poller { interval, cpu, gpu }
    }

    /// Emit one record per interval. A failed cycle degrades to an
    /// error-tagged record instead of ending the loop; only an interrupt
    /// signal does that, and it lands between cycles, never mid-read.
    pub async fn run(&self) -> Result<()> {
        info!(
            interval_secs = self.interval.as_secs(),
            "Starting hardware info poller"
        );

        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        loop {
            self.tick(&mut io::stdout()).await;

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = &mut shutdown => {
                    info!("Received interrupt signal, exiting");
                    break;
                }
            }
        }

        Ok(())
    }

    // One loop iteration. A cycle that fails at any point still puts an
    // error-tagged record on the wire; failing even that is logged and the
    // loop moves on.
    async fn tick<W: Write>(&self, out: &mut W) {
        let outcome = self
            .poll_once()
            .await
            .and_then(|record| emit(out, &record));
        if let Err(e) = outcome {
            error!(error = %e, "Status cycle failed");
            let fallback = status::error_record(&e);
            if let Err(e) = emit(out, &fallback) {
                error!(error = %e, "Could not emit degraded record");
            }
        }
    }

    // One full cycle: resolve both metrics, render the record.
    async fn poll_once(&self) -> Result<StatusRecord> {
        let cpu = self.cpu.resolve();
        let gpu = self.gpu.resolve().await;
        Ok(status::render(cpu, &gpu, Local::now()))
    }
}

// One JSON line per record, flushed right away.
fn emit<W: Write>(out: &mut W, record: &StatusRecord) -> Result<()> {
    let line = serde_json::to_string(record).context("Serializing status record")?;
    writeln!(out, "{line}").context("Writing status record")?;
    out.flush().context("Flushing status record")?;
    Ok(())
}
