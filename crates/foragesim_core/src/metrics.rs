//! Episode metrics and logging setup.
//!
//! Counters are atomic so agents updated on the rayon pool can record
//! consumption without locking.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Counters for a single episode.
pub struct EpisodeMetrics {
    tick_count: AtomicU64,
    consumption_count: AtomicU64,
    log_interval: u64,
    start_time: Instant,
}

impl Default for EpisodeMetrics {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl EpisodeMetrics {
    /// `log_interval` of 0 disables progress lines.
    #[must_use]
    pub fn new(log_interval: u64) -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            consumption_count: AtomicU64::new(0),
            log_interval,
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick.
    pub fn record_tick(&self, agents: usize, consumed_this_tick: usize) {
        let tick = self.tick_count.fetch_add(1, Ordering::Relaxed) + 1;
        if self.log_interval > 0 && tick % self.log_interval == 0 {
            tracing::info!(
                tick = tick,
                agents = agents,
                consumed = consumed_this_tick,
                total_consumed = self.consumption_count(),
                elapsed_ms = self.elapsed().as_millis() as u64,
                "Episode progress"
            );
        }
    }

    pub fn record_consumption(&self, count: usize) {
        self.consumption_count
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn consumption_count(&self) -> u64 {
        self.consumption_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging. Honors `RUST_LOG`, defaulting
/// to `info`.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}
