//! # Runtime
//!
//! Tokio runtime presets for Folio binaries and the [`macro@main`] attribute that wires
//! them into `fn main`.
//!
//! ## Presets
//! * **server**: every available core, 4 `MiB` stacks, long keep-alive.
//! * **compact**: half the cores, 2 `MiB` stacks (tests, tools, small hosts).
//! * **default**: auto-detected workers with 3 `MiB` stacks.
//!
//! Configuration files can still tune a preset through [`RuntimeConfig::with_overrides`].
//!
//! ```rust,ignore
//! #[folio_runtime::main(server)]
//! async fn main() -> anyhow::Result<()> {
//!     Ok(())
//! }
//! ```

pub use anyhow::Result;
pub use folio_derive::main;

use anyhow::anyhow;
use std::{sync::OnceLock, thread::available_parallelism, time::Duration};
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

const FALLBACK_WORKER_THREADS: usize = 4;
const MAX_WORKER_THREADS: usize = 1024;
const DEFAULT_STACK_SIZE: usize = 3 * 1024 * 1024;
const MIN_STACK_SIZE: usize = 1024 * 1024;
const MAX_STACK_SIZE: usize = 16 * 1024 * 1024;
const DEFAULT_THREAD_NAME: &str = "folio-worker";

static DETECTED_WORKERS: OnceLock<usize> = OnceLock::new();

/// `TOKIO_WORKER_THREADS` when set and sane, otherwise the available parallelism.
fn detected_workers() -> usize {
    *DETECTED_WORKERS.get_or_init(|| {
        std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&n| (1..=MAX_WORKER_THREADS).contains(&n))
            .unwrap_or_else(|| {
                available_parallelism().map_or(FALLBACK_WORKER_THREADS, std::num::NonZero::get)
            })
    })
}

/// Settings for the multi-threaded Tokio runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub worker_threads: usize,
    pub stack_size: usize,
    pub thread_name: String,
    pub thread_keep_alive: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            worker_threads: detected_workers(),
            stack_size: DEFAULT_STACK_SIZE,
            thread_name: DEFAULT_THREAD_NAME.to_owned(),
            thread_keep_alive: Duration::from_secs(60),
        }
    }
}

impl RuntimeConfig {
    /// Preset for the site server.
    #[must_use]
    pub fn server() -> Self {
        Self {
            worker_threads: detected_workers(),
            stack_size: 4 * 1024 * 1024,
            thread_name: "folio-server".to_owned(),
            thread_keep_alive: Duration::from_secs(300),
        }
    }

    /// Preset for tools, tests and small hosts.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            worker_threads: (detected_workers() / 2).max(1),
            stack_size: 2 * 1024 * 1024,
            thread_name: "folio-compact".to_owned(),
            thread_keep_alive: Duration::from_secs(30),
        }
    }

    #[must_use]
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = threads.clamp(1, MAX_WORKER_THREADS);
        self
    }

    #[must_use]
    pub fn with_stack_size(mut self, size: usize) -> Self {
        self.stack_size = size.clamp(MIN_STACK_SIZE, MAX_STACK_SIZE);
        self
    }

    #[must_use]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.thread_name = if name.trim().is_empty() { DEFAULT_THREAD_NAME.to_owned() } else { name };
        self
    }

    /// Applies the optional `[runtime]` values from the config file on top of a preset.
    #[must_use]
    pub fn with_overrides(self, worker_threads: Option<usize>, stack_size: Option<usize>) -> Self {
        let config = match worker_threads {
            Some(threads) => self.with_worker_threads(threads),
            None => self,
        };
        match stack_size {
            Some(size) => config.with_stack_size(size),
            None => config,
        }
    }

    fn normalized(&self) -> Self {
        self.clone()
            .with_worker_threads(self.worker_threads)
            .with_stack_size(self.stack_size)
            .with_thread_name(self.thread_name.clone())
    }
}

/// Builds a multi-threaded runtime with I/O and timers enabled.
///
/// Out-of-range values are clamped rather than rejected.
///
/// # Errors
/// Fails when the OS refuses to spawn the worker threads.
pub fn build_runtime_with_config(config: &RuntimeConfig) -> Result<Runtime> {
    let config = config.normalized();
    debug!(?config, "Building tokio runtime");

    Builder::new_multi_thread()
        .worker_threads(config.worker_threads)
        .thread_name(&config.thread_name)
        .thread_stack_size(config.stack_size)
        .thread_keep_alive(config.thread_keep_alive)
        .enable_all()
        .build()
        .map_err(|e| anyhow!("Failed to initialize runtime: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_threads_are_clamped() {
        assert_eq!(RuntimeConfig::default().with_worker_threads(0).worker_threads, 1);
        assert_eq!(RuntimeConfig::default().with_worker_threads(5000).worker_threads, MAX_WORKER_THREADS);
    }

    #[test]
    fn stack_size_is_clamped() {
        assert_eq!(RuntimeConfig::default().with_stack_size(100).stack_size, MIN_STACK_SIZE);
        assert_eq!(RuntimeConfig::default().with_stack_size(usize::MAX).stack_size, MAX_STACK_SIZE);
    }

    #[test]
    fn overrides_only_touch_given_values() {
        let preset = RuntimeConfig::server();
        let tuned = preset.clone().with_overrides(Some(2), None);
        assert_eq!(tuned.worker_threads, 2);
        assert_eq!(tuned.stack_size, preset.stack_size);

        assert_eq!(preset.clone().with_overrides(None, None), preset);
    }

    #[test]
    fn compact_never_drops_below_one_worker() {
        assert!(RuntimeConfig::compact().worker_threads >= 1);
        assert!(RuntimeConfig::compact().stack_size < RuntimeConfig::server().stack_size);
    }

    #[test]
    fn blank_thread_name_falls_back() {
        assert_eq!(RuntimeConfig::default().with_thread_name("  ").thread_name, DEFAULT_THREAD_NAME);
    }

    #[test]
    fn built_runtime_runs_futures() {
        let rt = build_runtime_with_config(&RuntimeConfig::compact().with_worker_threads(1)).unwrap();
        assert_eq!(rt.block_on(async { 40 + 2 }), 42);
    }
}
