use crate::adapters::http::{BlockingHttpTransport, HttpTransport};
use crate::config::DemoConfig;
use crate::core::fetcher::{fetch_countries, fetch_countries_blocking};
use crate::core::pagination::Offsets;
use crate::core::{BlockingTransport, Country, Result, Transport};
use crate::utils::error::FetchError;
use crate::utils::monitor::PhaseMonitor;
use crate::utils::validation::Validate;
use std::io::Write;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Sequential,
    Concurrent,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Sequential => "sync",
            Phase::Concurrent => "async",
        }
    }
}

/// Pages fetched by one phase, in offset order.
#[derive(Debug, Clone)]
pub struct PhaseReport {
    pub phase: Phase,
    pub pages: Vec<Vec<Country>>,
    pub elapsed: Duration,
}

impl PhaseReport {
    pub fn names(&self) -> Vec<Vec<&str>> {
        self.pages
            .iter()
            .map(|page| page.iter().map(|country| country.name.as_str()).collect())
            .collect()
    }

    /// One line of country names per page, then the phase's total time.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        for names in self.names() {
            writeln!(out, "{:?}", names)?;
        }
        writeln!(
            out,
            "Total time ({}): {}",
            self.phase.label(),
            self.elapsed.as_secs_f64()
        )?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct DemoSummary {
    pub sequential: PhaseReport,
    pub concurrent: PhaseReport,
}

/// Fetches every page one after another, blocking the calling thread.
pub fn run_sequential<T>(transport: &T, offsets: Offsets) -> Result<PhaseReport>
where
    T: BlockingTransport + ?Sized,
{
    let started = Instant::now();
    let limit = offsets.chunk();

    let pages = offsets
        .map(|offset| fetch_countries_blocking(transport, offset, limit))
        .collect::<Result<Vec<_>>>()?;

    Ok(PhaseReport {
        phase: Phase::Sequential,
        pages,
        elapsed: started.elapsed(),
    })
}

/// Fetches every page at once, at most `max_in_flight` at a time.
///
/// Results land in the slot of their submission index, so pages come back in
/// offset order whatever order the requests finish in. The first failure
/// returns immediately; dropping the `JoinSet` aborts the tasks still running.
pub async fn run_concurrent<T>(
    transport: Arc<T>,
    offsets: Offsets,
    max_in_flight: NonZeroUsize,
) -> Result<PhaseReport>
where
    T: Transport + 'static,
{
    let started = Instant::now();
    let limit = offsets.chunk();
    let permits = Arc::new(Semaphore::new(max_in_flight.get()));
    let mut tasks = JoinSet::new();
    let mut slots: Vec<Option<Vec<Country>>> = Vec::with_capacity(offsets.len());

    for (index, offset) in offsets.enumerate() {
        slots.push(None);
        let transport = Arc::clone(&transport);
        let permits = Arc::clone(&permits);

        tasks.spawn(async move {
            let _permit = permits
                .acquire_owned()
                .await
                .map_err(|e| FetchError::WorkerPool {
                    message: e.to_string(),
                })?;
            let countries = fetch_countries(transport.as_ref(), offset, limit).await?;
            Ok::<_, FetchError>((index, countries))
        });
    }

    while let Some(joined) = tasks.join_next().await {
        let (index, countries) = joined??;
        slots[index] = Some(countries);
    }

    Ok(PhaseReport {
        phase: Phase::Concurrent,
        pages: slots.into_iter().flatten().collect(),
        elapsed: started.elapsed(),
    })
}

/// Runs the sequential phase and then the concurrent phase against the
/// configured service, printing each to `out`.
pub struct DemoRunner {
    config: DemoConfig,
    monitor: PhaseMonitor,
}

impl DemoRunner {
    pub fn new(config: DemoConfig) -> Self {
        Self::new_with_monitoring(config, false)
    }

    pub fn new_with_monitoring(config: DemoConfig, monitor_enabled: bool) -> Self {
        Self {
            config,
            monitor: PhaseMonitor::new(monitor_enabled),
        }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub async fn run<W: Write>(&self, out: &mut W) -> Result<DemoSummary> {
        self.config.validate()?;

        let chunk = NonZeroUsize::new(self.config.chunk_size).ok_or_else(|| FetchError::Config {
            message: "chunk_size must be positive".to_string(),
        })?;
        let max_in_flight =
            NonZeroUsize::new(self.config.max_in_flight).ok_or_else(|| FetchError::Config {
                message: "max_in_flight must be positive".to_string(),
            })?;
        let offsets = Offsets::new(self.config.items_to_fetch, chunk);

        tracing::info!(
            "🚀 Fetching {} countries from {} in {} pages",
            self.config.items_to_fetch,
            self.config.api_root,
            offsets.len()
        );

        tracing::info!("⏳ Sequential phase");
        let api_root = self.config.api_root.clone();
        let sequential_offsets = offsets.clone();
        let sequential = tokio::task::spawn_blocking(move || {
            let transport = BlockingHttpTransport::new(api_root);
            run_sequential(&transport, sequential_offsets)
        })
        .await??;
        sequential.write_to(out)?;
        self.monitor
            .log_phase("Sequential", sequential.elapsed, sequential.pages.len());

        tracing::info!("⚡ Concurrent phase");
        let transport = Arc::new(HttpTransport::new(self.config.api_root.clone()));
        let concurrent = run_concurrent(transport, offsets, max_in_flight).await?;
        concurrent.write_to(out)?;
        self.monitor
            .log_phase("Concurrent", concurrent.elapsed, concurrent.pages.len());

        tracing::info!(
            "✅ Sequential: {:?}, concurrent: {:?}",
            sequential.elapsed,
            concurrent.elapsed
        );

        Ok(DemoSummary {
            sequential,
            concurrent,
        })
    }
}
