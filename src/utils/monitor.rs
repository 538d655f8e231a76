#[cfg(feature = "cli")]
use std::sync::Mutex;
use std::time::Duration;
#[cfg(feature = "cli")]
use sysinfo::{Pid, System};

#[derive(Debug, Clone)]
pub struct ProcessSample {
    pub cpu_usage: f32,
    pub memory_usage_mb: u64,
    pub peak_memory_mb: u64,
}

fn requests_per_second(requests: usize, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        requests as f64 / secs
    } else {
        0.0
    }
}

/// Samples this process after each fetch phase when `--monitor` is set.
#[cfg(feature = "cli")]
pub struct PhaseMonitor {
    inner: Option<MonitorState>,
}

#[cfg(feature = "cli")]
struct MonitorState {
    system: Mutex<System>,
    pid: Pid,
    peak_memory_mb: Mutex<u64>,
}

#[cfg(feature = "cli")]
impl PhaseMonitor {
    pub fn new(enabled: bool) -> Self {
        if !enabled {
            return Self { inner: None };
        }

        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => pid,
            Err(e) => {
                tracing::warn!("Process monitoring unavailable: {}", e);
                return Self { inner: None };
            }
        };

        let mut system = System::new_all();
        system.refresh_all();

        Self {
            inner: Some(MonitorState {
                system: Mutex::new(system),
                pid,
                peak_memory_mb: Mutex::new(0),
            }),
        }
    }

    pub fn sample(&self) -> Option<ProcessSample> {
        let state = self.inner.as_ref()?;
        let mut system = state.system.lock().ok()?;
        system.refresh_all();

        let process = system.process(state.pid)?;
        let memory_mb = process.memory() / 1024 / 1024;

        let mut peak = state.peak_memory_mb.lock().ok()?;
        *peak = (*peak).max(memory_mb);

        Some(ProcessSample {
            cpu_usage: process.cpu_usage(),
            memory_usage_mb: memory_mb,
            peak_memory_mb: *peak,
        })
    }

    pub fn log_phase(&self, phase: &str, elapsed: Duration, requests: usize) {
        if let Some(sample) = self.sample() {
            tracing::info!(
                "📊 {} - {} requests in {:?} ({:.1} req/s), CPU: {:.1}%, Memory: {}MB, Peak: {}MB",
                phase,
                requests,
                elapsed,
                requests_per_second(requests, elapsed),
                sample.cpu_usage,
                sample.memory_usage_mb,
                sample.peak_memory_mb
            );
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }
}

#[cfg(feature = "cli")]
impl Default for PhaseMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

// Without sysinfo only the throughput line is logged.
#[cfg(not(feature = "cli"))]
#[derive(Default)]
pub struct PhaseMonitor {
    enabled: bool,
}

#[cfg(not(feature = "cli"))]
impl PhaseMonitor {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn sample(&self) -> Option<ProcessSample> {
        None
    }

    pub fn log_phase(&self, phase: &str, elapsed: Duration, requests: usize) {
        if self.enabled {
            tracing::info!(
                "📊 {} - {} requests in {:?} ({:.1} req/s)",
                phase,
                requests,
                elapsed,
                requests_per_second(requests, elapsed)
            );
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
