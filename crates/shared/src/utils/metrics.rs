use prometheus_client::metrics::{
    counter::Counter, family::Family, gauge::Gauge, histogram::Histogram,
};
use prometheus_client::registry::Registry;
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};
use std::{
    sync::{Arc, atomic::AtomicU64},
    time::{Duration, SystemTime, UNIX_EPOCH},
};
use sysinfo::{Pid, ProcessesToUpdate, System};
use tracing::debug;

const COLLECT_INTERVAL: Duration = Duration::from_secs(15);

/// Process and host gauges refreshed by [`run_metrics_collector`].
#[derive(Debug, Clone, Default)]
pub struct SystemMetrics {
    pub resident_memory_bytes: Gauge,
    pub virtual_memory_bytes: Gauge,
    pub available_memory_bytes: Gauge,
    pub cpu_usage_percent: Gauge<f64, AtomicU64>,
    pub process_start_time: Gauge,
}

impl SystemMetrics {
    pub fn new() -> Self {
        let metrics = Self::default();

        let started = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        metrics.process_start_time.set(started as i64);

        metrics
    }

    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "process_resident_memory_bytes",
            "Resident memory of the process in bytes",
            self.resident_memory_bytes.clone(),
        );
        registry.register(
            "process_virtual_memory_bytes",
            "Virtual memory of the process in bytes",
            self.virtual_memory_bytes.clone(),
        );
        registry.register(
            "host_available_memory_bytes",
            "Memory available on the host in bytes",
            self.available_memory_bytes.clone(),
        );
        registry.register(
            "host_cpu_usage_percent",
            "Global CPU usage across all cores",
            self.cpu_usage_percent.clone(),
        );
        registry.register(
            "process_start_time_seconds",
            "Start time of the process since unix epoch in seconds",
            self.process_start_time.clone(),
        );
    }

    pub fn update(&self, sys: &mut System, pid: Pid) {
        sys.refresh_memory();
        sys.refresh_cpu_usage();
        sys.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);

        self.available_memory_bytes
            .set(i64::try_from(sys.available_memory()).unwrap_or(i64::MAX));
        self.cpu_usage_percent.set(f64::from(sys.global_cpu_usage()));

        if let Some(process) = sys.process(pid) {
            self.resident_memory_bytes
                .set(i64::try_from(process.memory()).unwrap_or(i64::MAX));
            self.virtual_memory_bytes
                .set(i64::try_from(process.virtual_memory()).unwrap_or(i64::MAX));
        }
    }
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct Labels {
    pub service: String,
    pub operation: String,
    pub method: Method,
    pub status: Status,
}

/// Per-operation request counters and latencies, shared by every service.
#[derive(Clone, Debug)]
pub struct Metrics {
    pub requests: Family<Labels, Counter>,
    pub duration: Family<Labels, Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            requests: Family::default(),
            duration: Family::new_with_constructor(|| {
                Histogram::new([0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0])
            }),
        }
    }

    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "operation_requests",
            "Service operations by outcome",
            self.requests.clone(),
        );
        registry.register(
            "operation_duration_seconds",
            "Service operation latency in seconds",
            self.duration.clone(),
        );
    }

    pub fn record(&self, labels: &Labels, duration_secs: f64) {
        self.requests.get_or_create(labels).inc();
        self.duration.get_or_create(labels).observe(duration_secs);
    }
}

pub async fn run_metrics_collector(system_metrics: Arc<SystemMetrics>) {
    let pid = Pid::from_u32(std::process::id());
    let mut sys = System::new();
    let mut interval = tokio::time::interval(COLLECT_INTERVAL);

    loop {
        interval.tick().await;
        system_metrics.update(&mut sys, pid);
        debug!("System metrics refreshed");
    }
}
