//! 追踪、请求 ID 与基础指标。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 请求级追踪标识。
#[derive(Debug, Clone)]
pub struct RequestIds {
    pub request_id: String,
    pub trace_id: String,
}

/// 指标快照。
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSnapshot {
    pub fetch_success: u64,
    pub fetch_failure: u64,
    pub tree_builds: u64,
    pub refreshes: u64,
    pub build_latency_ms_total: u64,
    pub build_latency_ms_count: u64,
}

/// 进程级计数器。
pub struct TelemetryMetrics {
    fetch_success: AtomicU64,
    fetch_failure: AtomicU64,
    tree_builds: AtomicU64,
    refreshes: AtomicU64,
    build_latency_ms_total: AtomicU64,
    build_latency_ms_count: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            fetch_success: AtomicU64::new(0),
            fetch_failure: AtomicU64::new(0),
            tree_builds: AtomicU64::new(0),
            refreshes: AtomicU64::new(0),
            build_latency_ms_total: AtomicU64::new(0),
            build_latency_ms_count: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            fetch_success: self.fetch_success.load(Ordering::Relaxed),
            fetch_failure: self.fetch_failure.load(Ordering::Relaxed),
            tree_builds: self.tree_builds.load(Ordering::Relaxed),
            refreshes: self.refreshes.load(Ordering::Relaxed),
            build_latency_ms_total: self.build_latency_ms_total.load(Ordering::Relaxed),
            build_latency_ms_count: self.build_latency_ms_count.load(Ordering::Relaxed),
        }
    }
}

impl Default for TelemetryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局指标实例。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化 tracing（默认 info）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 生成新的 request_id 与 trace_id。
pub fn new_request_ids() -> RequestIds {
    RequestIds {
        request_id: uuid::Uuid::new_v4().to_string(),
        trace_id: uuid::Uuid::new_v4().to_string(),
    }
}

/// 记录目录读取成功次数（按记录集合计）。
pub fn record_fetch_success() {
    metrics().fetch_success.fetch_add(1, Ordering::Relaxed);
}

/// 记录目录读取失败次数（已降级为空列表）。
pub fn record_fetch_failure() {
    metrics().fetch_failure.fetch_add(1, Ordering::Relaxed);
}

/// 记录构建的树数量。
pub fn record_tree_builds(count: u64) {
    metrics().tree_builds.fetch_add(count, Ordering::Relaxed);
}

/// 记录单树刷新次数。
pub fn record_refresh() {
    metrics().refreshes.fetch_add(1, Ordering::Relaxed);
}

/// 记录构建耗时（毫秒）。
pub fn record_build_latency_ms(latency_ms: u64) {
    let metrics = metrics();
    metrics
        .build_latency_ms_total
        .fetch_add(latency_ms, Ordering::Relaxed);
    metrics
        .build_latency_ms_count
        .fetch_add(1, Ordering::Relaxed);
}
