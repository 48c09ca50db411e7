use std::sync::{Arc, Mutex};

use crate::logging::{BUILDER_TARGET, LogLevel, Logger};
use crate::metrics::LayoutMetrics;

/// Configuration knobs for a layout pass.
#[derive(Clone, Debug)]
pub struct BuilderConfig {
    /// Optional structured logger used by the builder.
    pub logger: Option<Logger>,
    /// Level used for skipped-request events.
    pub level: LogLevel,
    /// Metrics accumulator shared across passes.
    pub metrics: Option<Arc<Mutex<LayoutMetrics>>>,
    /// Target field attached to emitted events.
    pub log_target: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            logger: None,
            level: LogLevel::Debug,
            metrics: None,
            log_target: BUILDER_TARGET.to_string(),
        }
    }
}

impl BuilderConfig {
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(LayoutMetrics::new())));
        }
    }

    pub fn disable_metrics(&mut self) {
        self.metrics = None;
    }

    /// Access the shared metrics handle if metrics are enabled.
    pub fn metrics_handle(&self) -> Option<Arc<Mutex<LayoutMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }

    pub(crate) fn with_metrics(&self, update: impl FnOnce(&mut LayoutMetrics)) {
        if let Some(metrics) = &self.metrics {
            if let Ok(mut guard) = metrics.lock() {
                update(&mut guard);
            }
        }
    }
}
