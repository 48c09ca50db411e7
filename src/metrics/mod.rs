use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Counters accumulated across layout passes.
#[derive(Debug, Default, Clone)]
pub struct LayoutMetrics {
    specs_compiled: u64,
    descriptors_emitted: u64,
    requests_skipped: u64,
    batches_applied: u64,
}

impl LayoutMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_compile(&mut self, descriptors: usize, skipped: usize) {
        self.specs_compiled = self.specs_compiled.saturating_add(1);
        self.descriptors_emitted = self.descriptors_emitted.saturating_add(descriptors as u64);
        self.requests_skipped = self.requests_skipped.saturating_add(skipped as u64);
    }

    pub fn record_skipped(&mut self, count: usize) {
        if count > 0 {
            self.requests_skipped = self.requests_skipped.saturating_add(count as u64);
        }
    }

    pub fn record_batch(&mut self) {
        self.batches_applied = self.batches_applied.saturating_add(1);
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            specs_compiled: self.specs_compiled,
            descriptors_emitted: self.descriptors_emitted,
            requests_skipped: self.requests_skipped,
            batches_applied: self.batches_applied,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub specs_compiled: u64,
    pub descriptors_emitted: u64,
    pub requests_skipped: u64,
    pub batches_applied: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "layout_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("specs_compiled".to_string(), json!(self.specs_compiled));
        map.insert(
            "descriptors_emitted".to_string(),
            json!(self.descriptors_emitted),
        );
        map.insert("requests_skipped".to_string(), json!(self.requests_skipped));
        map.insert("batches_applied".to_string(), json!(self.batches_applied));
        map
    }
}
