use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Counters describing grid activity since construction.
#[derive(Debug, Default, Clone)]
pub struct GridMetrics {
    inserts: u64,
    evictions: u64,
    rejections: u64,
    renders: u64,
}

impl GridMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_insert(&mut self, evicted: bool) {
        self.inserts = self.inserts.saturating_add(1);
        if evicted {
            self.evictions = self.evictions.saturating_add(1);
        }
    }

    pub fn record_rejection(&mut self) {
        self.rejections = self.rejections.saturating_add(1);
    }

    pub fn record_render(&mut self) {
        self.renders = self.renders.saturating_add(1);
    }

    pub fn snapshot(&self, occupants: usize) -> MetricSnapshot {
        MetricSnapshot {
            occupants: occupants as u64,
            inserts: self.inserts,
            evictions: self.evictions,
            rejections: self.rejections,
            renders: self.renders,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub occupants: u64,
    pub inserts: u64,
    pub evictions: u64,
    pub rejections: u64,
    pub renders: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "grid_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("occupants".to_string(), json!(self.occupants));
        map.insert("inserts".to_string(), json!(self.inserts));
        map.insert("evictions".to_string(), json!(self.evictions));
        map.insert("rejections".to_string(), json!(self.rejections));
        map.insert("renders".to_string(), json!(self.renders));
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reports_counters() {
        let mut metrics = GridMetrics::new();
        metrics.record_insert(false);
        metrics.record_insert(true);
        metrics.record_rejection();
        metrics.record_render();

        let snapshot = metrics.snapshot(1);
        assert_eq!(snapshot.inserts, 2);
        assert_eq!(snapshot.evictions, 1);
        assert_eq!(snapshot.rejections, 1);
        assert_eq!(snapshot.renders, 1);

        let event = snapshot.to_log_event("city_grid::metrics");
        assert_eq!(event.message, "grid_metrics");
        assert_eq!(event.fields["occupants"], 1);
    }
}
