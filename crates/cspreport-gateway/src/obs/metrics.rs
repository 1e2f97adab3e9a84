//! Counter registry for the reporter.
//!
//! Counters with dynamic labels backed by `DashMap`. Labels are flattened into
//! sorted key vectors to keep deterministic ordering, and series are rendered
//! sorted so scrapes diff cleanly. The registry is owned by `AppState` and
//! handed to handlers explicitly; there is no global instance.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use cspreport_core::{Directive, Disposition};

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

type LabelKey = Vec<(String, String)>;

fn label_key(labels: &[(&str, &str)]) -> LabelKey {
    let mut key: LabelKey = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<LabelKey, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let key = label_key(labels);
        // Fast path: existing series only needs a shard read lock.
        if let Some(counter) = self.map.get(&key) {
            counter.fetch_add(v, Ordering::Relaxed);
            return;
        }
        let counter = self.map.entry(key).or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value of one series (0 when never touched).
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Number of distinct label sets seen so far.
    pub fn series(&self) -> usize {
        self.map.len()
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, help);
        let _ = writeln!(out, "# TYPE {} counter", name);

        let mut rows: Vec<(String, u64)> = self
            .map
            .iter()
            .map(|r| {
                let label_str = r
                    .key()
                    .iter()
                    .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                    .collect::<Vec<_>>()
                    .join(",");
                (label_str, r.value().load(Ordering::Relaxed))
            })
            .collect();
        rows.sort();

        for (label_str, val) in rows {
            if label_str.is_empty() {
                let _ = writeln!(out, "{} {}", name, val);
            } else {
                let _ = writeln!(out, "{}{{{}}} {}", name, label_str, val);
            }
        }
    }
}

pub struct ReporterMetrics {
    namespace: String,
    pub reports: CounterVec,
    pub directive_violations: CounterVec,
    pub decode_errors: CounterVec,
}

impl Default for ReporterMetrics {
    fn default() -> Self {
        Self::new("csr")
    }
}

impl ReporterMetrics {
    pub fn new(namespace: impl Into<String>) -> Self {
        let m = Self {
            namespace: namespace.into(),
            reports: CounterVec::default(),
            directive_violations: CounterVec::default(),
            decode_errors: CounterVec::default(),
        };
        // Unlabeled series export 0 before the first event.
        m.reports.add(&[], 0);
        m.decode_errors.add(&[], 0);
        m
    }

    /// Count one accepted report under its classified labels.
    pub fn record_report(&self, directive: Directive, disposition: Disposition) {
        self.reports.inc(&[]);
        self.directive_violations.inc(&[
            ("directive", directive.as_str()),
            ("disposition", disposition.as_str()),
        ]);
    }

    pub fn record_decode_error(&self) {
        self.decode_errors.inc(&[]);
    }

    fn name(&self, suffix: &str) -> String {
        format!("{}_{}", self.namespace, suffix)
    }

    /// Render all registered metrics.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.reports.render(
            &self.name("reports_total"),
            "Counts the number of accepted reports",
            &mut out,
        );
        self.directive_violations.render(
            &self.name("directive_violations_total"),
            "Counts violations per classified directive and disposition",
            &mut out,
        );
        self.decode_errors.render(
            &self.name("decode_errors_total"),
            "Counts report bodies that could not be decoded",
            &mut out,
        );
        out
    }
}
