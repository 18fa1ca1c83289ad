//! Fetch metrics.
//!
//! # Metrics
//! - `remote_data_fetch_total` (counter): resolved fetches by `outcome`
//! - `remote_data_fetch_duration_seconds` (histogram): start to resolution

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crate::state::Variant;

static ENABLED: AtomicBool = AtomicBool::new(true);

/// Turn recording on or off process-wide.
pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

/// Record a fetch that reached `outcome`.
pub fn record_fetch_outcome(outcome: Variant, started: Instant) {
    if !is_enabled() {
        return;
    }
    let elapsed = started.elapsed().as_secs_f64();

    ::metrics::counter!("remote_data_fetch_total", "outcome" => outcome.as_str()).increment(1);
    ::metrics::histogram!("remote_data_fetch_duration_seconds").record(elapsed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::metrics::{
        Counter, CounterFn, Gauge, Histogram, HistogramFn, Key, KeyName, Metadata, Recorder,
        SharedString, Unit,
    };
    use std::sync::{Arc, Mutex};

    /// Metric name plus rendered labels, e.g. `remote_data_fetch_total{outcome=Success}`.
    type Events = Arc<Mutex<Vec<(String, f64)>>>;

    struct Captured {
        key: String,
        events: Events,
    }

    impl CounterFn for Captured {
        fn increment(&self, value: u64) {
            self.events.lock().unwrap().push((self.key.clone(), value as f64));
        }

        fn absolute(&self, value: u64) {
            self.increment(value);
        }
    }

    impl HistogramFn for Captured {
        fn record(&self, value: f64) {
            self.events.lock().unwrap().push((self.key.clone(), value));
        }
    }

    #[derive(Default)]
    struct CaptureRecorder {
        events: Events,
    }

    impl CaptureRecorder {
        fn captured(&self, key: &Key) -> Arc<Captured> {
            let labels: Vec<String> = key
                .labels()
                .map(|label| format!("{}={}", label.key(), label.value()))
                .collect();
            let key = if labels.is_empty() {
                key.name().to_string()
            } else {
                format!("{}{{{}}}", key.name(), labels.join(","))
            };
            Arc::new(Captured {
                key,
                events: self.events.clone(),
            })
        }

        fn events(&self) -> Vec<(String, f64)> {
            self.events.lock().unwrap().clone()
        }
    }

    impl Recorder for CaptureRecorder {
        fn describe_counter(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_gauge(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_histogram(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

        fn register_counter(&self, key: &Key, _: &Metadata<'_>) -> Counter {
            Counter::from_arc(self.captured(key))
        }

        fn register_gauge(&self, _: &Key, _: &Metadata<'_>) -> Gauge {
            Gauge::noop()
        }

        fn register_histogram(&self, key: &Key, _: &Metadata<'_>) -> Histogram {
            Histogram::from_arc(self.captured(key))
        }
    }

    // Single test: the enable switch is process-wide.
    #[test]
    fn test_fetch_outcomes_and_switch() {
        let recorder = CaptureRecorder::default();

        set_enabled(true);
        ::metrics::with_local_recorder(&recorder, || {
            record_fetch_outcome(Variant::Success, Instant::now());
            record_fetch_outcome(Variant::Failure, Instant::now());
        });

        let events = recorder.events();
        let counters: Vec<_> = events
            .iter()
            .filter(|(key, _)| key.starts_with("remote_data_fetch_total"))
            .collect();
        assert_eq!(
            counters,
            vec![
                &("remote_data_fetch_total{outcome=Success}".to_string(), 1.0),
                &("remote_data_fetch_total{outcome=Failure}".to_string(), 1.0),
            ]
        );
        let durations: Vec<_> = events
            .iter()
            .filter(|(key, _)| key == "remote_data_fetch_duration_seconds")
            .collect();
        assert_eq!(durations.len(), 2);
        assert!(durations.iter().all(|(_, secs)| *secs >= 0.0));

        set_enabled(false);
        ::metrics::with_local_recorder(&recorder, || {
            record_fetch_outcome(Variant::Success, Instant::now());
        });
        set_enabled(true);

        assert_eq!(recorder.events().len(), 4);
    }
}
