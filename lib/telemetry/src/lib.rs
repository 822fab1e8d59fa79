#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate prometheus;

use std::convert::Infallible;
use std::future::Future;

use prometheus::{Encoder, Histogram, HistogramVec, IntCounter, IntCounterVec, TextEncoder};

lazy_static! {
    static ref SUCCESS: IntCounterVec = register_int_counter_vec!(
        "operation_success_total",
        "Operations that completed, including those rejected as client errors",
        &["layer", "operation"]
    )
    .unwrap();
    static ref FAILURE: IntCounterVec = register_int_counter_vec!(
        "operation_failure_total",
        "Operations that failed with an internal error",
        &["layer", "operation"]
    )
    .unwrap();
    static ref DURATION: HistogramVec = register_histogram_vec!(
        "operation_duration_seconds",
        "Operation latency",
        &["layer", "operation"]
    )
    .unwrap();
}

// Lets callers count rejected input as a successful operation
pub trait IsErr {
    fn is_err(&self) -> bool {
        true
    }
}

impl IsErr for Infallible {
    fn is_err(&self) -> bool {
        false
    }
}

impl IsErr for () {
    fn is_err(&self) -> bool {
        false
    }
}

impl IsErr for Box<dyn std::error::Error> {}

/// Success/failure counters and a latency histogram for one operation
#[derive(Clone)]
pub struct Measure {
    success: IntCounter,
    failure: IntCounter,
    duration: Histogram,
}

impl Measure {
    pub fn new(layer: &str, operation: &str) -> Measure {
        Measure {
            success: SUCCESS.with_label_values(&[layer, operation]),
            failure: FAILURE.with_label_values(&[layer, operation]),
            duration: DURATION.with_label_values(&[layer, operation]),
        }
    }

    pub async fn stats<F, T, E>(&self, inner: F) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>>,
        E: IsErr,
    {
        let timer = self.duration.start_timer();
        let r = inner.await;
        timer.observe_duration();
        self.count(&r);
        r
    }

    /// Synchronous counterpart of [`Measure::stats`]
    pub fn record<F, T, E>(&self, inner: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: IsErr,
    {
        let timer = self.duration.start_timer();
        let r = inner();
        timer.observe_duration();
        self.count(&r);
        r
    }

    fn count<T, E: IsErr>(&self, r: &Result<T, E>) {
        match r {
            Ok(_) => self.success.inc(),
            Err(e) if !e.is_err() => self.success.inc(),
            Err(_) => self.failure.inc(),
        }
    }
}

pub fn encode() -> Result<String, Box<dyn std::error::Error>> {
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
