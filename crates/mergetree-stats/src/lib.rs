//! Latency sketches for profiling mergetree operations.
//!
//! Enabled in `mergetree` through its `profiler` feature.

use core::cell::RefCell;
use minstant::Instant;
use sketches_ddsketch::{Config, DDSketch};
use std::rc::Rc;

/// Extracts common percentiles from a sketch
pub fn sketch_percentiles(sketch: &DDSketch) -> Percentiles {
    let quantile = |q: f64| sketch.quantile(q).ok().flatten().unwrap_or(0.0);
    Percentiles {
        count: sketch.count(),
        min: sketch.min().unwrap_or(0.0),
        p50: quantile(0.5),
        p99: quantile(0.99),
        p99_9: quantile(0.999),
        max: sketch.max().unwrap_or(0.0),
    }
}

/// Latency percentiles in nanoseconds
#[derive(Default, Clone, Copy)]
pub struct Percentiles {
    /// Number of recorded samples
    pub count: usize,
    /// Smallest sample
    pub min: f64,
    /// Median
    pub p50: f64,
    /// 99th percentile
    pub p99: f64,
    /// 99.9th percentile
    pub p99_9: f64,
    /// Largest sample
    pub max: f64,
}

impl std::fmt::Debug for Percentiles {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Percentiles")
            .field("count", &self.count)
            .field("min", &format_args!("{:.2}ns", self.min))
            .field("p50", &format_args!("{:.2}ns", self.p50))
            .field("p99", &format_args!("{:.2}ns", self.p99))
            .field("p99.9", &format_args!("{:.2}ns", self.p99_9))
            .field("max", &format_args!("{:.2}ns", self.max))
            .finish()
    }
}

/// A shared handle to a DDSketch
///
/// Clones share the same underlying sketch.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone)]
pub struct Sketch {
    inner: Rc<RefCell<DDSketch>>,
}

impl Default for Sketch {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(DDSketch::new(Config::new(0.01, 2048, 1.0e-9)))),
        }
    }
}

impl Sketch {
    /// Records a sample
    #[inline]
    pub fn add(&self, data: f64) {
        self.inner.borrow_mut().add(data)
    }
    /// Returns the number of recorded samples
    pub fn count(&self) -> usize {
        self.inner.borrow().count()
    }
    /// Returns the percentiles of all recorded samples
    pub fn percentiles(&self) -> Percentiles {
        sketch_percentiles(&self.inner.borrow())
    }
}

/// Records the elapsed time between its creation and drop into a [Sketch]
// Inspired by https://github.com/spacejam/sled/blob/main/src/metrics.rs
pub struct Measure {
    start: Instant,
    sketch: Sketch,
}

impl Measure {
    /// Starts a new measurement
    #[inline]
    pub fn new(sketch: &Sketch) -> Measure {
        Measure {
            sketch: sketch.clone(), // clones Rc
            start: Instant::now(),
        }
    }
}

impl Drop for Measure {
    #[inline]
    fn drop(&mut self) {
        self.sketch.add(self.start.elapsed().as_nanos() as f64);
    }
}

/// Measures the rest of the enclosing scope into the given [Sketch]
#[macro_export]
macro_rules! profile_scope {
    ($sketch:expr) => {
        let _measure = $crate::Measure::new($sketch);
    };
}
