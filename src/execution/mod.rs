//! Execution engine for running sequence operations with configurable
//! parallelism.
//!
//! This module sits "above" [`crate::processing`] and provides:
//!
//! - Parallel (chunked) execution for filter/map
//! - Resource limits / throttling (e.g., in-flight chunks)
//! - Real-time metrics + observer hooks for monitoring
//!
//! Output order is always identical to the sequential operations in
//! [`crate::processing`]: chunks are processed concurrently but collected in
//! chunk order.

mod observer;
mod semaphore;

use std::ops::Range;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rayon::ThreadPool;
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

use crate::processing;

pub use observer::{
    ExecutionEvent, ExecutionMetrics, ExecutionMetricsSnapshot, ExecutionObserver,
    StdErrExecutionObserver,
};

use semaphore::Semaphore;

/// Configuration for the [`ExecutionEngine`].
#[derive(Debug, Clone)]
pub struct ExecutionOptions {
    /// Number of worker threads used by the engine.
    ///
    /// If `None`, uses the platform's available parallelism.
    pub num_threads: Option<usize>,
    /// Number of items per chunk.
    ///
    /// Chunking lets the engine bound working-set size and implement
    /// throttling.
    pub chunk_size: usize,
    /// Upper bound on concurrently executing chunks.
    ///
    /// This is an additional throttle on top of `num_threads`.
    pub max_in_flight_chunks: usize,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        let n = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
        Self {
            num_threads: Some(n),
            chunk_size: 4_096,
            max_in_flight_chunks: n.max(1),
        }
    }
}

/// A configurable execution engine for in-memory sequence operations.
pub struct ExecutionEngine {
    pool: ThreadPool,
    opts: ExecutionOptions,
    observer: Option<Arc<dyn ExecutionObserver>>,
    metrics: Arc<ExecutionMetrics>,
}

impl ExecutionEngine {
    /// Create a new engine with the given options.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size == 0`, `max_in_flight_chunks == 0`, or
    /// `num_threads == Some(0)`.
    pub fn new(opts: ExecutionOptions) -> Self {
        assert!(opts.chunk_size > 0, "chunk_size must be > 0");
        assert!(
            opts.max_in_flight_chunks > 0,
            "max_in_flight_chunks must be > 0"
        );
        if let Some(n) = opts.num_threads {
            assert!(n > 0, "num_threads must be > 0 when set");
        }

        let n_threads = opts
            .num_threads
            .unwrap_or_else(|| std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1))
            .max(1);

        let pool = ThreadPoolBuilder::new()
            .num_threads(n_threads)
            .build()
            .expect("failed to build rayon thread pool");

        Self {
            pool,
            opts: opts.clone(),
            observer: None,
            metrics: Arc::new(ExecutionMetrics::new()),
        }
    }

    /// Attach an observer for execution events (metrics/logging).
    pub fn with_observer(mut self, observer: Arc<dyn ExecutionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Get a handle to real-time execution metrics.
    pub fn metrics(&self) -> Arc<ExecutionMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Execute a parallel filter over the input sequence.
    ///
    /// Output contents, order, and compaction match
    /// [`crate::processing::filter`] exactly.
    pub fn filter_parallel<T, F>(&self, input: &[T], predicate: F) -> Vec<T>
    where
        T: Clone + Send + Sync,
        F: Fn(&T) -> bool + Send + Sync,
    {
        self.pool.install(|| {
            let start = Instant::now();
            self.metrics.begin_run();
            self.emit(ExecutionEvent::RunStarted);

            let sem = Semaphore::new(self.opts.max_in_flight_chunks);
            let ranges = chunk_ranges(input.len(), self.opts.chunk_size);

            let per_chunk: Vec<Vec<T>> = ranges
                .into_par_iter()
                .map(|range| {
                    let permit = self.enter_chunk(&sem, &range);

                    let mut out = Vec::new();
                    for item in &input[range] {
                        self.metrics.on_item_processed();
                        if predicate(item) {
                            out.push(item.clone());
                        }
                    }

                    self.leave_chunk(out.len());
                    drop(permit);
                    out
                })
                .collect();

            let mut out: Vec<T> = per_chunk.into_iter().flatten().collect();
            out.shrink_to_fit();

            self.metrics.end_run(start.elapsed());
            self.emit(ExecutionEvent::RunFinished {
                elapsed: start.elapsed(),
                metrics: self.metrics.snapshot(),
            });

            out
        })
    }

    /// Execute a parallel map over the input sequence.
    ///
    /// Output contents and order match [`crate::processing::map`] exactly.
    pub fn map_parallel<I, O, F>(&self, input: &[I], transform: F) -> Vec<O>
    where
        I: Sync,
        O: Send,
        F: Fn(&I) -> O + Send + Sync,
    {
        self.pool.install(|| {
            let start = Instant::now();
            self.metrics.begin_run();
            self.emit(ExecutionEvent::RunStarted);

            let sem = Semaphore::new(self.opts.max_in_flight_chunks);
            let ranges = chunk_ranges(input.len(), self.opts.chunk_size);

            let per_chunk: Vec<Vec<O>> = ranges
                .into_par_iter()
                .map(|range| {
                    let permit = self.enter_chunk(&sem, &range);

                    let mut out = Vec::with_capacity(range.end - range.start);
                    for item in &input[range] {
                        self.metrics.on_item_processed();
                        out.push(transform(item));
                    }

                    self.leave_chunk(out.len());
                    drop(permit);
                    out
                })
                .collect();

            let out: Vec<O> = per_chunk.into_iter().flatten().collect();

            self.metrics.end_run(start.elapsed());
            self.emit(ExecutionEvent::RunFinished {
                elapsed: start.elapsed(),
                metrics: self.metrics.snapshot(),
            });

            out
        })
    }

    /// Reduce the input sequence by a left fold.
    ///
    /// This is sequential (left folds are inherently order-dependent), but
    /// is tracked via the observer/metrics hooks.
    pub fn reduce<I, A, F>(&self, input: &[I], init: A, mut accumulate: F) -> A
    where
        F: FnMut(A, &I) -> A,
    {
        let start = Instant::now();
        self.metrics.begin_run();
        self.emit(ExecutionEvent::RunStarted);
        self.emit(ExecutionEvent::ReduceStarted {
            input_len: input.len(),
        });

        let out = processing::reduce(input, init, |acc, item| {
            self.metrics.on_item_processed();
            accumulate(acc, item)
        });

        self.emit(ExecutionEvent::ReduceFinished);
        self.metrics.end_run(start.elapsed());
        self.emit(ExecutionEvent::RunFinished {
            elapsed: start.elapsed(),
            metrics: self.metrics.snapshot(),
        });
        out
    }

    fn enter_chunk<'s>(&self, sem: &'s Semaphore, range: &Range<usize>) -> semaphore::SemaphorePermit<'s> {
        let permit = sem.acquire();
        if permit.waited() > Duration::ZERO {
            self.metrics.on_throttle_wait(permit.waited());
            self.emit(ExecutionEvent::ThrottleWaited {
                duration: permit.waited(),
            });
        }

        self.metrics.on_chunk_start();
        self.emit(ExecutionEvent::ChunkStarted {
            start_item: range.start,
            item_count: range.end - range.start,
        });
        permit
    }

    fn leave_chunk(&self, output_items: usize) {
        self.emit(ExecutionEvent::ChunkFinished { output_items });
        self.metrics.on_chunk_end();
    }

    fn emit(&self, event: ExecutionEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }
}

fn chunk_ranges(item_count: usize, chunk_size: usize) -> Vec<Range<usize>> {
    if item_count == 0 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(item_count.div_ceil(chunk_size));
    let mut start = 0usize;
    while start < item_count {
        let end = (start + chunk_size).min(item_count);
        out.push(start..end);
        start = end;
    }
    out
}
