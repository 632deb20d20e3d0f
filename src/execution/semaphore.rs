use std::sync::{Condvar, Mutex};
use std::time::{Duration, Instant};

/// A small, blocking counting semaphore.
///
/// Used to implement throttling/backpressure for chunked execution. Permits
/// are handed out as RAII guards, so a chunk that panics mid-processing still
/// returns its permit on unwind.
pub struct Semaphore {
    available: Mutex<usize>,
    cv: Condvar,
}

impl Semaphore {
    pub fn new(permits: usize) -> Self {
        assert!(permits > 0, "permits must be > 0");
        Self {
            available: Mutex::new(permits),
            cv: Condvar::new(),
        }
    }

    /// Acquire one permit, blocking until available.
    ///
    /// The returned guard releases the permit when dropped and records how
    /// long the caller waited (zero if no wait was required).
    pub fn acquire(&self) -> SemaphorePermit<'_> {
        let start = Instant::now();
        let mut waited = false;
        let mut g = self.available.lock().expect("semaphore mutex poisoned");
        while *g == 0 {
            waited = true;
            g = self.cv.wait(g).expect("semaphore mutex poisoned");
        }
        *g -= 1;
        SemaphorePermit {
            sem: self,
            waited: if waited { start.elapsed() } else { Duration::ZERO },
        }
    }
}

/// An acquired permit; dropping it releases the permit back to the semaphore.
pub struct SemaphorePermit<'a> {
    sem: &'a Semaphore,
    waited: Duration,
}

impl SemaphorePermit<'_> {
    /// Time spent blocked inside [`Semaphore::acquire`].
    pub fn waited(&self) -> Duration {
        self.waited
    }
}

impl Drop for SemaphorePermit<'_> {
    fn drop(&mut self) {
        let mut g = self.sem.available.lock().expect("semaphore mutex poisoned");
        *g += 1;
        self.sem.cv.notify_one();
    }
}
