use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Instant;

// The single piece of cross-worker state in the hyper-search: a
// mutex-guarded scalar in `[0.0, 1.0]` holding the best per-container
// utilization seen by any worker so far, monotone read-modify-write, no
// fairness or ordering beyond that is required. `is_complete` reports
// whether some container has been packed to (approximately) 100%.
#[derive(Debug)]
pub struct SharedBest {
    value: Mutex<f64>,
}

impl SharedBest {
    pub fn new() -> Self {
        Self { value: Mutex::new(0.0) }
    }

    pub fn read(&self) -> f64 {
        *self.value.lock().expect("shared-best mutex poisoned")
    }

    // Writes `candidate` only if it is strictly greater than the current
    // value. Returns `true` iff it became the new best.
    pub fn try_update(&self, candidate: f64) -> bool {
        let mut guard = self.value.lock().expect("shared-best mutex poisoned");
        if candidate > *guard {
            *guard = candidate;
            true
        } else {
            false
        }
    }

    pub fn is_complete(&self) -> bool {
        self.read() >= 1.0 - 1e-9
    }
}

impl Default for SharedBest {
    fn default() -> Self {
        Self::new()
    }
}

// Polling-point state observed at strategy boundaries and local-search
// node boundaries: a monotonic deadline, the shared-best cell, and a
// cancellation flag set by the caller (e.g. a Ctrl-C handler).
pub struct SearchControl<'a> {
    pub deadline: Option<Instant>,
    pub shared_best: Option<&'a SharedBest>,
    pub cancelled: Option<&'a AtomicBool>,
}

impl<'a> SearchControl<'a> {
    pub fn unbounded() -> Self {
        Self { deadline: None, shared_best: None, cancelled: None }
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self { deadline: Some(deadline), shared_best: None, cancelled: None }
    }

    pub fn should_stop(&self) -> bool {
        if let Some(dl) = self.deadline {
            if Instant::now() >= dl {
                return true;
            }
        }
        if let Some(sb) = self.shared_best {
            if sb.is_complete() {
                return true;
            }
        }
        if let Some(flag) = self.cancelled {
            if flag.load(Ordering::Relaxed) {
                return true;
            }
        }
        false
    }
}
