use std::{
    sync::{
        Arc, OnceLock,
        atomic::{AtomicI64, Ordering},
    },
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use crate::time::{Clock, SystemClock};

/// Shared ticker thread that updates every millisecond.
#[derive(Debug)]
struct SharedTickerInner {
    elapsed: AtomicI64,
    _handle: OnceLock<JoinHandle<()>>,
}

/// A clock that never goes backwards.
///
/// At construction the wall clock is sampled once as an anchor. A background
/// thread then advances an atomic counter from a monotonic [`Instant`], and
/// readings are `anchor + elapsed`. Wall-clock adjustments made after startup
/// are ignored, so a generator driven by this clock never observes a
/// regression.
///
/// Clones share the same ticker. The thread exits once every clone has been
/// dropped.
#[derive(Clone, Debug)]
pub struct MonotonicClock {
    inner: Arc<SharedTickerInner>,
    anchor: i64,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    /// Starts a ticker anchored to the current [`SystemClock`] reading.
    ///
    /// # Panics
    ///
    /// Panics if the ticker thread handle cannot be stored, which only happens
    /// if it was already set.
    pub fn new() -> Self {
        Self::with_anchor(SystemClock.current_millis())
    }

    /// Starts a ticker that reports `anchor` at construction and advances
    /// from there.
    pub fn with_anchor(anchor: i64) -> Self {
        let start = Instant::now();
        let inner = Arc::new(SharedTickerInner {
            elapsed: AtomicI64::new(0),
            _handle: OnceLock::new(),
        });

        let weak_inner = Arc::downgrade(&inner);
        let handle = thread::spawn(move || {
            let mut tick = 0;

            loop {
                let Some(inner_ref) = weak_inner.upgrade() else {
                    break;
                };

                let target = start + Duration::from_millis(tick);
                let now = Instant::now();
                if now < target {
                    thread::sleep(target - now);
                }

                let elapsed = start.elapsed().as_millis() as u64;
                inner_ref.elapsed.store(elapsed as i64, Ordering::Relaxed);

                tick = elapsed + 1;
            }
        });

        inner
            ._handle
            .set(handle)
            .expect("failed to set thread handle");

        Self { inner, anchor }
    }
}

impl Clock for MonotonicClock {
    fn current_millis(&self) -> i64 {
        self.anchor + self.inner.elapsed.load(Ordering::Relaxed)
    }
}
