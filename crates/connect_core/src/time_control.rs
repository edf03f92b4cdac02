//! Thinking budget and cancellation for a single decision.
//!
//! The host hands an engine a [`SearchLimits`]: a depth cap, an optional
//! wall-clock budget, an optional node (step) budget, and a [`TimeControl`]
//! whose stop flag any clone can raise. The search polls it at every node and
//! between root moves; nothing is preempted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// How often, in nodes, the clock is read.
const CLOCK_CHECK_INTERVAL: u64 = 1024;

#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Deepest iteration to run, in plies below the root move
    pub depth: u8,
    /// Wall-clock budget for this decision (None = unlimited)
    pub move_time: Option<Duration>,
    /// Node budget for this decision (None = unlimited)
    pub max_nodes: Option<u64>,
    /// Shared stop flag and clock
    pub time_control: TimeControl,
}

impl SearchLimits {
    /// Depth cap only.
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            move_time: None,
            max_nodes: None,
            time_control: TimeControl::new(None),
        }
    }

    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            depth,
            move_time: Some(move_time),
            max_nodes: None,
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    /// Time budget only; deepening continues until the clock runs out or
    /// the game tree is exhausted.
    pub fn time(move_time: Duration) -> Self {
        Self::depth_and_time(u8::MAX, move_time)
    }

    pub fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    /// Start the clock. Does not clear a stop that was already requested.
    pub fn start(&self) {
        self.time_control.start();
    }

    /// Request cancellation.
    pub fn stop(&self) {
        self.time_control.stop();
    }

    #[inline]
    pub fn should_stop(&self) -> bool {
        self.time_control.is_stopped()
    }

    /// Per-node poll: enforces the node budget every call and reads the clock
    /// every `CLOCK_CHECK_INTERVAL` nodes. Returns true once stopped.
    #[inline]
    pub fn poll(&self, nodes: u64) -> bool {
        if self.time_control.is_stopped() {
            return true;
        }
        if let Some(max) = self.max_nodes {
            if nodes >= max {
                self.time_control.stop();
                return true;
            }
        }
        self.time_control.should_check_time(nodes) && self.time_control.check_time()
    }

    /// Unconditional clock read, for places visited rarely (root moves).
    pub fn check(&self) -> bool {
        self.time_control.check_time()
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(8)
    }
}

/// Cloneable cancellation signal plus the decision clock.
///
/// Clones share the flag, so a host thread can keep one and call
/// [`TimeControl::stop`] while the engine searches with another.
#[derive(Debug, Clone)]
pub struct TimeControl {
    stopped: Arc<AtomicBool>,
    start_time: Arc<RwLock<Option<Instant>>>,
    time_limit: Option<Duration>,
    check_interval: u64,
}

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            start_time: Arc::new(RwLock::new(None)),
            time_limit,
            check_interval: CLOCK_CHECK_INTERVAL,
        }
    }

    pub fn start(&self) {
        let mut start = self.start_time.write().unwrap_or_else(|e| e.into_inner());
        *start = Some(Instant::now());
    }

    /// Clears a previous stop so the control can be reused.
    pub fn reset(&self) {
        self.stopped.store(false, Ordering::SeqCst);
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Reads the clock and raises the stop flag if the budget is spent.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }
        if let Some(limit) = self.time_limit {
            if self.elapsed() >= limit {
                self.stop();
                return true;
            }
        }
        false
    }

    #[inline]
    pub fn should_check_time(&self, nodes: u64) -> bool {
        nodes % self.check_interval == 0
    }

    /// Time since `start`, zero if never started.
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    pub fn remaining(&self) -> Option<Duration> {
        let limit = self.time_limit?;
        Some(limit.saturating_sub(self.elapsed()))
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
