//! Gravity timer - the cancellable descent scheduler
//!
//! Models the repeating descent tick as an explicit object instead of an
//! ambient timer callback: the session advances it with elapsed
//! milliseconds and it reports how many whole intervals passed. `stop`
//! and `reset` discard the accumulated remainder, so a pending tick can
//! never fire against paused, restarted, or finished state. Tests drive
//! it by passing elapsed time directly, with no wall clock involved.

#[derive(Debug, Clone)]
pub struct GravityTimer {
    interval_ms: u32,
    carry_ms: u32,
    running: bool,
}

impl GravityTimer {
    /// Create a started timer with the given interval
    pub fn new(interval_ms: u32) -> Self {
        assert!(interval_ms > 0);
        Self {
            interval_ms,
            carry_ms: 0,
            running: true,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn running(&self) -> bool {
        self.running
    }

    /// Advance by elapsed wall or simulated time; returns the number of
    /// whole intervals that elapsed. Returns 0 while stopped.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.running {
            return 0;
        }
        self.carry_ms += elapsed_ms;
        let ticks = self.carry_ms / self.interval_ms;
        self.carry_ms %= self.interval_ms;
        ticks
    }

    /// Suspend ticking and drop any partially accumulated interval.
    pub fn stop(&mut self) {
        self.running = false;
        self.carry_ms = 0;
    }

    /// Resume ticking from a fresh interval.
    pub fn start(&mut self) {
        self.running = true;
        self.carry_ms = 0;
    }

    /// Restart the current interval without changing the running state.
    pub fn reset(&mut self) {
        self.carry_ms = 0;
    }
}
