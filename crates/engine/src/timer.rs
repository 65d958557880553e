//! Gravity timer - counts ticks up to a threshold

use crate::types::GRAVITY_TICKS;

/// Fixed-cadence gravity trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GravityTimer {
    counter: u32,
    threshold: u32,
    due: bool,
}

impl Default for GravityTimer {
    fn default() -> Self {
        Self::new(GRAVITY_TICKS)
    }
}

impl GravityTimer {
    pub fn new(threshold: u32) -> Self {
        debug_assert!(threshold > 0);
        Self {
            counter: 0,
            threshold,
            due: false,
        }
    }

    /// Count one tick. On reaching the threshold gravity becomes due and the
    /// counter starts over.
    pub fn tick(&mut self) -> bool {
        self.counter += 1;
        if self.counter >= self.threshold {
            self.counter = 0;
            self.due = true;
        }
        self.due
    }

    pub fn is_due(&self) -> bool {
        self.due
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Zero the counter and drop any pending gravity step.
    pub fn reset(&mut self) {
        self.counter = 0;
        self.due = false;
    }
}
