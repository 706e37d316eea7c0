//! Stepwise animation for displayed figures
//!
//! Each displayed number walks from its current value to a new target over a
//! fixed number of discrete steps spread across one second. The walk is
//! purely cosmetic: retargeting or cancelling mid-run never loses the settled
//! projection, and a rerun always starts from whatever is on screen.

use std::time::Duration;

/// Total time an animation run takes
pub const ANIMATION_DURATION: Duration = Duration::from_millis(1000);

/// Number of discrete display updates per run
pub const ANIMATION_STEPS: u32 = 20;

/// Interval between display updates
pub fn step_interval() -> Duration {
    ANIMATION_DURATION / ANIMATION_STEPS
}

/// Lifecycle of one animated figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    /// Holding a value with no run pending
    Idle,
    /// Stepping toward a target
    Animating,
    /// Landed on the target this run
    Settled,
}

/// One displayed number stepping toward a target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueAnimation {
    start: f64,
    target: f64,
    steps_done: u32,
    phase: AnimationPhase,
}

impl ValueAnimation {
    /// A figure holding `value` with no run pending
    pub fn idle(value: f64) -> Self {
        Self {
            start: value,
            target: value,
            steps_done: 0,
            phase: AnimationPhase::Idle,
        }
    }

    /// Start a run from the currently displayed value toward `target`,
    /// cancelling any run already in flight
    pub fn retarget(&mut self, target: f64) {
        self.start = self.current();
        self.target = target;
        self.steps_done = 0;
        self.phase = AnimationPhase::Animating;
    }

    /// Freeze at the currently displayed value
    pub fn cancel(&mut self) {
        let held = self.current();
        self.start = held;
        self.target = held;
        self.steps_done = 0;
        self.phase = AnimationPhase::Idle;
    }

    /// Advance one display step and return the value to show
    pub fn tick(&mut self) -> f64 {
        if self.phase != AnimationPhase::Animating {
            return self.current();
        }

        self.steps_done += 1;
        if self.steps_done >= ANIMATION_STEPS {
            // land exactly on the target, not on the accumulated step sum
            self.start = self.target;
            self.steps_done = 0;
            self.phase = AnimationPhase::Settled;
        }
        self.current()
    }

    /// The value currently on screen
    pub fn current(&self) -> f64 {
        match self.phase {
            AnimationPhase::Animating => {
                let progress = f64::from(self.steps_done) / f64::from(ANIMATION_STEPS);
                self.start + (self.target - self.start) * progress
            }
            AnimationPhase::Idle | AnimationPhase::Settled => self.target,
        }
    }

    /// The value this run is heading toward
    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// Whether a run is currently in flight
    pub fn is_animating(&self) -> bool {
        self.phase == AnimationPhase::Animating
    }
}
