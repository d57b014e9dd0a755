use std::time::{Duration, Instant};

use crate::game::GamePhase;

/// Fixed-interval tick source for the step function.
///
/// Fires only while the game is running. The first poll that observes the
/// running phase after any other phase re-arms instead of firing, so a start
/// or resume always waits one full interval before the next step.
#[derive(Debug, Clone, Copy)]
pub struct TickScheduler {
    interval: Duration,
    last_fire: Instant,
    last_phase: GamePhase,
}

impl TickScheduler {
    #[must_use]
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_fire: now,
            last_phase: GamePhase::NotStarted,
        }
    }

    /// Returns true when a tick is due at `now`, at most once per call.
    pub fn poll(&mut self, now: Instant, phase: GamePhase) -> bool {
        let entered_running = self.last_phase != GamePhase::Running;
        self.last_phase = phase;

        if phase != GamePhase::Running || entered_running {
            self.last_fire = now;
            return false;
        }

        if now.saturating_duration_since(self.last_fire) < self.interval {
            return false;
        }

        self.last_fire = now;
        true
    }

    /// Time left before the next tick could fire; used as the input poll
    /// timeout.
    #[must_use]
    pub fn time_until_next(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.last_fire))
    }
}
