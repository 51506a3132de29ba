use std::time::{Duration, Instant};

/// What an armed timer does when it comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Show the gesture surface if the key is still held.
    RevealSurface,
    /// Delete once more and re-arm.
    RepeatDelete,
}

/// A deferred callback owned by the hold that armed it.
///
/// There is no global timer queue: the hold stores its `Timer` and dropping
/// the hold cancels it. The host calls `Controller::poll` with the current
/// time and due timers fire there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    kind: TimerKind,
    deadline: Instant,
}

impl Timer {
    pub fn arm(kind: TimerKind, now: Instant, delay: Duration) -> Self {
        Self {
            kind,
            deadline: now + delay,
        }
    }

    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Moves the deadline forward by `interval` from the previous deadline,
    /// so late polls catch up instead of drifting.
    pub fn rearm(&mut self, interval: Duration) {
        self.deadline += interval;
    }
}
