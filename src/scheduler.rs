//! Deferred work
//!
//! The page has exactly one deferred job (the overlay fade), but it is
//! scheduled through a trait so tests can drive a simulated clock and the
//! renderer can read back when the job is due.

use std::time::Duration;

/// Jobs the page can defer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    FadeOverlay,
}

/// One-shot delayed callbacks. There is no cancellation.
pub trait Scheduler {
    fn schedule_once(&mut self, delay: Duration, task: Task);
}

/// A task waiting on the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    pub due: Duration,
    pub task: Task,
}

/// Simulated clock plus the one-shots registered against it
#[derive(Debug, Default)]
pub struct Timeline {
    now: Duration,
    pending: Vec<Scheduled>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the timeline started
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Tasks not yet fired, in registration order
    pub fn pending(&self) -> &[Scheduled] {
        &self.pending
    }

    /// When the first pending `task` fires, measured from the start
    pub fn due_at(&self, task: Task) -> Option<Duration> {
        self.pending
            .iter()
            .filter(|s| s.task == task)
            .map(|s| s.due)
            .min()
    }

    /// Move the clock forward and return what fired, earliest first
    pub fn advance(&mut self, by: Duration) -> Vec<Task> {
        self.now += by;
        let now = self.now;

        let mut fired: Vec<Scheduled> = Vec::new();
        self.pending.retain(|s| {
            if s.due <= now {
                fired.push(*s);
                false
            } else {
                true
            }
        });

        fired.sort_by_key(|s| s.due);
        fired.into_iter().map(|s| s.task).collect()
    }
}

impl Scheduler for Timeline {
    fn schedule_once(&mut self, delay: Duration, task: Task) {
        self.pending.push(Scheduled {
            due: self.now + delay,
            task,
        });
    }
}
