#![allow(dead_code)]

pub mod mock_sink;
pub mod mock_translator;

use std::time::{Duration, Instant};

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// A fixed starting time plus an offset, so tests read as timelines.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    start: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn at(&self, millis: u64) -> Instant {
        self.start + ms(millis)
    }
}
