//! Nested wall-clock timing

use std::time::{Duration, Instant};

/// Stack of start instants for timing nested operations.
///
/// `push` marks the start of a section, `pop` returns the elapsed time of
/// the most recent unmatched `push`. An explicit value rather than ambient
/// process state, so independent call sites cannot interleave.
#[derive(Debug, Default)]
pub struct TimerStack {
    starts: Vec<Instant>,
}

impl TimerStack {
    /// Create an empty timer stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start timing a section.
    pub fn push(&mut self) {
        self.starts.push(Instant::now());
    }

    /// Elapsed time since the matching `push`, or zero when nothing was
    /// pushed.
    pub fn pop(&mut self) -> Duration {
        self.starts
            .pop()
            .map(|start| start.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Number of sections currently being timed.
    pub fn depth(&self) -> usize {
        self.starts.len()
    }
}
