//! Progress timer driving the fill of the active story segment.

use log::debug;

/// Upper bound of [`ProgressTimer::permille`].
pub const PERMILLE_FULL: u16 = 1_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum TimerPhase {
    Idle,
    /// `elapsed_before_ms` is progress carried over from before a pause.
    Running {
        started_at_ms: u64,
        elapsed_before_ms: u32,
    },
    Paused {
        elapsed_ms: u32,
    },
    Completed,
}

/// Emitted by [`ProgressTimer::poll`] when a run reaches the end naturally.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimerCompletion {
    pub run: u32,
    pub at_ms: u64,
}

/// Fraction in `0..=1` advancing over a fixed duration.
///
/// Completion is only ever produced by [`poll`](Self::poll) on a running
/// timer, so a `pause` or `reset` that lands first cancels it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProgressTimer {
    duration_ms: u32,
    phase: TimerPhase,
    run: u32,
}

impl Default for ProgressTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressTimer {
    pub const fn new() -> Self {
        Self {
            duration_ms: 0,
            phase: TimerPhase::Idle,
            run: 0,
        }
    }

    /// Restarts from zero. A zero duration leaves the timer untouched.
    pub fn start(&mut self, duration_ms: u32, now_ms: u64) {
        if duration_ms == 0 {
            debug!("story-timer: ignored start with zero duration");
            return;
        }

        self.duration_ms = duration_ms;
        self.run = self.run.wrapping_add(1);
        self.phase = TimerPhase::Running {
            started_at_ms: now_ms,
            elapsed_before_ms: 0,
        };
    }

    pub fn pause(&mut self, now_ms: u64) {
        if let TimerPhase::Running { .. } = self.phase {
            self.phase = TimerPhase::Paused {
                elapsed_ms: self.elapsed_ms(now_ms),
            };
        }
    }

    /// Continues a paused run with whatever share of the duration is left.
    pub fn resume(&mut self, now_ms: u64) {
        if let TimerPhase::Paused { elapsed_ms } = self.phase {
            self.run = self.run.wrapping_add(1);
            self.phase = TimerPhase::Running {
                started_at_ms: now_ms,
                elapsed_before_ms: elapsed_ms,
            };
        }
    }

    pub fn reset(&mut self) {
        if self.phase != TimerPhase::Idle {
            self.run = self.run.wrapping_add(1);
        }
        self.phase = TimerPhase::Idle;
    }

    /// Reports natural completion once per run.
    pub fn poll(&mut self, now_ms: u64) -> Option<TimerCompletion> {
        let TimerPhase::Running { .. } = self.phase else {
            return None;
        };

        if self.elapsed_ms(now_ms) < self.duration_ms {
            return None;
        }

        self.phase = TimerPhase::Completed;
        Some(TimerCompletion {
            run: self.run,
            at_ms: now_ms,
        })
    }

    /// Wall-clock time at which the current run completes, if running.
    pub fn deadline_ms(&self) -> Option<u64> {
        match self.phase {
            TimerPhase::Running {
                started_at_ms,
                elapsed_before_ms,
            } => Some(
                started_at_ms + self.duration_ms.saturating_sub(elapsed_before_ms) as u64,
            ),
            _ => None,
        }
    }

    pub fn permille(&self, now_ms: u64) -> u16 {
        match self.phase {
            TimerPhase::Idle => 0,
            TimerPhase::Completed => PERMILLE_FULL,
            TimerPhase::Running { .. } | TimerPhase::Paused { .. } => {
                let duration = self.duration_ms.max(1) as u64;
                let elapsed = self.elapsed_ms(now_ms) as u64;
                ((elapsed * PERMILLE_FULL as u64) / duration).min(PERMILLE_FULL as u64) as u16
            }
        }
    }

    pub fn fraction(&self, now_ms: u64) -> f32 {
        self.permille(now_ms) as f32 / PERMILLE_FULL as f32
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, TimerPhase::Running { .. })
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.phase, TimerPhase::Paused { .. })
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.phase, TimerPhase::Completed)
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Increments on every start, resume and reset.
    pub fn run(&self) -> u32 {
        self.run
    }

    fn elapsed_ms(&self, now_ms: u64) -> u32 {
        match self.phase {
            TimerPhase::Idle => 0,
            TimerPhase::Completed => self.duration_ms,
            TimerPhase::Paused { elapsed_ms } => elapsed_ms,
            TimerPhase::Running {
                started_at_ms,
                elapsed_before_ms,
            } => {
                let since_start = now_ms.saturating_sub(started_at_ms);
                let since_start = since_start.min(u32::MAX as u64) as u32;
                elapsed_before_ms
                    .saturating_add(since_start)
                    .min(self.duration_ms)
            }
        }
    }
}
