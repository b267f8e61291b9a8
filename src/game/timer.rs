use std::time::Duration;

/// Schedule of the repeating tick source.
///
/// The session only records what the cadence should be. Whoever drives the
/// clock watches [`TickTimer::generation`]: each change means any pending tick
/// is void and a fresh timer with [`TickTimer::period`] must replace it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickTimer {
    period: Option<Duration>,
    generation: u64,
}

impl TickTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) ticking every `period`
    pub fn arm(&mut self, period: Duration) {
        self.period = Some(period);
        self.generation += 1;
    }

    /// Stop ticking; a no-op when already stopped
    pub fn cancel(&mut self) {
        if self.period.take().is_some() {
            self.generation += 1;
        }
    }

    pub fn is_armed(&self) -> bool {
        self.period.is_some()
    }

    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
