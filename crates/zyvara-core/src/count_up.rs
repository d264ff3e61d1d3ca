#![forbid(unsafe_code)]

//! Stepped counter for the "events hosted" figure on the about page.

use web_time::Duration;

/// Counter parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUpConfig {
    pub start: u32,
    pub end: u32,
    pub step: u32,
    pub interval: Duration,
}

impl Default for CountUpConfig {
    fn default() -> Self {
        Self {
            start: 0,
            end: 500,
            step: 10,
            interval: Duration::from_millis(20),
        }
    }
}

/// Counts from `start` to `end` in `step` increments, one per `interval`.
///
/// Never overshoots `end`. Partial intervals carry over between ticks.
#[derive(Debug, Clone)]
pub struct CountUp {
    value: u32,
    carry: Duration,
    config: CountUpConfig,
}

impl CountUp {
    #[must_use]
    pub fn new(config: CountUpConfig) -> Self {
        Self {
            value: config.start.min(config.end),
            carry: Duration::ZERO,
            config,
        }
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.value >= self.config.end
    }

    /// Advance by `elapsed` wall time. Returns the current value.
    pub fn tick(&mut self, elapsed: Duration) -> u32 {
        if self.is_finished() {
            return self.value;
        }
        if self.config.interval.is_zero() || self.config.step == 0 {
            // Degenerate config: jump to the end rather than spin.
            self.value = self.config.end;
            return self.value;
        }

        self.carry = self.carry.saturating_add(elapsed);
        let interval = self.config.interval.as_nanos();
        let steps = self.carry.as_nanos() / interval;
        let consumed = interval * steps;
        self.carry = Duration::from_nanos((self.carry.as_nanos() - consumed) as u64);

        let gained = u64::try_from(steps)
            .unwrap_or(u64::MAX)
            .saturating_mul(u64::from(self.config.step));
        let next = u64::from(self.value).saturating_add(gained);
        self.value = next.min(u64::from(self.config.end)) as u32;
        self.value
    }

    /// Jump straight to the final value.
    pub fn finish(&mut self) {
        self.value = self.config.end;
        self.carry = Duration::ZERO;
    }
}

impl Default for CountUp {
    fn default() -> Self {
        Self::new(CountUpConfig::default())
    }
}
