use std::time::Duration;

/// Progress of a retry loop, handed to every policy decision.
///
/// The default value is the status before the first attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RetryStatus {
    /// Number of retries performed so far (0 on the first attempt).
    pub iter_number: u32,
    /// Sum of every delay slept so far.
    pub cumulative_delay: Duration,
    /// The delay slept before the current attempt, if any.
    pub previous_delay: Option<Duration>,
}

impl RetryStatus {
    /// The status after sleeping `delay` and starting another attempt.
    #[must_use]
    pub const fn advance(self, delay: Duration) -> Self {
        Self {
            iter_number: self.iter_number.saturating_add(1),
            cumulative_delay: self.cumulative_delay.saturating_add(delay),
            previous_delay: Some(delay),
        }
    }
}
