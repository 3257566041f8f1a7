use std::time::{Duration, Instant};

/// decides when a search should stop. Checked between two node expansions.
pub trait StoppingCriterion {
    /// true iff the search should stop
    fn is_finished(&self) -> bool;
}

/// stops once a wall-clock budget (measured from its creation) is exceeded
#[derive(Debug, Clone)]
pub struct TimeStoppingCriterion {
    /// instant the criterion was created
    start: Instant,
    /// time budget
    max_time: Duration,
}

impl TimeStoppingCriterion {
    /// creates a criterion with a budget of t seconds (negative or NaN values mean 0)
    pub fn new(t:f64) -> Self {
        let max_time = if t.is_finite() && t > 0. { Duration::from_secs_f64(t) } else { Duration::ZERO };
        Self { start: Instant::now(), max_time }
    }

    /// time elapsed since the creation of the criterion
    pub fn elapsed(&self) -> Duration { self.start.elapsed() }
}

impl StoppingCriterion for TimeStoppingCriterion {
    fn is_finished(&self) -> bool { self.start.elapsed() > self.max_time }
}

/// never stops (the search runs until the search space is exhausted)
#[derive(Debug, Clone, Default)]
pub struct NeverStoppingCriterion {}

impl StoppingCriterion for NeverStoppingCriterion {
    fn is_finished(&self) -> bool { false }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_budget_is_finished() {
        let stop = TimeStoppingCriterion::new(0.);
        std::thread::sleep(Duration::from_millis(1));
        assert!(stop.is_finished());
    }

    #[test]
    fn test_large_budget_is_not_finished() {
        assert!(!TimeStoppingCriterion::new(3600.).is_finished());
        assert!(!NeverStoppingCriterion::default().is_finished());
    }
}
