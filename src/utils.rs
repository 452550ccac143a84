use std::time::{Duration, Instant};

/// Yields the time left until a deadline, or `None` forever when no timeout
/// is set, and ends once the deadline has passed.
///
/// Lets a condition-variable wait loop keep its overall deadline across
/// spurious wakeups.
#[derive(Clone, Debug)]
pub(crate) struct TimeoutIterator {
    start: Instant,
    timeout: Option<Duration>,
}

impl TimeoutIterator {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            start: Instant::now(),
            timeout,
        }
    }
}

impl Iterator for TimeoutIterator {
    type Item = Option<Duration>;
    fn next(&mut self) -> Option<Self::Item> {
        match self.timeout {
            Some(dur) => {
                let elapsed = self.start.elapsed();
                if dur > elapsed {
                    Some(Some(dur - elapsed))
                } else {
                    None
                }
            }
            None => Some(None),
        }
    }
}
