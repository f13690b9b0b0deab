use std::time::{Duration, Instant};

/// Paces frames so that consecutive calls to [`Sleeper::sleep`] are at least
/// `target_delta_time` apart.
pub struct Sleeper {
    pub target_delta_time: Duration,
    last_instant: Instant,
}

impl Sleeper {
    pub fn new(target_delta_time: Duration) -> Self {
        Self {
            target_delta_time,
            last_instant: Instant::now(),
        }
    }

    /// Returns whether any time was actually slept.
    pub fn sleep(&mut self) -> bool {
        let remaining = self
            .target_delta_time
            .saturating_sub(self.last_instant.elapsed());

        let slept = !remaining.is_zero();
        if slept {
            spin_sleep::sleep(remaining);
        }

        self.last_instant = Instant::now();
        slept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_interval_never_sleeps() {
        let mut sleeper = Sleeper::new(Duration::ZERO);
        assert!(!sleeper.sleep());
        assert!(!sleeper.sleep());
    }

    #[test]
    fn waits_out_the_interval() {
        let interval = Duration::from_millis(20);
        let mut sleeper = Sleeper::new(interval);

        let start = Instant::now();
        sleeper.sleep();
        sleeper.sleep();

        assert!(start.elapsed() >= interval + interval / 2);
    }

    #[test]
    fn late_frames_do_not_sleep() {
        let mut sleeper = Sleeper::new(Duration::from_millis(5));
        std::thread::sleep(Duration::from_millis(10));
        assert!(!sleeper.sleep());
    }
}
