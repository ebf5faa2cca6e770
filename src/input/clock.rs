use std::time::{Duration, Instant};

/// Decides when the next gravity tick is owed. Holds no game state; the main
/// loop turns each due tick into a `Command::Tick`.
#[derive(Debug, Clone)]
pub struct GravityClock {
    interval: Duration,
    last_tick: Instant,
}

impl GravityClock {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_tick: now,
        }
    }

    /// True at most once per elapsed interval; restarts the interval when it fires.
    pub fn due(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last_tick) >= self.interval {
            self.last_tick = now;
            return true;
        }
        false
    }

    pub fn reset(&mut self, now: Instant) {
        self.last_tick = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_interval() {
        let start = Instant::now();
        let mut clock = GravityClock::new(Duration::from_millis(100), start);

        assert!(!clock.due(start + Duration::from_millis(50)));
        assert!(clock.due(start + Duration::from_millis(100)));
        assert!(!clock.due(start + Duration::from_millis(150)));
        assert!(clock.due(start + Duration::from_millis(210)));
    }

    #[test]
    fn reset_pushes_the_next_tick_back() {
        let start = Instant::now();
        let mut clock = GravityClock::new(Duration::from_millis(100), start);

        clock.reset(start + Duration::from_millis(90));
        assert!(!clock.due(start + Duration::from_millis(120)));
        assert!(clock.due(start + Duration::from_millis(190)));
    }
}
