use std::time::{Duration, Instant};

/// A scheduled, repeating tick.
///
/// Holding a `Ticker` means a tick is pending; dropping it cancels the
/// schedule. There is no way to fire a dropped ticker.
#[derive(Debug)]
pub struct Ticker {
    last_tick: Instant,
    interval: Duration,
}

impl Ticker {
    /// Schedule a new ticker.
    ///
    /// # Arguments
    ///
    /// * `hz` - The rate of the ticker in hertz. Zero is treated as one.
    /// * `now` - The instant the first interval is measured from.
    pub fn new(hz: u32, now: Instant) -> Self {
        Self {
            last_tick: now,
            interval: Self::interval_for(hz),
        }
    }

    /// The delay between two ticks at the given rate.
    pub fn interval_for(hz: u32) -> Duration {
        Duration::from_secs(1) / hz.max(1)
    }

    /// Trigger a tick if the interval has passed since the last tick.
    ///
    /// At most one tick fires per call and the next interval is measured
    /// from `now`, so a slow host loop slows the ticker down rather than
    /// producing bursts.
    ///
    /// Will return true if a tick was triggered.
    pub fn tick(&mut self, now: Instant) -> bool {
        let should_trigger = now.saturating_duration_since(self.last_tick) >= self.interval;

        if should_trigger {
            self.last_tick = now;
        }

        should_trigger
    }

    /// The instant the next tick becomes due.
    pub fn deadline(&self) -> Instant {
        self.last_tick + self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_for() {
        assert_eq!(Ticker::interval_for(1000), Duration::from_millis(1));
        assert_eq!(Ticker::interval_for(100), Duration::from_millis(10));
        assert_eq!(Ticker::interval_for(0), Duration::from_secs(1));
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let start = Instant::now();
        let mut ticker = Ticker::new(100, start);

        assert!(!ticker.tick(start));
        assert!(!ticker.tick(start + Duration::from_millis(9)));
        assert!(ticker.tick(start + Duration::from_millis(10)));
    }

    #[test]
    fn test_tick_rearms_from_now() {
        let start = Instant::now();
        let mut ticker = Ticker::new(100, start);

        // A late poll fires once, then the next interval starts over.
        let late = start + Duration::from_millis(55);
        assert!(ticker.tick(late));
        assert!(!ticker.tick(late + Duration::from_millis(5)));
        assert!(ticker.tick(late + Duration::from_millis(10)));
        assert_eq!(ticker.deadline(), late + Duration::from_millis(20));
    }

    #[test]
    fn test_tick_before_start() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut ticker = Ticker::new(1000, start);

        assert!(!ticker.tick(Instant::now()));
    }
}
