//! Fixed-cadence tick scheduling.
//!
//! The host loop may wake at any rate; [`FrameClock`] tells it how many
//! whole ticks of `tick_interval` have elapsed so the animation speed does
//! not depend on the display's refresh rate.

use std::time::{Duration, Instant};

/// Most ticks replayed after a stall (window drag, debugger pause, …).
pub const MAX_CATCH_UP: u32 = 4;

#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    last:     Instant,
    /// Time elapsed but not yet turned into ticks.
    carry:    Duration,
}

impl FrameClock {
    pub fn new(interval: Duration, now: Instant) -> Self {
        FrameClock {
            interval: interval.max(Duration::from_micros(1)),
            last:     now,
            carry:    Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of ticks due at `now`, at most [`MAX_CATCH_UP`].
    ///
    /// Leftover time is carried into the next call; time beyond the catch-up
    /// cap is dropped.  A `now` earlier than the previous call yields zero.
    pub fn advance(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now.max(self.last);
        self.carry += elapsed;

        let mut due = 0u32;
        while self.carry >= self.interval && due < MAX_CATCH_UP {
            self.carry -= self.interval;
            due += 1;
        }
        if due == MAX_CATCH_UP && self.carry >= self.interval {
            self.carry = Duration::ZERO;
        }
        due
    }

    /// Time left until the next tick is due, measured from the last call.
    pub fn until_next(&self) -> Duration {
        self.interval.saturating_sub(self.carry)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration { Duration::from_millis(n) }

    #[test]
    fn no_tick_before_interval() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(ms(10), t0);
        assert_eq!(clock.advance(t0 + ms(9)), 0);
        assert_eq!(clock.advance(t0 + ms(10)), 1);
    }

    #[test]
    fn remainder_carries_over() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(ms(10), t0);
        assert_eq!(clock.advance(t0 + ms(15)), 1);
        assert_eq!(clock.until_next(), ms(5));
        assert_eq!(clock.advance(t0 + ms(20)), 1);
    }

    #[test]
    fn one_second_at_sixty_hertz() {
        let interval = Duration::from_secs_f64(1.0 / 60.0);
        let t0 = Instant::now();
        let mut clock = FrameClock::new(interval, t0);
        let mut total = 0;
        for step in 1..=1000u64 {
            total += clock.advance(t0 + ms(step));
        }
        assert!((59..=60).contains(&total), "got {total}");
    }

    #[test]
    fn stall_is_capped() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(ms(10), t0);
        assert_eq!(clock.advance(t0 + Duration::from_secs(3)), MAX_CATCH_UP);
        assert_eq!(clock.advance(t0 + Duration::from_secs(3) + ms(1)), 0);
    }

    #[test]
    fn clock_going_backwards_is_harmless() {
        let t0 = Instant::now() + ms(100);
        let mut clock = FrameClock::new(ms(10), t0);
        assert_eq!(clock.advance(t0 - ms(50)), 0);
        assert_eq!(clock.advance(t0 + ms(10)), 1);
    }
}
