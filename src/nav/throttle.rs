use std::cell::Cell;

/// Monotonic time source in milliseconds.
///
/// The browser supplies `performance.now()`; tests substitute a manual
/// counter so throttle windows can be crossed without waiting on the clock.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// `performance.now()`-backed clock.
pub struct PerformanceClock;

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }
}

/// Leading-edge rate limiter.
///
/// The first `try_fire` in a window passes; every later call inside the
/// window is dropped, not queued, so state derived inside a window can be
/// stale until the next event arrives.
pub struct Throttle<C: Clock> {
    window_ms: f64,
    last_fired: Cell<Option<f64>>,
    clock: C,
}

impl<C: Clock> Throttle<C> {
    pub fn new(window_ms: u32, clock: C) -> Self {
        Self {
            window_ms: f64::from(window_ms),
            last_fired: Cell::new(None),
            clock,
        }
    }

    /// Returns true when the caller should run its handler now.
    pub fn try_fire(&self) -> bool {
        let now = self.clock.now_ms();
        match self.last_fired.get() {
            Some(last) if now - last < self.window_ms => false,
            _ => {
                self.last_fired.set(Some(now));
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::rc::Rc;

    #[derive(Clone)]
    struct FakeClock(Rc<Cell<f64>>);

    impl FakeClock {
        fn new() -> Self {
            Self(Rc::new(Cell::new(0.0)))
        }

        fn advance(&self, ms: f64) {
            self.0.set(self.0.get() + ms);
        }
    }

    impl Clock for FakeClock {
        fn now_ms(&self) -> f64 {
            self.0.get()
        }
    }

    #[test]
    fn first_call_fires_immediately() {
        let throttle = Throttle::new(16, FakeClock::new());
        assert_eq!(throttle.try_fire(), true);
    }

    #[test]
    fn calls_inside_the_window_are_dropped() {
        let clock = FakeClock::new();
        let throttle = Throttle::new(16, clock.clone());
        assert!(throttle.try_fire());

        clock.advance(5.0);
        assert_eq!(throttle.try_fire(), false);
        clock.advance(10.0);
        assert_eq!(throttle.try_fire(), false);
    }

    #[test]
    fn fires_again_once_the_window_has_passed() {
        let clock = FakeClock::new();
        let throttle = Throttle::new(16, clock.clone());
        assert!(throttle.try_fire());

        clock.advance(16.0);
        assert_eq!(throttle.try_fire(), true);
    }

    #[test]
    fn dropped_calls_do_not_extend_the_window() {
        let clock = FakeClock::new();
        let throttle = Throttle::new(100, clock.clone());
        assert!(throttle.try_fire());

        // A burst of dropped calls must not push the window forward.
        for _ in 0..10 {
            clock.advance(9.0);
            assert!(!throttle.try_fire());
        }
        clock.advance(10.0);
        assert_eq!(throttle.try_fire(), true);
    }

    #[test]
    fn windows_are_relative_to_the_last_fire() {
        let clock = FakeClock::new();
        let throttle = Throttle::new(50, clock.clone());
        assert!(throttle.try_fire());
        clock.advance(50.0);
        assert!(throttle.try_fire());
        clock.advance(49.0);
        assert_eq!(throttle.try_fire(), false);
    }
}
