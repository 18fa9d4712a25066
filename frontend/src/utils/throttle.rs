/// Leading-edge throttle: the first call fires, later calls are dropped
/// until `interval_ms` has passed since the last one that fired.
///
/// Time is passed in by the caller (`Date::now()` in the browser) so the
/// rule can be checked without a clock.
#[derive(Clone, Debug)]
pub struct Throttle {
    interval_ms: f64,
    last_fired: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self { interval_ms, last_fired: None }
    }

    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last_fired {
            Some(last) if now_ms - last < self.interval_ms => false,
            _ => {
                self.last_fired = Some(now_ms);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_fires() {
        assert!(Throttle::new(100.0).ready(0.0));
    }

    #[test]
    fn drops_calls_inside_window() {
        let mut throttle = Throttle::new(100.0);
        assert!(throttle.ready(1_000.0));
        assert!(!throttle.ready(1_010.0));
        assert!(!throttle.ready(1_099.9));
        assert!(throttle.ready(1_100.0));
    }

    #[test]
    fn window_restarts_from_last_fired_call() {
        let mut throttle = Throttle::new(100.0);
        let fired: Vec<bool> = [0.0, 50.0, 120.0, 150.0, 219.0, 220.0]
            .into_iter()
            .map(|t| throttle.ready(t))
            .collect();
        assert_eq!(fired, vec![true, false, true, false, false, true]);
    }
}
