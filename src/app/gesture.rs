//! Horizontal scroll gesture detection for workspace switching.
//!
//! A trackpad swipe arrives as a burst of scroll events. Only the first event
//! of a burst whose horizontal delta is large enough counts; the rest of the
//! burst is swallowed by the interval check so one swipe moves one workspace.

use std::time::Duration;

/// Default minimum absolute horizontal delta for a scroll to count.
pub const DEFAULT_DELTA_THRESHOLD: f64 = 20.0;

/// Default minimum time between two accepted gestures.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

/// Tracks accepted scroll gestures and maps them to a neighbouring workspace.
#[derive(Debug, Clone)]
pub struct ScrollGesture {
    delta_threshold: f64,
    interval: Duration,
    last_accepted: Option<Duration>,
}

impl Default for ScrollGesture {
    fn default() -> Self {
        Self::new(DEFAULT_DELTA_THRESHOLD, DEFAULT_INTERVAL)
    }
}

impl ScrollGesture {
    #[must_use]
    pub const fn new(delta_threshold: f64, interval: Duration) -> Self {
        Self {
            delta_threshold,
            interval,
            last_accepted: None,
        }
    }

    /// Feeds one scroll event and returns the workspace index to switch to.
    ///
    /// `at` is a monotonic timestamp (time since some fixed origin). A positive
    /// `delta_x` swipes towards the previous workspace, a negative one towards
    /// the next. A gesture at either end of the strip is still accepted (and
    /// starts the interval) but yields no target.
    pub fn on_scroll(&mut self, delta_x: f64, at: Duration, current: usize, count: usize) -> Option<usize> {
        let is_new_gesture = self
            .last_accepted
            .map_or(true, |last| at.saturating_sub(last) > self.interval);

        if delta_x.abs() <= self.delta_threshold || !is_new_gesture {
            return None;
        }
        self.last_accepted = Some(at);

        let target = if delta_x > 0.0 && current > 0 {
            Some(current - 1)
        } else if delta_x < 0.0 && current + 1 < count {
            Some(current + 1)
        } else {
            None
        };

        tracing::trace!(delta_x, current, target = ?target, "scroll gesture accepted");
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn small_deltas_are_ignored() {
        let mut gesture = ScrollGesture::default();
        assert_eq!(gesture.on_scroll(15.0, ms(1000), 1, 3), None);
        assert_eq!(gesture.on_scroll(-20.0, ms(1000), 1, 3), None);
    }

    #[test]
    fn swipe_direction_picks_neighbour() {
        let mut gesture = ScrollGesture::default();
        assert_eq!(gesture.on_scroll(30.0, ms(1000), 1, 3), Some(0));
        assert_eq!(gesture.on_scroll(-30.0, ms(2000), 1, 3), Some(2));
    }

    #[test]
    fn events_within_interval_are_swallowed() {
        let mut gesture = ScrollGesture::default();
        assert_eq!(gesture.on_scroll(-40.0, ms(1000), 0, 3), Some(1));
        assert_eq!(gesture.on_scroll(-40.0, ms(1300), 1, 3), None);
        assert_eq!(gesture.on_scroll(-40.0, ms(1501), 1, 3), Some(2));
    }

    #[test]
    fn swipe_past_the_ends_yields_nothing_but_starts_interval() {
        let mut gesture = ScrollGesture::default();
        assert_eq!(gesture.on_scroll(40.0, ms(1000), 0, 3), None);
        assert_eq!(gesture.on_scroll(-40.0, ms(1200), 0, 3), None);
        assert_eq!(gesture.on_scroll(-40.0, ms(1600), 0, 3), Some(1));
    }

    #[test]
    fn ignored_small_deltas_do_not_restart_interval() {
        let mut gesture = ScrollGesture::new(20.0, ms(500));
        assert_eq!(gesture.on_scroll(-40.0, ms(0), 0, 3), Some(1));
        assert_eq!(gesture.on_scroll(-5.0, ms(400), 1, 3), None);
        assert_eq!(gesture.on_scroll(-40.0, ms(600), 1, 3), Some(2));
    }
}
