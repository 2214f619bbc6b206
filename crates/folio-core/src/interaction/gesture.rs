// Pointer drag and wheel input, reduced to at most one `Direction` per
// completed gesture. Both accumulators are plain state owned by the
// controller using them; time is passed in rather than read from a clock.

use std::time::{Duration, Instant};

use tracing::trace;

use super::Direction;

/// Minimum horizontal drag, in pixels, that commits a step.
pub const DRAG_THRESHOLD: f64 = 50.0;

/// Accumulated horizontal wheel delta that commits a step.
pub const WHEEL_THRESHOLD: f64 = 60.0;

/// Wheel input is ignored for this long after a committed step.
pub const WHEEL_COOLDOWN: Duration = Duration::from_millis(500);

/// Tracks one pointer drag from press to release.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    start: Option<(f64, f64)>,
    delta: (f64, f64),
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.start.is_some()
    }

    pub fn press(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
        self.delta = (0.0, 0.0);
    }

    /// Ignored unless a drag is in progress.
    pub fn move_to(&mut self, x: f64, y: f64) {
        if let Some((sx, sy)) = self.start {
            self.delta = (x - sx, y - sy);
        }
    }

    /// End the drag. A horizontal drag past the threshold steps opposite to
    /// finger travel: dragging left moves forward.
    pub fn release(&mut self) -> Option<Direction> {
        let (dx, dy) = self.delta;
        let was_dragging = self.start.is_some();
        self.cancel();

        if !was_dragging || dx.abs() <= DRAG_THRESHOLD || dx.abs() <= dy.abs() {
            return None;
        }
        Some(if dx < 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        })
    }

    /// Abort without committing (pointer left the surface, touch cancelled).
    pub fn cancel(&mut self) {
        self.start = None;
        self.delta = (0.0, 0.0);
    }
}

/// Sums horizontal wheel/trackpad deltas into discrete steps.
#[derive(Debug, Clone, Default)]
pub struct WheelAccumulator {
    accum_x: f64,
    cooldown_until: Option<Instant>,
}

impl WheelAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_cooldown(&self, now: Instant) -> bool {
        self.cooldown_until.is_some_and(|until| now < until)
    }

    /// Feed one wheel event observed at `now`.
    pub fn on_wheel(&mut self, dx: f64, dy: f64, now: Instant) -> Option<Direction> {
        if self.in_cooldown(now) {
            return None;
        }
        self.cooldown_until = None;

        if dx.abs() <= dy.abs() {
            return None;
        }

        self.accum_x += dx;
        if self.accum_x.abs() <= WHEEL_THRESHOLD {
            return None;
        }

        let direction = if self.accum_x > 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        };
        trace!(accum = self.accum_x, %direction, "wheel step committed");
        self.accum_x = 0.0;
        self.cooldown_until = Some(now + WHEEL_COOLDOWN);
        Some(direction)
    }

    pub fn reset(&mut self) {
        self.accum_x = 0.0;
        self.cooldown_until = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(dx: f64, dy: f64) -> Option<Direction> {
        let mut d = DragTracker::new();
        d.press(200.0, 100.0);
        d.move_to(200.0 + dx / 2.0, 100.0 + dy / 2.0);
        d.move_to(200.0 + dx, 100.0 + dy);
        d.release()
    }

    #[test]
    fn drag_left_past_threshold_moves_forward() {
        assert_eq!(drag(-60.0, 0.0), Some(Direction::Forward));
        assert_eq!(drag(60.0, 5.0), Some(Direction::Backward));
    }

    #[test]
    fn short_or_vertical_drag_does_nothing() {
        assert_eq!(drag(-10.0, 0.0), None);
        assert_eq!(drag(-50.0, 0.0), None);
        assert_eq!(drag(-80.0, 120.0), None);
    }

    #[test]
    fn release_always_resets() {
        let mut d = DragTracker::new();
        d.press(0.0, 0.0);
        d.move_to(-100.0, 0.0);
        assert!(d.release().is_some());
        assert!(!d.is_dragging());
        assert_eq!(d.release(), None);

        d.move_to(-100.0, 0.0);
        assert_eq!(d.release(), None);
    }

    #[test]
    fn wheel_commits_once_then_cools_down() {
        let t0 = Instant::now();
        let mut w = WheelAccumulator::new();

        assert_eq!(w.on_wheel(35.0, 0.0, t0), None);
        assert_eq!(
            w.on_wheel(35.0, 0.0, t0 + Duration::from_millis(10)),
            Some(Direction::Forward)
        );

        // Inside the window: even a large delta is ignored.
        assert_eq!(w.on_wheel(500.0, 0.0, t0 + Duration::from_millis(300)), None);
        assert!(w.in_cooldown(t0 + Duration::from_millis(509)));

        let after = t0 + Duration::from_millis(511);
        assert!(!w.in_cooldown(after));
        assert_eq!(w.on_wheel(-61.0, 0.0, after), Some(Direction::Backward));
    }

    #[test]
    fn vertical_dominant_wheel_is_ignored() {
        let now = Instant::now();
        let mut w = WheelAccumulator::new();
        assert_eq!(w.on_wheel(70.0, 90.0, now), None);
        assert_eq!(w.on_wheel(40.0, 0.0, now), None);
    }

    #[test]
    fn reset_clears_accumulator_and_window() {
        let now = Instant::now();
        let mut w = WheelAccumulator::new();
        w.on_wheel(61.0, 0.0, now);
        w.reset();
        assert!(!w.in_cooldown(now));
        assert_eq!(w.on_wheel(59.0, 0.0, now), None);
    }
}
