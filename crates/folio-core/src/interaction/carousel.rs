//! Paged carousel: a responsive grid of items stepped by tap, drag, wheel
//! or keyboard.

use std::time::Instant;

use super::{Direction, DragTracker, GridLayout, Nav, NavKey, Pagination, Transition, WheelAccumulator};

#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    layout: GridLayout,
    pagination: Pagination,
    drag: DragTracker,
    wheel: WheelAccumulator,
    last_direction: Option<Direction>,
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>, width: u32) -> Self {
        let layout = GridLayout::for_width(width);
        let mut pagination = Pagination::new(layout.per_page());
        pagination.set_total(items.len());
        Self {
            items,
            layout,
            pagination,
            drag: DragTracker::new(),
            wheel: WheelAccumulator::new(),
            last_direction: None,
        }
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.pagination.set_total(items.len());
        self.items = items;
    }

    /// Viewport changed: recompute the page size and reclamp.
    pub fn resize(&mut self, width: u32) {
        self.layout = GridLayout::for_width(width);
        self.pagination.set_per_page(self.layout.per_page());
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Items on the current page.
    pub fn visible(&self) -> &[T] {
        self.pagination.slice(&self.items)
    }

    /// `+1` / `-1` for the last committed step, `0` before any.
    pub fn direction_hint(&self) -> i8 {
        self.last_direction.map_or(0, Direction::sign)
    }

    pub fn apply(&mut self, nav: Nav) -> Option<Transition> {
        let transition = self.pagination.apply(nav)?;
        self.last_direction = Some(transition.direction);
        Some(transition)
    }

    /// Page-dot click.
    pub fn go_to(&mut self, page: usize) -> Option<Transition> {
        self.apply(Nav::SetIndex(page))
    }

    pub fn key(&mut self, key: NavKey) -> Option<Transition> {
        self.apply(key.to_nav(self.pagination.total_pages()))
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.drag.press(x, y);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.drag.move_to(x, y);
    }

    pub fn pointer_up(&mut self) -> Option<Transition> {
        let direction = self.drag.release()?;
        self.apply(Nav::Advance(direction))
    }

    pub fn pointer_cancel(&mut self) {
        self.drag.cancel();
    }

    pub fn wheel(&mut self, dx: f64, dy: f64, now: Instant) -> Option<Transition> {
        let direction = self.wheel.on_wheel(dx, dy, now)?;
        self.apply(Nav::Advance(direction))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn skills(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("skill-{i}")).collect()
    }

    #[test]
    fn drag_of_sixty_pixels_turns_one_page() {
        let mut c = Carousel::new(skills(30), 1280);
        c.pointer_down(500.0, 0.0);
        c.pointer_move(440.0, 0.0);
        let t = c.pointer_up().unwrap();
        assert_eq!((t.from, t.to), (0, 1));
        assert_eq!(c.direction_hint(), 1);
    }

    #[test]
    fn drag_of_ten_pixels_does_nothing() {
        let mut c = Carousel::new(skills(30), 1280);
        c.pointer_down(500.0, 0.0);
        c.pointer_move(490.0, 0.0);
        assert!(c.pointer_up().is_none());
        assert_eq!(c.pagination().page(), 0);
        assert_eq!(c.direction_hint(), 0);
    }

    #[test]
    fn wheel_burst_commits_exactly_one_page() {
        let t0 = Instant::now();
        let mut c = Carousel::new(skills(40), 1280);
        let mut steps = 0;
        for i in 0..7u64 {
            if c.wheel(10.0, 1.0, t0 + Duration::from_millis(i * 20)).is_some() {
                steps += 1;
            }
        }
        for i in 0..10u64 {
            if c.wheel(30.0, 0.0, t0 + Duration::from_millis(200 + i * 20)).is_some() {
                steps += 1;
            }
        }
        assert_eq!(steps, 1);
        assert_eq!(c.pagination().page(), 1);
    }

    #[test]
    fn resize_reclamps_page() {
        let mut c = Carousel::new(skills(13), 375);
        assert_eq!(c.pagination().total_pages(), 3);
        c.key(NavKey::End).unwrap();
        assert_eq!(c.visible(), &["skill-12".to_owned()]);

        c.resize(1280);
        assert_eq!(c.pagination().per_page(), 12);
        assert_eq!(c.pagination().page(), 1);
        assert_eq!(c.visible().len(), 1);
    }

    #[test]
    fn replacing_items_reclamps() {
        let mut c = Carousel::new(skills(20), 375);
        c.go_to(3).unwrap();
        c.set_items(skills(4));
        assert_eq!(c.pagination().page(), 0);
        assert_eq!(c.visible().len(), 4);
        assert!(c.go_to(1).is_none());
    }
}
