// Page index over a list whose length and page size both change at
// runtime (data arrives, viewport resizes). The page is reclamped on every
// change so it always addresses an existing page.

use super::{Nav, NavKey, Transition, reduce};
use crate::derive::paginate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    per_page: usize,
    total_items: usize,
}

impl Pagination {
    /// A zero `per_page` is treated as 1.
    pub fn new(per_page: usize) -> Self {
        Self {
            page: 0,
            per_page: per_page.max(1),
            total_items: 0,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// `ceil(total_items / per_page)`; zero for an empty list.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.per_page)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages()
    }

    pub fn set_total(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.clamp();
    }

    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
        self.clamp();
    }

    fn clamp(&mut self) {
        let last = self.total_pages().max(1) - 1;
        self.page = self.page.min(last);
    }

    pub fn apply(&mut self, nav: Nav) -> Option<Transition> {
        let transition = reduce(self.page, self.total_pages(), nav)?;
        self.page = transition.to;
        Some(transition)
    }

    pub fn key(&mut self, key: NavKey) -> Option<Transition> {
        self.apply(key.to_nav(self.total_pages()))
    }

    /// The current page's items.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        paginate(items, self.page, self.per_page)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::interaction::Direction;
    use proptest::prelude::*;

    #[test]
    fn total_pages_rounds_up() {
        let mut p = Pagination::new(4);
        assert_eq!(p.total_pages(), 0);
        p.set_total(9);
        assert_eq!(p.total_pages(), 3);
    }

    #[test]
    fn shrinking_total_reclamps_page() {
        let mut p = Pagination::new(4);
        p.set_total(20);
        p.apply(Nav::SetIndex(4)).unwrap();
        p.set_total(6);
        assert_eq!(p.page(), 1);
        p.set_total(0);
        assert_eq!(p.page(), 0);
    }

    #[test]
    fn growing_per_page_reclamps_page() {
        let mut p = Pagination::new(2);
        p.set_total(10);
        p.key(NavKey::End).unwrap();
        assert_eq!(p.page(), 4);
        p.set_per_page(6);
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn steps_do_not_wrap() {
        let mut p = Pagination::new(3);
        p.set_total(6);
        assert!(p.apply(Nav::Advance(Direction::Backward)).is_none());
        assert!(p.apply(Nav::Advance(Direction::Forward)).is_some());
        assert!(p.apply(Nav::Advance(Direction::Forward)).is_none());
        assert_eq!(p.page(), 1);
        assert!(p.has_prev());
        assert!(!p.has_next());
    }

    #[test]
    fn slice_returns_current_page() {
        let items: Vec<u32> = (0..7).collect();
        let mut p = Pagination::new(3);
        p.set_total(items.len());
        p.key(NavKey::End).unwrap();
        assert_eq!(p.slice(&items), &[6]);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Total(usize),
        PerPage(usize),
        Step(bool),
        Jump(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..200).prop_map(Op::Total),
            (0usize..20).prop_map(Op::PerPage),
            any::<bool>().prop_map(Op::Step),
            (0usize..60).prop_map(Op::Jump),
        ]
    }

    proptest! {
        #[test]
        fn page_always_in_range(ops in proptest::collection::vec(op(), 0..64)) {
            let mut p = Pagination::new(6);
            for op in ops {
                match op {
                    Op::Total(n) => p.set_total(n),
                    Op::PerPage(n) => p.set_per_page(n),
                    Op::Step(fwd) => {
                        let dir = if fwd { Direction::Forward } else { Direction::Backward };
                        p.apply(Nav::Advance(dir));
                    }
                    Op::Jump(n) => {
                        p.apply(Nav::SetIndex(n));
                    }
                }
                let bound = p.total_items().div_ceil(p.per_page()).max(1);
                prop_assert!(p.page() < bound);
                prop_assert!(p.per_page() > 0);
            }
        }
    }
}
