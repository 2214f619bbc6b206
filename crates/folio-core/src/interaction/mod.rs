//! Index navigation over paged lists and media galleries.
//!
//! Every input source (tap, drag, wheel, keyboard) is normalized into a
//! [`Nav`] message, and [`reduce`] is the only place an index changes.

pub mod carousel;
pub mod gallery;
pub mod gesture;
pub mod layout;
pub mod pagination;

pub use carousel::Carousel;
pub use gallery::Gallery;
pub use gesture::{DRAG_THRESHOLD, DragTracker, WHEEL_COOLDOWN, WHEEL_THRESHOLD, WheelAccumulator};
pub use layout::GridLayout;
pub use pagination::Pagination;

/// Direction of travel through an indexed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    /// `+1` forward, `-1` backward. Used as an animation hint.
    pub fn sign(self) -> i8 {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }
}

/// A navigation request from any input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Advance(Direction),
    SetIndex(usize),
}

/// Keyboard navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
    Home,
    End,
}

impl NavKey {
    pub fn to_nav(self, len: usize) -> Nav {
        match self {
            Self::Left => Nav::Advance(Direction::Backward),
            Self::Right => Nav::Advance(Direction::Forward),
            Self::Home => Nav::SetIndex(0),
            Self::End => Nav::SetIndex(len.saturating_sub(1)),
        }
    }
}

/// A committed index change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
}

/// Apply `nav` to `index` within `0..len`.
///
/// Returns `None` when nothing changes: empty sequence, stepping past either
/// end, an out-of-range target, or a target equal to the current index.
pub fn reduce(index: usize, len: usize, nav: Nav) -> Option<Transition> {
    let to = match nav {
        Nav::Advance(Direction::Forward) => index.checked_add(1)?,
        Nav::Advance(Direction::Backward) => index.checked_sub(1)?,
        Nav::SetIndex(n) => n,
    };
    if to >= len || to == index {
        return None;
    }
    let direction = if to > index {
        Direction::Forward
    } else {
        Direction::Backward
    };
    Some(Transition {
        from: index,
        to,
        direction,
    })
}
