// Selection over an ordered media sequence (project screenshots, hero
// images). The sequence is sorted on construction and the selection is
// reset whenever replacement data leaves it out of range.

use folio_api::types::ProjectMedia;

use super::{DragTracker, Nav, NavKey, Transition, reduce};
use crate::derive::{Ordered, main_image, sort_media};

#[derive(Debug, Clone)]
pub struct Gallery<M> {
    media: Vec<M>,
    active: usize,
    drag: DragTracker,
}

impl<M: Ordered + Clone> Gallery<M> {
    pub fn new(media: &[M]) -> Self {
        Self {
            media: sort_media(media),
            active: 0,
            drag: DragTracker::new(),
        }
    }

    /// Replace the media, e.g. after the owning resource reloaded.
    pub fn set_media(&mut self, media: &[M]) {
        self.media = sort_media(media);
        if self.active >= self.media.len() {
            self.active = 0;
        }
    }
}

impl<M> Gallery<M> {
    pub fn media(&self) -> &[M] {
        &self.media
    }

    pub fn len(&self) -> usize {
        self.media.len()
    }

    pub fn is_empty(&self) -> bool {
        self.media.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> Option<&M> {
        self.media.get(self.active)
    }

    pub fn apply(&mut self, nav: Nav) -> Option<Transition> {
        let transition = reduce(self.active, self.media.len(), nav)?;
        self.active = transition.to;
        Some(transition)
    }

    /// Thumbnail click.
    pub fn select(&mut self, index: usize) -> Option<Transition> {
        self.apply(Nav::SetIndex(index))
    }

    pub fn key(&mut self, key: NavKey) -> Option<Transition> {
        self.apply(key.to_nav(self.media.len()))
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
}

impl Gallery<ProjectMedia> {
    /// URL of the selected image, or the placeholder.
    pub fn active_image(&self) -> &str {
        main_image(&self.media, self.active)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::derive::PLACEHOLDER_IMAGE;
    use crate::interaction::Direction;

    fn media(id: i64, order: i64) -> ProjectMedia {
        ProjectMedia {
            id,
            image: Some(format!("/m/{id}.png")),
            order: Some(order),
        }
    }

    #[test]
    fn starts_on_lowest_order() {
        let gallery = Gallery::new(&[media(1, 3), media(2, 1), media(3, 2)]);
        assert_eq!(gallery.active().unwrap().id, 2);
        assert_eq!(gallery.active_image(), "/m/2.png");
    }

    #[test]
    fn empty_gallery_shows_placeholder() {
        let mut gallery: Gallery<ProjectMedia> = Gallery::new(&[]);
        assert!(gallery.active().is_none());
        assert_eq!(gallery.active_image(), PLACEHOLDER_IMAGE);
        assert!(gallery.key(NavKey::Right).is_none());
    }

    #[test]
    fn select_and_keys_stay_in_bounds() {
        let mut gallery = Gallery::new(&[media(1, 0), media(2, 1), media(3, 2)]);
        assert!(gallery.select(7).is_none());
        let t = gallery.select(2).unwrap();
        assert_eq!(t.direction, Direction::Forward);
        assert!(gallery.key(NavKey::Right).is_none());
        gallery.key(NavKey::Home).unwrap();
        assert_eq!(gallery.active_index(), 0);
    }

    #[test]
    fn shrinking_media_resets_selection() {
        let mut gallery = Gallery::new(&[media(1, 0), media(2, 1), media(3, 2)]);
        gallery.select(2).unwrap();
        gallery.set_media(&[media(9, 0)]);
        assert_eq!(gallery.active_index(), 0);
        assert_eq!(gallery.active().unwrap().id, 9);
    }

    #[test]
    fn swipe_advances() {
        let mut gallery = Gallery::new(&[media(1, 0), media(2, 1)]);
        gallery.pointer_down(300.0, 10.0);
        gallery.pointer_move(200.0, 12.0);
        assert_eq!(gallery.pointer_up().unwrap().to, 1);
    }
}
