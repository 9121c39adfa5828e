use std::rc::Rc;

use yew::prelude::*;

use crate::config;

/// Looping slide position plus autoplay state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    selected: usize,
    playing: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    Next,
    Prev,
    GoTo(usize),
    /// Autoplay period elapsed; ignored while paused or the page is hidden.
    Tick { document_hidden: bool },
    Play,
    Pause,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Carousel {
            len,
            selected: 0,
            playing: true,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.selected = (self.selected + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.selected = (self.selected + self.len - 1) % self.len;
        }
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.selected = index;
        }
    }

    pub fn apply(&mut self, action: CarouselAction) {
        match action {
            CarouselAction::Next => self.next(),
            CarouselAction::Prev => self.prev(),
            CarouselAction::GoTo(index) => self.go_to(index),
            CarouselAction::Tick { document_hidden } => {
                if self.playing && !document_hidden {
                    self.next();
                }
            }
            CarouselAction::Play => self.playing = true,
            CarouselAction::Pause => self.playing = false,
        }
    }
}

/// Maps a finished horizontal drag to a slide change. Dragging left
/// reveals the next slide; short drags count as clicks.
pub fn swipe_action(dx: f64) -> Option<CarouselAction> {
    if dx <= -config::CAROUSEL_SWIPE_PX {
        Some(CarouselAction::Next)
    } else if dx >= config::CAROUSEL_SWIPE_PX {
        Some(CarouselAction::Prev)
    } else {
        None
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wraps_in_both_directions() {
        let mut carousel = Carousel::new(4);
        carousel.prev();
        assert_eq!(carousel.selected(), 3);
        carousel.next();
        assert_eq!(carousel.selected(), 0);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut carousel = Carousel::new(4);
        carousel.go_to(2);
        carousel.go_to(9);
        assert_eq!(carousel.selected(), 2);
    }

    #[test]
    fn tick_advances_only_while_playing_and_visible() {
        let mut carousel = Carousel::new(3);

        carousel.apply(CarouselAction::Tick { document_hidden: false });
        assert_eq!(carousel.selected(), 1);

        carousel.apply(CarouselAction::Tick { document_hidden: true });
        assert_eq!(carousel.selected(), 1);

        carousel.apply(CarouselAction::Pause);
        carousel.apply(CarouselAction::Tick { document_hidden: false });
        assert_eq!(carousel.selected(), 1);
        assert!(!carousel.is_playing());

        carousel.apply(CarouselAction::Play);
        carousel.apply(CarouselAction::Tick { document_hidden: false });
        assert_eq!(carousel.selected(), 2);
    }

    #[test]
    fn manual_navigation_works_while_paused() {
        let mut carousel = Carousel::new(3);
        carousel.apply(CarouselAction::Pause);
        carousel.apply(CarouselAction::Next);
        carousel.apply(CarouselAction::Next);
        assert_eq!(carousel.selected(), 2);
    }

    #[test]
    fn drag_past_threshold_changes_slide() {
        assert_eq!(swipe_action(-120.0), Some(CarouselAction::Next));
        assert_eq!(swipe_action(config::CAROUSEL_SWIPE_PX), Some(CarouselAction::Prev));
        assert_eq!(swipe_action(12.0), None);
        assert_eq!(swipe_action(-49.0), None);

        let mut carousel = Carousel::new(4);
        if let Some(action) = swipe_action(80.0) {
            carousel.apply(action);
        }
        assert_eq!(carousel.selected(), 3);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.prev();
        carousel.apply(CarouselAction::Tick { document_hidden: false });
        assert_eq!(carousel.selected(), 0);
        assert_eq!(carousel.len(), 0);
    }
}
