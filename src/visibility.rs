use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    /// Intersecting, but below the threshold. Sections taller than the
    /// viewport divided by the threshold never get past this state.
    Partial,
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityChange {
    Entered,
    Left,
}

/// Edge-triggered view of an element's intersection. Starts out visible,
/// so the first report below the threshold counts as leaving.
///
/// Dropping under the threshold leaves once. A section that only ever
/// reached `Partial` leaves when it stops intersecting altogether.
#[derive(Clone, Debug)]
pub struct VisibilityTracker {
    state: Visibility,
    threshold: f64,
    left_reported: bool,
}

impl VisibilityTracker {
    pub fn new(threshold: f64) -> Self {
        VisibilityTracker {
            state: Visibility::Visible,
            threshold,
            left_reported: false,
        }
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn observe(&mut self, intersecting: bool, ratio: f64) -> Option<VisibilityChange> {
        let next = if !intersecting {
            Visibility::Hidden
        } else if ratio >= self.threshold {
            Visibility::Visible
        } else {
            Visibility::Partial
        };
        if next == self.state {
            return None;
        }
        let previous = std::mem::replace(&mut self.state, next);

        match (previous, next) {
            (Visibility::Hidden, _) => {
                self.left_reported = false;
                Some(VisibilityChange::Entered)
            }
            (Visibility::Visible, _) => {
                self.left_reported = true;
                Some(VisibilityChange::Left)
            }
            (Visibility::Partial, Visibility::Visible) => {
                std::mem::take(&mut self.left_reported).then_some(VisibilityChange::Entered)
            }
            (Visibility::Partial, _) => {
                (!std::mem::replace(&mut self.left_reported, true)).then_some(VisibilityChange::Left)
            }
        }
    }
}

struct SectionObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array)>,
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe(element: &Element, on_leave: Callback<()>) -> Option<SectionObserver> {
    let mut tracker = VisibilityTracker::new(config::VISIBILITY_THRESHOLD);
    let callback = Closure::wrap(Box::new(move |entries: Array| {
        let Some(entry) = entries
            .iter()
            .last()
            .and_then(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
        else {
            return;
        };
        let change = tracker.observe(entry.is_intersecting(), entry.intersection_ratio());
        if change == Some(VisibilityChange::Left) {
            on_leave.emit(());
        }
    }) as Box<dyn FnMut(Array)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::VISIBILITY_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(element);

    Some(SectionObserver {
        observer,
        _callback: callback,
    })
}

/// Emits `on_leave` each time the referenced element scrolls out of view.
#[hook]
pub fn use_leave_viewport(node: NodeRef, on_leave: Callback<()>) {
    use_effect_with_deps(
        move |node: &NodeRef| {
            let observer = node
                .cast::<Element>()
                .and_then(|element| observe(&element, on_leave));
            move || drop(observer)
        },
        node,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn leaving_fires_once() {
        let mut tracker = VisibilityTracker::new(0.2);

        assert_eq!(tracker.observe(true, 0.9), None);
        assert_eq!(tracker.observe(true, 0.1), Some(VisibilityChange::Left));
        assert_eq!(tracker.observe(true, 0.05), None);
        assert_eq!(tracker.observe(false, 0.0), None);
        assert_eq!(tracker.state(), Visibility::Hidden);
    }

    #[test]
    fn returning_reports_entered_then_can_leave_again() {
        let mut tracker = VisibilityTracker::new(0.2);

        assert_eq!(tracker.observe(false, 0.0), Some(VisibilityChange::Left));
        assert_eq!(tracker.observe(true, 0.5), Some(VisibilityChange::Entered));
        assert_eq!(tracker.observe(true, 0.19), Some(VisibilityChange::Left));
    }

    #[test]
    fn threshold_itself_counts_as_visible() {
        let mut tracker = VisibilityTracker::new(0.2);

        assert_eq!(tracker.observe(true, 0.2), None);
        assert_eq!(tracker.state(), Visibility::Visible);
    }

    #[test]
    fn section_taller_than_five_viewports_leaves_when_it_stops_intersecting() {
        let mut tracker = VisibilityTracker::new(0.2);

        // initial report while the section is still below the fold
        assert_eq!(tracker.observe(false, 0.0), Some(VisibilityChange::Left));

        // fills the whole viewport yet covers at most a sixth of itself
        assert_eq!(tracker.observe(true, 0.02), Some(VisibilityChange::Entered));
        assert_eq!(tracker.observe(true, 0.16), None);
        assert_eq!(tracker.state(), Visibility::Partial);

        assert_eq!(tracker.observe(false, 0.0), Some(VisibilityChange::Left));
        assert_eq!(tracker.state(), Visibility::Hidden);
    }

    #[test]
    fn partial_entry_that_grows_past_threshold_leaves_once() {
        let mut tracker = VisibilityTracker::new(0.2);
        tracker.observe(false, 0.0);

        assert_eq!(tracker.observe(true, 0.05), Some(VisibilityChange::Entered));
        assert_eq!(tracker.observe(true, 0.6), None);
        assert_eq!(tracker.observe(true, 0.1), Some(VisibilityChange::Left));
        assert_eq!(tracker.observe(true, 0.4), Some(VisibilityChange::Entered));
        assert_eq!(tracker.observe(false, 0.0), Some(VisibilityChange::Left));
        assert_eq!(tracker.observe(false, 0.0), None);
    }
}
