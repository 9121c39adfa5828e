use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};
use yew::prelude::*;

use crate::scroll::{Location, PollSettings, Registration, ScrollResolver, SectionId, Timers, ViewTree};

pub struct DocumentView;

impl ViewTree for DocumentView {
    fn scroll_into_view(&self, id: &SectionId) -> bool {
        let Some(element) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id.as_str()))
        else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// The `#/…` fragment the hash router navigates with.
pub struct HashLocation;

struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

impl Location for HashLocation {
    fn fragment(&self) -> String {
        window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }

    fn set_fragment(&self, fragment: &str) {
        if let Some(window) = window() {
            let _ = window.location().set_hash(fragment);
        }
    }

    fn on_change_once(&self, callback: Box<dyn FnOnce()>) -> Registration {
        let Some(window) = window() else {
            return Registration::none();
        };

        let callback = RefCell::new(Some(callback));
        let listener = Closure::wrap(Box::new(move || {
            let once = callback.borrow_mut().take();
            if let Some(once) = once {
                once();
            }
        }) as Box<dyn FnMut()>);

        if window
            .add_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref())
            .is_err()
        {
            return Registration::none();
        }

        Registration::new(WindowListener {
            window,
            event: "hashchange",
            callback: listener,
        })
    }
}

pub struct BrowserTimers;

impl Timers for BrowserTimers {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    fn every(&self, interval_ms: u32, mut tick: Box<dyn FnMut()>) -> Registration {
        // dropping the Interval clears it
        Registration::new(Interval::new(interval_ms, move || tick()))
    }
}

impl ScrollResolver {
    pub fn browser() -> Self {
        ScrollResolver::new(
            Rc::new(DocumentView),
            Rc::new(HashLocation),
            Rc::new(BrowserTimers),
            PollSettings::default(),
        )
    }
}

/// Scrolls to a section of the current view, doing nothing if it is absent.
pub fn scroll_to_section(id: &SectionId) {
    let _ = DocumentView.scroll_into_view(id);
}

#[hook]
pub fn use_scroll_resolver() -> ScrollResolver {
    use_context::<ScrollResolver>().unwrap_or_else(ScrollResolver::browser)
}

/// Click handler that reaches `target` from any route.
#[hook]
pub fn use_smart_scroll(target: SectionId) -> Callback<MouseEvent> {
    let resolver = use_scroll_resolver();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        let _ = resolver.resolve(target.clone());
    })
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
