//! Section scrolling that also works across routes.
//!
//! Sections such as `kontakt` only exist on the home view. A click on a blog
//! page therefore redirects home first, waits for the location change and
//! then polls until the section is mounted or the poll gives up. Failures are
//! never surfaced; the worst case is landing on the home view unscrolled.

use std::any::Any;
use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use log::debug;

use crate::config;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SectionId(Cow<'static, str>);

impl SectionId {
    pub const HOME: SectionId = SectionId(Cow::Borrowed("domov"));
    pub const SERVICES: SectionId = SectionId(Cow::Borrowed("sluzby"));
    pub const REFERENCES: SectionId = SectionId(Cow::Borrowed("referencie"));
    pub const CONTACT: SectionId = SectionId(Cow::Borrowed("kontakt"));

    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        SectionId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keeps a timer or event listener alive. Dropping it unregisters.
pub struct Registration(#[allow(dead_code)] Box<dyn Any>);

impl Registration {
    pub fn new<T: 'static>(inner: T) -> Self {
        Registration(Box::new(inner))
    }

    pub fn none() -> Self {
        Registration(Box::new(()))
    }
}

pub trait ViewTree {
    /// Smoothly scrolls the element with `id` so its top aligns with the
    /// viewport. Returns `false` when no such element is mounted.
    fn scroll_into_view(&self, id: &SectionId) -> bool;
}

pub trait Location {
    fn fragment(&self) -> String;
    fn set_fragment(&self, fragment: &str);
    /// Runs `callback` on the next fragment change only.
    fn on_change_once(&self, callback: Box<dyn FnOnce()>) -> Registration;
}

pub trait Timers {
    fn now_ms(&self) -> f64;
    fn every(&self, interval_ms: u32, tick: Box<dyn FnMut()>) -> Registration;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationStatus {
    Scrolled,
    AwaitingHome,
    Polling,
    TimedOut,
    Cancelled,
}

impl NavigationStatus {
    pub fn is_finished(self) -> bool {
        matches!(
            self,
            NavigationStatus::Scrolled | NavigationStatus::TimedOut | NavigationStatus::Cancelled
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollSettings {
    pub interval_ms: u32,
    pub timeout_ms: u32,
}

impl Default for PollSettings {
    fn default() -> Self {
        PollSettings {
            interval_ms: config::SCROLL_POLL_INTERVAL_MS,
            timeout_ms: config::SCROLL_POLL_TIMEOUT_MS,
        }
    }
}

pub fn is_home_fragment(fragment: &str) -> bool {
    fragment.is_empty() || fragment == "#" || fragment == config::HOME_FRAGMENT
}

struct Pending {
    id: u64,
    status: Rc<Cell<NavigationStatus>>,
    _registration: Registration,
}

struct Inner {
    view: Rc<dyn ViewTree>,
    location: Rc<dyn Location>,
    timers: Rc<dyn Timers>,
    settings: PollSettings,
    // at most one navigation in flight; a newer one replaces it
    pending: RefCell<Option<Pending>>,
    next_id: Cell<u64>,
}

impl Inner {
    fn is_pending(&self, id: u64) -> bool {
        self.pending.borrow().as_ref().map(|p| p.id) == Some(id)
    }

    fn finish(&self, id: u64, status: NavigationStatus) {
        let finished = {
            let mut slot = self.pending.borrow_mut();
            if slot.as_ref().map(|p| p.id) == Some(id) {
                slot.take()
            } else {
                None
            }
        };
        if let Some(pending) = finished {
            pending.status.set(status);
        }
    }

    fn cancel_pending(&self) {
        let previous = self.pending.borrow_mut().take();
        if let Some(pending) = previous {
            debug!("Superseding pending navigation #{}", pending.id);
            pending.status.set(NavigationStatus::Cancelled);
        }
    }

    fn start_poll(inner: &Rc<Inner>, id: u64, target: SectionId, status: Rc<Cell<NavigationStatus>>) {
        let started = inner.timers.now_ms();
        let timeout = f64::from(inner.settings.timeout_ms);
        let weak = Rc::downgrade(inner);

        status.set(NavigationStatus::Polling);
        let registration = inner.timers.every(
            inner.settings.interval_ms,
            Box::new(move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                if !inner.is_pending(id) {
                    return;
                }
                if inner.view.scroll_into_view(&target) {
                    debug!("Scrolled to #{} after polling", target);
                    inner.finish(id, NavigationStatus::Scrolled);
                } else if inner.timers.now_ms() - started > timeout {
                    debug!("Section #{} did not appear in time, giving up", target);
                    inner.finish(id, NavigationStatus::TimedOut);
                }
            }),
        );

        let replaced = inner.pending.borrow_mut().replace(Pending {
            id,
            status,
            _registration: registration,
        });
        drop(replaced);
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.get_mut().take() {
            pending.status.set(NavigationStatus::Cancelled);
        }
    }
}

/// Resolves section ids to scroll positions, redirecting home when needed.
///
/// Clones share the same in-flight navigation. Dropping the last clone
/// cancels whatever is still pending.
#[derive(Clone)]
pub struct ScrollResolver {
    inner: Rc<Inner>,
}

impl PartialEq for ScrollResolver {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ScrollResolver {
    pub fn new(
        view: Rc<dyn ViewTree>,
        location: Rc<dyn Location>,
        timers: Rc<dyn Timers>,
        settings: PollSettings,
    ) -> Self {
        ScrollResolver {
            inner: Rc::new(Inner {
                view,
                location,
                timers,
                settings,
                pending: RefCell::new(None),
                next_id: Cell::new(1),
            }),
        }
    }

    /// Scrolls only if the section is already mounted.
    pub fn scroll_now(&self, target: &SectionId) -> bool {
        self.inner.view.scroll_into_view(target)
    }

    pub fn resolve(&self, target: SectionId) -> NavigationHandle {
        let inner = &self.inner;
        inner.cancel_pending();

        let status = Rc::new(Cell::new(NavigationStatus::Polling));
        if inner.view.scroll_into_view(&target) {
            status.set(NavigationStatus::Scrolled);
            return NavigationHandle {
                id: None,
                status,
                resolver: Rc::downgrade(inner),
            };
        }

        let id = inner.next_id.get();
        inner.next_id.set(id + 1);

        let fragment = inner.location.fragment();
        if is_home_fragment(&fragment) {
            debug!("#{} not mounted yet, polling", target);
            Inner::start_poll(inner, id, target, status.clone());
        } else {
            debug!("#{} lives on the home view, leaving {}", target, fragment);
            status.set(NavigationStatus::AwaitingHome);
            let weak = Rc::downgrade(inner);
            let poll_status = status.clone();
            let registration = inner.location.on_change_once(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    if inner.is_pending(id) {
                        Inner::start_poll(&inner, id, target, poll_status);
                    }
                }
            }));
            *inner.pending.borrow_mut() = Some(Pending {
                id,
                status: status.clone(),
                _registration: registration,
            });
            inner.location.set_fragment(config::HOME_FRAGMENT);
        }

        NavigationHandle {
            id: Some(id),
            status,
            resolver: Rc::downgrade(inner),
        }
    }
}

/// Observes one `resolve` call. Dropping the handle does not cancel.
pub struct NavigationHandle {
    id: Option<u64>,
    status: Rc<Cell<NavigationStatus>>,
    resolver: Weak<Inner>,
}

impl NavigationHandle {
    pub fn status(&self) -> NavigationStatus {
        self.status.get()
    }

    pub fn cancel(&self) {
        if let (Some(id), Some(inner)) = (self.id, self.resolver.upgrade()) {
            inner.finish(id, NavigationStatus::Cancelled);
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::HashSet;

    struct Flag(Rc<Cell<bool>>);

    impl Drop for Flag {
        fn drop(&mut self) {
            self.0.set(false);
        }
    }

    #[derive(Default)]
    pub struct FakeView {
        mounted: RefCell<HashSet<String>>,
        pub scrolled: RefCell<Vec<String>>,
    }

    impl FakeView {
        pub fn mount(&self, id: &str) {
            self.mounted.borrow_mut().insert(id.to_string());
        }
    }

    impl ViewTree for FakeView {
        fn scroll_into_view(&self, id: &SectionId) -> bool {
            if self.mounted.borrow().contains(id.as_str()) {
                self.scrolled.borrow_mut().push(id.to_string());
                true
            } else {
                false
            }
        }
    }

    type Listener = (Rc<Cell<bool>>, Option<Box<dyn FnOnce()>>);

    pub struct FakeLocation {
        fragment: RefCell<String>,
        listeners: RefCell<Vec<Listener>>,
        pub assigned: RefCell<Vec<String>>,
    }

    impl FakeLocation {
        pub fn at(fragment: &str) -> Self {
            FakeLocation {
                fragment: RefCell::new(fragment.to_string()),
                listeners: RefCell::new(Vec::new()),
                assigned: RefCell::new(Vec::new()),
            }
        }

        /// Delivers the change notification the browser sends after a
        /// fragment assignment.
        pub fn notify_change(&self) {
            let callbacks: Vec<_> = self
                .listeners
                .borrow_mut()
                .iter_mut()
                .filter(|(active, _)| active.get())
                .filter_map(|(_, callback)| callback.take())
                .collect();
            for callback in callbacks {
                callback();
            }
        }

        pub fn active_listeners(&self) -> usize {
            self.listeners
                .borrow()
                .iter()
                .filter(|(active, callback)| active.get() && callback.is_some())
                .count()
        }
    }

    impl Location for FakeLocation {
        fn fragment(&self) -> String {
            self.fragment.borrow().clone()
        }

        fn set_fragment(&self, fragment: &str) {
            *self.fragment.borrow_mut() = fragment.to_string();
            self.assigned.borrow_mut().push(fragment.to_string());
        }

        fn on_change_once(&self, callback: Box<dyn FnOnce()>) -> Registration {
            let active = Rc::new(Cell::new(true));
            self.listeners
                .borrow_mut()
                .push((active.clone(), Some(callback)));
            Registration::new(Flag(active))
        }
    }

    struct FakeTimer {
        interval: f64,
        next_due: Cell<f64>,
        active: Rc<Cell<bool>>,
        tick: RefCell<Option<Box<dyn FnMut()>>>,
    }

    /// Manual clock with interval timers fired in due order by `advance`.
    #[derive(Default)]
    pub struct FakeTimers {
        now: Cell<f64>,
        timers: RefCell<Vec<Rc<FakeTimer>>>,
    }

    impl FakeTimers {
        pub fn registered(&self) -> usize {
            self.timers.borrow().len()
        }

        pub fn active(&self) -> usize {
            self.timers
                .borrow()
                .iter()
                .filter(|t| t.active.get())
                .count()
        }

        pub fn advance(&self, ms: f64) {
            let until = self.now.get() + ms;
            loop {
                let due = self
                    .timers
                    .borrow()
                    .iter()
                    .filter(|t| t.active.get() && t.next_due.get() <= until)
                    .min_by(|a, b| a.next_due.get().total_cmp(&b.next_due.get()))
                    .cloned();
                let Some(timer) = due else { break };

                self.now.set(timer.next_due.get());
                timer.next_due.set(timer.next_due.get() + timer.interval);
                let tick = timer.tick.borrow_mut().take();
                if let Some(mut tick) = tick {
                    tick();
                    if timer.active.get() {
                        *timer.tick.borrow_mut() = Some(tick);
                    }
                }
            }
            self.now.set(until);
        }
    }

    impl Timers for FakeTimers {
        fn now_ms(&self) -> f64 {
            self.now.get()
        }

        fn every(&self, interval_ms: u32, tick: Box<dyn FnMut()>) -> Registration {
            let active = Rc::new(Cell::new(true));
            let interval = f64::from(interval_ms);
            self.timers.borrow_mut().push(Rc::new(FakeTimer {
                interval,
                next_due: Cell::new(self.now.get() + interval),
                active: active.clone(),
                tick: RefCell::new(Some(tick)),
            }));
            Registration::new(Flag(active))
        }
    }

    pub struct Harness {
        pub view: Rc<FakeView>,
        pub location: Rc<FakeLocation>,
        pub timers: Rc<FakeTimers>,
        pub resolver: ScrollResolver,
    }

    impl Harness {
        pub fn at(fragment: &str) -> Self {
            let view = Rc::new(FakeView::default());
            let location = Rc::new(FakeLocation::at(fragment));
            let timers = Rc::new(FakeTimers::default());
            let resolver = ScrollResolver::new(
                view.clone(),
                location.clone(),
                timers.clone(),
                PollSettings::default(),
            );
            Harness {
                view,
                location,
                timers,
                resolver,
            }
        }

        pub fn scrolled(&self) -> Vec<String> {
            self.view.scrolled.borrow().clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::Harness;
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mounted_section_scrolls_immediately() {
        let h = Harness::at("#/blog");
        h.view.mount("kontakt");

        let nav = h.resolver.resolve(SectionId::CONTACT);

        assert_eq!(nav.status(), NavigationStatus::Scrolled);
        assert_eq!(h.scrolled(), vec!["kontakt".to_string()]);
        assert!(h.location.assigned.borrow().is_empty());
        assert_eq!(h.location.active_listeners(), 0);
        assert_eq!(h.timers.registered(), 0);
    }

    #[test]
    fn other_view_redirects_home_then_polls() {
        let h = Harness::at("#/blog/some-post");

        let nav = h.resolver.resolve(SectionId::CONTACT);

        assert_eq!(nav.status(), NavigationStatus::AwaitingHome);
        assert_eq!(*h.location.assigned.borrow(), vec!["#/".to_string()]);
        assert_eq!(h.location.active_listeners(), 1);
        assert_eq!(h.timers.registered(), 0);

        h.location.notify_change();
        assert_eq!(h.location.active_listeners(), 0);
        assert_eq!(nav.status(), NavigationStatus::Polling);
        assert_eq!(h.timers.active(), 1);

        h.timers.advance(300.0);
        assert!(h.scrolled().is_empty());

        h.view.mount("kontakt");
        h.timers.advance(50.0);
        assert_eq!(nav.status(), NavigationStatus::Scrolled);
        assert_eq!(h.scrolled(), vec!["kontakt".to_string()]);

        h.timers.advance(2000.0);
        assert_eq!(h.scrolled().len(), 1);
        assert_eq!(h.timers.active(), 0);
    }

    #[test]
    fn second_location_change_is_ignored() {
        let h = Harness::at("#/blog");
        let _nav = h.resolver.resolve(SectionId::SERVICES);

        h.location.notify_change();
        h.location.notify_change();

        assert_eq!(h.timers.registered(), 1);
    }

    #[test]
    fn home_view_polls_without_redirect() {
        let h = Harness::at("#/");

        let nav = h.resolver.resolve(SectionId::REFERENCES);

        assert_eq!(nav.status(), NavigationStatus::Polling);
        assert!(h.location.assigned.borrow().is_empty());
        assert_eq!(h.location.active_listeners(), 0);
        assert_eq!(h.timers.active(), 1);
    }

    #[test]
    fn empty_fragment_counts_as_home() {
        assert!(is_home_fragment(""));
        assert!(is_home_fragment("#"));
        assert!(is_home_fragment("#/"));
        assert!(!is_home_fragment("#/blog"));

        let h = Harness::at("");
        let _nav = h.resolver.resolve(SectionId::CONTACT);
        assert!(h.location.assigned.borrow().is_empty());
    }

    #[test]
    fn poll_gives_up_after_timeout() {
        let h = Harness::at("#/");
        let nav = h.resolver.resolve(SectionId::new("missing"));

        h.timers.advance(2000.0);
        assert_eq!(nav.status(), NavigationStatus::Polling);
        assert_eq!(h.timers.active(), 1);

        h.timers.advance(50.0);
        assert_eq!(nav.status(), NavigationStatus::TimedOut);
        assert_eq!(h.timers.active(), 0);
        assert!(h.scrolled().is_empty());

        // appearing after the deadline changes nothing
        h.view.mount("missing");
        h.timers.advance(500.0);
        assert!(h.scrolled().is_empty());
    }

    #[test]
    fn new_navigation_supersedes_pending_one() {
        let h = Harness::at("#/");
        let first = h.resolver.resolve(SectionId::SERVICES);
        h.timers.advance(100.0);

        let second = h.resolver.resolve(SectionId::CONTACT);

        assert_eq!(first.status(), NavigationStatus::Cancelled);
        assert_eq!(second.status(), NavigationStatus::Polling);
        assert_eq!(h.timers.active(), 1);

        h.view.mount("sluzby");
        h.view.mount("kontakt");
        h.timers.advance(50.0);
        assert_eq!(h.scrolled(), vec!["kontakt".to_string()]);
    }

    #[test]
    fn immediate_navigation_also_supersedes() {
        let h = Harness::at("#/");
        let first = h.resolver.resolve(SectionId::SERVICES);
        h.view.mount("kontakt");

        let second = h.resolver.resolve(SectionId::CONTACT);

        assert_eq!(first.status(), NavigationStatus::Cancelled);
        assert_eq!(second.status(), NavigationStatus::Scrolled);
        assert_eq!(h.timers.active(), 0);
    }

    #[test]
    fn cancel_while_awaiting_home_releases_listener() {
        let h = Harness::at("#/blog");
        let nav = h.resolver.resolve(SectionId::CONTACT);

        nav.cancel();
        assert_eq!(nav.status(), NavigationStatus::Cancelled);
        assert_eq!(h.location.active_listeners(), 0);

        h.location.notify_change();
        assert_eq!(h.timers.registered(), 0);
    }

    #[test]
    fn cancel_after_finish_keeps_status() {
        let h = Harness::at("#/");
        h.view.mount("kontakt");
        let nav = h.resolver.resolve(SectionId::CONTACT);

        nav.cancel();

        assert_eq!(nav.status(), NavigationStatus::Scrolled);
        assert!(nav.status().is_finished());
    }

    #[test]
    fn dropping_resolver_clears_poll() {
        let h = Harness::at("#/");
        let nav = h.resolver.resolve(SectionId::CONTACT);
        let Harness { view, timers, resolver, .. } = h;

        drop(resolver);

        assert_eq!(nav.status(), NavigationStatus::Cancelled);
        assert_eq!(timers.active(), 0);
        view.mount("kontakt");
        timers.advance(100.0);
        assert!(view.scrolled.borrow().is_empty());
    }

    #[test]
    fn scroll_now_never_redirects() {
        let h = Harness::at("#/blog");

        assert!(!h.resolver.scroll_now(&SectionId::CONTACT));
        assert!(h.location.assigned.borrow().is_empty());
        assert_eq!(h.timers.registered(), 0);

        h.view.mount("kontakt");
        assert!(h.resolver.scroll_now(&SectionId::CONTACT));
    }

    #[test]
    fn clones_share_in_flight_navigation() {
        let h = Harness::at("#/");
        let other = h.resolver.clone();
        assert!(other == h.resolver);

        let first = h.resolver.resolve(SectionId::SERVICES);
        let _second = other.resolve(SectionId::CONTACT);

        assert_eq!(first.status(), NavigationStatus::Cancelled);
        assert_eq!(h.timers.active(), 1);
    }
}
