//! Groups of expandable panels where at most one is open.

use std::rc::Rc;

use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelGroup<K> {
    open: Option<K>,
}

impl<K> Default for PanelGroup<K> {
    fn default() -> Self {
        PanelGroup { open: None }
    }
}

impl<K: PartialEq> PanelGroup<K> {
    /// Opens `id`, closing any other panel. Selecting the open panel closes it.
    pub fn select(&mut self, id: K) {
        if self.open.as_ref() == Some(&id) {
            self.open = None;
        } else {
            self.open = Some(id);
        }
    }

    pub fn reset(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self, id: &K) -> bool {
        self.open.as_ref() == Some(id)
    }

    pub fn open(&self) -> Option<&K> {
        self.open.as_ref()
    }
}

pub enum PanelAction<K> {
    Select(K),
    Reset,
}

impl<K: PartialEq + Clone> Reducible for PanelGroup<K> {
    type Action = PanelAction<K>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PanelAction::Select(id) => next.select(id),
            PanelAction::Reset => next.reset(),
        }
        Rc::new(next)
    }
}

/// Tick that force-closes every panel of a group whenever it changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResetSignal(u64);

impl ResetSignal {
    pub fn next(self) -> Self {
        ResetSignal(self.0.wrapping_add(1))
    }
}

impl Reducible for ResetSignal {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(self.next())
    }
}

pub struct PanelGroupHandle<K: PartialEq + Clone + 'static> {
    state: UseReducerHandle<PanelGroup<K>>,
}

impl<K: PartialEq + Clone + 'static> Clone for PanelGroupHandle<K> {
    fn clone(&self) -> Self {
        PanelGroupHandle {
            state: self.state.clone(),
        }
    }
}

impl<K: PartialEq + Clone + 'static> PanelGroupHandle<K> {
    pub fn is_open(&self, id: &K) -> bool {
        self.state.is_open(id)
    }

    pub fn toggle(&self, id: K) -> Callback<()> {
        let dispatcher = self.state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(PanelAction::Select(id.clone())))
    }
}

#[hook]
pub fn use_panel_group<K: PartialEq + Clone + 'static>(reset: ResetSignal) -> PanelGroupHandle<K> {
    let state = use_reducer(PanelGroup::<K>::default);
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                dispatcher.dispatch(PanelAction::Reset);
                || ()
            },
            reset,
        );
    }
    PanelGroupHandle { state }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn open_count(group: &PanelGroup<usize>, n: usize) -> usize {
        (0..n).filter(|i| group.is_open(i)).count()
    }

    #[test]
    fn selecting_another_panel_closes_the_first() {
        let mut group = PanelGroup::default();
        group.select("A");
        group.select("B");

        assert!(!group.is_open(&"A"));
        assert!(group.is_open(&"B"));
        assert_eq!(group.open(), Some(&"B"));
    }

    #[test]
    fn selecting_twice_closes() {
        let mut group = PanelGroup::default();
        group.select(3usize);
        group.select(3);

        assert_eq!(group, PanelGroup::default());
    }

    #[test]
    fn at_most_one_open_for_any_sequence() {
        const N: usize = 4;
        let mut group = PanelGroup::default();
        // every ordered pair plus repeats
        for a in 0..N {
            for b in 0..N {
                for id in [a, b, a, a, b] {
                    group.select(id);
                    assert!(open_count(&group, N) <= 1);
                }
            }
        }
    }

    #[test]
    fn reset_closes_from_any_state() {
        let mut closed = PanelGroup::<usize>::default();
        closed.reset();
        assert_eq!(closed.open(), None);

        let mut open = PanelGroup::default();
        open.select(1usize);
        open.reset();
        assert_eq!(open.open(), None);
    }

    #[test]
    fn reducer_applies_actions() {
        let group = Rc::new(PanelGroup::<&str>::default());
        let group = group.reduce(PanelAction::Select("faq-1"));
        assert!(group.is_open(&"faq-1"));

        let group = group.reduce(PanelAction::Select("faq-2"));
        assert!(group.is_open(&"faq-2"));
        assert!(!group.is_open(&"faq-1"));

        let group = group.reduce(PanelAction::Reset);
        assert_eq!(group.open(), None);
    }

    #[test]
    fn reset_signal_always_changes() {
        let first = ResetSignal::default();
        let second = Rc::new(first).reduce(());
        assert_ne!(first, *second);
        assert_eq!(*second, first.next());
    }

    #[test]
    fn groups_are_independent() {
        let mut business = PanelGroup::default();
        let mut faq = PanelGroup::default();
        business.select("Energetický posudok");
        faq.select("Koľko môžem reálne ušetriť?");
        business.reset();

        assert_eq!(business.open(), None);
        assert_eq!(faq.open(), Some(&"Koľko môžem reálne ušetriť?"));
    }
}
