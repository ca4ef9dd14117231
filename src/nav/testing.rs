use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use yew::Callback;

use crate::nav::sections::SectionId;
use crate::nav::state::{NavAction, NavState, PointerPosition};
use crate::nav::viewport::{SectionBounds, Viewport};

#[derive(Default)]
pub struct Registry {
    next_id: Cell<usize>,
    scroll: RefCell<Vec<(usize, Rc<dyn Fn()>)>>,
    pointer: RefCell<Vec<(usize, Rc<dyn Fn(PointerPosition)>)>>,
}

impl Registry {
    fn take_id(&self) -> usize {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn remove(&self, id: usize) {
        self.scroll.borrow_mut().retain(|(key, _)| *key != id);
        self.pointer.borrow_mut().retain(|(key, _)| *key != id);
    }

    pub fn listener_count(&self) -> usize {
        self.scroll.borrow().len() + self.pointer.borrow().len()
    }
}

pub struct FakeSubscription {
    registry: Rc<Registry>,
    id: usize,
}

impl Drop for FakeSubscription {
    fn drop(&mut self) {
        self.registry.remove(self.id);
    }
}

/// In-memory page. Clones share the same layout, scroll log and listeners.
#[derive(Clone, Default)]
pub struct FakeViewport {
    pub bounds: Rc<RefCell<HashMap<SectionId, SectionBounds>>>,
    pub scrolled_to: Rc<RefCell<Vec<SectionId>>>,
    pub registry: Rc<Registry>,
}

impl FakeViewport {
    // Lays sections out back to back, as the page does, scrolled down by `offset`.
    pub fn stacked(heights: &[(SectionId, f64)], offset: f64) -> Self {
        let viewport = FakeViewport::default();
        viewport.layout(heights, offset);
        viewport
    }

    pub fn layout(&self, heights: &[(SectionId, f64)], offset: f64) {
        let mut bounds = self.bounds.borrow_mut();
        bounds.clear();
        let mut top = -offset;
        for (section, height) in heights {
            bounds.insert(*section, SectionBounds { top, bottom: top + height });
            top += height;
        }
    }

    pub fn fire_scroll(&self) {
        let listeners: Vec<_> = self.registry.scroll.borrow().iter().map(|(_, cb)| cb.clone()).collect();
        for listener in listeners {
            listener();
        }
    }

    pub fn fire_pointer(&self, position: PointerPosition) {
        let listeners: Vec<_> = self.registry.pointer.borrow().iter().map(|(_, cb)| cb.clone()).collect();
        for listener in listeners {
            listener(position);
        }
    }
}

impl Viewport for FakeViewport {
    type Subscription = FakeSubscription;

    fn section_bounds(&self, section: SectionId) -> Option<SectionBounds> {
        self.bounds.borrow().get(&section).copied()
    }

    fn scroll_to_section(&self, section: SectionId) -> bool {
        if !self.bounds.borrow().contains_key(&section) {
            return false;
        }
        self.scrolled_to.borrow_mut().push(section);
        true
    }

    fn on_scroll(&self, callback: Box<dyn Fn()>) -> FakeSubscription {
        let id = self.registry.take_id();
        self.registry.scroll.borrow_mut().push((id, Rc::from(callback)));
        FakeSubscription { registry: self.registry.clone(), id }
    }

    fn on_pointer_move(&self, callback: Box<dyn Fn(PointerPosition)>) -> FakeSubscription {
        let id = self.registry.take_id();
        self.registry.pointer.borrow_mut().push((id, Rc::from(callback)));
        FakeSubscription { registry: self.registry.clone(), id }
    }
}

pub const PAGE: [(SectionId, f64); 5] = [
    (SectionId::Home, 800.0),
    (SectionId::Services, 600.0),
    (SectionId::Pricing, 700.0),
    (SectionId::Domain, 650.0),
    (SectionId::About, 750.0),
];

pub fn recorder() -> (Rc<RefCell<NavState>>, Callback<NavAction>) {
    let state = Rc::new(RefCell::new(NavState::default()));
    let dispatch = {
        let state = state.clone();
        Callback::from(move |action: NavAction| state.borrow_mut().apply(action))
    };
    (state, dispatch)
}
