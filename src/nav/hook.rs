use std::rc::Rc;

use log::warn;
use yew::prelude::*;

use crate::nav::controller;
use crate::nav::sections::SectionId;
use crate::nav::state::{NavAction, NavState};
use crate::nav::viewport::{BrowserViewport, Viewport};

/// Menu actions handed to the header, hero and footer.
/// Built once per mount so their props stay equal while only the pointer moves.
#[derive(Clone, PartialEq)]
pub struct NavCallbacks {
    pub navigate: Callback<SectionId>,
    pub toggle_menu: Callback<()>,
}

impl NavCallbacks {
    pub fn new<V, F>(open_viewport: F, dispatch: Callback<NavAction>) -> Self
    where
        V: Viewport,
        F: Fn() -> Option<V> + 'static,
    {
        let navigate = {
            let dispatch = dispatch.clone();
            Callback::from(move |section: SectionId| match open_viewport() {
                Some(viewport) => {
                    controller::navigate_to(&viewport, section, &dispatch);
                }
                None => warn!("No window available, cannot scroll to {}", section),
            })
        };

        let toggle_menu = Callback::from(move |_: ()| dispatch.emit(NavAction::ToggleMenu));

        Self { navigate, toggle_menu }
    }
}

#[derive(Clone, PartialEq)]
pub struct NavHandle {
    pub state: NavState,
    pub callbacks: NavCallbacks,
}

/// Owns the page's navigation state for as long as the calling component is mounted.
#[hook]
pub fn use_navigation() -> NavHandle {
    let state = use_reducer_eq(NavState::default);

    let dispatch = {
        let dispatcher = state.dispatcher();
        Callback::from(move |action: NavAction| dispatcher.dispatch(action))
    };

    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                let subscriptions = match BrowserViewport::new() {
                    Some(viewport) => Some(controller::attach(Rc::new(viewport), dispatch)),
                    None => {
                        warn!("No window available, scroll tracking disabled");
                        None
                    }
                };
                move || drop(subscriptions)
            },
            (), // Attach once on mount, detach on unmount
        );
    }

    // The dispatcher is stable for the component's lifetime, so the first set is kept
    let callbacks = use_memo(move |_| NavCallbacks::new(BrowserViewport::new, dispatch), ());

    NavHandle {
        state: (*state).clone(),
        callbacks: (*callbacks).clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::testing::{recorder, FakeViewport, PAGE};

    #[test]
    fn navigate_callback_scrolls_and_closes_menu() {
        let viewport = FakeViewport::stacked(&PAGE, 0.0);
        let (state, dispatch) = recorder();
        let page = viewport.clone();
        let callbacks = NavCallbacks::new(move || Some(page.clone()), dispatch);
        state.borrow_mut().menu_open = true;

        callbacks.navigate.emit(SectionId::Pricing);

        assert_eq!(*viewport.scrolled_to.borrow(), vec![SectionId::Pricing]);
        assert_eq!(state.borrow().active, SectionId::Pricing);
        assert!(!state.borrow().menu_open);
    }

    #[test]
    fn navigate_without_window_is_a_no_op() {
        let (state, dispatch) = recorder();
        let callbacks = NavCallbacks::new(|| None::<FakeViewport>, dispatch);

        callbacks.navigate.emit(SectionId::About);

        assert_eq!(*state.borrow(), NavState::default());
    }

    #[test]
    fn toggle_callback_flips_menu() {
        let (state, dispatch) = recorder();
        let callbacks = NavCallbacks::new(|| None::<FakeViewport>, dispatch);

        callbacks.toggle_menu.emit(());
        assert!(state.borrow().menu_open);
        callbacks.toggle_menu.emit(());
        assert!(!state.borrow().menu_open);
    }

    #[test]
    fn pointer_only_change_keeps_callbacks_equal() {
        let (_, dispatch) = recorder();
        let callbacks = NavCallbacks::new(|| None::<FakeViewport>, dispatch);

        let before = NavHandle { state: NavState::default(), callbacks: callbacks.clone() };
        let mut moved = before.state.clone();
        moved.pointer.x = 42.0;
        let after = NavHandle { state: moved, callbacks: callbacks.clone() };

        assert!(before.callbacks == after.callbacks);
        assert!(before != after);
    }
}
