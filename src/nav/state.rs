use std::rc::Rc;

use yew::prelude::*;

use crate::nav::sections::SectionId;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

/// Everything the page header and cursor overlay render from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub active: SectionId,
    pub menu_open: bool,
    pub pointer: PointerPosition,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    // Result of a scroll observation; `None` means nothing straddles the reference line.
    Scrolled(Option<SectionId>),
    Navigated(SectionId),
    ToggleMenu,
    PointerMoved(PointerPosition),
}

impl NavState {
    pub fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::Scrolled(Some(section)) => self.active = section,
            NavAction::Scrolled(None) => {}
            NavAction::Navigated(section) => {
                self.active = section;
                self.menu_open = false;
            }
            NavAction::ToggleMenu => self.menu_open = !self.menu_open,
            NavAction::PointerMoved(position) => self.pointer = position,
        }
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applied(mut state: NavState, actions: &[NavAction]) -> NavState {
        for action in actions {
            state.apply(*action);
        }
        state
    }

    #[test]
    fn starts_on_home_with_menu_closed() {
        let state = NavState::default();
        assert_eq!(state.active, SectionId::Home);
        assert!(!state.menu_open);
        assert_eq!(state.pointer, PointerPosition { x: 0.0, y: 0.0 });
    }

    #[test]
    fn empty_observation_keeps_previous_section() {
        let state = applied(
            NavState::default(),
            &[NavAction::Scrolled(Some(SectionId::About)), NavAction::Scrolled(None)],
        );
        assert_eq!(state.active, SectionId::About);
    }

    #[test]
    fn navigation_closes_menu_whatever_it_was() {
        let opened = applied(
            NavState::default(),
            &[NavAction::ToggleMenu, NavAction::Navigated(SectionId::Services)],
        );
        assert_eq!(opened.active, SectionId::Services);
        assert!(!opened.menu_open);

        let closed = applied(NavState::default(), &[NavAction::Navigated(SectionId::Domain)]);
        assert_eq!(closed.active, SectionId::Domain);
        assert!(!closed.menu_open);
    }

    #[test]
    fn toggle_flips_menu() {
        let once = applied(NavState::default(), &[NavAction::ToggleMenu]);
        assert!(once.menu_open);
        let twice = applied(once, &[NavAction::ToggleMenu]);
        assert!(!twice.menu_open);
    }

    #[test]
    fn pointer_reflects_latest_event_only() {
        let state = applied(
            NavState::default(),
            &[
                NavAction::PointerMoved(PointerPosition { x: 5.0, y: 900.0 }),
                NavAction::PointerMoved(PointerPosition { x: 312.5, y: 48.0 }),
            ],
        );
        assert_eq!(state.pointer, PointerPosition { x: 312.5, y: 48.0 });
        assert_eq!(state.active, SectionId::Home);
    }

    #[test]
    fn reducer_matches_apply() {
        let state = Rc::new(NavState::default());
        let next = state.clone().reduce(NavAction::Navigated(SectionId::Pricing));
        assert_eq!(next.active, SectionId::Pricing);
        assert_eq!(state.active, SectionId::Home);
    }
}
