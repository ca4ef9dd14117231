use std::rc::Rc;

use log::{debug, info};
use yew::Callback;

use crate::config::REFERENCE_LINE_PX;
use crate::nav::sections::{SectionId, SECTIONS};
use crate::nav::state::NavAction;
use crate::nav::viewport::Viewport;

/// First section, in page order, whose box crosses the reference line.
pub fn section_at_reference_line<V: Viewport + ?Sized>(viewport: &V) -> Option<SectionId> {
    SECTIONS.iter().copied().find(|section| {
        viewport
            .section_bounds(*section)
            .map_or(false, |bounds| bounds.straddles(REFERENCE_LINE_PX))
    })
}

/// Scrolls to `section` and marks it active right away, without waiting for the
/// scroll observer. Does nothing when the section is missing from the page.
pub fn navigate_to<V: Viewport + ?Sized>(
    viewport: &V,
    section: SectionId,
    dispatch: &Callback<NavAction>,
) -> bool {
    if !viewport.scroll_to_section(section) {
        return false;
    }
    info!("Navigating to {}", section);
    dispatch.emit(NavAction::Navigated(section));
    true
}

/// Live listener registrations. Dropping this detaches both listeners.
pub struct Subscriptions<S> {
    _scroll: S,
    _pointer: S,
}

pub fn attach<V>(viewport: Rc<V>, dispatch: Callback<NavAction>) -> Subscriptions<V::Subscription>
where
    V: Viewport + 'static,
{
    let scroll = {
        let observed = Rc::clone(&viewport);
        let dispatch = dispatch.clone();
        viewport.on_scroll(Box::new(move || {
            dispatch.emit(NavAction::Scrolled(section_at_reference_line(&*observed)));
        }))
    };

    let pointer = {
        let dispatch = dispatch.clone();
        viewport.on_pointer_move(Box::new(move |position| {
            dispatch.emit(NavAction::PointerMoved(position));
        }))
    };

    // Initial check, so a page restored mid-scroll highlights the right item
    dispatch.emit(NavAction::Scrolled(section_at_reference_line(&*viewport)));
    debug!("Scroll and pointer listeners attached");

    Subscriptions {
        _scroll: scroll,
        _pointer: pointer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::state::{NavState, PointerPosition};
    use crate::nav::testing::{recorder, FakeViewport, PAGE};

    #[test]
    fn picks_section_under_reference_line() {
        // Home spans 0..800 from the page top, services 800..1400, pricing 1400..2100
        let viewport = FakeViewport::stacked(&PAGE, 1500.0);
        assert_eq!(section_at_reference_line(&viewport), Some(SectionId::Pricing));
    }

    #[test]
    fn boundary_overlap_favours_earlier_section() {
        // Services ends exactly on the line and pricing starts there too
        let viewport = FakeViewport::stacked(&PAGE, 1300.0);
        assert_eq!(section_at_reference_line(&viewport), Some(SectionId::Services));
    }

    #[test]
    fn nothing_straddles_past_the_end() {
        let viewport = FakeViewport::stacked(&PAGE, 4000.0);
        assert_eq!(section_at_reference_line(&viewport), None);
    }

    #[test]
    fn missing_sections_are_skipped() {
        let viewport = FakeViewport::stacked(&PAGE, 900.0);
        viewport.bounds.borrow_mut().remove(&SectionId::Services);
        assert_eq!(section_at_reference_line(&viewport), None);
    }

    #[test]
    fn scroll_observation_updates_active_section() {
        let viewport = Rc::new(FakeViewport::stacked(&PAGE, 0.0));
        let (state, dispatch) = recorder();
        let _subscriptions = attach(viewport.clone(), dispatch);
        state.borrow_mut().active = SectionId::About;

        viewport.layout(&PAGE, 1500.0);
        viewport.fire_scroll();

        assert_eq!(state.borrow().active, SectionId::Pricing);
        assert!(viewport.scrolled_to.borrow().is_empty());
    }

    #[test]
    fn scrolling_past_content_keeps_last_section() {
        let viewport = Rc::new(FakeViewport::stacked(&PAGE, 2800.0));
        let (state, dispatch) = recorder();
        let _subscriptions = attach(viewport.clone(), dispatch);
        assert_eq!(state.borrow().active, SectionId::About);

        viewport.layout(&PAGE, 5000.0);
        viewport.fire_scroll();

        assert_eq!(state.borrow().active, SectionId::About);
    }

    #[test]
    fn attach_runs_an_initial_observation() {
        let viewport = Rc::new(FakeViewport::stacked(&PAGE, 2200.0));
        let (state, dispatch) = recorder();
        let _subscriptions = attach(viewport.clone(), dispatch);
        assert_eq!(state.borrow().active, SectionId::Domain);
        assert!(viewport.scrolled_to.borrow().is_empty());
    }

    #[test]
    fn observing_never_requests_a_scroll() {
        // Observation sweeps every section, including overlapping boundaries
        let viewport = Rc::new(FakeViewport::stacked(&PAGE, 0.0));
        let (state, dispatch) = recorder();
        let _subscriptions = attach(viewport.clone(), dispatch);

        for offset in [0.0, 700.0, 1300.0, 2000.0, 2650.0, 3400.0, 6000.0] {
            viewport.layout(&PAGE, offset);
            viewport.fire_scroll();
        }

        assert!(viewport.scrolled_to.borrow().is_empty());
        assert_eq!(state.borrow().active, SectionId::About);
    }

    #[test]
    fn clicking_services_activates_it_and_closes_menu() {
        let viewport = FakeViewport::stacked(&PAGE, 0.0);
        let (state, dispatch) = recorder();
        state.borrow_mut().menu_open = true;

        assert!(navigate_to(&viewport, SectionId::Services, &dispatch));

        assert_eq!(*viewport.scrolled_to.borrow(), vec![SectionId::Services]);
        assert_eq!(state.borrow().active, SectionId::Services);
        assert!(!state.borrow().menu_open);
    }

    #[test]
    fn navigation_is_optimistic() {
        // Viewport still shows home: the scroll has only been requested
        let viewport = FakeViewport::stacked(&PAGE, 0.0);
        let (state, dispatch) = recorder();

        navigate_to(&viewport, SectionId::About, &dispatch);

        assert_eq!(state.borrow().active, SectionId::About);
        assert_eq!(section_at_reference_line(&viewport), Some(SectionId::Home));
    }

    #[test]
    fn navigating_to_missing_section_changes_nothing() {
        let viewport = FakeViewport::stacked(&PAGE[..2], 0.0);
        let (state, dispatch) = recorder();
        state.borrow_mut().menu_open = true;

        assert!(!navigate_to(&viewport, SectionId::Domain, &dispatch));

        assert_eq!(*state.borrow(), NavState { menu_open: true, ..NavState::default() });
        assert!(viewport.scrolled_to.borrow().is_empty());
    }

    #[test]
    fn pointer_moves_are_tracked() {
        let viewport = Rc::new(FakeViewport::stacked(&PAGE, 0.0));
        let (state, dispatch) = recorder();
        let _subscriptions = attach(viewport.clone(), dispatch);

        viewport.fire_pointer(PointerPosition { x: 10.0, y: 20.0 });
        viewport.fire_pointer(PointerPosition { x: 640.0, y: 360.0 });

        assert_eq!(state.borrow().pointer, PointerPosition { x: 640.0, y: 360.0 });
        assert_eq!(state.borrow().active, SectionId::Home);
    }

    #[test]
    fn dropping_subscriptions_detaches_listeners() {
        let viewport = Rc::new(FakeViewport::stacked(&PAGE, 0.0));
        let (state, dispatch) = recorder();
        let subscriptions = attach(viewport.clone(), dispatch);
        assert_eq!(viewport.registry.listener_count(), 2);

        drop(subscriptions);
        assert_eq!(viewport.registry.listener_count(), 0);

        viewport.layout(&PAGE, 1500.0);
        viewport.fire_scroll();
        viewport.fire_pointer(PointerPosition { x: 1.0, y: 1.0 });
        assert_eq!(*state.borrow(), NavState::default());
    }
}
