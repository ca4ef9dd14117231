use gloo_events::EventListener;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Window,
};

use crate::nav::sections::SectionId;
use crate::nav::state::PointerPosition;

/// Vertical extent of a section, relative to the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && line <= self.bottom
    }
}

/// The host capabilities the navigation controller needs.
///
/// Subscriptions are guards: the listener stays registered until the value is dropped.
pub trait Viewport {
    type Subscription;

    fn section_bounds(&self, section: SectionId) -> Option<SectionBounds>;

    /// Starts a smooth scroll bringing the section's top to the viewport top.
    /// Returns `false` when the section is not on the page.
    fn scroll_to_section(&self, section: SectionId) -> bool;

    fn on_scroll(&self, callback: Box<dyn Fn()>) -> Self::Subscription;

    fn on_pointer_move(&self, callback: Box<dyn Fn(PointerPosition)>) -> Self::Subscription;
}

#[derive(Clone)]
pub struct BrowserViewport {
    window: Window,
    document: Document,
}

impl BrowserViewport {
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    fn element(&self, section: SectionId) -> Option<Element> {
        self.document.get_element_by_id(section.anchor())
    }
}

impl Viewport for BrowserViewport {
    type Subscription = EventListener;

    fn section_bounds(&self, section: SectionId) -> Option<SectionBounds> {
        let rect = self.element(section)?.get_bounding_client_rect();
        Some(SectionBounds {
            top: rect.top(),
            bottom: rect.bottom(),
        })
    }

    fn scroll_to_section(&self, section: SectionId) -> bool {
        let Some(element) = self.element(section) else {
            warn!("No element with id '{}' on the page", section.anchor());
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn on_scroll(&self, callback: Box<dyn Fn()>) -> EventListener {
        EventListener::new(&self.window, "scroll", move |_| callback())
    }

    fn on_pointer_move(&self, callback: Box<dyn Fn(PointerPosition)>) -> EventListener {
        EventListener::new(&self.window, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                callback(PointerPosition {
                    x: event.client_x() as f64,
                    y: event.client_y() as f64,
                });
            }
        })
    }
}
