use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::scroll::{active_section, plan_navigation, SectionGeometry, NAVBAR_HEIGHT};
use crate::sections::Section;

pub fn window_scroll_y() -> f64 {
    window().scroll_y().unwrap_or_default()
}

/// Reads each section's extent from the live layout.
fn measure(sections: &[Section]) -> Vec<SectionGeometry<Section>> {
    let document = document();
    sections
        .iter()
        .map(|section| {
            document
                .get_element_by_id(section.id())
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                .map(|el| {
                    SectionGeometry::new(
                        *section,
                        f64::from(el.offset_top()),
                        f64::from(el.offset_height()),
                    )
                })
                .unwrap_or_else(|| SectionGeometry::missing(*section))
        })
        .collect()
}

/// Tracks which of `sections` is under the viewport top plus `offset`.
///
/// Recomputed once after mount and on every window scroll. The listener is
/// removed when the calling component is disposed.
pub fn use_scroll_spy(sections: &'static [Section], offset: f64) -> ReadSignal<Option<Section>> {
    let (active, set_active) = signal(None::<Section>);

    let recompute = move || {
        let next = active_section(&measure(sections), window_scroll_y(), offset);
        if active.get_untracked() != next {
            set_active.set(next);
        }
    };

    Effect::new(move |_| recompute());
    let _ = use_event_listener(use_window(), ev::scroll, move |_| recompute());

    active
}

/// Whether the window has been scrolled further than `threshold`.
pub fn use_scrolled_past(threshold: f64) -> ReadSignal<bool> {
    let (past, set_past) = signal(false);
    let update = move || {
        let next = crate::scroll::is_scrolled_past(window_scroll_y(), threshold);
        if past.get_untracked() != next {
            set_past.set(next);
        }
    };
    Effect::new(move |_| update());
    let _ = use_event_listener(use_window(), ev::scroll, move |_| update());
    past
}

/// Smoothly scrolls so the element with `id` sits just below the navbar.
/// Does nothing when no such element exists.
pub fn scroll_to_section(id: &str) {
    let element_top = document()
        .get_element_by_id(id)
        .map(|el| el.get_bounding_client_rect().top());
    match plan_navigation(element_top, window_scroll_y(), NAVBAR_HEIGHT) {
        Some(top) => smooth_scroll_to(top),
        None => log::debug!("scroll_to_section: no element with id {id:?}"),
    }
}

pub fn smooth_scroll_to(top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

/// Logs every registered section that has no anchor in the document.
pub fn report_missing_anchors() -> Vec<Section> {
    let document = document();
    let missing = Section::ALL
        .iter()
        .copied()
        .filter(|section| document.get_element_by_id(section.id()).is_none())
        .collect::<Vec<_>>();
    for section in &missing {
        log::warn!("section anchor #{section} is missing from the page");
    }
    missing
}
