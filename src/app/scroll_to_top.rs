use leptos::prelude::*;

use crate::scroll::SCROLL_TO_TOP_THRESHOLD;

use super::scroll_spy::{smooth_scroll_to, use_scrolled_past};

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let visible = use_scrolled_past(SCROLL_TO_TOP_THRESHOLD);

    view! {
        <button
            on:click=move |_| smooth_scroll_to(0.0)
            class=move || {
                let state = if visible.get() {
                    "opacity-100 translate-y-0"
                } else {
                    "opacity-0 translate-y-10 pointer-events-none"
                };
                format!(
                    "fixed bottom-6 right-6 p-3 rounded-full bg-primary text-primary-foreground shadow-lg z-50 transition-all duration-300 transform {state}",
                )
            }
            aria-label="Scroll to top"
        >
            "↑"
        </button>
    }
}
