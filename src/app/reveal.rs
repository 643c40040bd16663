use leptos::{ev, html::ElementType, prelude::*};
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;

use crate::reveal::{stagger_delays, visible_fraction, RevealConfig, RevealEvent, RevealState};

/// Drives a [`RevealState`] for the element behind `target`.
///
/// Visibility is checked once after mount and then on every scroll until the
/// threshold is crossed. From then on the scroll listener is dropped and
/// `items` timers advance the state. Pending timers are cleared when the
/// owning component is disposed.
pub fn use_reveal<E>(target: NodeRef<E>, items: usize, config: RevealConfig) -> ReadSignal<RevealState>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let (state, set_state) = signal(RevealState::Hidden);
    let timers = StoredValue::new(Vec::<TimeoutHandle>::new());

    let fraction_on_screen = move || -> Option<f64> {
        let el = target.get_untracked()?;
        let rect = el.unchecked_ref::<web_sys::Element>().get_bounding_client_rect();
        let viewport = window().inner_height().ok()?.as_f64()?;
        Some(visible_fraction(rect.top(), rect.height(), viewport))
    };

    let check = move || {
        if !state.get_untracked().is_armed() {
            return;
        }
        match fraction_on_screen() {
            Some(fraction) if fraction >= config.threshold => {}
            _ => return,
        }
        set_state.update(|s| *s = s.transition(RevealEvent::ThresholdCrossed { items }));
        let handles = stagger_delays(items, config.stagger)
            .into_iter()
            .filter_map(|delay| {
                set_timeout_with_handle(
                    move || set_state.update(|s| *s = s.transition(RevealEvent::ItemShown)),
                    delay,
                )
                .ok()
            })
            .collect::<Vec<_>>();
        timers.set_value(handles);
    };

    Effect::new(move |_| check());
    let stop = use_event_listener(use_window(), ev::scroll, move |_| check());
    Effect::new(move |_| {
        if !state.get().is_armed() {
            stop();
        }
    });

    on_cleanup(move || {
        timers.try_update_value(|handles| handles.drain(..).for_each(|h| h.clear()));
    });

    state
}

/// Class list for a revealable item: hidden until its turn comes up.
pub fn reveal_class(base: &str, visible: bool, animation: &str) -> String {
    if visible {
        format!("{base} {animation}")
    } else {
        format!("{base} opacity-0")
    }
}
