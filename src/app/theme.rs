use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::{storage::use_local_storage, use_preferred_dark};

use crate::theme::{resolve_theme, Theme, DARK_CLASS, THEME_STORAGE_KEY};

#[derive(Clone, Copy)]
pub struct ThemeState {
    pub theme: Signal<Theme>,
    set_flag: WriteSignal<String>,
}

impl ThemeState {
    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        log::debug!("theme -> {next}");
        self.set_flag.set(next.flag().to_string());
    }
}

/// Resolves the theme from storage and the platform preference, keeps the
/// root `dark` class in sync and shares the state with every toggle.
pub fn provide_theme() {
    let (flag, set_flag, _) = use_local_storage::<String, FromToStringCodec>(THEME_STORAGE_KEY);
    let prefers_dark = use_preferred_dark();
    let theme = Signal::derive(move || {
        let stored = flag.get();
        resolve_theme(Some(stored.as_str()), prefers_dark.get())
    });

    Effect::new(move |_| apply_theme(theme.get()));

    provide_context(ThemeState { theme, set_flag });
}

fn apply_theme(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    if let Err(err) = root
        .class_list()
        .toggle_with_force(DARK_CLASS, theme.is_dark())
    {
        log::warn!("couldn't apply theme: {err:?}");
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = expect_context::<ThemeState>();
    let label = move || {
        if state.theme.get().is_dark() {
            "Switch to light theme"
        } else {
            "Switch to dark theme"
        }
    };
    view! {
        <button
            class="p-2 rounded-full hover:bg-primary/10 transition-colors"
            aria-label=label
            title=label
            on:click=move |_| state.toggle()
        >
            {move || if state.theme.get().is_dark() { "☀️" } else { "🌙" }}
        </button>
    }
}
