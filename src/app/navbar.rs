use leptos::{ev::MouseEvent, prelude::*};

use crate::content::SITE_NAME;
use crate::scroll::{NAVBAR_SCROLLED_THRESHOLD, SPY_OFFSET};
use crate::sections::Section;

use super::scroll_spy::{scroll_to_section, use_scroll_spy, use_scrolled_past};
use super::theme::ThemeToggle;

#[component]
pub fn Navbar() -> impl IntoView {
    let active = use_scroll_spy(Section::ALL, SPY_OFFSET);
    let is_scrolled = use_scrolled_past(NAVBAR_SCROLLED_THRESHOLD);
    let (menu_open, set_menu_open) = signal(false);

    let on_select = Callback::new(move |section: Section| {
        scroll_to_section(section.id());
        set_menu_open.set(false);
    });

    view! {
        <nav class=move || {
            if is_scrolled.get() {
                "fixed top-0 left-0 w-full z-50 transition-all duration-300 bg-white/80 dark:bg-background/80 shadow-md backdrop-blur-md py-3"
            } else {
                "fixed top-0 left-0 w-full z-50 transition-all duration-300 bg-transparent py-5"
            }
        }>
            <div class="container flex justify-between items-center">
                <a
                    href=Section::Home.href()
                    on:click=move |ev: MouseEvent| {
                        ev.prevent_default();
                        on_select.run(Section::Home);
                    }
                    class="text-2xl font-bold text-gradient cursor-pointer"
                >
                    {SITE_NAME}
                </a>

                <div class="hidden md:flex items-center gap-8">
                    <ul class="flex items-center gap-6">
                        <NavLinks active on_select item_class="font-medium" />
                    </ul>
                    <ThemeToggle />
                </div>

                <div class="flex md:hidden items-center gap-4">
                    <ThemeToggle />
                    <button
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        class="text-foreground text-2xl"
                        aria-label="Toggle menu"
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="md:hidden absolute top-full left-0 w-full bg-background border-t border-border animate-fade-in">
                    <ul class="flex flex-col py-4">
                        <NavLinks
                            active
                            on_select
                            item_class="block py-3 px-6 hover:bg-primary/10"
                        />
                    </ul>
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn NavLinks(
    active: ReadSignal<Option<Section>>,
    on_select: Callback<Section>,
    item_class: &'static str,
) -> impl IntoView {
    Section::ALL
        .iter()
        .copied()
        .map(|section| {
            let class = move || {
                let state = if active.get() == Some(section) {
                    "text-primary"
                } else {
                    "text-foreground/80 hover:text-primary"
                };
                format!("{item_class} {state} transition-colors cursor-pointer")
            };
            view! {
                <li>
                    <a
                        href=section.href()
                        class=class
                        on:click=move |ev: MouseEvent| {
                            ev.prevent_default();
                            on_select.run(section);
                        }
                    >
                        {section.label()}
                    </a>
                </li>
            }
        })
        .collect_view()
}
