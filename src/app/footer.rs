use chrono::Datelike;
use leptos::{ev::MouseEvent, prelude::*};

use crate::content::{OWNER_NAME, TAGLINE};
use crate::sections::Section;

use super::scroll_spy::scroll_to_section;

const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();
    let built = chrono::DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    view! {
        <footer class="py-8 bg-background border-t border-border">
            <div class="container">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <div class="mb-4 md:mb-0">
                        <a
                            href=Section::Home.href()
                            on:click=move |ev: MouseEvent| {
                                ev.prevent_default();
                                scroll_to_section(Section::Home.id());
                            }
                            class="text-xl font-bold text-gradient cursor-pointer"
                        >
                            {OWNER_NAME}
                        </a>
                        <p class="text-sm text-foreground/70 mt-1">{TAGLINE}</p>
                    </div>

                    <div class="text-sm text-foreground/70 flex flex-wrap items-center">
                        <span>"© " {year} " All rights reserved"</span>
                        <span class="mx-2">"•"</span>
                        <span>"Made with " <span class="text-red-500">"♥"</span> " and data"</span>
                        <span class="mx-2">"•"</span>
                        <span title=BUILD_TIME>"Built " {built}</span>
                    </div>
                </div>
            </div>
        </footer>
    }
}
