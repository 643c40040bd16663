mod about;
mod blog;
mod contact;
mod hero;
mod playground;
mod projects;
mod skills;

pub use about::AboutSection;
pub use blog::BlogSection;
pub use contact::ContactSection;
pub use hero::HeroSection;
pub use playground::PlaygroundSection;
pub use projects::ProjectsSection;
pub use skills::SkillsSection;

use leptos::{ev::MouseEvent, prelude::*};

use crate::sections::Section;

use super::scroll_spy::scroll_to_section;

/// Centered section title with the accent rule and intro paragraph.
#[component]
fn SectionHeading(title: &'static str, intro: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-12">
            <h2 class="text-3xl md:text-4xl font-bold mb-4">{title}</h2>
            <div class="h-1 w-20 bg-primary mb-6 rounded-full mx-auto"></div>
            <p class="text-lg text-foreground/80 max-w-3xl mx-auto">{intro}</p>
        </div>
    }
}

/// In-page link that smooth-scrolls to `to` instead of jumping.
#[component]
fn JumpLink(
    to: Section,
    link_class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=to.href()
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                scroll_to_section(to.id());
            }
            class=link_class
        >
            {children()}
        </a>
    }
}
