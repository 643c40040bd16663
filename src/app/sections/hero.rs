use leptos::prelude::*;

use crate::sections::Section;

use super::JumpLink;

const GLYPH_COUNT: u32 = 20;

/// Stable pseudo-random value in `0.0..1.0` for glyph `i`.
///
/// Positions must match between the server render and hydration, so they are
/// derived from the index instead of a random source.
fn jitter(i: u32, salt: u32) -> f32 {
    let h = (i + 1).wrapping_mul(2_654_435_761) ^ salt.wrapping_mul(40_503);
    (h % 1000) as f32 / 1000.0
}

fn glyph_style(i: u32) -> String {
    format!(
        "top: {:.0}%; left: {:.0}%; animation: float {:.1}s ease-in-out infinite; animation-delay: {:.1}s; transform: scale({:.2}); font-size: {}",
        jitter(i, 1) * 100.0,
        jitter(i, 2) * 100.0,
        3.0 + jitter(i, 3) * 5.0,
        jitter(i, 4) * 5.0,
        0.5 + jitter(i, 5),
        if jitter(i, 6) > 0.5 { "2rem" } else { "1.5rem" },
    )
}

fn glyph_text(i: u32) -> &'static str {
    match jitter(i, 7) {
        r if r > 0.7 => "{data}",
        r if r > 0.35 => "</>",
        _ => "SELECT *",
    }
}

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section id=Section::Home.id() class="min-h-screen flex items-center relative overflow-hidden">
            <div class="absolute inset-0 data-flow-bg opacity-50 -z-10"></div>

            <div class="absolute inset-0 -z-10 overflow-hidden" aria-hidden="true">
                {(0..GLYPH_COUNT)
                    .map(|i| {
                        view! {
                            <div
                                class="absolute opacity-20 dark:opacity-30 text-primary"
                                style=glyph_style(i)
                            >
                                {glyph_text(i)}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="container flex flex-col items-center justify-center text-center z-10">
                <h1 class="text-4xl md:text-6xl lg:text-7xl font-bold mb-6 leading-tight">
                    <span class="text-gradient">"Turning Data"</span>
                    " into "
                    <br />
                    <span class="inline-block mt-2 animate-pulse-glow">"Decisions"</span>
                </h1>

                <p class="text-lg md:text-xl text-foreground/80 max-w-2xl mb-8 leading-relaxed">
                    "Data analyst specializing in transforming complex datasets into actionable business insights through powerful visualizations and data storytelling."
                </p>

                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <JumpLink
                        to=Section::Projects
                        link_class="px-8 py-3 rounded-full bg-primary text-primary-foreground font-medium hover:opacity-90 transition-all cursor-pointer"
                    >
                        "View My Work"
                    </JumpLink>
                    <JumpLink
                        to=Section::Contact
                        link_class="px-8 py-3 rounded-full bg-secondary text-secondary-foreground font-medium hover:opacity-90 transition-all cursor-pointer"
                    >
                        "Get In Touch"
                    </JumpLink>
                </div>

                <JumpLink
                    to=Section::About
                    link_class="absolute bottom-10 left-1/2 -translate-x-1/2 animate-bounce text-3xl text-primary cursor-pointer"
                >
                    "↓"
                </JumpLink>
            </div>
        </section>
    }
}
