use leptos::{html, prelude::*};

use crate::content::TIMELINE;
use crate::reveal::RevealConfig;
use crate::sections::Section;

use super::super::reveal::{reveal_class, use_reveal};
use super::JumpLink;

#[component]
pub fn AboutSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_reveal(section_ref, TIMELINE.len(), RevealConfig::ABOUT);

    view! {
        <section
            id=Section::About.id()
            node_ref=section_ref
            class="section-padding min-h-screen flex flex-col justify-center bg-muted/50 dark:bg-muted/20"
        >
            <div class="container">
                <div class="flex flex-col lg:flex-row gap-12 lg:gap-20 items-center">
                    <div class="w-full lg:w-1/2">
                        <h2 class="text-3xl md:text-4xl font-bold mb-4">"About Me"</h2>
                        <div class="h-1 w-20 bg-primary mb-6 rounded-full"></div>
                        <p class="text-lg text-foreground/80 mb-6 leading-relaxed">
                            "I'm a data analyst with a passion for transforming complex information into clear, actionable insights. My journey in the data world has equipped me with a diverse set of skills and tools."
                        </p>
                        <p class="text-lg text-foreground/80 mb-8 leading-relaxed">
                            "I specialize in data cleaning, exploratory analysis, and creating compelling visualizations that tell a story. My mission is to help businesses make data-driven decisions that drive growth and efficiency."
                        </p>
                        <JumpLink
                            to=Section::Contact
                            link_class="inline-block px-8 py-3 rounded-full bg-primary text-primary-foreground font-medium hover:opacity-90 transition-all cursor-pointer"
                        >
                            "Let's Connect"
                        </JumpLink>
                    </div>

                    <div class="w-full lg:w-1/2">
                        <h3 class="text-2xl font-semibold mb-8 text-center lg:text-left">
                            "My Skills Journey"
                        </h3>
                        <div class="relative pl-8 border-l-2 border-primary/30 space-y-10">
                            {TIMELINE
                                .iter()
                                .enumerate()
                                .map(|(i, item)| {
                                    view! {
                                        <div class=move || {
                                            reveal_class(
                                                "relative",
                                                reveal.get().is_item_visible(i),
                                                "animate-fade-in",
                                            )
                                        }>
                                            <div class="absolute -left-[41px] p-2 rounded-full bg-background shadow-md text-2xl">
                                                {item.icon}
                                            </div>
                                            <div class="card-data hover:border-primary/50 transition-all">
                                                <span class="text-xs font-semibold text-primary">
                                                    {item.year}
                                                </span>
                                                <h4 class="text-xl font-semibold mt-1 mb-2">{item.title}</h4>
                                                <p class="text-foreground/70">{item.description}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
