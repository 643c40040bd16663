use leptos::{html, prelude::*};

use crate::content::SKILL_CATEGORIES;
use crate::reveal::RevealConfig;
use crate::sections::Section;

use super::super::reveal::{reveal_class, use_reveal};
use super::SectionHeading;

#[component]
pub fn SkillsSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_reveal(section_ref, SKILL_CATEGORIES.len(), RevealConfig::SKILLS);

    view! {
        <section id=Section::Skills.id() node_ref=section_ref class="section-padding bg-background">
            <div class="container">
                <SectionHeading
                    title="Technical Skills"
                    intro="My toolkit for turning raw data into actionable business insights, with expertise in various data technologies and visualization tools."
                />

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            view! {
                                <div class=move || {
                                    reveal_class(
                                        "card-data relative hover:shadow-lg transition-all duration-300 overflow-hidden group",
                                        reveal.get().is_item_visible(i),
                                        "animate-scale-in",
                                    )
                                }>
                                    <div class="absolute top-0 left-0 w-full h-1 bg-gradient-to-r from-primary via-secondary to-accent origin-left scale-x-0 group-hover:scale-x-100 transition-transform duration-500"></div>
                                    <div class="flex items-center mb-6">
                                        <div class="p-3 rounded-lg bg-primary/10 mr-4 text-3xl group-hover:bg-primary/20 transition-colors">
                                            {category.icon}
                                        </div>
                                        <h3 class="text-xl font-semibold">{category.title}</h3>
                                    </div>
                                    <p class="text-foreground/70 mb-6">{category.description}</p>
                                    <div class="space-y-4">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <div>
                                                        <div class="flex justify-between mb-1">
                                                            <span class="font-medium">{skill.name}</span>
                                                            <span class=category.badge_class>{skill.level} "%"</span>
                                                        </div>
                                                        <div class="w-full bg-muted rounded-full h-2 overflow-hidden">
                                                            <div
                                                                class="h-full rounded-full bg-gradient-to-r from-primary to-secondary group-hover:animate-pulse-glow"
                                                                style=format!("width: {}%", skill.level)
                                                            ></div>
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
