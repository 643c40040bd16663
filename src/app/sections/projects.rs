use leptos::{html, prelude::*};

use crate::content::{filter_projects, Project, ALL_CATEGORY, PROJECT_CATEGORIES};
use crate::reveal::RevealConfig;
use crate::sections::Section;

use super::super::reveal::{reveal_class, use_reveal};
use super::SectionHeading;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let (category, set_category) = signal(ALL_CATEGORY);

    view! {
        <section
            id=Section::Projects.id()
            class="section-padding min-h-screen bg-muted/30 dark:bg-muted/10"
        >
            <div class="container">
                <SectionHeading
                    title="Featured Projects"
                    intro="Explore my data analysis projects, from interactive dashboards to in-depth analytical studies and data pipeline implementations."
                />

                <div class="flex flex-wrap justify-center gap-3 mb-12">
                    {PROJECT_CATEGORIES
                        .iter()
                        .map(|c| {
                            view! {
                                <button
                                    class=move || {
                                        if category.get() == c.id {
                                            "px-4 py-2 rounded-full text-sm font-medium transition-all bg-primary text-primary-foreground"
                                        } else {
                                            "px-4 py-2 rounded-full text-sm font-medium transition-all bg-background hover:bg-primary/10"
                                        }
                                    }
                                    on:click=move |_| set_category.set(c.id)
                                >
                                    {c.name}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                // a fresh grid per category, so the new cards get their own reveal
                {move || view! { <ProjectGrid projects=filter_projects(category.get()) /> }}
            </div>
        </section>
    }
}

#[component]
fn ProjectGrid(projects: Vec<&'static Project>) -> impl IntoView {
    let grid_ref = NodeRef::<html::Div>::new();
    let reveal = use_reveal(grid_ref, projects.len(), RevealConfig::PROJECTS);

    view! {
        <div node_ref=grid_ref class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
            {projects
                .into_iter()
                .enumerate()
                .map(|(i, project)| {
                    view! {
                        <div class=move || {
                            reveal_class(
                                "group relative rounded-xl overflow-hidden card-data hover:shadow-lg transition-all duration-300",
                                reveal.get().is_item_visible(i),
                                "animate-fade-in",
                            )
                        }>
                            <ProjectCard project />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="relative overflow-hidden h-56">
            <img
                src=project.image
                alt=project.title
                class="w-full h-full object-cover object-center transition-transform duration-700 group-hover:scale-110"
            />
            <div class="absolute inset-0 bg-gradient-to-t from-black/80 via-black/50 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex flex-col justify-end p-6">
                <div class="flex gap-2 mb-3">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="text-xs py-1 px-2 bg-white/20 rounded-full backdrop-blur-sm text-white">
                                    "#" {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
        <div class="p-6">
            <div class="flex items-start justify-between mb-3">
                <h3 class="text-xl font-semibold">{project.title}</h3>
                <div class="p-2 bg-primary/10 rounded-full">{project.icon}</div>
            </div>
            <p class="text-foreground/70 mb-4 line-clamp-3">{project.description}</p>
            <a href="#" class="inline-flex items-center font-medium text-primary group-hover:underline">
                "View Project →"
            </a>
        </div>
    }
}
