use leptos::{html, prelude::*};

use crate::content::{chart_by_id, Chart, CHARTS};
use crate::reveal::RevealConfig;
use crate::sections::Section;

use super::super::reveal::{reveal_class, use_reveal};
use super::SectionHeading;

#[component]
pub fn PlaygroundSection() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(CHARTS[0].id);

    view! {
        <section
            id=Section::Playground.id()
            class="section-padding min-h-screen bg-muted/30 dark:bg-muted/10"
        >
            <div class="container">
                <SectionHeading
                    title="Interactive Data Playground"
                    intro="Explore interactive data visualizations and dashboards. Filter, sort, and analyze the data to uncover insights on your own."
                />

                <div class="flex flex-wrap justify-center gap-3 mb-8">
                    {CHARTS
                        .iter()
                        .map(|chart| {
                            view! {
                                <button
                                    class=move || {
                                        if active_tab.get() == chart.id {
                                            "flex items-center gap-2 px-4 py-2 rounded-full text-sm font-medium transition-all bg-primary text-primary-foreground"
                                        } else {
                                            "flex items-center gap-2 px-4 py-2 rounded-full text-sm font-medium transition-all bg-background hover:bg-primary/10"
                                        }
                                    }
                                    on:click=move |_| set_active_tab.set(chart.id)
                                >
                                    <span>{chart.icon}</span>
                                    <span>{chart.title}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                {move || view! { <ChartPanel chart=chart_by_id(active_tab.get()) /> }}
            </div>
        </section>
    }
}

#[component]
fn ChartPanel(chart: &'static Chart) -> impl IntoView {
    let embed_ref = NodeRef::<html::Div>::new();
    let reveal = use_reveal(embed_ref, 1, RevealConfig::PLAYGROUND);

    view! {
        <div class="card-data border-primary/20 rounded-xl p-6 lg:p-8">
            <div class="flex flex-col lg:flex-row gap-6 mb-8">
                <div class="w-full lg:w-3/4">
                    <h3 class="text-2xl font-semibold mb-2">{chart.title}</h3>
                    <p class="text-foreground/70">{chart.description}</p>
                </div>

                // display only: the embed is a static placeholder
                <div class="w-full lg:w-1/4 lg:border-l lg:border-border lg:pl-6">
                    <div class="flex items-center gap-2 mb-4 text-primary font-medium">
                        <span>"⏷"</span>
                        <span>"Dashboard Filters"</span>
                    </div>
                    <div class="space-y-4">
                        {chart
                            .filters
                            .iter()
                            .map(|filter| {
                                view! {
                                    <div class="space-y-2">
                                        <label class="text-sm font-medium">{*filter}</label>
                                        <select class="w-full p-2 rounded-md border border-border bg-background focus:ring-2 focus:ring-primary/50 outline-none">
                                            <option value="all">"All " {*filter} "s"</option>
                                            <option value="option1">"Option 1"</option>
                                            <option value="option2">"Option 2"</option>
                                            <option value="option3">"Option 3"</option>
                                        </select>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div
                node_ref=embed_ref
                class=move || {
                    reveal_class(
                        "w-full bg-background overflow-hidden rounded-lg border border-border",
                        reveal.get().is_item_visible(0),
                        "animate-fade-in",
                    )
                }
            >
                <img src=chart.embed_url alt=chart.title class="w-full h-96 object-cover" />
                <div class="p-4 bg-muted/30 text-center">
                    <p class="text-sm text-foreground/60">
                        "Note: This is a placeholder for an interactive dashboard. In a real implementation, this would be an embedded Tableau Public visualization, a Plotly chart, or a similar interactive tool."
                    </p>
                    <a
                        href=chart.embed_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center mt-2 text-primary hover:underline text-sm font-medium"
                    >
                        "Open in full screen →"
                    </a>
                </div>
            </div>
        </div>
    }
}
