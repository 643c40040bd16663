use leptos::{either::Either, html, prelude::*, server_fn::codec::GetUrl};

use crate::blog::PostTeaser;
use crate::reveal::RevealConfig;
use crate::sections::Section;

use super::super::reveal::{reveal_class, use_reveal};
use super::SectionHeading;

#[server(input = GetUrl)]
pub async fn get_teasers_server() -> Result<Vec<PostTeaser>, ServerFnError> {
    crate::blog::get_teasers().map_err(|e| {
        tracing::error!("failed to load blog teasers: {e}");
        ServerFnError::new(e.to_string())
    })
}

#[component]
pub fn BlogSection() -> impl IntoView {
    let teasers = Resource::new(|| (), |_| get_teasers_server());

    view! {
        <section id=Section::Blog.id() class="section-padding min-h-screen">
            <div class="container">
                <SectionHeading
                    title="Data Insights Blog"
                    intro="Articles, tutorials, and case studies on data analysis, visualization techniques, and the latest trends in data science."
                />

                <Transition fallback=move || {
                    view! {
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                            <div class="card-data h-80 animate-pulse"></div>
                            <div class="card-data h-80 animate-pulse"></div>
                            <div class="card-data h-80 animate-pulse"></div>
                        </div>
                    }
                }>
                    {move || Suspend::new(async move {
                        match teasers.await {
                            Ok(posts) => Either::Left(view! { <BlogGrid posts /> }),
                            Err(e) => {
                                log::warn!("blog teasers unavailable: {e}");
                                Either::Right(
                                    view! {
                                        <p class="text-center text-foreground/60">
                                            "Articles couldn't be loaded right now."
                                        </p>
                                    },
                                )
                            }
                        }
                    })}
                </Transition>

                <div class="text-center mt-12">
                    <a
                        href="#"
                        class="inline-flex items-center px-6 py-3 rounded-full border border-primary text-primary hover:bg-primary hover:text-primary-foreground transition-all"
                    >
                        "View All Articles →"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn BlogGrid(posts: Vec<PostTeaser>) -> impl IntoView {
    let grid_ref = NodeRef::<html::Div>::new();
    let reveal = use_reveal(grid_ref, posts.len(), RevealConfig::BLOG);

    view! {
        <div node_ref=grid_ref class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
            {posts
                .into_iter()
                .enumerate()
                .map(|(i, post)| {
                    view! {
                        <article class=move || {
                            reveal_class(
                                "card-data group hover:shadow-lg transition-all duration-300 overflow-hidden flex flex-col",
                                reveal.get().is_item_visible(i),
                                "animate-fade-in",
                            )
                        }>
                            <div class="relative h-48 -mx-6 -mt-6 mb-6 overflow-hidden">
                                <img
                                    src=post.image.clone()
                                    alt=post.title.clone()
                                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-105"
                                />
                            </div>
                            <div class="flex items-center text-sm text-foreground/60 mb-3 gap-4">
                                <span>{post.display_date()}</span>
                                <span>{post.display_read_time()}</span>
                            </div>
                            <h3 class="text-xl font-semibold mb-3 group-hover:text-primary transition-colors">
                                {post.title.clone()}
                            </h3>
                            <p class="text-foreground/70 mb-4 flex-grow">{post.snippet.clone()}</p>
                            <div class="flex flex-wrap gap-2 mb-4">
                                {post
                                    .tags
                                    .iter()
                                    .map(|tag| {
                                        view! {
                                            <span class="text-xs py-1 px-2 bg-primary/10 text-primary rounded-full">
                                                {tag.to_string()}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <a
                                href="#"
                                class="inline-flex items-center font-medium text-primary hover:underline mt-auto"
                            >
                                "Read More →"
                            </a>
                        </article>
                    }
                })
                .collect_view()}
        </div>
    }
}
