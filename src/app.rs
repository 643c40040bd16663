mod footer;
mod navbar;
mod reveal;
mod scroll_spy;
mod scroll_to_top;
mod sections;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::TAGLINE;

use footer::Footer;
use navbar::Navbar;
use scroll_to_top::ScrollToTop;
use sections::{
    AboutSection, BlogSection, ContactSection, HeroSection, PlaygroundSection, ProjectsSection,
    SkillsSection,
};
use theme::provide_theme;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/dataviz-portfolio.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_theme();

    view! {
        <Title formatter=|title| format!("DataViz - {title}") />
        <Meta name="description" content=TAGLINE />

        <Router>
            <div class="min-h-screen bg-background text-foreground overflow-x-hidden">
                <Navbar />
                <ScrollToTop />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

/// The whole site: every section, in page order.
#[component]
fn HomePage() -> impl IntoView {
    Effect::new(move |_| {
        scroll_spy::report_missing_anchors();
    });

    view! {
        <Title text=TAGLINE />
        <HeroSection />
        <AboutSection />
        <SkillsSection />
        <ProjectsSection />
        <PlaygroundSection />
        <BlogSection />
        <ContactSection />
    }
}
