mod cards;
mod header;
mod homepage;
mod reveal;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

pub use cards::{ProjectCard, SkillCard};
pub use header::NavBar;
pub use homepage::HomePage;
pub use reveal::{HeadingRef, IntersectionViewport, SectionHeading, Viewport};

use crate::content::OWNER;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio.css" />
                <MetaTags />
            </head>
            <body class="bg-gradient-to-br from-gray-950 via-gray-900 to-black text-gray-100 min-h-screen font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    // Section headings observe the real viewport unless a caller provided another one.
    if use_context::<Viewport>().is_none() {
        provide_context(Viewport::intersection());
    }

    view! {
        <Title formatter=|title| format!("{OWNER} | {title}") />

        <Router>
            <NavBar />
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}
