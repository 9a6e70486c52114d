pub mod components;
pub mod content;
#[cfg(feature = "ssr")]
pub mod context;
pub mod pages;
pub mod theme;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet};
use leptos_router::{
    components::{Route, Router, Routes},
    SsrMode, StaticSegment,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body id="top">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/folio.css"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                // The landing page is static content: render it completely on
                // the server so the hero and its stylesheet come in one response.
                <Route
                    path=StaticSegment("")
                    view=pages::home::Index
                    ssr=SsrMode::Async
                />
            </Routes>
        </Router>
    }
}
