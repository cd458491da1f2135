pub mod components;
#[cfg(feature = "ssr")]
pub mod context;
pub mod pages;
pub mod store;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    SsrMode, StaticSegment,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Single-page profile: featured projects, work experience, technical writing, and skills."/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
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
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/folio.css"/>

        // default document title; the home page swaps in the profile name
        // once the data has loaded
        <Title text="Portfolio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                // The whole site is one scrollable page and navigation within
                // it is all same-page anchors. The profile resource blocks, so
                // on first load the server streams the finished page.
                <Route
                    path=StaticSegment("")
                    view=pages::home::Index
                    ssr=SsrMode::PartiallyBlocked
                />
            </Routes>
        </Router>
    }
}
