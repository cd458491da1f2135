#![recursion_limit = "256"]

use app::store::Store;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn documents(fixture: &str) -> axum::Router {
    let dir = format!("tests/data/{}", fixture);
    axum::Router::new().fallback_service(tower_http::services::ServeDir::new(dir))
}

async fn serve(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

// Stands up the site against the given document host and returns the HTML
// the server sends for `/`, the same routing setup as `main`.
async fn render_home(documents_url: String) -> String {
    let leptos_options = LeptosOptions::builder().output_name("folio").build();
    let ctx = app::context::Context {
        leptos_options,
        store: Store::new(documents_url),
    };
    let routes = generate_route_list(app::App);
    let ctx_fn = {
        let ctx = ctx.clone();
        move || provide_context(ctx.store.clone())
    };
    let app_fn = {
        let ctx = ctx.clone();
        move || app::shell(ctx.leptos_options.clone())
    };
    let site = axum::Router::new()
        .leptos_routes_with_context(&ctx, routes, ctx_fn, app_fn)
        .with_state(ctx);
    let site_url = serve(site).await;
    reqwest::get(format!("{}/", site_url))
        .await
        .unwrap()
        .text()
        .await
        .unwrap()
}

#[tokio::test]
async fn home_page_renders_every_populated_section() {
    setup();

    let html = render_home(serve(documents("profile")).await).await;

    assert!(html.contains(r#"id="about""#));
    assert!(html.contains(r#"id="experience""#));
    assert!(html.contains(r#"id="projects""#));
    assert!(html.contains(r#"id="blog""#));
    assert!(html.contains(r#"id="skills""#));
    assert!(html.contains("Featured Projects"));
    assert!(html.contains("Work Experience"));
    assert!(html.contains("Technical Writing"));
    assert!(html.contains("Technical Skills"));
    assert!(html.contains("Analytical Engine Programmer"));
    assert!(html.contains("Read article"));
    assert!(html.contains("Domain: "));
    assert!(html.contains("All rights reserved"));
}

#[tokio::test]
async fn home_page_links_socials_in_nav_and_footer() {
    setup();

    let html = render_home(serve(documents("profile")).await).await;

    assert_eq!(2, html.matches(r#"href="https://github.com/ada""#).count());
    assert_eq!(
        2,
        html.matches(r#"href="https://www.linkedin.com/in/ada-lovelace""#)
            .count()
    );
    assert_eq!(2, html.matches(r#"href="mailto:ada@example.net""#).count());
    assert!(html.contains(r#"href="https://github.com/ada/portfolio""#));
}

#[tokio::test]
async fn home_page_omits_sections_without_data() {
    setup();

    let html = render_home(serve(documents("sparse")).await).await;

    assert!(html.contains(r#"id="about""#));
    assert!(!html.contains(r#"id="experience""#));
    assert!(!html.contains(r#"id="projects""#));
    assert!(!html.contains(r#"id="blog""#));
    assert!(!html.contains(r#"id="skills""#));
    // The nav follows the sections, so no anchor points into a gap.
    assert!(html.contains(r##"href="#about""##));
    assert!(!html.contains(r##"href="#experience""##));
    assert!(!html.contains(r##"href="#projects""##));
    assert!(!html.contains(r##"href="#blog""##));
    assert!(!html.contains(r##"href="#skills""##));
}

#[tokio::test]
async fn home_page_keeps_document_order() {
    setup();

    let html = render_home(serve(documents("profile")).await).await;

    let first = html.find("Cut mill cycle times by a third").unwrap();
    let second = html.find("Wrote the operator handbook").unwrap();
    assert!(first < second);
    let emulator = html.find("Difference Engine Emulator").unwrap();
    let compiler = html.find("Punch Card Compiler").unwrap();
    assert!(emulator < compiler);
    let engines = html.find("Notes on engines").unwrap();
    let bernoulli = html.find("Computing Bernoulli numbers").unwrap();
    assert!(engines < bernoulli);
}

#[tokio::test]
async fn home_page_starts_with_the_mobile_panel_closed() {
    setup();

    let html = render_home(serve(documents("profile")).await).await;

    assert!(html.contains("menu-toggle"));
    assert!(html.contains("\u{2630}"));
    assert!(!html.contains("mobile-links"));
}

#[tokio::test]
async fn home_page_reports_upstream_failures() {
    setup();

    let router = documents("profile").route(
        "/personalinfo.json",
        axum::routing::get(|| async {
            (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "mill jammed")
        }),
    );
    let html = render_home(serve(router).await).await;

    assert!(html.contains("Error fetching data. Please try again later!"));
    assert!(!html.contains(r#"id="about""#));
}
