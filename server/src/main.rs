#![recursion_limit = "256"]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use leptos::prelude::*;

use app::content::Site;

const LEPTOS_SERVER_FN_URL_PATH: &str = "/api/{*fn_name}";

/// Directory holding `site.yml`, `theme.yml` and `backgrounds.yml`.
const CONTENT_DIR_ENV: &str = "FOLIO_CONTENT_DIR";
const DEFAULT_CONTENT_DIR: &str = "content";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use leptos_axum::{generate_route_list, LeptosRoutes};

    env_logger::init();

    let conf = get_configuration(None).context("Could not read the Leptos configuration")?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;

    let content_dir = std::env::var_os(CONTENT_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_DIR));
    let site = Site::load(&content_dir)
        .with_context(|| format!("Could not load the site content from {:?}", content_dir))?;

    let ctx = app::context::Context {
        leptos_options: leptos_options.clone(),
        site: Arc::new(site),
    };
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(app::App);
    let ctx_fn = {
        let ctx = ctx.clone();
        move || ctx.provide()
    };
    let app_fn = {
        let ctx = ctx.clone();
        move || app::shell(ctx.leptos_options.clone())
    };

    let leptos_server_fn_method_router =
        axum::routing::get(leptos_server_fn_axum_handler)
            .post(leptos_server_fn_axum_handler);
    let app = axum::Router::new()
        .route(LEPTOS_SERVER_FN_URL_PATH, leptos_server_fn_method_router)
        .leptos_routes_with_context(&ctx, routes, ctx_fn, app_fn)
        .fallback(leptos_axum::file_and_error_handler::<app::context::Context, _>(app::shell))
        .with_state(ctx);

    log::info!("listening in {:?} on http://{}", &leptos_options.env, &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Could not bind {}", addr))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;
    Ok(())
}

async fn leptos_server_fn_axum_handler(
    axum::extract::State(ctx): axum::extract::State<app::context::Context>,
    request: axum::extract::Request<axum::body::Body>,
) -> impl axum::response::IntoResponse {
    let additional_context = move || ctx.provide();
    leptos_axum::handle_server_fns_with_context(additional_context, request)
        .await
}
