use axum::Router;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use tower_http::services::ServeDir;
use tracing::info;

use crate::{shell, App};

/// Builds the full application router: compiled client assets under the pkg
/// dir, the Leptos routes, and a fallback that serves site-root files or
/// renders the 404 page.
pub fn router(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);

    let pkg_dir = format!(
        "{}/{}",
        leptos_options.site_root, leptos_options.site_pkg_dir
    );
    info!("Serving client package from `{}`", pkg_dir);

    // static routes must come before the leptos fallback
    let static_routes = Router::new().nest_service(
        &format!("/{}", leptos_options.site_pkg_dir),
        ServeDir::new(&pkg_dir),
    );

    let leptos_app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    static_routes.merge(leptos_app)
}
