#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use bizlist_web::server;
    use leptos::prelude::*;
    use tracing::info;
    use tracing_subscriber::EnvFilter;

    // Initialize tracing, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Setting get_configuration(None) means we'll be using cargo-leptos's env values,
    // LEPTOS_SITE_ADDR overrides the bind address
    let conf = get_configuration(None).expect("Failed to read Leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app = server::router(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind {}: {}", addr, e));
    info!("BizList web listening on http://{}", &addr);
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for the hydration entry point instead
}
