use crate::{components::Footer, pages::*};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router_macro::path;

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // compiled by cargo-leptos from style/tailwind.css
        <Stylesheet id="leptos" href="/pkg/bizlist-web.css"/>

        <Title text="BizList"/>

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </main>
        </Router>

        <Footer/>
    }
}

/// 404 - Not Found
#[component]
pub fn NotFound() -> impl IntoView {
    // status can only be set during the initial server-side render
    #[cfg(feature = "ssr")]
    {
        let path = leptos_router::hooks::use_location().pathname.get_untracked();
        tracing::info!("Path not found: {}", path);

        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <h1 class="p-6">"Not Found"</h1>
    }
}

#[cfg(feature = "ssr")]
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}
