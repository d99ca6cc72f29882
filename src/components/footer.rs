use leptos::prelude::*;

/// Outbound destination of the footer link.
pub const SITE_URL: &str = "https://ericdevelops.com/";
/// Visible label of the footer link.
pub const SITE_LABEL: &str = "ericdevelops";

/// Tailwind classes for the footer container: padded everywhere, pinned to
/// the bottom-left corner on `lg` viewports and up.
pub const FOOTER_CLASS: &str = "p-6 lg:fixed lg:bottom-0 lg:left-0";
pub const LINK_CLASS: &str = "mt-4 inline-block underline";

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class=FOOTER_CLASS>
            "visit "
            <a href=SITE_URL target="_blank" rel="noopener noreferrer" class=LINK_CLASS>
                {SITE_LABEL}
            </a>
        </footer>
    }
}
