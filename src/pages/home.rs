use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="p-6">
            <h1 class="text-2xl font-bold">"BizList"</h1>
            <p>"Find and export local business contacts."</p>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn test_home_page_has_heading() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <HomePage/> }.to_html());
        assert!(html.contains("<h1"));
        assert!(html.contains("BizList"));
    }
}
