use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="app-footer">
            <span>"Connextar \u{00B7} Redbooth / Clockify time reconciliation"</span>
        </footer>
    }
}
