use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NavTabs() -> impl IntoView {
    view! {
        <nav class="nav-tabs">
            <A href="/education" attr:class="nav-tab">"Education"</A>
            <A href="/leaderboard" attr:class="nav-tab">"Leaderboard"</A>
        </nav>
    }
}
