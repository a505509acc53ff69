use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"GreenSort"</h1>
            <span class="subtitle">"Sort smarter, recycle better"</span>
        </header>
    }
}
