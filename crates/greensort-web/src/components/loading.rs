use leptos::prelude::*;

/// Busy indicator shown while a fetch is in flight.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading" role="status" aria-busy="true">
            <div class="spinner"></div>
        </div>
    }
}
