use greensort_core::{
    load_leaderboard, CancellationToken, GreenSortConfig, LoadState, RankedEntry,
    LEADERBOARD_ERROR_MESSAGE,
};
use leptos::prelude::*;

use crate::api::HttpLeaderboardSource;
use crate::components::leaderboard_table::LeaderboardTable;
use crate::components::loading::Loading;
use crate::diagnostics::ConsoleSink;

#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let config = use_context::<GreenSortConfig>().unwrap_or_default();
    let (state, set_state) = signal(LoadState::<Vec<RankedEntry>>::Loading);

    // Owned by this mount; cancelled on unmount so a late response is dropped.
    let token = CancellationToken::new();
    on_cleanup({
        let token = token.clone();
        move || token.cancel()
    });

    let source = HttpLeaderboardSource::new(config.leaderboard.endpoint);
    wasm_bindgen_futures::spawn_local(async move {
        load_leaderboard(&source, &ConsoleSink, &token, |next| set_state.set(next)).await;
    });

    view! { <LeaderboardView state=state /> }
}

/// Markup for each lifecycle state.
#[component]
pub fn LeaderboardView(#[prop(into)] state: Signal<LoadState<Vec<RankedEntry>>>) -> impl IntoView {
    move || match state.get() {
        LoadState::Loading => view! { <Loading /> }.into_any(),
        LoadState::Error(_) => view! {
            <div class="page leaderboard-page">
                <div class="error-banner" role="alert">
                    <p>{LEADERBOARD_ERROR_MESSAGE}</p>
                </div>
            </div>
        }
        .into_any(),
        LoadState::Ready(entries) => view! {
            <div class="page leaderboard-page">
                <h2>"Leaderboard"</h2>
                <LeaderboardTable entries=entries />
            </div>
        }
        .into_any(),
    }
}
