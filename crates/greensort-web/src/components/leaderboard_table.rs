use greensort_core::{leaderboard_rows, RankedEntry};
use leptos::prelude::*;

/// Ranked table in server order. Ranks are printed as received.
#[component]
pub fn LeaderboardTable(entries: Vec<RankedEntry>) -> impl IntoView {
    let rows = leaderboard_rows(&entries);

    view! {
        <div class="table-card">
            <table class="leaderboard-table">
                <thead>
                    <tr>
                        <th scope="col">"Rank"</th>
                        <th scope="col">"User"</th>
                        <th scope="col">"Points"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.clone()
                        key=|row| row.key.clone()
                        let:row
                    >
                        <tr class=row.row_class()>
                            <td class="rank-cell">{row.rank_label.clone()}</td>
                            <td class="name-cell">{row.display_name.clone()}</td>
                            <td class="score-cell">{row.score_label.clone()}</td>
                        </tr>
                    </For>
                </tbody>
            </table>
        </div>
    }
}
