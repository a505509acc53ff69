use greensort_core::{BADGE_TIERS, EDUCATION_HEADING, MATERIAL_CARDS, POINTS_PER_ITEM};
use leptos::prelude::*;

use crate::components::material_card::MaterialCardView;

/// Static reference page. Takes no input and renders the same markup every time.
#[component]
pub fn EducationPage() -> impl IntoView {
    view! {
        <div class="page education-page">
            <h2>{EDUCATION_HEADING}</h2>

            <div class="card-grid">
                {MATERIAL_CARDS
                    .iter()
                    .map(|card| view! { <MaterialCardView card=card /> })
                    .collect_view()}
            </div>

            <section class="badges-section">
                <h3>"Badges"</h3>
                <p>{format!("Every correctly sorted item earns {} points. Collect points to climb the badge ladder.", POINTS_PER_ITEM)}</p>
                <table class="badge-table">
                    <thead>
                        <tr>
                            <th scope="col">"Badge"</th>
                            <th scope="col">"Points needed"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {BADGE_TIERS
                            .iter()
                            .rev()
                            .map(|tier| {
                                view! {
                                    <tr>
                                        <td>
                                            <span
                                                class="badge-swatch"
                                                style=format!("background-color: {}", tier.color)
                                            ></span>
                                            {tier.label()}
                                        </td>
                                        <td>{tier.threshold}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </section>
        </div>
    }
}
