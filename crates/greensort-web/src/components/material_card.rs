use greensort_core::MaterialCard;
use leptos::prelude::*;

#[component]
pub fn MaterialCardView(card: &'static MaterialCard) -> impl IntoView {
    let code = card.plastic.map(|p| p.code()).unwrap_or("general");

    view! {
        <div class="material-card" data-plastic=code>
            <h3>{card.title}</h3>
            <p>{card.summary}</p>
            <ul class="tips">
                {card.tips.iter().map(|tip| view! { <li>{*tip}</li> }).collect_view()}
            </ul>
        </div>
    }
}
