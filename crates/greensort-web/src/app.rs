use greensort_core::GreenSortConfig;
use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::header::Header;
use crate::components::nav::NavTabs;
use crate::pages::{education::EducationPage, leaderboard::LeaderboardPage};

#[component]
pub fn App(#[prop(optional)] config: Option<GreenSortConfig>) -> impl IntoView {
    provide_context(config.unwrap_or_default());

    view! {
        <Router>
            <div class="app">
                <Header />
                <NavTabs />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=EducationPage />
                        <Route path=path!("/education") view=EducationPage />
                        <Route path=path!("/leaderboard") view=LeaderboardPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
