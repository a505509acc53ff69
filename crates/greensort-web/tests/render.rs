#![cfg(target_arch = "wasm32")]

use greensort_core::{LoadError, LoadState, RankedEntry, LEADERBOARD_ERROR_MESSAGE};
use greensort_web::{EducationPage, LeaderboardTable, LeaderboardView};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div.unchecked_into()
}

fn rows(root: &HtmlElement) -> Vec<Element> {
    let list = root.query_selector_all("tbody tr").unwrap();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn cells(row: &Element) -> Vec<String> {
    let list = row.query_selector_all("td").unwrap();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|node| node.text_content().unwrap_or_default())
        .collect()
}

#[wasm_bindgen_test]
fn test_education_page_renders_identically() {
    let first = container();
    let second = container();
    let _a = leptos::mount::mount_to(first.clone(), EducationPage);
    let _b = leptos::mount::mount_to(second.clone(), EducationPage);

    assert!(!first.inner_html().is_empty());
    assert_eq!(first.inner_html(), second.inner_html());

    let cards = first.query_selector_all(".material-card").unwrap();
    assert_eq!(cards.length(), 6);
}

#[wasm_bindgen_test]
fn test_round_trip_table() {
    let root = container();
    let entries = vec![
        RankedEntry::new("a", "Alice", 120.0, 1),
        RankedEntry::new("b", "Bob", 90.0, 2),
    ];
    let _handle = leptos::mount::mount_to(root.clone(), move || {
        view! { <LeaderboardTable entries=entries.clone() /> }
    });

    let rendered = rows(&root);
    assert_eq!(rendered.len(), 2);
    assert_eq!(cells(&rendered[0]), ["#1", "Alice", "120"]);
    assert_eq!(cells(&rendered[1]), ["#2", "Bob", "90"]);
    assert!(rendered.iter().all(|r| r.class_list().contains("podium")));
}

#[wasm_bindgen_test]
fn test_podium_only_for_top_three() {
    let root = container();
    let entries: Vec<_> = (1..=5)
        .map(|rank| RankedEntry::new(format!("p{rank}"), format!("Player {rank}"), 10.0, rank))
        .collect();
    let _handle = leptos::mount::mount_to(root.clone(), move || {
        view! { <LeaderboardTable entries=entries.clone() /> }
    });

    let podium: Vec<bool> = rows(&root)
        .iter()
        .map(|r| r.class_list().contains("podium"))
        .collect();
    assert_eq!(podium, [true, true, true, false, false]);
}

#[wasm_bindgen_test]
fn test_view_states() {
    let loading = container();
    let _l = leptos::mount::mount_to(loading.clone(), || {
        view! { <LeaderboardView state=Signal::stored(LoadState::<Vec<RankedEntry>>::Loading) /> }
    });
    assert!(loading.query_selector(".spinner").unwrap().is_some());
    assert!(loading.query_selector("table").unwrap().is_none());

    for cause in [
        LoadError::Network("offline".into()),
        LoadError::Status(500),
        LoadError::Malformed("not a list".into()),
    ] {
        let failed = container();
        let _f = leptos::mount::mount_to(failed.clone(), move || {
            view! { <LeaderboardView state=Signal::stored(LoadState::Error(cause.clone())) /> }
        });
        let text = failed.text_content().unwrap_or_default();
        assert_eq!(text.trim(), LEADERBOARD_ERROR_MESSAGE);
        assert!(failed.query_selector("table").unwrap().is_none());
    }

    let empty = container();
    let _e = leptos::mount::mount_to(empty.clone(), || {
        view! { <LeaderboardView state=Signal::stored(LoadState::Ready(Vec::new())) /> }
    });
    assert!(empty.query_selector("table").unwrap().is_some());
    assert!(rows(&empty).is_empty());
    assert!(!empty.text_content().unwrap_or_default().contains(LEADERBOARD_ERROR_MESSAGE));
}
