//! Party List Component
//!
//! Names of all parties; clicking one loads its details.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_planner;
use crate::store::use_planner_store;
use crate::view_model::{self, PartyListEntry};

#[component]
pub fn PartyList() -> impl IntoView {
    let store = use_planner_store();

    view! {
        <ul class="parties">
            {move || {
                store
                    .with(view_model::party_list)
                    .into_iter()
                    .map(|entry| view! { <PartyListItem entry=entry /> })
                    .collect_view()
            }}
        </ul>
    }
}

/// Party name that shows more details when clicked
#[component]
fn PartyListItem(entry: PartyListEntry) -> impl IntoView {
    let planner = use_planner();
    let id = entry.id;

    let select = move |_| {
        let planner = planner.clone();
        spawn_local(async move {
            planner.select_party(id).await;
        });
    };

    view! {
        <li class=if entry.selected { "selected" } else { "" } on:click=select>
            <a href="#selected">{entry.name}</a>
        </li>
    }
}
