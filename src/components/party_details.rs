//! Party Details Component
//!
//! Detailed information about the selected party, with delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::GuestList;
use crate::context::use_planner;
use crate::planner::DeleteOutcome;
use crate::store::use_planner_store;
use crate::view_model::{self, DetailPanel};

#[component]
pub fn PartyDetails() -> impl IntoView {
    let store = use_planner_store();
    let planner = use_planner();

    move || match store.with(view_model::detail_panel) {
        DetailPanel::Placeholder => view! { <p>{view_model::SELECT_PROMPT}</p> }.into_any(),
        DetailPanel::Party(detail) => {
            let planner = planner.clone();
            // Confirmation and failure alerts happen inside the planner
            let delete = move |_| {
                let planner = planner.clone();
                spawn_local(async move {
                    if let Ok(DeleteOutcome::Deleted(id)) = planner.delete_selected().await {
                        log::debug!("party {} removed from view", id);
                    }
                });
            };

            view! {
                <section class="party-details" data-party-id=detail.id.to_string()>
                    <h3>{detail.heading}</h3>
                    <time datetime=detail.datetime>{detail.date_label}</time>
                    <address>{detail.location}</address>
                    <p>{detail.description}</p>
                    <div class="party-actions">
                        <button id="delete-party" title=format!("Delete {}", detail.name) on:click=delete>"Delete Party"</button>
                    </div>
                    <GuestList guests=detail.guests />
                </section>
            }
            .into_any()
        }
    }
}
