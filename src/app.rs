//! Party Planner App
//!
//! Main application component: form and party list on the left, details on the right.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::HttpApi;
use crate::components::{NewPartyForm, PartyDetails, PartyList, StatusBanner};
use crate::config::ApiConfig;
use crate::context::AppPlanner;
use crate::planner::Planner;
use crate::prompt::BrowserPrompt;
use crate::store::{PlannerState, PlannerStore};

#[component]
pub fn App(api: ApiConfig) -> impl IntoView {
    // State
    let store: PlannerStore = Store::new(PlannerState::default());
    let planner: AppPlanner = Planner::new(HttpApi::new(api), BrowserPrompt, store);

    // Provide context to all children
    provide_context(store);
    provide_context(planner.clone());

    // Load parties, RSVPs and guests on mount
    Effect::new(move |_| {
        let planner = planner.clone();
        spawn_local(async move {
            planner.bootstrap().await;
        });
    });

    let busy = move || store.with(|s| s.is_loading()).then_some("true");

    view! {
        <h1>"Party Planner"</h1>
        <StatusBanner />
        <main aria-busy=busy>
            <section class="parties-column">
                <NewPartyForm />
                <h2>"Upcoming Parties"</h2>
                <PartyList />
            </section>
            <section id="selected">
                <h2>"Party Details"</h2>
                <PartyDetails />
            </section>
        </main>
    }
}
