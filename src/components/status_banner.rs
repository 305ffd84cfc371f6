//! Status Banner Component
//!
//! Error banner and loading indicator for the remote collections.

use leptos::prelude::*;

use crate::store::use_planner_store;
use crate::view_model;

#[component]
pub fn StatusBanner() -> impl IntoView {
    let store = use_planner_store();

    move || {
        let status = store.with(view_model::status);
        view! {
            {status.error.map(|message| view! { <p role="alert" class="error">{message}</p> })}
            {status.loading.then(|| view! { <p class="loading">"Loading data…"</p> })}
        }
    }
}
