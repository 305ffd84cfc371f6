//! New Party Form Component
//!
//! Form for creating a party. The created party becomes the selection.

use chrono::Utc;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_planner;
use crate::form::{self, FormField, PartyForm};

#[component]
pub fn NewPartyForm() -> impl IntoView {
    let planner = use_planner();

    let (fields, set_fields) = signal(PartyForm::default());
    let (submitting, set_submitting) = signal(false);
    let min_date = form::min_date_attr(Utc::now().date_naive());

    let value = move |field: FormField| move || fields.with(|f| f.field(field).to_string());
    let update = move |field: FormField| {
        move |ev: leptos::ev::Event| set_fields.update(|f| f.set_field(field, event_target_value(&ev)))
    };

    let create_party = move |ev: SubmitEvent| {
        ev.prevent_default();
        // Prevent double submit
        if submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);

        let planner = planner.clone();
        let input = fields.get_untracked();
        spawn_local(async move {
            if planner.create_party(&input, Utc::now().date_naive()).await.is_ok() {
                set_fields.set(PartyForm::default());
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="new-party-form" on:submit=create_party>
            <h2>"Add a New Party"</h2>
            <label>
                {FormField::Name.label()}
                <input
                    name="name"
                    type="text"
                    required
                    prop:value=value(FormField::Name)
                    on:input=update(FormField::Name)
                />
            </label>
            <label>
                {FormField::Description.label()}
                <textarea
                    name="description"
                    required
                    prop:value=value(FormField::Description)
                    on:input=update(FormField::Description)
                ></textarea>
            </label>
            <label>
                {FormField::Date.label()}
                <input
                    name="date"
                    type="date"
                    required
                    min=min_date
                    prop:value=value(FormField::Date)
                    on:input=update(FormField::Date)
                />
            </label>
            <label>
                {FormField::Location.label()}
                <input
                    name="location"
                    type="text"
                    required
                    prop:value=value(FormField::Location)
                    on:input=update(FormField::Location)
                />
            </label>
            <button type="submit" disabled=move || submitting.get()>"Create Party"</button>
        </form>
    }
}
