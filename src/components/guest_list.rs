//! Guest List Component

use leptos::prelude::*;

use crate::view_model::GuestEntry;

/// Guests attending the selected party
#[component]
pub fn GuestList(guests: Vec<GuestEntry>) -> impl IntoView {
    view! {
        <ul class="guests">
            {guests
                .into_iter()
                .map(|guest| view! { <li data-guest-id=guest.id.to_string()>{guest.name}</li> })
                .collect_view()}
        </ul>
    }
}
