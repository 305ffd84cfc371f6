//! UI Components
//!
//! Each component renders a description from `view_model` and binds its
//! handlers to the planner.

mod guest_list;
mod new_party_form;
mod party_details;
mod party_list;
mod status_banner;

pub use guest_list::GuestList;
pub use new_party_form::NewPartyForm;
pub use party_details::PartyDetails;
pub use party_list::PartyList;
pub use status_banner::StatusBanner;
