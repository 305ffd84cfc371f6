//! View Descriptions
//!
//! Pure functions from `PlannerState` to what the components display.
//! Nothing here touches the DOM or wires handlers.

use chrono::SecondsFormat;

use crate::store::PlannerState;

/// Shown in the details panel while nothing is selected
pub const SELECT_PROMPT: &str = "Please select a party to learn more.";

#[derive(Clone, Debug, PartialEq)]
pub struct PartyListEntry {
    pub id: u32,
    pub name: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GuestEntry {
    pub id: u32,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PartyDetail {
    pub id: u32,
    pub name: String,
    /// `{name} #{id}`
    pub heading: String,
    /// RFC 3339, for the `datetime` attribute
    pub datetime: String,
    /// `YYYY-MM-DD`
    pub date_label: String,
    pub location: String,
    pub description: String,
    pub guests: Vec<GuestEntry>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DetailPanel {
    Placeholder,
    Party(PartyDetail),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatusView {
    pub loading: bool,
    pub error: Option<String>,
}

/// One entry per party, in state order
pub fn party_list(state: &PlannerState) -> Vec<PartyListEntry> {
    let selected_id = state.selected_party.as_ref().map(|party| party.id);
    state
        .parties
        .iter()
        .map(|party| PartyListEntry {
            id: party.id,
            name: party.name.clone(),
            selected: Some(party.id) == selected_id,
        })
        .collect()
}

/// Guests attending the selected party
pub fn guest_list(state: &PlannerState) -> Vec<GuestEntry> {
    let Some(party) = &state.selected_party else {
        return Vec::new();
    };
    state
        .guests_at(party.id)
        .into_iter()
        .map(|guest| GuestEntry {
            id: guest.id,
            name: guest.name.clone(),
        })
        .collect()
}

pub fn detail_panel(state: &PlannerState) -> DetailPanel {
    let Some(party) = &state.selected_party else {
        return DetailPanel::Placeholder;
    };
    DetailPanel::Party(PartyDetail {
        id: party.id,
        name: party.name.clone(),
        heading: format!("{} #{}", party.name, party.id),
        datetime: party.date.to_rfc3339_opts(SecondsFormat::Millis, true),
        date_label: party.date.format("%Y-%m-%d").to_string(),
        location: party.location.clone(),
        description: party.description.clone(),
        guests: guest_list(state),
    })
}

pub fn status(state: &PlannerState) -> StatusView {
    StatusView {
        loading: state.is_loading(),
        error: state.first_error().map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::store::fixtures::*;
    use crate::store::Resource;

    fn populated() -> PlannerState {
        let mut state = PlannerState::default();
        state.finish_parties(Ok(vec![
            party(5, "Gala", "2026-12-31"),
            party(3, "Picnic", "2026-07-04"),
        ]));
        state.guests = vec![guest(1, "Ada"), guest(2, "Grace"), guest(3, "Linus")];
        state.rsvps = vec![rsvp(1, 5), rsvp(3, 5), rsvp(2, 3)];
        state
    }

    #[test]
    fn test_party_list_marks_selection() {
        let mut state = populated();
        assert!(party_list(&state).iter().all(|entry| !entry.selected));

        state.selected_party = Some(party(5, "Gala", "2026-12-31"));
        let entries = party_list(&state);
        assert_eq!(
            entries,
            vec![
                PartyListEntry { id: 3, name: "Picnic".into(), selected: false },
                PartyListEntry { id: 5, name: "Gala".into(), selected: true },
            ]
        );
    }

    #[test]
    fn test_placeholder_without_selection() {
        let state = populated();
        assert_eq!(detail_panel(&state), DetailPanel::Placeholder);
        assert!(guest_list(&state).is_empty());
    }

    #[test]
    fn test_detail_panel_shows_selected_party() {
        let mut state = populated();
        state.selected_party = Some(party(5, "Gala", "2026-12-31"));

        let DetailPanel::Party(detail) = detail_panel(&state) else {
            panic!("expected party details");
        };
        assert_eq!(detail.heading, "Gala #5");
        assert_eq!(detail.name, "Gala");
        assert_eq!(detail.id, 5);
        assert_eq!(detail.date_label, "2026-12-31");
        assert_eq!(detail.datetime, "2026-12-31T00:00:00.000Z");
        assert_eq!(detail.location, "Gala location");
        assert_eq!(detail.description, "Gala description");
        let names: Vec<&str> = detail.guests.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Ada", "Linus"]);
    }

    #[test]
    fn test_selected_party_without_rsvps_has_no_guests() {
        let mut state = populated();
        state.selected_party = Some(party(9, "Solo", "2026-08-01"));
        assert!(guest_list(&state).is_empty());
    }

    #[test]
    fn test_status_reflects_fetches() {
        let mut state = PlannerState::default();
        assert_eq!(status(&state), StatusView::default());

        state.begin_fetch(Resource::Rsvps);
        assert!(status(&state).loading);

        state.finish_rsvps(Err(ApiError::Parse("expected value".into())));
        let view = status(&state);
        assert!(!view.loading);
        assert_eq!(view.error.as_deref(), Some("Could not load RSVPs: malformed response: expected value"));
    }
}
