//! Application State Store
//!
//! `PlannerState` is plain data with pure transitions. In the browser it lives
//! in a `reactive_stores::Store` so components re-render when it changes.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiError;
use crate::models::{Guest, Party, Rsvp};

/// Progress of one remote collection
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FetchStatus {
    pub loading: bool,
    /// Message of the last failed fetch, cleared by the next success
    pub error: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Parties,
    Rsvps,
    Guests,
}

impl Resource {
    pub fn label(self) -> &'static str {
        match self {
            Resource::Parties => "parties",
            Resource::Rsvps => "RSVPs",
            Resource::Guests => "guests",
        }
    }
}

/// Everything the page renders from
#[derive(Clone, Debug, Default, Store)]
pub struct PlannerState {
    /// Sorted ascending by date
    pub parties: Vec<Party>,
    pub selected_party: Option<Party>,
    pub rsvps: Vec<Rsvp>,
    pub guests: Vec<Guest>,
    pub parties_status: FetchStatus,
    pub rsvps_status: FetchStatus,
    pub guests_status: FetchStatus,
    /// Id of the latest selection change; older `get_party` responses are dropped
    pub selection_request: u64,
}

impl PlannerState {
    fn status_mut(&mut self, resource: Resource) -> &mut FetchStatus {
        match resource {
            Resource::Parties => &mut self.parties_status,
            Resource::Rsvps => &mut self.rsvps_status,
            Resource::Guests => &mut self.guests_status,
        }
    }

    pub fn begin_fetch(&mut self, resource: Resource) {
        self.status_mut(resource).loading = true;
    }

    /// Clear the loading flag and record the outcome. Returns whether the fetch succeeded.
    fn settle<T>(&mut self, resource: Resource, result: &Result<T, ApiError>) -> bool {
        let status = self.status_mut(resource);
        status.loading = false;
        match result {
            Ok(_) => {
                status.error = None;
                true
            }
            Err(e) => {
                status.error = Some(format!("Could not load {}: {}", resource.label(), e));
                false
            }
        }
    }

    pub fn finish_parties(&mut self, result: Result<Vec<Party>, ApiError>) {
        if self.settle(Resource::Parties, &result) {
            if let Ok(mut parties) = result {
                parties.sort_by_key(|party| party.date);
                self.parties = parties;
            }
        }
    }

    pub fn finish_rsvps(&mut self, result: Result<Vec<Rsvp>, ApiError>) {
        if self.settle(Resource::Rsvps, &result) {
            if let Ok(rsvps) = result {
                self.rsvps = rsvps;
            }
        }
    }

    pub fn finish_guests(&mut self, result: Result<Vec<Guest>, ApiError>) {
        if self.settle(Resource::Guests, &result) {
            if let Ok(guests) = result {
                self.guests = guests;
            }
        }
    }

    pub fn next_selection_request(&mut self) -> u64 {
        self.selection_request += 1;
        self.selection_request
    }

    /// Guests with at least one RSVP for the party, in guest list order
    pub fn guests_at(&self, party_id: u32) -> Vec<&Guest> {
        self.guests
            .iter()
            .filter(|guest| {
                self.rsvps
                    .iter()
                    .any(|rsvp| rsvp.guest_id == guest.id && rsvp.event_id == party_id)
            })
            .collect()
    }

    pub fn is_loading(&self) -> bool {
        self.parties_status.loading || self.rsvps_status.loading || self.guests_status.loading
    }

    pub fn first_error(&self) -> Option<&str> {
        [&self.parties_status, &self.rsvps_status, &self.guests_status]
            .into_iter()
            .find_map(|status| status.error.as_deref())
    }
}

/// Type alias for the store
pub type PlannerStore = Store<PlannerState>;

/// Get the planner store from context
pub fn use_planner_store() -> PlannerStore {
    expect_context::<PlannerStore>()
}

/// Somewhere `PlannerState` can be read and changed
pub trait StateHandle: Clone {
    fn mutate<R>(&self, f: impl FnOnce(&mut PlannerState) -> R) -> R;
    fn inspect<R>(&self, f: impl FnOnce(&PlannerState) -> R) -> R;
}

impl StateHandle for PlannerStore {
    fn mutate<R>(&self, f: impl FnOnce(&mut PlannerState) -> R) -> R {
        f(&mut *self.write())
    }

    fn inspect<R>(&self, f: impl FnOnce(&PlannerState) -> R) -> R {
        f(&*self.read_untracked())
    }
}

#[cfg(test)]
impl StateHandle for std::rc::Rc<std::cell::RefCell<PlannerState>> {
    fn mutate<R>(&self, f: impl FnOnce(&mut PlannerState) -> R) -> R {
        f(&mut *std::cell::RefCell::borrow_mut(self))
    }

    fn inspect<R>(&self, f: impl FnOnce(&PlannerState) -> R) -> R {
        f(&*std::cell::RefCell::borrow(self))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{DateTime, Utc};

    use crate::models::{Guest, Party, Rsvp};

    /// Midnight UTC of a `YYYY-MM-DD` day
    pub fn day(ymd: &str) -> DateTime<Utc> {
        format!("{}T00:00:00Z", ymd).parse().unwrap()
    }

    pub fn party(id: u32, name: &str, ymd: &str) -> Party {
        Party {
            id,
            name: name.to_string(),
            description: format!("{} description", name),
            date: day(ymd),
            location: format!("{} location", name),
        }
    }

    pub fn guest(id: u32, name: &str) -> Guest {
        Guest { id, name: name.to_string() }
    }

    pub fn rsvp(guest_id: u32, event_id: u32) -> Rsvp {
        Rsvp { guest_id, event_id }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_finish_parties_sorts_by_date() {
        let mut state = PlannerState::default();
        state.begin_fetch(Resource::Parties);
        assert!(state.is_loading());

        state.finish_parties(Ok(vec![
            party(1, "late", "2026-12-24"),
            party(2, "early", "2026-01-02"),
            party(3, "middle", "2026-06-30"),
            party(4, "also early", "2026-01-02"),
        ]));

        let ids: Vec<u32> = state.parties.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 4, 3, 1]);
        assert!(state.parties.windows(2).all(|w| w[0].date <= w[1].date));
        assert!(!state.is_loading());
        assert_eq!(state.first_error(), None);
    }

    #[test]
    fn test_failed_fetch_keeps_data() {
        let mut state = PlannerState::default();
        state.finish_guests(Ok(vec![guest(1, "Ada")]));

        state.begin_fetch(Resource::Guests);
        state.finish_guests(Err(ApiError::Network("offline".into())));

        assert_eq!(state.guests, vec![guest(1, "Ada")]);
        assert!(!state.guests_status.loading);
        assert_eq!(state.first_error(), Some("Could not load guests: network error: offline"));

        state.finish_guests(Ok(vec![]));
        assert!(state.guests.is_empty());
        assert_eq!(state.first_error(), None);
    }

    #[test]
    fn test_guests_at_joins_through_rsvps() {
        let mut state = PlannerState::default();
        state.guests = vec![guest(1, "Ada"), guest(2, "Grace"), guest(3, "Linus")];
        state.rsvps = vec![rsvp(3, 10), rsvp(1, 10), rsvp(1, 10), rsvp(2, 11)];

        let names: Vec<&str> = state.guests_at(10).iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Ada", "Linus"]);
        assert!(state.guests_at(12).is_empty());
    }

    #[test]
    fn test_selection_request_is_monotonic() {
        let mut state = PlannerState::default();
        let first = state.next_selection_request();
        let second = state.next_selection_request();
        assert!(second > first);
        assert_eq!(state.selection_request, second);
    }
}
