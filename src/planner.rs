//! Planner
//!
//! Every state-changing operation of the page. Components call these from
//! event handlers; the store change re-renders the view.

use chrono::NaiveDate;
use thiserror::Error;

use crate::api::{ApiError, PartyApi};
use crate::form::{FormError, PartyForm};
use crate::models::Party;
use crate::prompt::{self, Prompt};
use crate::store::{Resource, StateHandle};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] FormError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    NothingSelected,
    Declined,
    Deleted(u32),
}

/// Remote API, dialogs, and state, wired together
#[derive(Clone)]
pub struct Planner<A, P, S> {
    api: A,
    prompt: P,
    state: S,
}

impl<A, P, S> Planner<A, P, S>
where
    A: PartyApi,
    P: Prompt,
    S: StateHandle,
{
    pub fn new(api: A, prompt: P, state: S) -> Self {
        Self { api, prompt, state }
    }

    /// Initial load: parties, then RSVPs, then guests
    pub async fn bootstrap(&self) {
        self.load_parties().await;
        self.load_rsvps().await;
        self.load_guests().await;
        log::info!(
            "loaded {} parties",
            self.state.inspect(|s| s.parties.len())
        );
    }

    pub async fn load_parties(&self) {
        self.state.mutate(|s| s.begin_fetch(Resource::Parties));
        let result = self.api.list_parties().await;
        if let Err(e) = &result {
            log::error!("failed to load parties: {}", e);
        }
        self.state.mutate(|s| s.finish_parties(result));
    }

    pub async fn load_rsvps(&self) {
        self.state.mutate(|s| s.begin_fetch(Resource::Rsvps));
        let result = self.api.list_rsvps().await;
        if let Err(e) = &result {
            log::error!("failed to load rsvps: {}", e);
        }
        self.state.mutate(|s| s.finish_rsvps(result));
    }

    pub async fn load_guests(&self) {
        self.state.mutate(|s| s.begin_fetch(Resource::Guests));
        let result = self.api.list_guests().await;
        if let Err(e) = &result {
            log::error!("failed to load guests: {}", e);
        }
        self.state.mutate(|s| s.finish_guests(result));
    }

    /// Fetch one party and show it. A response that arrives after a newer
    /// selection change is dropped.
    pub async fn select_party(&self, id: u32) {
        let request = self.state.mutate(|s| s.next_selection_request());
        let party = match self.api.get_party(id).await {
            Ok(party) => party,
            Err(e) => {
                log::error!("failed to load party {}: {}", id, e);
                return;
            }
        };
        self.state.mutate(|s| {
            if s.selection_request == request {
                s.selected_party = Some(party);
            } else {
                log::debug!("dropping stale response for party {}", id);
            }
        });
    }

    /// Validate the form, create the party, refresh the list, select the new party.
    /// The new party is not selected if another selection happened meanwhile.
    /// API failures are logged and alerted before being returned.
    pub async fn create_party(&self, form: &PartyForm, today: NaiveDate) -> Result<Party, SubmitError> {
        let payload = form.to_payload(today).map_err(|e| {
            log::warn!("new party form rejected: {}", e);
            e
        })?;
        let request = self.state.mutate(|s| s.next_selection_request());

        let created = match self.api.create_party(&payload).await {
            Ok(party) => party,
            Err(e) => {
                log::error!("{}", e);
                self.prompt.alert(prompt::CREATE_FAILED);
                return Err(e.into());
            }
        };
        log::info!("created party {} ({})", created.id, created.name);

        self.load_parties().await;
        self.state.mutate(|s| {
            if s.selection_request == request {
                s.selected_party = Some(created.clone());
            } else {
                log::debug!("keeping newer selection over created party {}", created.id);
            }
        });
        Ok(created)
    }

    /// Ask for confirmation, then delete the selected party and refresh the list.
    /// API failures are logged and alerted before being returned.
    pub async fn delete_selected(&self) -> Result<DeleteOutcome, ApiError> {
        let Some(party) = self.state.inspect(|s| s.selected_party.clone()) else {
            return Ok(DeleteOutcome::NothingSelected);
        };
        if !self.prompt.confirm(&prompt::delete_question(&party.name)) {
            return Ok(DeleteOutcome::Declined);
        }

        if let Err(e) = self.api.delete_party(party.id).await {
            log::error!("{}", e);
            self.prompt.alert(prompt::DELETE_FAILED);
            return Err(e);
        }
        log::info!("deleted party {}", party.id);

        self.state.mutate(|s| {
            s.next_selection_request();
            s.selected_party = None;
        });
        self.load_parties().await;
        Ok(DeleteOutcome::Deleted(party.id))
    }
}
