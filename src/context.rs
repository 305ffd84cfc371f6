//! Application Context
//!
//! The planner shared with components via the Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpApi;
use crate::planner::Planner;
use crate::prompt::BrowserPrompt;
use crate::store::PlannerStore;

/// Planner as wired in the browser
pub type AppPlanner = Planner<HttpApi, BrowserPrompt, PlannerStore>;

/// Get the planner from context
pub fn use_planner() -> AppPlanner {
    expect_context::<AppPlanner>()
}
