//! State of the search page as an immutable value.
//!
//! The page moves between states only through [`update`], so a render is a
//! pure function of the actions that led to it.

use serde::{Deserialize, Serialize};

use crate::domain::market::SearchResult;
use crate::domain::search::{DEFAULT_LIMIT, SearchParams};

/// Tabs shown on the search page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Search,
    Results,
}

/// Outcome of the most recent search.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(tag = "status", content = "result", rename_all = "snake_case")]
pub enum Outcome {
    #[default]
    Idle,
    Pending,
    Loaded(SearchResult),
    Failed,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PageState {
    pub params: SearchParams,
    pub tab: Tab,
    pub outcome: Outcome,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            params: SearchParams::new(DEFAULT_LIMIT, 0),
            tab: Tab::default(),
            outcome: Outcome::default(),
        }
    }
}

impl PageState {
    /// An idle page whose form shows `params`.
    pub fn with_params(params: SearchParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.outcome, Outcome::Pending)
    }
}

/// Events that move the page from one state to the next.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// The form was submitted with these parameters.
    Submit(SearchParams),
    /// The search request finished.
    Settle(Result<SearchResult, String>),
    /// The user picked a tab.
    SelectTab(Tab),
}

/// Computes the state that follows `state` once `action` happened.
///
/// A submit while a search is pending is ignored: only one request is in
/// flight at a time. Settling always switches to the results tab and replaces
/// the previous result wholesale.
pub fn update(state: PageState, action: Action) -> PageState {
    match action {
        Action::Submit(_) if state.is_pending() => state,
        Action::Submit(params) => PageState {
            params,
            outcome: Outcome::Pending,
            ..state
        },
        Action::Settle(_) if !state.is_pending() => state,
        Action::Settle(Ok(result)) => PageState {
            tab: Tab::Results,
            outcome: Outcome::Loaded(result),
            ..state
        },
        Action::Settle(Err(_)) => PageState {
            tab: Tab::Results,
            outcome: Outcome::Failed,
            ..state
        },
        Action::SelectTab(tab) => PageState { tab, ..state },
    }
}
