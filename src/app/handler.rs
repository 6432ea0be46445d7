//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place where [`AppState`] changes. It returns
//! whether the UI must re-render and the side effects to run, in order.
//!
//! # Event Types
//!
//! - **Navigation**: `ShowRoute`, `ToggleRoute`, `KeyDown`, `KeyUp`
//! - **Search input**: `SearchMode`, `Char`, `Backspace`, `Submit`, `ExitSearch`
//! - **Results**: `ToggleExcludeZero`, `CycleSort`, `NextPage`, `PreviousPage`,
//!   `OpenDetails`, `CloseDetails`
//! - **System**: `Tick`, `Visible`, `PermissionsResult`, `LookupResponse`

use crate::app::modes::{InputMode, Route};
use crate::app::{Action, AppState};
use crate::catalog::RequestTicket;
use crate::domain::error::Result;
use crate::domain::LookupError;
use crate::rawg::{self, RequestContext};
use std::collections::BTreeMap;

/// Events triggered by user input or the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The animation timer fired.
    Tick,
    /// The plugin pane was shown or hidden.
    Visible(bool),
    /// Outcome of the permission request.
    PermissionsResult { granted: bool },

    /// Navigates to a route.
    ShowRoute(Route),
    /// Switches to the other route.
    ToggleRoute,

    /// Moves the result selection down (wraps).
    KeyDown,
    /// Moves the result selection up (wraps).
    KeyUp,

    /// Focuses the search box.
    SearchMode,
    /// Appends a character to the search box.
    Char(char),
    /// Removes the last character from the search box.
    Backspace,
    /// Submits the search box content.
    Submit,
    /// Leaves the search box, keeping its content.
    ExitSearch,

    ToggleExcludeZero,
    CycleSort,
    NextPage,
    PreviousPage,
    /// Loads details for the selected game.
    OpenDetails,
    /// Hides the detail text.
    CloseDetails,

    /// Hides the plugin pane.
    CloseFocus,

    /// The host finished a web request.
    LookupResponse {
        status: u16,
        body: Vec<u8>,
        context: BTreeMap<String, String>,
    },
}

impl Event {
    /// Short name for spans; avoids dumping response bodies into traces.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Tick => "Tick",
            Self::Visible(_) => "Visible",
            Self::PermissionsResult { .. } => "PermissionsResult",
            Self::ShowRoute(_) => "ShowRoute",
            Self::ToggleRoute => "ToggleRoute",
            Self::KeyDown => "KeyDown",
            Self::KeyUp => "KeyUp",
            Self::SearchMode => "SearchMode",
            Self::Char(_) => "Char",
            Self::Backspace => "Backspace",
            Self::Submit => "Submit",
            Self::ExitSearch => "ExitSearch",
            Self::ToggleExcludeZero => "ToggleExcludeZero",
            Self::CycleSort => "CycleSort",
            Self::NextPage => "NextPage",
            Self::PreviousPage => "PreviousPage",
            Self::OpenDetails => "OpenDetails",
            Self::CloseDetails => "CloseDetails",
            Self::CloseFocus => "CloseFocus",
            Self::LookupResponse { .. } => "LookupResponse",
        }
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the shim's error path uniform.
///
/// # Example
///
/// ```rust
/// use zfolio::{handle_event, initialize, Action, Config, Event};
///
/// let mut state = initialize(&Config::default());
/// let (_, actions) = handle_event(&mut state, &Event::Visible(true))?;
/// assert!(matches!(actions.as_slice(), [Action::ScheduleTick { .. }]));
/// # Ok::<(), zfolio::FolioError>(())
/// ```
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event.name()).entered();

    match event {
        Event::Tick => {
            if state.typewriter.on_timer() {
                Ok((true, vec![tick_action(state)]))
            } else {
                Ok((false, vec![]))
            }
        }
        Event::Visible(visible) => {
            tracing::debug!(visible, route = state.route.path(), "visibility changed");
            state.visible = *visible;
            Ok((*visible, sync_typewriter(state)))
        }
        Event::PermissionsResult { granted } => {
            state.web_access = *granted;
            if !granted {
                tracing::warn!("web access denied, game search unavailable");
            }
            Ok((false, vec![]))
        }
        Event::ShowRoute(route) => Ok(navigate(state, *route)),
        Event::ToggleRoute => Ok(navigate(state, state.route.toggle())),
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::SearchMode => {
            if state.route != Route::Games {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Typing;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Typing {
                return Ok((false, vec![]));
            }
            state.search_input.push(*c);
            tracing::trace!(query = %state.search_input, "search input updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Typing {
                return Ok((false, vec![]));
            }
            state.search_input.pop();
            Ok((true, vec![]))
        }
        Event::Submit => {
            if state.input_mode != InputMode::Typing {
                return Ok((false, vec![]));
            }
            let query = state.search_input.clone();
            let was_busy = state.catalog.is_busy();
            let ticket = state.catalog.submit(&query);
            if !was_busy {
                state.input_mode = InputMode::Normal;
            }
            let actions = ticket.map(|t| dispatch(state, t)).unwrap_or_default();
            state.refresh_results();
            Ok((true, actions))
        }
        Event::ExitSearch => {
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::ToggleExcludeZero => {
            state.exclude_zero = !state.exclude_zero;
            state.refresh_results();
            Ok((true, vec![]))
        }
        Event::CycleSort => {
            state.sort = state.sort.next();
            state.refresh_results();
            Ok((true, vec![]))
        }
        Event::NextPage => {
            let ticket = state.catalog.next_page();
            Ok(dispatch_if_issued(state, ticket))
        }
        Event::PreviousPage => {
            let ticket = state.catalog.previous_page();
            Ok(dispatch_if_issued(state, ticket))
        }
        Event::OpenDetails => {
            let Some(id) = state.selected_game().map(|g| g.id) else {
                tracing::debug!("no game selected");
                return Ok((false, vec![]));
            };
            let ticket = state.catalog.request_details(id);
            Ok(dispatch_if_issued(state, ticket))
        }
        Event::CloseDetails => {
            state.catalog.clear_details();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::LookupResponse { status, body, context } => {
            let request = match RequestContext::from_map(context) {
                Ok(request) => request,
                Err(e) => {
                    tracing::debug!(error = %e, "ignoring web response");
                    return Ok((false, vec![]));
                }
            };
            let ticket = request.ticket;

            tracing::debug!(
                ticket_id = ticket.id,
                kind = ticket.kind.name(),
                status,
                body_len = body.len(),
                "lookup response received"
            );

            let outcome = rawg::decode(&ticket.kind, *status, body);
            if state.catalog.complete(ticket.id, outcome) {
                state.refresh_results();
                Ok((true, vec![]))
            } else {
                Ok((false, vec![]))
            }
        }
    }
}

fn navigate(state: &mut AppState, route: Route) -> (bool, Vec<Action>) {
    if state.route == route {
        return (false, vec![]);
    }
    tracing::debug!(from = state.route.path(), to = route.path(), "navigating");
    state.route = route;
    state.input_mode = InputMode::Normal;
    (true, sync_typewriter(state))
}

/// Mounts the typewriter while Home is shown in a visible pane and unmounts
/// it otherwise.
fn sync_typewriter(state: &mut AppState) -> Vec<Action> {
    if state.route == Route::Home && state.visible {
        if state.typewriter.mount() {
            return vec![tick_action(state)];
        }
    } else {
        state.typewriter.unmount();
    }
    vec![]
}

fn tick_action(state: &AppState) -> Action {
    Action::ScheduleTick {
        after_ms: state.typewriter.config().tick_ms(),
    }
}

fn dispatch_if_issued(state: &mut AppState, ticket: Option<RequestTicket>) -> (bool, Vec<Action>) {
    match ticket {
        Some(ticket) => (true, dispatch(state, ticket)),
        None => (false, vec![]),
    }
}

/// Turns a ticket into a web request, or fails it on the spot when no
/// request can be sent.
fn dispatch(state: &mut AppState, ticket: RequestTicket) -> Vec<Action> {
    let request = state
        .client
        .as_ref()
        .map_err(Clone::clone)
        .and_then(|client| client.request(&ticket))
        .and_then(|request| {
            if state.web_access {
                Ok(request)
            } else {
                Err(LookupError::PermissionDenied)
            }
        });

    match request {
        Ok(request) => {
            tracing::debug!(ticket_id = ticket.id, url_len = request.url.len(), "dispatching lookup");
            vec![Action::WebRequest(request)]
        }
        Err(e) => {
            state.catalog.complete(ticket.id, Err(e));
            state.refresh_results();
            vec![]
        }
    }
}
