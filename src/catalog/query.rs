//! Single in-flight query discipline.
//!
//! [`QueryController`] owns the raw search results and decides when a lookup
//! may be issued. Every lookup is identified by a [`RequestTicket`]; only the
//! response carrying the ticket currently in flight is applied, so a late
//! response can never overwrite fresher results.

use crate::domain::{Game, GameDetails, LookupError, SearchPage};

/// What a lookup asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKind {
    Search { query: String, page: u32 },
    Details { id: u64 },
}

impl LookupKind {
    /// Short name used in logs and the request context.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Search { .. } => "search",
            Self::Details { .. } => "details",
        }
    }
}

/// Identity of an issued lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    pub id: u64,
    pub kind: LookupKind,
}

/// Successful lookup payload.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Page(SearchPage),
    Details(GameDetails),
}

/// Search state plus the busy-flag guard.
#[derive(Debug, Clone, Default)]
pub struct QueryController {
    raw: Vec<Game>,
    query: String,
    page: u32,
    total: u64,
    has_next: bool,
    has_previous: bool,
    details: Option<GameDetails>,
    in_flight: Option<RequestTicket>,
    sequence: u64,
    error: Option<String>,
}

impl QueryController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Submits a search for `query`, starting at page 1.
    ///
    /// Returns the ticket to send, or `None` when nothing must be sent: either
    /// a request is already in flight, or the query is blank (which clears
    /// the results and the error instead).
    pub fn submit(&mut self, query: &str) -> Option<RequestTicket> {
        if self.is_busy() {
            tracing::debug!(query = %query, "search ignored, request in flight");
            return None;
        }

        let query = query.trim();
        if query.is_empty() {
            tracing::debug!("blank query, clearing results");
            self.clear_results();
            self.query.clear();
            self.error = None;
            return None;
        }

        self.query = query.to_string();
        Some(self.issue(LookupKind::Search {
            query: query.to_string(),
            page: 1,
        }))
    }

    /// Requests the page after the current one, if the last response had one.
    pub fn next_page(&mut self) -> Option<RequestTicket> {
        if self.is_busy() || !self.has_next || self.query.is_empty() {
            return None;
        }
        Some(self.issue(LookupKind::Search {
            query: self.query.clone(),
            page: self.page.saturating_add(1),
        }))
    }

    /// Requests the page before the current one, if the last response had one.
    pub fn previous_page(&mut self) -> Option<RequestTicket> {
        if self.is_busy() || !self.has_previous || self.page <= 1 || self.query.is_empty() {
            return None;
        }
        Some(self.issue(LookupKind::Search {
            query: self.query.clone(),
            page: self.page - 1,
        }))
    }

    /// Requests details for one game.
    pub fn request_details(&mut self, id: u64) -> Option<RequestTicket> {
        if self.is_busy() {
            return None;
        }
        if self.details.as_ref().is_some_and(|d| d.id == id) {
            return None;
        }
        Some(self.issue(LookupKind::Details { id }))
    }

    /// Applies the response for `ticket_id`.
    ///
    /// Returns `false` when the response is stale and was discarded.
    pub fn complete(&mut self, ticket_id: u64, result: Result<LookupOutcome, LookupError>) -> bool {
        if self.in_flight.as_ref().map(|t| t.id) != Some(ticket_id) {
            tracing::debug!(ticket_id, "discarding stale lookup response");
            return false;
        }
        let Some(ticket) = self.in_flight.take() else {
            return false;
        };

        match (ticket.kind, result) {
            (LookupKind::Search { .. }, Ok(LookupOutcome::Page(page))) => {
                tracing::debug!(ticket_id, results = page.games.len(), page = page.page, "search succeeded");
                self.raw = page.games;
                self.page = page.page;
                self.total = page.count;
                self.has_next = page.has_next;
                self.has_previous = page.has_previous;
                self.details = None;
                self.error = None;
            }
            (LookupKind::Details { .. }, Ok(LookupOutcome::Details(details))) => {
                tracing::debug!(ticket_id, game_id = details.id, "details loaded");
                self.details = Some(details);
                self.error = None;
            }
            (LookupKind::Search { .. }, Err(e)) => {
                tracing::warn!(ticket_id, error = %e, "search failed");
                self.clear_results();
                self.error = Some(e.user_message().to_string());
            }
            (LookupKind::Details { id }, Err(e)) => {
                tracing::warn!(ticket_id, game_id = id, error = %e, "details lookup failed");
                self.error = Some(e.user_message().to_string());
            }
            (kind, Ok(_)) => {
                tracing::warn!(ticket_id, kind = kind.name(), "response does not match request kind");
                if matches!(kind, LookupKind::Search { .. }) {
                    self.clear_results();
                }
                self.error = Some(LookupError::UnknownRequest.user_message().to_string());
            }
        }
        true
    }

    /// Hides the detail pane.
    pub fn clear_details(&mut self) {
        self.details = None;
    }

    #[must_use]
    pub fn raw(&self) -> &[Game] {
        &self.raw
    }

    /// Query of the last accepted search.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.has_next
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.has_previous
    }

    #[must_use]
    pub const fn details(&self) -> Option<&GameDetails> {
        self.details.as_ref()
    }

    #[must_use]
    pub const fn in_flight(&self) -> Option<&RequestTicket> {
        self.in_flight.as_ref()
    }

    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn issue(&mut self, kind: LookupKind) -> RequestTicket {
        self.sequence += 1;
        let ticket = RequestTicket {
            id: self.sequence,
            kind,
        };
        tracing::debug!(ticket_id = ticket.id, kind = ticket.kind.name(), "lookup issued");
        self.in_flight = Some(ticket.clone());
        ticket
    }

    fn clear_results(&mut self) {
        self.raw.clear();
        self.page = 0;
        self.total = 0;
        self.has_next = false;
        self.has_previous = false;
        self.details = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::LOOKUP_FAILED_MESSAGE;

    fn page(names: &[&str], number: u32, has_next: bool) -> LookupOutcome {
        let games = names
            .iter()
            .enumerate()
            .map(|(i, n)| Game::new(i as u64 + 1, *n))
            .collect::<Vec<_>>();
        LookupOutcome::Page(SearchPage {
            count: games.len() as u64,
            games,
            page: number,
            has_next,
            has_previous: number > 1,
        })
    }

    fn details(id: u64) -> LookupOutcome {
        LookupOutcome::Details(GameDetails {
            id,
            name: "Portal".into(),
            description: "Puzzles.".into(),
            website: None,
            developers: vec!["Valve".into()],
            publishers: vec![],
        })
    }

    #[test]
    fn blank_query_clears_without_request() {
        let mut qc = QueryController::new();
        let t = qc.submit("zelda").unwrap();
        qc.complete(t.id, Ok(page(&["Zelda"], 1, false)));
        assert_eq!(qc.raw().len(), 1);

        assert!(qc.submit("   ").is_none());
        assert!(qc.raw().is_empty());
        assert!(qc.error().is_none());
        assert!(!qc.is_busy());
    }

    #[test]
    fn submission_while_busy_is_ignored() {
        let mut qc = QueryController::new();
        let first = qc.submit("mario").unwrap();
        assert!(qc.submit("sonic").is_none());
        assert_eq!(qc.in_flight(), Some(&first));
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut qc = QueryController::new();
        let first = qc.submit("mario").unwrap();
        qc.complete(first.id, Ok(page(&["Mario"], 1, false)));
        let second = qc.submit("sonic").unwrap();

        assert!(!qc.complete(first.id, Ok(page(&["Stale"], 1, false))));
        assert!(qc.is_busy());
        assert!(qc.complete(second.id, Ok(page(&["Sonic"], 1, false))));
        assert_eq!(qc.raw()[0].name, "Sonic");
    }

    #[test]
    fn failure_clears_results_then_success_clears_error() {
        let mut qc = QueryController::new();
        let t = qc.submit("halo").unwrap();
        qc.complete(t.id, Ok(page(&["Halo", "Halo 2"], 1, false)));

        let t = qc.submit("halo 3").unwrap();
        qc.complete(t.id, Err(LookupError::Status(500)));
        assert!(qc.raw().is_empty());
        assert_eq!(qc.error(), Some(LOOKUP_FAILED_MESSAGE));
        assert!(!qc.is_busy());

        let t = qc.submit("halo 3").unwrap();
        qc.complete(t.id, Ok(page(&["Halo 3"], 1, false)));
        assert!(qc.error().is_none());
        assert_eq!(qc.raw().len(), 1);
    }

    #[test]
    fn query_is_trimmed() {
        let mut qc = QueryController::new();
        let t = qc.submit("  doom ").unwrap();
        assert_eq!(
            t.kind,
            LookupKind::Search {
                query: "doom".into(),
                page: 1
            }
        );
        assert_eq!(qc.query(), "doom");
    }

    #[test]
    fn pagination_follows_advertised_links() {
        let mut qc = QueryController::new();
        assert!(qc.next_page().is_none());

        let t = qc.submit("doom").unwrap();
        qc.complete(t.id, Ok(page(&["Doom"], 1, true)));
        assert!(qc.previous_page().is_none());

        let next = qc.next_page().unwrap();
        assert_eq!(
            next.kind,
            LookupKind::Search {
                query: "doom".into(),
                page: 2
            }
        );
        qc.complete(next.id, Ok(page(&["Doom II"], 2, false)));
        assert!(qc.next_page().is_none());

        let prev = qc.previous_page().unwrap();
        assert_eq!(
            prev.kind,
            LookupKind::Search {
                query: "doom".into(),
                page: 1
            }
        );
    }

    #[test]
    fn details_failure_keeps_results() {
        let mut qc = QueryController::new();
        let t = qc.submit("portal").unwrap();
        qc.complete(t.id, Ok(page(&["Portal"], 1, false)));

        let d = qc.request_details(1).unwrap();
        qc.complete(d.id, Err(LookupError::Malformed("eof".into())));
        assert_eq!(qc.raw().len(), 1);
        assert!(qc.error().is_some());

        let d = qc.request_details(1).unwrap();
        qc.complete(d.id, Ok(details(1)));
        assert_eq!(qc.details().map(|d| d.id), Some(1));
        assert!(qc.error().is_none());
        assert!(qc.request_details(1).is_none(), "already loaded");

        qc.clear_details();
        assert!(qc.details().is_none());
    }

    #[test]
    fn mismatched_payload_is_reported_as_failure() {
        let mut qc = QueryController::new();
        let t = qc.submit("portal").unwrap();
        assert!(qc.complete(t.id, Ok(details(9))));
        assert!(qc.raw().is_empty());
        assert!(qc.error().is_some());
    }

    #[test]
    fn ticket_ids_are_monotonic() {
        let mut qc = QueryController::new();
        let a = qc.submit("a").unwrap();
        qc.complete(a.id, Err(LookupError::MissingApiKey));
        let b = qc.submit("b").unwrap();
        assert!(b.id > a.id);
    }
}
