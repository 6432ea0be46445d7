//! Correlation data carried through Zellij's `web_request` context map.
//!
//! The host hands the map back untouched with the response, which is how a
//! result is matched to the ticket that requested it.

use crate::catalog::{LookupKind, RequestTicket};
use crate::domain::LookupError;
use crate::observability::TraceContext;
use std::collections::BTreeMap;

const SOURCE_KEY: &str = "source";
const SOURCE: &str = "zfolio";
const TICKET_KEY: &str = "ticket";
const KIND_KEY: &str = "kind";
const QUERY_KEY: &str = "query";
const PAGE_KEY: &str = "page";
const GAME_ID_KEY: &str = "game_id";

/// Everything needed to route a response back to its request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub ticket: RequestTicket,
    pub trace: Option<TraceContext>,
}

impl RequestContext {
    #[must_use]
    pub const fn new(ticket: RequestTicket, trace: Option<TraceContext>) -> Self {
        Self { ticket, trace }
    }

    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert(SOURCE_KEY.to_string(), SOURCE.to_string());
        map.insert(TICKET_KEY.to_string(), self.ticket.id.to_string());
        map.insert(KIND_KEY.to_string(), self.ticket.kind.name().to_string());
        match &self.ticket.kind {
            LookupKind::Search { query, page } => {
                map.insert(QUERY_KEY.to_string(), query.clone());
                map.insert(PAGE_KEY.to_string(), page.to_string());
            }
            LookupKind::Details { id } => {
                map.insert(GAME_ID_KEY.to_string(), id.to_string());
            }
        }
        if let Some(trace) = &self.trace {
            trace.write_to(&mut map);
        }
        map
    }

    /// Rebuilds the context from a response's map.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnknownRequest`] when the map was not produced by
    /// [`RequestContext::to_map`].
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self, LookupError> {
        if map.get(SOURCE_KEY).map(String::as_str) != Some(SOURCE) {
            return Err(LookupError::UnknownRequest);
        }

        let id = parse_field::<u64>(map, TICKET_KEY)?;
        let kind = match map.get(KIND_KEY).map(String::as_str) {
            Some("search") => LookupKind::Search {
                query: map.get(QUERY_KEY).cloned().unwrap_or_default(),
                page: parse_field(map, PAGE_KEY)?,
            },
            Some("details") => LookupKind::Details {
                id: parse_field(map, GAME_ID_KEY)?,
            },
            _ => return Err(LookupError::UnknownRequest),
        };

        Ok(Self {
            ticket: RequestTicket { id, kind },
            trace: TraceContext::read_from(map),
        })
    }
}

fn parse_field<T: std::str::FromStr>(map: &BTreeMap<String, String>, key: &str) -> Result<T, LookupError> {
    map.get(key)
        .and_then(|v| v.parse().ok())
        .ok_or(LookupError::UnknownRequest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_context_round_trips() {
        let ctx = RequestContext::new(
            RequestTicket {
                id: 7,
                kind: LookupKind::Search {
                    query: "stardew valley".into(),
                    page: 3,
                },
            },
            Some(TraceContext {
                trace_id: "4bf92f3577b34da6a3ce929d0e0e4736".into(),
                parent_span_id: "00f067aa0ba902b7".into(),
            }),
        );
        assert_eq!(RequestContext::from_map(&ctx.to_map()), Ok(ctx));
    }

    #[test]
    fn details_context_round_trips_without_trace() {
        let ctx = RequestContext::new(
            RequestTicket {
                id: 2,
                kind: LookupKind::Details { id: 3328 },
            },
            None,
        );
        assert_eq!(RequestContext::from_map(&ctx.to_map()), Ok(ctx));
    }

    #[test]
    fn foreign_map_is_rejected() {
        let mut map = BTreeMap::new();
        map.insert("ticket".to_string(), "1".to_string());
        assert_eq!(RequestContext::from_map(&map), Err(LookupError::UnknownRequest));

        map.insert("source".to_string(), "zfolio".to_string());
        map.insert("kind".to_string(), "genres".to_string());
        assert_eq!(RequestContext::from_map(&map), Err(LookupError::UnknownRequest));
    }
}
