//! RAWG request building and response decoding.
//!
//! The plugin cannot open sockets; the host performs the HTTP call. This
//! client therefore never sends anything itself. It turns a
//! [`RequestTicket`] into a [`LookupRequest`] for the host, and turns the
//! host's answer back into a [`LookupOutcome`].

use super::context::RequestContext;
use super::models::{GameDetailsRecord, GameRecord, Listing};
use crate::catalog::{LookupKind, LookupOutcome, RequestTicket};
use crate::domain::{GameDetails, LookupError};
use crate::observability::TraceContext;
use std::collections::BTreeMap;
use url::Url;

/// Public RAWG endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.rawg.io/api";
/// Results per page when not configured.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// A fully built GET request, ready to hand to `web_request`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub context: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct RawgClient {
    base_url: Url,
    api_key: Option<String>,
    page_size: u32,
}

impl RawgClient {
    /// Creates a client.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidUrl`] when `base_url` is not an absolute
    /// URL that can carry path segments.
    pub fn new(base_url: &str, api_key: Option<String>, page_size: u32) -> Result<Self, LookupError> {
        let base_url = Url::parse(base_url).map_err(|e| LookupError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(LookupError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            page_size: page_size.max(1),
        })
    }

    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Builds the host request for `ticket`.
    ///
    /// The current span's trace context is stored in the request context so
    /// the response handler can continue the same trace.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::MissingApiKey`] when no key is configured.
    pub fn request(&self, ticket: &RequestTicket) -> Result<LookupRequest, LookupError> {
        let url = match &ticket.kind {
            LookupKind::Search { query, page } => self.search_url(query, *page)?,
            LookupKind::Details { id } => self.details_url(*id)?,
        };

        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert("User-Agent".to_string(), concat!("zfolio/", env!("CARGO_PKG_VERSION")).to_string());

        let context = RequestContext::new(ticket.clone(), TraceContext::from_current()).to_map();

        Ok(LookupRequest {
            url: url.to_string(),
            headers,
            context,
        })
    }

    /// `GET {base}/games?key=..&search=..&page=..&page_size=..`
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::MissingApiKey`] when no key is configured.
    pub fn search_url(&self, query: &str, page: u32) -> Result<Url, LookupError> {
        let key = self.api_key()?;
        let mut url = self.endpoint(&["games"])?;
        url.query_pairs_mut()
            .append_pair("key", key)
            .append_pair("search", query)
            .append_pair("page", &page.to_string())
            .append_pair("page_size", &self.page_size.to_string());
        Ok(url)
    }

    /// `GET {base}/games/{id}?key=..`
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::MissingApiKey`] when no key is configured.
    pub fn details_url(&self, id: u64) -> Result<Url, LookupError> {
        let key = self.api_key()?;
        let mut url = self.endpoint(&["games", &id.to_string()])?;
        url.query_pairs_mut().append_pair("key", key);
        Ok(url)
    }

    fn api_key(&self) -> Result<&str, LookupError> {
        self.api_key.as_deref().ok_or(LookupError::MissingApiKey)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, LookupError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| LookupError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Decodes a host response for a request of `kind`.
///
/// # Errors
///
/// - [`LookupError::Status`] for any non-2xx status
/// - [`LookupError::Malformed`] when the body is not the expected JSON
pub fn decode(kind: &LookupKind, status: u16, body: &[u8]) -> Result<LookupOutcome, LookupError> {
    if !(200..300).contains(&status) {
        return Err(LookupError::Status(status));
    }

    match kind {
        LookupKind::Search { page, .. } => {
            let listing: Listing<GameRecord> =
                serde_json::from_slice(body).map_err(|e| LookupError::Malformed(e.to_string()))?;
            Ok(LookupOutcome::Page(listing.into_page(*page)))
        }
        LookupKind::Details { .. } => {
            let record: GameDetailsRecord =
                serde_json::from_slice(body).map_err(|e| LookupError::Malformed(e.to_string()))?;
            Ok(LookupOutcome::Details(GameDetails::from(record)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> RawgClient {
        RawgClient::new(DEFAULT_BASE_URL, Some("k3y".into()), 10).unwrap()
    }

    fn search_ticket(query: &str, page: u32) -> RequestTicket {
        RequestTicket {
            id: 1,
            kind: LookupKind::Search {
                query: query.into(),
                page,
            },
        }
    }

    #[test]
    fn builds_search_url_with_encoded_query() {
        let url = client().search_url("half life & co", 2).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.rawg.io/api/games?key=k3y&search=half+life+%26+co&page=2&page_size=10"
        );
    }

    #[test]
    fn builds_details_url() {
        let url = client().details_url(3328).unwrap();
        assert_eq!(url.as_str(), "https://api.rawg.io/api/games/3328?key=k3y");
    }

    #[test]
    fn trailing_slash_in_base_is_tolerated() {
        let client = RawgClient::new("http://localhost:8080/api/", Some("k".into()), 5).unwrap();
        assert_eq!(client.details_url(1).unwrap().as_str(), "http://localhost:8080/api/games/1?key=k");
    }

    #[test]
    fn missing_or_blank_key_fails_before_any_request() {
        for key in [None, Some("  ".to_string())] {
            let client = RawgClient::new(DEFAULT_BASE_URL, key, 20).unwrap();
            assert!(!client.has_api_key());
            assert_eq!(client.request(&search_ticket("x", 1)), Err(LookupError::MissingApiKey));
        }
    }

    #[test]
    fn rejects_relative_base_url() {
        assert!(matches!(
            RawgClient::new("not a url", None, 20),
            Err(LookupError::InvalidUrl(_))
        ));
    }

    #[test]
    fn request_carries_ticket_in_context() {
        let ticket = search_ticket("celeste", 1);
        let request = client().request(&ticket).unwrap();
        let ctx = RequestContext::from_map(&request.context).unwrap();
        assert_eq!(ctx.ticket, ticket);
        assert_eq!(request.headers.get("Accept").map(String::as_str), Some("application/json"));
    }

    #[test]
    fn decode_maps_status_and_body_errors() {
        let kind = LookupKind::Search {
            query: "x".into(),
            page: 1,
        };
        assert_eq!(decode(&kind, 401, b"{}"), Err(LookupError::Status(401)));
        assert!(matches!(decode(&kind, 200, b"<html>"), Err(LookupError::Malformed(_))));
    }

    #[test]
    fn decode_search_page_uses_requested_page() {
        let kind = LookupKind::Search {
            query: "x".into(),
            page: 4,
        };
        let body = br#"{"count": 1, "next": null, "previous": "p3", "results": [{"id": 9, "name": "Celeste", "rating": 4.4}]}"#;
        let Ok(LookupOutcome::Page(page)) = decode(&kind, 200, body) else {
            panic!("expected a page");
        };
        assert_eq!(page.page, 4);
        assert!(page.has_previous);
        assert_eq!(page.games[0].name, "Celeste");
    }
}
