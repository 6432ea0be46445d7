//! RAWG wire format.
//!
//! Only the fields the plugin uses are declared; everything else in the
//! response is ignored by serde. Nullable fields default so that sparse
//! records still decode.

use crate::domain::game::parse_release_date;
use crate::domain::{Game, GameDetails, SearchPage};
use serde::Deserialize;

/// Envelope of every paginated RAWG listing.
#[derive(Debug, Deserialize)]
pub struct Listing<T> {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct GameRecord {
    pub id: u64,
    #[serde(default)]
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub tba: bool,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub ratings_count: Option<u32>,
    #[serde(default)]
    pub metacritic: Option<u32>,
    #[serde(default)]
    pub playtime: Option<u32>,
    #[serde(default)]
    pub platforms: Option<Vec<PlatformEntry>>,
    #[serde(default)]
    pub genres: Option<Vec<Named>>,
}

/// `platforms[]` wraps the platform object one level down.
#[derive(Debug, Deserialize)]
pub struct PlatformEntry {
    pub platform: Named,
}

/// Any `{ "name": ... }` object: genres, developers, publishers, platforms.
#[derive(Debug, Deserialize)]
pub struct Named {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct GameDetailsRecord {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description_raw: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub developers: Option<Vec<Named>>,
    #[serde(default)]
    pub publishers: Option<Vec<Named>>,
}

fn names(list: Option<Vec<Named>>) -> Vec<String> {
    list.unwrap_or_default().into_iter().map(|n| n.name).collect()
}

impl From<GameRecord> for Game {
    fn from(record: GameRecord) -> Self {
        let released = if record.tba {
            None
        } else {
            record.released.as_deref().and_then(parse_release_date)
        };
        Self {
            id: record.id,
            slug: record.slug,
            name: record.name,
            rating: record.rating.unwrap_or(0.0),
            released,
            background_image: record.background_image.filter(|s| !s.is_empty()),
            platforms: record
                .platforms
                .unwrap_or_default()
                .into_iter()
                .map(|p| p.platform.name)
                .collect(),
            genres: names(record.genres),
            metacritic: record.metacritic,
            playtime: record.playtime.unwrap_or(0),
            ratings_count: record.ratings_count.unwrap_or(0),
        }
    }
}

impl From<GameDetailsRecord> for GameDetails {
    fn from(record: GameDetailsRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description_raw.unwrap_or_default().trim().to_string(),
            website: record.website.filter(|s| !s.is_empty()),
            developers: names(record.developers),
            publishers: names(record.publishers),
        }
    }
}

impl Listing<GameRecord> {
    /// Converts into a domain page. RAWG does not echo the page number, so
    /// the caller supplies the one it requested.
    #[must_use]
    pub fn into_page(self, page: u32) -> SearchPage {
        SearchPage {
            count: self.count,
            page,
            has_next: self.next.is_some(),
            has_previous: self.previous.is_some(),
            games: self.results.into_iter().map(Game::from).collect(),
        }
    }
}
