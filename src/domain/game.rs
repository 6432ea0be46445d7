//! Game domain model.
//!
//! [`Game`] is the record the catalog pipeline filters and sorts. It is built
//! from the RAWG wire format (see [`crate::rawg::models`]) but carries only
//! the fields the plugin displays or orders by.

use chrono::NaiveDate;

/// A video game returned by a search.
///
/// `rating` is treated as an opaque comparable number; `0.0` means unrated.
/// `released` is `None` for unreleased (TBA) titles or dates that could not be
/// parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: u64,
    pub slug: String,
    pub name: String,
    pub rating: f64,
    pub released: Option<NaiveDate>,
    pub background_image: Option<String>,
    pub platforms: Vec<String>,
    pub genres: Vec<String>,
    pub metacritic: Option<u32>,
    pub playtime: u32,
    pub ratings_count: u32,
}

impl Game {
    /// Creates a game with only the identifying fields set.
    ///
    /// Everything else is empty or zero. Mostly useful for building fixtures.
    ///
    /// # Examples
    ///
    /// ```
    /// use zfolio::domain::Game;
    ///
    /// let game = Game::new(3328, "The Witcher 3: Wild Hunt");
    /// assert_eq!(game.slug, "the-witcher-3-wild-hunt");
    /// assert!(game.is_unrated());
    /// ```
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            slug: slugify(&name),
            name,
            rating: 0.0,
            released: None,
            background_image: None,
            platforms: Vec::new(),
            genres: Vec::new(),
            metacritic: None,
            playtime: 0,
            ratings_count: 0,
        }
    }

    /// Returns `true` when the game has no rating.
    #[must_use]
    pub fn is_unrated(&self) -> bool {
        self.rating == 0.0
    }

    /// Release date formatted as `YYYY-MM-DD`, or `TBA`.
    #[must_use]
    pub fn release_label(&self) -> String {
        self.released
            .map_or_else(|| "TBA".to_string(), |date| date.format("%Y-%m-%d").to_string())
    }

    /// Rating with two decimals, or `unrated`.
    #[must_use]
    pub fn rating_label(&self) -> String {
        if self.is_unrated() {
            "unrated".to_string()
        } else {
            format!("{:.2}", self.rating)
        }
    }
}

/// Extra information loaded when a single game is opened.
#[derive(Debug, Clone, PartialEq)]
pub struct GameDetails {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub website: Option<String>,
    pub developers: Vec<String>,
    pub publishers: Vec<String>,
}

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPage {
    pub games: Vec<Game>,
    /// Total number of matches across all pages.
    pub count: u64,
    /// 1-based page number.
    pub page: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Parses the API's ISO-like date strings (`2015-05-18`).
///
/// Returns `None` for empty or malformed input.
#[must_use]
pub fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}
