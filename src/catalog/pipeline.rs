//! Filter and sort derivation over raw search results.
//!
//! The displayed list is never stored as mutable state. It is recomputed by
//! [`derive`] from the raw results, the exclude-zero flag and the sort key
//! whenever any of them changes.

use crate::domain::Game;
use std::cmp::Ordering;

/// Ordering applied to the filtered results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Order returned by the lookup service.
    #[default]
    Relevance,
    Latest,
    Oldest,
    HighestRating,
    LowestRating,
}

impl SortKey {
    /// All keys in UI cycling order.
    pub const ALL: [Self; 5] = [
        Self::Relevance,
        Self::Latest,
        Self::Oldest,
        Self::HighestRating,
        Self::LowestRating,
    ];

    /// Parses a textual key. Anything unrecognised means "no reordering".
    ///
    /// ```
    /// use zfolio::catalog::SortKey;
    ///
    /// assert_eq!(SortKey::parse("highest_rating"), SortKey::HighestRating);
    /// assert_eq!(SortKey::parse("popularity"), SortKey::Relevance);
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "latest" => Self::Latest,
            "oldest" => Self::Oldest,
            "highest_rating" => Self::HighestRating,
            "lowest_rating" => Self::LowestRating,
            _ => Self::Relevance,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Latest => "latest",
            Self::Oldest => "oldest",
            Self::HighestRating => "highest_rating",
            Self::LowestRating => "lowest_rating",
        }
    }

    /// Human-readable label for the status line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Relevance => "Relevance",
            Self::Latest => "Latest",
            Self::Oldest => "Oldest",
            Self::HighestRating => "Highest rating",
            Self::LowestRating => "Lowest rating",
        }
    }

    /// The key after `self` in [`SortKey::ALL`], wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// Computes the displayed list from raw results.
///
/// Zero-rated games are dropped when `exclude_zero` is set, then a stable
/// sort is applied for every key except [`SortKey::Relevance`]. Games without
/// a release date go last in both date orders.
///
/// ```
/// use zfolio::catalog::{derive, SortKey};
/// use zfolio::domain::Game;
///
/// let mut a = Game::new(1, "A");
/// a.rating = 3.0;
/// let mut b = Game::new(2, "B");
/// b.rating = 0.0;
///
/// let shown = derive(&[a, b], true, SortKey::Relevance);
/// assert_eq!(shown.len(), 1);
/// assert_eq!(shown[0].name, "A");
/// ```
#[must_use]
pub fn derive(raw: &[Game], exclude_zero: bool, sort: SortKey) -> Vec<Game> {
    let mut games: Vec<Game> = raw
        .iter()
        .filter(|g| !exclude_zero || !g.is_unrated())
        .cloned()
        .collect();

    match sort {
        SortKey::Relevance => {}
        SortKey::Latest => games.sort_by(|a, b| by_release(a, b, true)),
        SortKey::Oldest => games.sort_by(|a, b| by_release(a, b, false)),
        SortKey::HighestRating => games.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::LowestRating => games.sort_by(|a, b| a.rating.total_cmp(&b.rating)),
    }

    games
}

fn by_release(a: &Game, b: &Game, newest_first: bool) -> Ordering {
    match (a.released, b.released) {
        (Some(x), Some(y)) if newest_first => y.cmp(&x),
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::game::parse_release_date;

    fn rated(id: u64, rating: f64) -> Game {
        let mut g = Game::new(id, &format!("game-{id}"));
        g.rating = rating;
        g
    }

    fn dated(id: u64, date: &str) -> Game {
        let mut g = Game::new(id, &format!("game-{id}"));
        g.released = parse_release_date(date);
        g
    }

    fn ratings(games: &[Game]) -> Vec<f64> {
        games.iter().map(|g| g.rating).collect()
    }

    fn dates(games: &[Game]) -> Vec<String> {
        games.iter().map(Game::release_label).collect()
    }

    #[test]
    fn highest_and_lowest_rating_orders() {
        let raw = vec![rated(1, 3.0), rated(2, 0.0), rated(3, 5.0), rated(4, 1.0)];
        assert_eq!(ratings(&derive(&raw, false, SortKey::HighestRating)), vec![5.0, 3.0, 1.0, 0.0]);
        assert_eq!(ratings(&derive(&raw, false, SortKey::LowestRating)), vec![0.0, 1.0, 3.0, 5.0]);
    }

    #[test]
    fn latest_and_oldest_orders() {
        let raw = vec![dated(1, "2020-01-01"), dated(2, "2022-06-01"), dated(3, "2019-03-01")];
        assert_eq!(
            dates(&derive(&raw, false, SortKey::Latest)),
            vec!["2022-06-01", "2020-01-01", "2019-03-01"]
        );
        assert_eq!(
            dates(&derive(&raw, false, SortKey::Oldest)),
            vec!["2019-03-01", "2020-01-01", "2022-06-01"]
        );
    }

    #[test]
    fn undated_games_go_last_in_both_date_orders() {
        let raw = vec![dated(1, "tba"), dated(2, "2021-01-01"), dated(3, "2018-01-01")];
        assert_eq!(derive(&raw, false, SortKey::Latest).last().unwrap().id, 1);
        assert_eq!(derive(&raw, false, SortKey::Oldest).last().unwrap().id, 1);
    }

    #[test]
    fn exclude_zero_removes_all_and_only_unrated() {
        let raw = vec![rated(1, 0.0), rated(2, 4.2), rated(3, 0.0), rated(4, 0.5)];
        let shown = derive(&raw, true, SortKey::Relevance);
        let ids: Vec<u64> = shown.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn derive_is_idempotent() {
        let raw = vec![rated(1, 2.0), rated(2, 0.0), rated(3, 4.0), rated(4, 2.0)];
        for key in SortKey::ALL {
            let once = derive(&raw, true, key);
            let twice = derive(&once, true, key);
            assert_eq!(once, twice, "{key:?}");
        }
    }

    #[test]
    fn ties_keep_original_order() {
        let raw = vec![rated(1, 2.0), rated(2, 2.0), rated(3, 2.0)];
        let ids: Vec<u64> = derive(&raw, false, SortKey::HighestRating).iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn relevance_preserves_input_and_raw_is_untouched() {
        let raw = vec![rated(1, 1.0), rated(2, 5.0)];
        let copy = raw.clone();
        let shown = derive(&raw, false, SortKey::Relevance);
        assert_eq!(shown, copy);
        let _ = derive(&raw, true, SortKey::HighestRating);
        assert_eq!(raw, copy);
    }

    #[test]
    fn sort_key_text_round_trips_and_cycles() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::parse(key.as_str()), key);
        }
        assert_eq!(SortKey::parse(""), SortKey::Relevance);
        assert_eq!(SortKey::LowestRating.next(), SortKey::Relevance);
        assert_eq!(SortKey::Relevance.next(), SortKey::Latest);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(derive(&[], true, SortKey::Latest).is_empty());
    }
}
