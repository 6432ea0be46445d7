//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin. The Games
//! route keeps the raw results inside the [`QueryController`] and the derived,
//! displayed list in `shown`; `shown` is recomputed by
//! [`AppState::refresh_results`] whenever the raw results, the exclude-zero
//! flag or the sort key change.
//!
//! # Example
//!
//! ```rust
//! use zfolio::{initialize, Config};
//!
//! let state = initialize(&Config::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.tabs.len(), 2);
//! ```

use super::modes::{InputMode, Route};
use crate::catalog::{derive, QueryController, SortKey};
use crate::domain::{Game, LookupError, Profile};
use crate::rawg::RawgClient;
use crate::typewriter::Typewriter;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DetailInfo, DisplayItem, EmptyState, FooterInfo, GamesView, HeaderInfo, HomeView, PageView,
    ProjectItem, SearchBarInfo, StatusInfo, TabItem, UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;

/// Width of the RELEASED column.
pub const RELEASED_COLUMN_WIDTH: usize = 12;
/// Width of the RATING column.
pub const RATING_COLUMN_WIDTH: usize = 8;
/// Rows used by the Games page around the result table: tabs, header,
/// border, search box (3), status, error line, table header, border, footer.
const GAMES_CHROME_ROWS: usize = 11;
/// Rows used by the detail pane when it fits.
pub const DETAIL_PANE_ROWS: usize = 8;
/// Below this height the detail pane is dropped to keep the table usable.
const DETAIL_PANE_MIN_TERMINAL_ROWS: usize = 24;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Route currently shown.
    pub route: Route,

    pub input_mode: InputMode,

    /// Text in the search box. Submitted explicitly, never per keystroke.
    pub search_input: String,

    /// Portfolio content for the Home route.
    pub profile: Profile,

    /// Title animation; mounted only while Home is shown and the pane is visible.
    pub typewriter: Typewriter,

    /// Raw results and the single in-flight lookup guard.
    pub catalog: QueryController,

    /// Drop games whose rating is zero.
    pub exclude_zero: bool,

    pub sort: SortKey,

    /// Derived list: `derive(catalog.raw(), exclude_zero, sort)`.
    pub shown: Vec<Game>,

    /// Zero-based index into `shown`, clamped by `refresh_results`.
    pub selected_index: usize,

    /// RAWG request builder, or the reason none could be built.
    pub client: Result<RawgClient, LookupError>,

    /// Whether the pane is currently visible.
    pub visible: bool,

    /// Cleared if the user denies the web access permission.
    pub web_access: bool,

    pub theme: Theme,
}

impl AppState {
    /// Creates the state for `route` with nothing searched yet.
    #[must_use]
    pub fn new(
        route: Route,
        profile: Profile,
        typewriter: Typewriter,
        client: Result<RawgClient, LookupError>,
        theme: Theme,
    ) -> Self {
        Self {
            route,
            input_mode: InputMode::Normal,
            search_input: String::new(),
            profile,
            typewriter,
            catalog: QueryController::new(),
            exclude_zero: false,
            sort: SortKey::default(),
            shown: vec![],
            selected_index: 0,
            client,
            visible: true,
            web_access: true,
            theme,
        }
    }

    /// Moves selection down by one position, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.shown.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.shown.len();
    }

    /// Moves selection up by one position, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.shown.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.shown.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_game(&self) -> Option<&Game> {
        self.shown.get(self.selected_index)
    }

    /// Recomputes the displayed list from the raw results, the filter flag
    /// and the sort key, then clamps the selection.
    pub fn refresh_results(&mut self) {
        let _span = tracing::debug_span!(
            "refresh_results",
            raw = self.catalog.raw().len(),
            exclude_zero = self.exclude_zero,
            sort = self.sort.as_str()
        )
        .entered();

        let selected_id = self.selected_game().map(|g| g.id);
        self.shown = derive(self.catalog.raw(), self.exclude_zero, self.sort);

        self.selected_index = selected_id
            .and_then(|id| self.shown.iter().position(|g| g.id == id))
            .unwrap_or(0);
        if !self.shown.is_empty() {
            self.selected_index = self.selected_index.min(self.shown.len() - 1);
        }

        tracing::debug!(shown = self.shown.len(), "results derived");
    }

    /// Computes a renderable view model for a terminal of `rows` × `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let tabs = Route::ALL
            .iter()
            .enumerate()
            .map(|(i, route)| TabItem {
                label: format!("{} {}", i + 1, route.label()),
                path: route.path(),
                is_active: *route == self.route,
            })
            .collect();

        let page = match self.route {
            Route::Home => PageView::Home(self.compute_home()),
            Route::Games => PageView::Games(self.compute_games(rows, cols)),
        };

        UIViewModel {
            tabs,
            page,
            footer: self.compute_footer(),
        }
    }

    fn compute_home(&self) -> HomeView {
        HomeView {
            header: HeaderInfo {
                title: self.profile.name.clone(),
                subtitle: self.profile.alias.clone(),
            },
            headline: self.profile.headline.clone(),
            typed: self.typewriter.text().to_string(),
            phrase: self.typewriter.active_phrase().to_string(),
            cursor_visible: self.typewriter.cursor_visible(),
            about: self.profile.about.clone(),
            projects: self
                .profile
                .projects
                .iter()
                .map(|p| ProjectItem {
                    title: p.title.clone(),
                    summary: p.summary.clone(),
                    link: p.link.clone(),
                })
                .collect(),
        }
    }

    fn compute_games(&self, rows: usize, cols: usize) -> GamesView {
        let detail = self.compute_detail().filter(|_| rows >= DETAIL_PANE_MIN_TERMINAL_ROWS);
        let detail_rows = if detail.is_some() { DETAIL_PANE_ROWS } else { 0 };
        let available_rows = rows.saturating_sub(GAMES_CHROME_ROWS + detail_rows).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.shown.len());
        if visible_end - visible_start.min(visible_end) < available_rows && self.shown.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }
        let visible_start = visible_start.min(visible_end);

        let matcher = if self.catalog.query().is_empty() {
            None
        } else {
            Some(SkimMatcherV2::default())
        };

        let display_items = self.shown[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, game)| {
                self.compute_display_item(game, visible_start + relative_idx, cols, matcher.as_ref())
            })
            .collect();

        let empty_state = self.shown.is_empty().then(|| EmptyState {
            message: "No results".to_string(),
            subtitle: self.empty_subtitle(),
        });

        GamesView {
            header: HeaderInfo {
                title: "Game Search".to_string(),
                subtitle: Some("powered by RAWG".to_string()),
            },
            search_bar: SearchBarInfo {
                query: self.search_input.clone(),
                is_typing: self.input_mode == InputMode::Typing,
                is_busy: self.catalog.is_busy(),
            },
            status: self.compute_status(),
            error: self.catalog.error().map(ToString::to_string),
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            empty_state,
            detail,
        }
    }

    fn compute_display_item(
        &self,
        game: &Game,
        absolute_idx: usize,
        cols: usize,
        matcher: Option<&SkimMatcherV2>,
    ) -> DisplayItem {
        let name_width = name_column_width(cols);
        let name = truncate(&game.name, name_width);
        let name_len = name.chars().count();

        let highlight_ranges = matcher
            .map(|m| self.compute_highlight_ranges(&game.name, m))
            .unwrap_or_default()
            .into_iter()
            .filter(|&(start, _)| start < name_len)
            .map(|(start, end)| (start, end.min(name_len)))
            .collect();

        DisplayItem {
            name,
            released: game.release_label(),
            rating: game.rating_label(),
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    /// Coalesces the fuzzy match indices of the submitted query in `text`
    /// into `(start, end)` character ranges.
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        let Some((_score, indices)) = matcher.fuzzy_indices(text, self.catalog.query()) else {
            return vec![];
        };

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for idx in indices {
            match ranges.last_mut() {
                Some((_, end)) if *end == idx => *end = idx + 1,
                _ => ranges.push((idx, idx + 1)),
            }
        }
        ranges
    }

    fn compute_status(&self) -> StatusInfo {
        let filter_label = if self.exclude_zero {
            "rated only".to_string()
        } else {
            "all ratings".to_string()
        };

        let page_label = if self.catalog.page() == 0 {
            String::new()
        } else {
            let mut label = format!("page {} · {} matches", self.catalog.page(), self.catalog.total());
            if self.catalog.has_previous() {
                label.push_str("  [ prev");
            }
            if self.catalog.has_next() {
                label.push_str("  ] next");
            }
            label
        };

        StatusInfo {
            filter_label,
            sort_label: self.sort.label().to_string(),
            page_label,
        }
    }

    fn compute_detail(&self) -> Option<DetailInfo> {
        let game = self.selected_game()?;
        let details = self.catalog.details().filter(|d| d.id == game.id);

        let mut facts = vec![
            ("Released".to_string(), game.release_label()),
            ("Rating".to_string(), format!("{} ({} votes)", game.rating_label(), game.ratings_count)),
        ];
        if let Some(score) = game.metacritic {
            facts.push(("Metacritic".to_string(), score.to_string()));
        }
        if game.playtime > 0 {
            facts.push(("Playtime".to_string(), format!("{}h", game.playtime)));
        }
        if !game.platforms.is_empty() {
            facts.push(("Platforms".to_string(), game.platforms.join(", ")));
        }
        if !game.genres.is_empty() {
            facts.push(("Genres".to_string(), game.genres.join(", ")));
        }
        if let Some(image) = &game.background_image {
            facts.push(("Background".to_string(), image.clone()));
        }
        if let Some(details) = details {
            if !details.developers.is_empty() {
                facts.push(("Developers".to_string(), details.developers.join(", ")));
            }
            if !details.publishers.is_empty() {
                facts.push(("Publishers".to_string(), details.publishers.join(", ")));
            }
            if let Some(website) = &details.website {
                facts.push(("Website".to_string(), website.clone()));
            }
        }

        Some(DetailInfo {
            name: game.name.clone(),
            facts,
            description: details.map(|d| d.description.clone()).filter(|d| !d.is_empty()),
        })
    }

    fn empty_subtitle(&self) -> String {
        if self.catalog.is_busy() {
            "Searching…".to_string()
        } else if self.catalog.query().is_empty() {
            "Press / to search the RAWG catalog".to_string()
        } else if self.exclude_zero && !self.catalog.raw().is_empty() {
            "Every match is unrated. Press f to show them".to_string()
        } else {
            "Try another search".to_string()
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.route, self.input_mode) {
            (Route::Home, _) => "Tab/1/2: switch page  q: quit",
            (Route::Games, InputMode::Typing) => "Enter: search  Esc: done  Type to edit query",
            (Route::Games, InputMode::Normal) => {
                "/: search  j/k: move  Enter: details  Esc: hide  f: filter  o: sort  [/]: page  Tab: home  q: quit"
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Width left for the NAME column after the fixed columns and separators.
#[must_use]
pub const fn name_column_width(cols: usize) -> usize {
    let width = cols.saturating_sub(RELEASED_COLUMN_WIDTH + RATING_COLUMN_WIDTH + 2);
    if width < 8 {
        8
    } else {
        width
    }
}

/// Truncates to `max` characters, ending with `...` when shortened.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LookupOutcome;
    use crate::domain::game::parse_release_date;
    use crate::domain::{GameDetails, SearchPage};
    use crate::rawg::DEFAULT_BASE_URL;
    use crate::typewriter::TypewriterConfig;

    fn state() -> AppState {
        AppState::new(
            Route::Games,
            Profile::default(),
            Typewriter::seeded(TypewriterConfig::single("hi"), 1),
            RawgClient::new(DEFAULT_BASE_URL, Some("key".into()), 20),
            Theme::default(),
        )
    }

    fn game(id: u64, name: &str, rating: f64, released: &str) -> Game {
        let mut g = Game::new(id, name);
        g.rating = rating;
        g.released = parse_release_date(released);
        g
    }

    fn load(state: &mut AppState, query: &str, games: Vec<Game>) {
        let ticket = state.catalog.submit(query).unwrap();
        state.catalog.complete(
            ticket.id,
            Ok(LookupOutcome::Page(SearchPage {
                count: games.len() as u64,
                games,
                page: 1,
                has_next: false,
                has_previous: false,
            })),
        );
        state.refresh_results();
    }

    fn games_view(state: &AppState, rows: usize) -> GamesView {
        match state.compute_viewmodel(rows, 100).page {
            PageView::Games(view) => view,
            PageView::Home(_) => panic!("expected games page"),
        }
    }

    #[test]
    fn empty_results_render_no_results() {
        let mut state = state();
        for exclude_zero in [false, true] {
            for sort in SortKey::ALL {
                state.exclude_zero = exclude_zero;
                state.sort = sort;
                state.refresh_results();

                let view = games_view(&state, 30);
                let empty = view.empty_state.expect("empty state shown");
                assert_eq!(empty.message, "No results", "exclude_zero={exclude_zero} sort={sort:?}");
                assert!(view.display_items.is_empty());
                assert!(view.detail.is_none());
            }
        }
    }

    #[test]
    fn filter_and_sort_drive_the_shown_list() {
        let mut state = state();
        load(
            &mut state,
            "zelda",
            vec![
                game(1, "Zelda I", 3.0, "1986-02-21"),
                game(2, "Zelda II", 0.0, "1987-01-14"),
                game(3, "Zelda BotW", 5.0, "2017-03-03"),
            ],
        );
        assert_eq!(state.shown.len(), 3);

        state.exclude_zero = true;
        state.sort = SortKey::HighestRating;
        state.refresh_results();
        let ids: Vec<u64> = state.shown.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn selection_follows_game_across_resort() {
        let mut state = state();
        load(
            &mut state,
            "mario",
            vec![game(1, "A", 1.0, "2001-01-01"), game(2, "B", 5.0, "2002-01-01")],
        );
        state.move_selection_down();
        assert_eq!(state.selected_game().unwrap().id, 2);

        state.sort = SortKey::HighestRating;
        state.refresh_results();
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.selected_game().unwrap().id, 2);
    }

    #[test]
    fn selection_wraps() {
        let mut state = state();
        load(&mut state, "x", vec![game(1, "A", 1.0, ""), game(2, "B", 1.0, "")]);
        state.move_selection_up();
        assert_eq!(state.selected_index, 1);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn query_matches_are_highlighted() {
        let mut state = state();
        load(&mut state, "hal", vec![game(1, "Halo", 4.0, "2001-11-15")]);
        let view = games_view(&state, 30);
        assert_eq!(view.display_items[0].highlight_ranges, vec![(0, 3)]);
    }

    #[test]
    fn detail_pane_merges_loaded_details() {
        let mut state = state();
        let mut portal = game(4200, "Portal 2", 4.6, "2011-04-18");
        portal.platforms = vec!["PC".into()];
        portal.background_image = Some("https://media.rawg.io/portal-2.jpg".into());
        load(&mut state, "portal", vec![portal]);

        let ticket = state.catalog.request_details(4200).unwrap();
        state.catalog.complete(
            ticket.id,
            Ok(LookupOutcome::Details(GameDetails {
                id: 4200,
                name: "Portal 2".into(),
                description: "Co-op puzzles.".into(),
                website: None,
                developers: vec!["Valve Software".into()],
                publishers: vec![],
            })),
        );

        let detail = games_view(&state, 30).detail.unwrap();
        assert!(detail.facts.contains(&("Platforms".to_string(), "PC".to_string())));
        assert!(detail
            .facts
            .contains(&("Background".to_string(), "https://media.rawg.io/portal-2.jpg".to_string())));
        assert!(detail.facts.contains(&("Developers".to_string(), "Valve Software".to_string())));
        assert_eq!(detail.description.as_deref(), Some("Co-op puzzles."));
    }

    #[test]
    fn window_keeps_selection_visible() {
        let mut state = state();
        let games = (0..50).map(|i| game(i, &format!("Game {i}"), 1.0, "")).collect();
        load(&mut state, "game", games);
        state.selected_index = 40;

        let view = games_view(&state, 20);
        assert!(view.display_items[view.selected_index].is_selected);
        assert_eq!(view.display_items.len(), 20 - GAMES_CHROME_ROWS);
    }

    #[test]
    fn truncate_is_char_safe() {
        assert_eq!(truncate("Pokémon Légendes", 10), "Pokémon...");
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn home_view_carries_typewriter_text() {
        let mut state = state();
        state.route = Route::Home;
        state.typewriter.advance();
        let PageView::Home(home) = state.compute_viewmodel(24, 80).page else {
            panic!("expected home page");
        };
        assert_eq!(home.typed, "h");
        assert_eq!(home.phrase, "hi");
        assert!(home.cursor_visible);
        assert_eq!(home.header.title, state.profile.name);
    }
}
