//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They hold
//! display-ready strings only, which keeps the rendering code free of
//! business logic and lets tests assert on what would be drawn.

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Route tabs shown on the first line.
    pub tabs: Vec<TabItem>,
    /// The active page.
    pub page: PageView,
    /// Keybinding hints for the bottom line.
    pub footer: FooterInfo,
}

/// One entry of the route tab bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    pub label: String,
    pub path: &'static str,
    pub is_active: bool,
}

/// Page-specific content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    Home(HomeView),
    Games(GamesView),
}

/// Biography page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub header: HeaderInfo,
    pub headline: String,
    /// Text typed so far by the typewriter.
    pub typed: String,
    /// Phrase currently being typed or deleted.
    pub phrase: String,
    /// Whether the block cursor is drawn this frame.
    pub cursor_visible: bool,
    pub about: Vec<String>,
    pub projects: Vec<ProjectItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    pub title: String,
    pub summary: String,
    pub link: Option<String>,
}

/// Game search page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamesView {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    pub status: StatusInfo,
    /// Generic failure message, if the last lookup failed.
    pub error: Option<String>,
    /// Visible window of result rows.
    pub display_items: Vec<DisplayItem>,
    /// Selection index relative to `display_items`.
    pub selected_index: usize,
    /// Set when the derived list is empty.
    pub empty_state: Option<EmptyState>,
    pub detail: Option<DetailInfo>,
}

/// Display information for a single game row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub name: String,
    pub released: String,
    pub rating: String,
    pub is_selected: bool,
    /// Character ranges of `name` matching the query, `(start, end)` exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// Secondary text rendered next to the title, e.g. an alias.
    pub subtitle: Option<String>,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Search input box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    /// The box has keyboard focus.
    pub is_typing: bool,
    /// A lookup is in flight; the box shows a busy marker.
    pub is_busy: bool,
}

/// Filter, sort and pagination summary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub filter_label: String,
    pub sort_label: String,
    /// `page 2 · 40 matches`, empty before the first search.
    pub page_label: String,
}

/// Detail pane for the selected game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailInfo {
    pub name: String,
    /// `key: value` lines, already formatted.
    pub facts: Vec<(String, String)>,
    /// Description from the details lookup, once loaded.
    pub description: Option<String>,
}
