//! Route and input mode state types.
//!
//! The plugin shows one of two routes. Only the Games route accepts text
//! input, and only while the search box is focused:
//! - **Normal**: navigation and commands
//! - **Typing**: keystrokes edit the search query

/// A page of the portfolio, addressed by a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    /// Biography, typewriter and project showcase. Path `/`.
    #[default]
    Home,
    /// RAWG game search. Path `/api-project`.
    Games,
}

impl Route {
    pub const ALL: [Self; 2] = [Self::Home, Self::Games];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Games => "/api-project",
        }
    }

    /// Resolves a path, ignoring a trailing slash. Unknown paths yield `None`.
    ///
    /// ```
    /// use zfolio::Route;
    ///
    /// assert_eq!(Route::from_path("/api-project/"), Some(Route::Games));
    /// assert_eq!(Route::from_path("/"), Some(Route::Home));
    /// assert_eq!(Route::from_path("/blog"), None);
    /// ```
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" if path.starts_with('/') => Some(Self::Home),
            "/api-project" => Some(Self::Games),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Games => "Games",
        }
    }

    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Home => Self::Games,
            Self::Games => Self::Home,
        }
    }
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    /// The search box has focus.
    Typing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn empty_path_is_not_home() {
        assert_eq!(Route::from_path(""), None);
    }

    #[test]
    fn toggle_switches_between_routes() {
        assert_eq!(Route::Home.toggle(), Route::Games);
        assert_eq!(Route::Games.toggle(), Route::Home);
    }
}
