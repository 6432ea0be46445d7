//! Portfolio profile content shown on the Home view.
//!
//! A profile is a small TOML document. The plugin ships a built-in default and
//! accepts a user file through the `profile_file` option.
//!
//! ```toml
//! name = "Jane Doe"
//! alias = "JD"
//! headline = "Systems Programmer"
//! titles = ["Rustacean", "Tinkerer"]
//! about = ["First paragraph.", "Second paragraph."]
//!
//! [[projects]]
//! title = "Cool Thing"
//! summary = "What it does."
//! link = "https://example.com"
//! ```

use crate::domain::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_PROFILE: &str = include_str!("../../profiles/default.toml");

/// Biography and showcase content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub headline: String,
    /// Default typewriter phrases, cycled in order.
    #[serde(default)]
    pub titles: Vec<String>,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub projects: Vec<ProjectCard>,
}

/// A single showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub link: Option<String>,
}

impl Profile {
    /// Parses a profile from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Profile`] if the document is not valid TOML or
    /// misses the `name` field.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| FolioError::Profile(format!("failed to parse profile TOML: {e}")))
    }

    /// Loads a profile from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }
}

impl Default for Profile {
    /// Returns the built-in profile.
    ///
    /// # Panics
    ///
    /// Panics if the embedded profile fails to parse, which the test suite
    /// guards against.
    fn default() -> Self {
        Self::from_toml(DEFAULT_PROFILE).expect("built-in profile should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_profile_has_titles_and_projects() {
        let profile = Profile::default();
        assert_eq!(profile.name, "Joyrobotking");
        assert_eq!(profile.titles.len(), 5);
        assert_eq!(profile.titles[0], "Game Developer");
        assert_eq!(profile.projects.len(), 1);
    }

    #[test]
    fn optional_sections_default_to_empty() {
        let profile = Profile::from_toml("name = \"Solo\"").unwrap();
        assert_eq!(profile.alias, None);
        assert!(profile.titles.is_empty());
        assert!(profile.projects.is_empty());
    }

    #[test]
    fn loads_profile_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = \"Ada\"\ntitles = [\"Analyst\"]").unwrap();

        let profile = Profile::from_file(file.path()).unwrap();
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.titles, vec!["Analyst".to_string()]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Profile::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, FolioError::Io(_)));
    }

    #[test]
    fn missing_name_is_a_profile_error() {
        let err = Profile::from_toml("headline = \"x\"").unwrap_err();
        assert!(matches!(err, FolioError::Profile(_)));
    }
}
