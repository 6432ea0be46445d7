//! Domain layer for the zfolio plugin.
//!
//! Core types independent of Zellij APIs: errors, the game record consumed
//! by the catalog pipeline, and the portfolio profile shown on the Home view.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`game`]: Game records and details
//! - [`profile`]: Portfolio content

pub mod error;
pub mod game;
pub mod profile;

pub use error::{FolioError, LookupError, Result};
pub use game::{Game, GameDetails, SearchPage};
pub use profile::{Profile, ProjectCard};
