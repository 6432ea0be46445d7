//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`main.rs`) and the domain, catalog and
//! RAWG layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──── Timer / Web Responses ───────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Route and input mode types
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use zfolio::{handle_event, initialize, Config, Event, Route};
//!
//! let mut state = initialize(&Config::default());
//! let (render, _actions) = handle_event(&mut state, &Event::ShowRoute(Route::Games))?;
//! assert!(render);
//! # Ok::<(), zfolio::FolioError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, Route};
pub use state::AppState;
