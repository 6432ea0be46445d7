//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never calls into Zellij. It returns a `Vec<Action>` and
//! the shim in `main.rs` executes them in order, which keeps every state
//! transition testable without a host.

use crate::rawg::LookupRequest;

/// Commands executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Schedules one host timer.
    ///
    /// Emitted only when the typewriter has no timer pending, so at most one
    /// is ever outstanding.
    ScheduleTick {
        /// Delay before the timer fires.
        after_ms: u64,
    },

    /// Issues an HTTP GET through the host.
    ///
    /// The response comes back as [`Event::LookupResponse`](crate::Event::LookupResponse)
    /// carrying the same context map.
    WebRequest(LookupRequest),
}

impl Action {
    /// Short name for spans.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CloseFocus => "CloseFocus",
            Self::ScheduleTick { .. } => "ScheduleTick",
            Self::WebRequest(_) => "WebRequest",
        }
    }
}
