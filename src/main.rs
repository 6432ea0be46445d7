//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the zfolio library and the Zellij plugin
//! system: host events become library [`Event`]s, and returned [`Action`]s
//! become host calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, Timer, `WebRequestResult`, Visible and
//!    permission events, and request `WebAccess`
//! 3. **Update**: Map events, delegate to `handle_event`, execute actions
//! 4. **Render**: Call the library render function
//!
//! # Event Mapping
//!
//! - `Timer` → `Event::Tick`
//! - `Visible(v)` → `Event::Visible(v)`
//! - `WebRequestResult` → `Event::LookupResponse`, with the issuing span's
//!   trace context attached first
//! - `PermissionRequestResult` → `Event::PermissionsResult`
//!
//! # Keybindings
//!
//! Everywhere outside the search box:
//! - `Tab`: Switch route
//! - `1`/`2`: Home / Games
//! - `q`: Close plugin
//!
//! Games, normal mode:
//! - `/`: Focus the search box
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `Enter`: Load details
//! - `Esc`: Hide details
//! - `f`: Toggle unrated games
//! - `o`: Cycle sort order
//! - `]`/`[`: Next / previous page
//!
//! Games, typing:
//! - Characters and `Backspace` edit the query
//! - `Enter`: Search
//! - `Esc`: Leave the search box

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zfolio::observability::TraceContext;
use zfolio::{handle_event, Action, Config, Event, InputMode, Route};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: zfolio::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: zfolio::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zfolio::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            start_route = config.start_route.path(),
            has_api_key = config.api_key.is_some(),
            page_size = config.page_size,
            "parsed configuration"
        );
        self.app = zfolio::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::WebRequestResult,
            EventType::Visible,
            EventType::PermissionRequestResult,
        ]);

        // Start the typewriter if the pane opens on Home.
        self.dispatch(&Event::Visible(true));

        tracing::debug!("plugin load complete");
    }

    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        // Must be attached before the span below is created so the span
        // picks it up as its parent.
        let _parent = match &event {
            zellij_tile::prelude::Event::WebRequestResult(_, _, _, context) => {
                TraceContext::read_from(context).and_then(|ctx| ctx.attach())
            }
            _ => None,
        };

        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_) => Event::Tick,
            zellij_tile::prelude::Event::Visible(visible) => Event::Visible(visible),
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                Event::LookupResponse { status, body, context }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => Event::PermissionsResult {
                granted: matches!(status, PermissionStatus::Granted),
            },
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        zfolio::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled successfully");
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(_) => "Timer".to_string(),
            zellij_tile::prelude::Event::Visible(_) => "Visible".to_string(),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        if self.app.input_mode == InputMode::Typing {
            return Some(match key.bare_key {
                BareKey::Enter => Event::Submit,
                BareKey::Esc => Event::ExitSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Char(c) if !key.has_modifiers(&[KeyModifier::Ctrl]) && !key.has_modifiers(&[KeyModifier::Alt]) => {
                    Event::Char(c)
                }
                _ => return None,
            });
        }

        let global = match key.bare_key {
            BareKey::Tab => Some(Event::ToggleRoute),
            BareKey::Char('1') => Some(Event::ShowRoute(Route::Home)),
            BareKey::Char('2') => Some(Event::ShowRoute(Route::Games)),
            BareKey::Char('q') => Some(Event::CloseFocus),
            _ => None,
        };
        if global.is_some() || self.app.route != Route::Games {
            return global;
        }

        Some(match key.bare_key {
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Enter => Event::OpenDetails,
            BareKey::Esc => Event::CloseDetails,
            BareKey::Char('f') => Event::ToggleExcludeZero,
            BareKey::Char('o') => Event::CycleSort,
            BareKey::Char(']') => Event::NextPage,
            BareKey::Char('[') => Event::PreviousPage,
            _ => return None,
        })
    }

    /// Translates library actions to Zellij API calls.
    ///
    /// Request URLs carry the API key, so only the action name is recorded.
    #[tracing::instrument(level = "debug", skip_all, fields(action = action.name()))]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::ScheduleTick { after_ms } => {
                #[allow(clippy::cast_precision_loss)]
                set_timeout(*after_ms as f64 / 1000.0);
            }
            Action::WebRequest(request) => {
                tracing::debug!(url_len = request.url.len(), "issuing web request");
                web_request(
                    &request.url,
                    HttpVerb::Get,
                    request.headers.clone(),
                    vec![],
                    request.context.clone(),
                );
            }
        }
    }
}
