//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute the [`UIViewModel`] from `AppState`, then
//! hand the active page to its layout in [`components`].

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{PageView, UIViewModel};

/// Renders the plugin UI to stdout for a pane of `rows` × `cols`.
///
/// Does not clear the screen; Zellij hands the plugin a blank pane per frame.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    match &vm.page {
        PageView::Home(home) => components::render_home_page(&vm.tabs, home, &vm.footer, theme, cols, rows),
        PageView::Games(games) => components::render_games_page(&vm.tabs, games, &vm.footer, theme, cols, rows),
    }
}
