//! Top-level rendering entry point.
//!
//! Rendering happens in two steps: the view model is computed from
//! [`AppState`], then the components print it as ANSI-styled text to stdout,
//! which Zellij captures as the plugin pane contents.

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout for a pane of `rows` x `cols`.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows, cols).entered();

    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_screen(&viewmodel, &state.theme, cols, rows);
}
