//! Screen regions, each drawn by its own function.
//!
//! Every `render_*` function takes the 1-indexed row to start at and returns
//! the next free row, so layouts are written top to bottom.
//!
//! ```text
//! row 2     title
//! row 3     "Showing N of M events"
//! row 4     ─────
//! row 5     filter chips + applied badge
//! row 6     ─────
//!           search box (3 rows, search mode only)
//!           table heading
//!           table rows / empty state
//! rows-2    ───── (or toast)
//! rows-1    footer keybindings
//! ```
//!
//! Details and the admin panel are boxes drawn over the table area.

mod admin;
mod detail;
mod empty;
mod filters;
mod footer;
mod header;
mod search;
mod table;

use crate::ui::helpers::{center_padding, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ToastInfo, UIViewModel};

use admin::render_admin_panel;
use detail::render_detail;
use empty::render_empty_state;
use filters::render_filter_bar;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// First row of the overlay boxes.
const OVERLAY_TOP: usize = 5;

/// Column where text inside a frame starts.
const FRAME_TEXT_COL: usize = 5;

fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Draws the whole screen for `vm`.
pub fn render_screen(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_filter_bar(current_row, &vm.filter_bar, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 1, empty, theme, cols);
    } else {
        current_row = render_table_headers(current_row, theme, cols);
        let _current_row = render_table_rows(current_row, &vm.display_items, theme, cols);
    }

    let overlay_bottom = rows.saturating_sub(3);
    if let Some(detail) = &vm.detail {
        render_detail(OVERLAY_TOP, overlay_bottom, detail, theme, cols);
    } else if let Some(admin) = &vm.admin {
        render_admin_panel(OVERLAY_TOP, overlay_bottom, admin, theme, cols);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    match &vm.toast {
        Some(toast) => render_toast(border_row, toast, theme, cols),
        None => {
            render_border(border_row, &theme.colors.border, cols);
        }
    }
    render_footer(footer_start, &vm.footer, theme, cols);
}

fn render_toast(row: usize, toast: &ToastInfo, theme: &Theme, cols: usize) {
    let text = format!(" ✓ {} ", toast.message);
    let len = text.chars().count();
    let padding = center_padding(len, cols);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.border));
    print!("{}", "─".repeat(padding));
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.toast_fg));
    print!("{}", Theme::bg(&theme.colors.toast_bg));
    print!("{text}");
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.border));
    print!("{}", "─".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}

/// Draws an empty framed box from `top` to `bottom` with `title` in the top
/// edge. Returns the inner width.
fn render_frame(top: usize, bottom: usize, title: &str, theme: &Theme, cols: usize) -> usize {
    const MARGIN: usize = 2;

    let inner_width = cols.saturating_sub(MARGIN * 2 + 2);
    if bottom <= top {
        return inner_width;
    }
    let title = format!(" {title} ");
    let title_len = title.chars().count().min(inner_width);

    position_cursor(top, MARGIN + 1);
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("┌");
    print!("{}", Theme::bold());
    print!("{}", title.chars().take(title_len).collect::<String>());
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("{}┐", "─".repeat(inner_width - title_len));

    for row in top + 1..bottom {
        position_cursor(row, MARGIN + 1);
        print!("│{}│", " ".repeat(inner_width));
    }

    position_cursor(bottom, MARGIN + 1);
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    inner_width
}

