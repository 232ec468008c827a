//! Result table.

use crate::ui::helpers::{self, fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const TITLE_WIDTH: usize = 31;
const CATEGORY_WIDTH: usize = 10;
const DATE_WIDTH: usize = 15;
const TIME_WIDTH: usize = 10;
const COST_WIDTH: usize = 12;

pub fn render_table_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    let heading = format!(
        " {}{}{}{}{}{}",
        fit("EVENT", TITLE_WIDTH),
        fit("CATEGORY", CATEGORY_WIDTH),
        fit("DATE", DATE_WIDTH),
        fit("TIME", TIME_WIDTH),
        fit("COST", COST_WIDTH),
        "LOCATION"
    );
    print!("{}", heading.chars().take(cols).collect::<String>());
    print!("{}", Theme::reset());
    row + 1
}

pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

fn row_colors(item: &DisplayItem, theme: &Theme) {
    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
}

fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    row_colors(item, theme);

    print!("{}", if item.is_selected { "▸" } else { " " });
    helpers::render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_selected);
    print!("{}", " ".repeat(TITLE_WIDTH.saturating_sub(item.title.chars().count())));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", fit(&item.category, CATEGORY_WIDTH));
    print!("{}", fit(&item.date, DATE_WIDTH));
    print!("{}", fit(&item.time, TIME_WIDTH));
    print!("{}", Theme::reset());

    let badge_width = helpers::render_badge(&item.cost_badge, &item.cost, theme);
    row_colors(item, theme);
    print!("{}", " ".repeat(COST_WIDTH.saturating_sub(badge_width)));

    print!("{}", item.location);
    let line_len = 1 + TITLE_WIDTH + CATEGORY_WIDTH + DATE_WIDTH + TIME_WIDTH
        + COST_WIDTH.max(badge_width)
        + item.location.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
