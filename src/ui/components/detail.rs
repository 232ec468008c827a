//! Event details overlay.

use super::{render_frame, FRAME_TEXT_COL};
use crate::ui::helpers::{position_cursor, render_badge, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailInfo;

const LABEL_WIDTH: usize = 14;

pub fn render_detail(top: usize, bottom: usize, detail: &DetailInfo, theme: &Theme, cols: usize) {
    let inner_width = render_frame(top, bottom, &detail.title, theme, cols);
    let text_width = inner_width.saturating_sub(2);
    let mut row = top + 2;

    position_cursor(row, FRAME_TEXT_COL);
    print!("{}", Theme::fg(&theme.colors.chip_focus_fg));
    print!("{}", detail.category);
    print!("{}  ", Theme::reset());
    render_badge(&detail.cost_badge, &detail.cost, theme);
    row += 2;

    for (label, value) in &detail.fields {
        if row >= bottom {
            return;
        }
        position_cursor(row, FRAME_TEXT_COL);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{:<width$}", label, width = LABEL_WIDTH);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{}", value.chars().take(text_width.saturating_sub(LABEL_WIDTH)).collect::<String>());
        print!("{}", Theme::reset());
        row += 1;
    }
    row += 1;

    for line in wrap(&detail.description, text_width) {
        if row >= bottom {
            break;
        }
        position_cursor(row, FRAME_TEXT_COL);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{line}");
        print!("{}", Theme::reset());
        row += 1;
    }
}
