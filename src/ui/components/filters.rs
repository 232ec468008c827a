//! Filter bar: one chip per dropdown and the applied-filter badge.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FilterBarInfo, FilterChip};

pub fn render_filter_bar(row: usize, bar: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let badge = if bar.applied_count > 0 {
        format!(" {} applied ", bar.applied_count)
    } else {
        String::new()
    };
    let budget = cols.saturating_sub(badge.chars().count() + 1);

    let mut used = 1;
    print!(" ");
    for chip in &bar.chips {
        let text = chip_text(chip);
        let len = text.chars().count();
        if used + len > budget {
            break;
        }
        render_chip(&text, chip, theme);
        used += len;
    }

    if !badge.is_empty() {
        print!("{}", " ".repeat(cols.saturating_sub(used + badge.chars().count())));
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.badge_fg));
        print!("{}", Theme::bg(&theme.colors.chip_applied_fg));
        print!("{badge}");
        print!("{}", Theme::reset());
    }

    row + 1
}

fn chip_text(chip: &FilterChip) -> String {
    if chip.is_focused {
        format!("‹{}: {}› ", chip.label, chip.value)
    } else {
        format!(" {}  ", chip.value)
    }
}

fn render_chip(text: &str, chip: &FilterChip, theme: &Theme) {
    if chip.is_focused {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.chip_focus_fg));
    } else if chip.is_applied {
        print!("{}", Theme::fg(&theme.colors.chip_applied_fg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{text}");
    print!("{}", Theme::reset());
}
