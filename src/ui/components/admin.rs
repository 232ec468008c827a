//! Allow-list settings overlay.

use super::{render_frame, FRAME_TEXT_COL};
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{AdminEntry, AdminInfo};

pub fn render_admin_panel(top: usize, bottom: usize, admin: &AdminInfo, theme: &Theme, cols: usize) {
    render_frame(top, bottom, "Admin Panel", theme, cols);
    let mut row = top + 2;

    position_cursor(row, FRAME_TEXT_COL);
    for (label, is_current) in &admin.tabs {
        if *is_current {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.chip_focus_fg));
            print!("[{label}]");
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!(" {label} ");
        }
        print!("{}  ", Theme::reset());
    }
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{} enabled", admin.enabled_count);
    print!("{}", Theme::reset());
    row += 2;

    let entry_rows = bottom.saturating_sub(row + 2);
    let cursor = admin.entries.iter().position(|e| e.is_cursor).unwrap_or(0);
    let start = cursor.saturating_sub(entry_rows.saturating_sub(1));

    for entry in admin.entries.iter().skip(start).take(entry_rows) {
        render_entry(row, entry, theme);
        row += 1;
    }

    if let Some(draft) = &admin.draft {
        position_cursor(bottom.saturating_sub(1), FRAME_TEXT_COL);
        print!("{}", Theme::fg(&theme.colors.search_bar_border));
        print!("New value: ");
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{draft}▏");
        print!("{}", Theme::reset());
    }
}

fn render_entry(row: usize, entry: &AdminEntry, theme: &Theme) {
    position_cursor(row, FRAME_TEXT_COL);
    if entry.is_cursor {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    }

    let (marker, color) = if entry.is_enabled {
        ("[x]", &theme.colors.enabled_fg)
    } else {
        ("[ ]", &theme.colors.disabled_fg)
    };
    if !entry.is_cursor {
        print!("{}", Theme::fg(color));
    }
    print!("{marker} {}", entry.value);
    print!("{}", Theme::reset());
}
