//! Shared rendering utilities.
//!
//! Ranges used here are character indices, not byte offsets, so titles with
//! non-ASCII characters highlight correctly.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row` and `col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Finds every non-overlapping case-insensitive occurrence of `query` in
/// `text`.
///
/// Returns `(start, end)` character ranges, end exclusive.
///
/// # Examples
///
/// ```
/// use campus_events::ui::helpers::match_ranges;
///
/// assert_eq!(match_ranges("Game Night Social", "NIGHT"), vec![(5, 10)]);
/// assert_eq!(match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
/// assert!(match_ranges("Jazz", "").is_empty());
/// ```
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let fold = |c: char| c.to_lowercase().next().unwrap_or(c);
    let haystack: Vec<char> = text.chars().map(fold).collect();
    let needle: Vec<char> = query.chars().map(fold).collect();

    if needle.is_empty() || needle.len() > haystack.len() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if haystack[i..i + needle.len()] == needle[..] {
            ranges.push((i, i + needle.len()));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// Prints `text` with `ranges` highlighted.
///
/// Selected rows are printed plain so the selection background stays intact.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, is_selected: bool) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Prints a cost badge such as ` Free ` on its cost color.
///
/// Returns the printed width in characters.
pub fn render_badge(label: &str, cost: &str, theme: &Theme) -> usize {
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.badge_fg));
    print!("{}", Theme::bg(theme.badge_color(cost)));
    print!(" {label} ");
    print!("{}", Theme::reset());
    label.chars().count() + 2
}

/// Left-aligns `text` in `width` columns, cutting it if longer.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.chars().take(width).collect()
    } else {
        format!("{text}{}", " ".repeat(width - len))
    }
}

/// Left padding that centers `len` characters in `cols`.
#[must_use]
pub const fn center_padding(len: usize, cols: usize) -> usize {
    cols.saturating_sub(len) / 2
}

/// Breaks `text` into lines of at most `width` characters on word boundaries.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_ranges_counts_characters() {
        assert_eq!(match_ranges("Café Night", "night"), vec![(5, 10)]);
        assert!(match_ranges("Soccer", "soccer tournament").is_empty());
    }

    #[test]
    fn fit_pads_and_cuts() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdef", 3), "abc");
    }

    #[test]
    fn wrap_respects_width() {
        assert_eq!(
            wrap("Board games, video games, and snacks.", 12),
            vec!["Board games,", "video games,", "and snacks."]
        );
        assert!(wrap("", 10).is_empty());
    }
}
