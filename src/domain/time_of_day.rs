//! Coarse time-of-day classification for free-form time strings.
//!
//! Listing times are display text ("7:00 PM", "9:00 AM - 5:00 PM"), so the Time
//! dropdown works on a bucket derived by [`classify`] rather than a parsed clock
//! value. The rules are intentionally loose and keep two quirks of the listing
//! data's conventions:
//!
//! - any string containing `AM` is Morning, whatever its leading hour
//!   (`"12:00 AM"` and `"9:00 AM - 5:00 PM"` are both Morning)
//! - an hour that cannot be parsed counts as `0`
//!
//! Only the first component of a range is ever looked at, because the hour is
//! read from the text before the first colon.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hour (on the 12-hour PM clock) from which a PM time counts as Evening.
const PM_EVENING_FROM: i64 = 5;

/// Hour (24-hour clock) before which an unmarked time counts as Afternoon.
const AFTERNOON_UNTIL: i64 = 17;

/// Coarse time-of-day bucket used by the Time dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// All buckets in dropdown order.
    pub const ALL: [Self; 3] = [Self::Morning, Self::Afternoon, Self::Evening];

    /// Dropdown label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
        }
    }

    /// Longer label with the hour range, shown on the Time filter chip.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Morning => "Morning (Before 12pm)",
            Self::Afternoon => "Afternoon (12pm - 5pm)",
            Self::Evening => "Evening (After 5pm)",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeOfDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown time of day: {s}"))
    }
}

/// Classifies a free-form time string into a [`TimeOfDay`] bucket.
///
/// # Rules
///
/// 1. Contains `AM` (case-insensitive): Morning.
/// 2. Contains `PM`: Afternoon if the leading hour is below 5 or exactly 12,
///    Evening otherwise.
/// 3. No marker: Morning below 12, Afternoon below 17, Evening otherwise.
///
/// # Examples
///
/// ```
/// use campus_events::domain::{classify, TimeOfDay};
///
/// assert_eq!(classify("7:00 PM"), TimeOfDay::Evening);
/// assert_eq!(classify("2:00 PM"), TimeOfDay::Afternoon);
/// assert_eq!(classify("9:00 AM - 5:00 PM"), TimeOfDay::Morning);
/// assert_eq!(classify("15:30"), TimeOfDay::Afternoon);
/// ```
#[must_use]
pub fn classify(time: &str) -> TimeOfDay {
    let upper = time.to_uppercase();

    if upper.contains("AM") {
        return TimeOfDay::Morning;
    }

    let hour = leading_hour(&upper);

    if upper.contains("PM") {
        return if hour < PM_EVENING_FROM || hour == 12 {
            TimeOfDay::Afternoon
        } else {
            TimeOfDay::Evening
        };
    }

    if hour < 12 {
        TimeOfDay::Morning
    } else if hour < AFTERNOON_UNTIL {
        TimeOfDay::Afternoon
    } else {
        TimeOfDay::Evening
    }
}

/// Parses the integer at the start of the text before the first colon.
///
/// Leading whitespace and a single sign are accepted; parsing stops at the first
/// non-digit. Returns `0` when no digits are found or the value overflows.
#[must_use]
pub fn leading_hour(time: &str) -> i64 {
    let head = time.split(':').next().unwrap_or_default().trim_start();

    let (negative, digits) = match head.as_bytes().first() {
        Some(b'-') => (true, &head[1..]),
        Some(b'+') => (false, &head[1..]),
        _ => (false, head),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    let value = digits[..end].parse::<i64>().unwrap_or(0);
    if negative {
        -value
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_hour_reads_text_before_colon() {
        assert_eq!(leading_hour("8:00 PM - 12:00 AM"), 8);
        assert_eq!(leading_hour("  12:30"), 12);
        assert_eq!(leading_hour("10AM"), 10);
        assert_eq!(leading_hour("noon"), 0);
        assert_eq!(leading_hour(""), 0);
        assert_eq!(leading_hour("-3:00"), -3);
    }

    #[test]
    fn am_marker_wins_over_hour() {
        assert_eq!(classify("12:00 AM"), TimeOfDay::Morning);
        assert_eq!(classify("11:59 am"), TimeOfDay::Morning);
        assert_eq!(classify("8:00 PM - 12:00 AM"), TimeOfDay::Morning);
    }

    #[test]
    fn pm_boundaries() {
        assert_eq!(classify("12:00 PM"), TimeOfDay::Afternoon);
        assert_eq!(classify("4:59 PM"), TimeOfDay::Afternoon);
        assert_eq!(classify("5:00 PM"), TimeOfDay::Evening);
        assert_eq!(classify("11:00 pm"), TimeOfDay::Evening);
        assert_eq!(classify("TBA PM"), TimeOfDay::Afternoon);
    }

    #[test]
    fn unmarked_hours_use_24_hour_clock() {
        assert_eq!(classify("9:00"), TimeOfDay::Morning);
        assert_eq!(classify("12:00"), TimeOfDay::Afternoon);
        assert_eq!(classify("17:00"), TimeOfDay::Evening);
        assert_eq!(classify("all day"), TimeOfDay::Morning);
    }

    #[test]
    fn parses_labels() {
        assert_eq!("evening".parse::<TimeOfDay>(), Ok(TimeOfDay::Evening));
        assert!("dusk".parse::<TimeOfDay>().is_err());
    }
}
