use crate::error::{GameError, Result};
use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use regex::Regex;

pub const NEVER_LAUNCHED: &str = "Never";

static ID_FRAGMENT: OnceCell<Regex> = OnceCell::new();

/// Renders a launch timestamp as `dd/mm/YYYY` (UTC), or "Never" for `0`.
pub fn format_last_launch(timestamp: u64) -> String {
    if timestamp == 0 {
        return NEVER_LAUNCHED.to_string();
    }

    i64::try_from(timestamp)
        .ok()
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .map(|date| date.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| NEVER_LAUNCHED.to_string())
}

/// "12h played", or minutes when less than an hour was played.
pub fn format_playtime(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = seconds / 60;

    if hours == 0 && minutes > 0 {
        format!("{}m played", minutes)
    } else {
        format!("{}h played", hours)
    }
}

/// Elapsed time since `timestamp` as `HH:MM:SS`, used for the running-session clock.
pub fn time_since(timestamp: u64, now: DateTime<Utc>) -> String {
    let start = i64::try_from(timestamp).unwrap_or(i64::MAX);
    let total = now.timestamp().saturating_sub(start).max(0);

    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Extracts the game id from a page fragment like `#id=5`.
pub fn parse_id_fragment(fragment: &str) -> Result<i64> {
    let re = ID_FRAGMENT.get_or_try_init(|| Regex::new(r"^#?id=(-?\d+)$"))?;

    let digits = re
        .captures(fragment.trim())
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| GameError::malformed(format!("no game id in fragment {fragment:?}")))?;

    digits
        .as_str()
        .parse()
        .map_err(|_| GameError::out_of_range("id", digits.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn never_launched_fallback() {
        assert_eq!(format_last_launch(0), "Never");
        assert_eq!(format_last_launch(1_700_000_000), "14/11/2023");
    }

    #[test]
    fn playtime_labels() {
        assert_eq!(format_playtime(0), "0h played");
        assert_eq!(format_playtime(59), "0h played");
        assert_eq!(format_playtime(600), "10m played");
        assert_eq!(format_playtime(3600 * 12 + 1799), "12h played");
    }

    #[test]
    fn session_clock() {
        let now = Utc.timestamp_opt(10_000, 0).unwrap();
        assert_eq!(time_since(10_000 - 3723, now), "01:02:03");
        assert_eq!(time_since(10_000, now), "00:00:00");
        assert_eq!(time_since(20_000, now), "00:00:00");
        assert_eq!(time_since(0, now), "02:46:40");
    }

    #[test]
    fn id_fragment() -> Result<()> {
        assert_eq!(parse_id_fragment("#id=5")?, 5);
        assert_eq!(parse_id_fragment("id=42")?, 42);
        assert!(matches!(
            parse_id_fragment("#name=5"),
            Err(GameError::MalformedInput(_))
        ));
        assert!(matches!(
            parse_id_fragment("#id=99999999999999999999"),
            Err(GameError::OutOfRangeValue { .. })
        ));
        Ok(())
    }
}
