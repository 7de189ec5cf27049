use chrono::{Datelike, Duration, NaiveDate};

const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Resolves a relative-date word ("today", "yesterday", a weekday name)
/// against an explicit `today`, so tests stay deterministic. Anything
/// outside the vocabulary is `None` and callers fall back to no date.
///
/// A weekday name means the most recent occurrence strictly before today:
/// saying "monday" on a Monday resolves to seven days ago, since a
/// same-day capture would say "today".
pub fn resolve_date(word: &str, today: NaiveDate) -> Option<NaiveDate> {
    let word = word.to_ascii_lowercase();

    match word.as_str() {
        "today" => return Some(today),
        "yesterday" => return Some(today - Duration::days(1)),
        _ => {}
    }

    let target = WEEKDAYS.iter().position(|d| *d == word)? as i64;
    let current = today.weekday().num_days_from_monday() as i64;

    let mut diff = current - target;
    if diff <= 0 {
        diff += 7;
    }
    Some(today - Duration::days(diff))
}

/// Whether a word belongs to the relative-date vocabulary. The parser uses
/// this to decide if a trailing token is a date or part of a name.
pub fn is_date_word(word: &str) -> bool {
    let word = word.to_ascii_lowercase();
    word == "today" || word == "yesterday" || WEEKDAYS.contains(&word.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wednesday() -> NaiveDate {
        // 2025-06-11 is a Wednesday
        NaiveDate::from_ymd_opt(2025, 6, 11).unwrap()
    }

    #[test]
    fn test_today_and_yesterday() {
        let now = wednesday();
        let today = resolve_date("today", now).unwrap();
        let yesterday = resolve_date("yesterday", now).unwrap();
        assert_eq!(today, now);
        assert_eq!(yesterday, NaiveDate::from_ymd_opt(2025, 6, 10).unwrap());
        assert_ne!(today, yesterday);
        assert_eq!(today.format("%Y-%m-%d").to_string(), "2025-06-11");
    }

    #[test]
    fn test_weekday_before_today() {
        // Monday before Wednesday 2025-06-11 is 2025-06-09
        let resolved = resolve_date("monday", wednesday()).unwrap();
        assert_eq!(resolved, NaiveDate::from_ymd_opt(2025, 6, 9).unwrap());
    }

    #[test]
    fn test_weekday_after_today_wraps_to_last_week() {
        // Friday said on a Wednesday means last Friday
        let resolved = resolve_date("friday", wednesday()).unwrap();
        assert_eq!(resolved, NaiveDate::from_ymd_opt(2025, 6, 6).unwrap());
    }

    #[test]
    fn test_same_weekday_resolves_seven_days_back() {
        let now = wednesday();
        let resolved = resolve_date("wednesday", now).unwrap();
        assert_eq!(resolved, now - Duration::days(7));
        assert_ne!(resolved, now);
    }

    #[test]
    fn test_case_insensitive() {
        let now = wednesday();
        assert_eq!(resolve_date("Tuesday", now), resolve_date("tuesday", now));
        assert_eq!(resolve_date("TODAY", now), Some(now));
    }

    #[test]
    fn test_unknown_word() {
        assert_eq!(resolve_date("tomorrow", wednesday()), None);
        assert_eq!(resolve_date("someday", wednesday()), None);
    }

    #[test]
    fn test_is_date_word() {
        assert!(is_date_word("today"));
        assert!(is_date_word("Sunday"));
        assert!(!is_date_word("mom"));
    }
}
