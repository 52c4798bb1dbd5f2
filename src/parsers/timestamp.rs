use chrono::{NaiveDate, NaiveDateTime};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Two-digit years below this pivot are read as 20xx, the rest as 19xx.
const TWO_DIGIT_YEAR_PIVOT: i32 = 50;

/// Field order of the date token in header lines.
///
/// Exports are formatted with the exporting phone's locale, which the text
/// itself does not record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    /// `M/D/Y`
    #[default]
    MonthFirst,
    /// `D/M/Y`
    DayFirst,
    /// Decide per export from the header dates
    Auto,
}

/// Parse the date and time tokens of a header line.
///
/// Accepts 2- or 4-digit years, 12-hour times with an `AM`/`PM` suffix
/// (with or without a separating space) and 24-hour times, seconds optional.
/// Returns `None` when any field is out of range. `DateOrder::Auto` is read as
/// month-first here; resolve it against the whole export before calling.
pub fn parse_export_timestamp(date: &str, time: &str, order: DateOrder) -> Option<NaiveDateTime> {
    let date = parse_date(date, order)?;
    let (hour, minute, second) = parse_time(time)?;
    date.and_hms_opt(hour, minute, second)
}

/// Split a date token into its two leading numeric fields.
pub(crate) fn leading_date_fields(date: &str) -> Option<(u32, u32)> {
    let mut parts = date.split('/');
    let first = parts.next()?.parse().ok()?;
    let second = parts.next()?.parse().ok()?;
    Some((first, second))
}

fn parse_date(date: &str, order: DateOrder) -> Option<NaiveDate> {
    let mut parts = date.split('/');
    let first: u32 = parts.next()?.parse().ok()?;
    let second: u32 = parts.next()?.parse().ok()?;
    let year_token = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let year = expand_year(year_token)?;
    let (month, day) = match order {
        DateOrder::DayFirst => (second, first),
        DateOrder::MonthFirst | DateOrder::Auto => (first, second),
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

fn expand_year(token: &str) -> Option<i32> {
    let value: i32 = token.parse().ok()?;
    match token.len() {
        2 if value < TWO_DIGIT_YEAR_PIVOT => Some(2000 + value),
        2 => Some(1900 + value),
        4 => Some(value),
        _ => None,
    }
}

fn parse_time(time: &str) -> Option<(u32, u32, u32)> {
    let time = time.trim();
    let (clock, meridiem) = if let Some(rest) = time.strip_suffix("AM") {
        (rest.trim_end(), Some(false))
    } else if let Some(rest) = time.strip_suffix("PM") {
        (rest.trim_end(), Some(true))
    } else {
        (time, None)
    };

    let mut parts = clock.split(':');
    let hour: u32 = parts.next()?.parse().ok()?;
    let minute: u32 = parts.next()?.parse().ok()?;
    let second: u32 = match parts.next() {
        Some(s) => s.parse().ok()?,
        None => 0,
    };
    if parts.next().is_some() {
        return None;
    }

    let hour = match meridiem {
        Some(is_pm) => {
            if !(1..=12).contains(&hour) {
                return None;
            }
            match (hour, is_pm) {
                (12, false) => 0,
                (12, true) => 12,
                (h, true) => h + 12,
                (h, false) => h,
            }
        }
        None => hour,
    };

    Some((hour, minute, second))
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    fn ts(date: &str, time: &str) -> Option<NaiveDateTime> {
        parse_export_timestamp(date, time, DateOrder::MonthFirst)
    }

    #[test]
    fn test_twelve_hour_pm() {
        let parsed = ts("12/25/23", "8:30 PM").unwrap();
        assert_eq!(parsed.year(), 2023);
        assert_eq!(parsed.month(), 12);
        assert_eq!(parsed.day(), 25);
        assert_eq!(parsed.hour(), 20);
        assert_eq!(parsed.minute(), 30);
        assert_eq!(parsed.second(), 0);
    }

    #[test]
    fn test_midnight_and_noon() {
        assert_eq!(ts("1/1/24", "12:05 AM").unwrap().hour(), 0);
        assert_eq!(ts("1/1/24", "12:05 PM").unwrap().hour(), 12);
        assert_eq!(ts("1/1/24", "11:59 AM").unwrap().hour(), 11);
    }

    #[test]
    fn test_twenty_four_hour_with_seconds() {
        let parsed = ts("12/25/23", "20:30:12").unwrap();
        assert_eq!(parsed.hour(), 20);
        assert_eq!(parsed.second(), 12);
    }

    #[test]
    fn test_meridiem_variants() {
        assert_eq!(ts("12/25/23", "8:30PM").unwrap().hour(), 20);
        assert_eq!(ts("12/25/23", "8:30\u{202F}PM").unwrap().hour(), 20);
        assert_eq!(ts("12/25/23", "8:30:45 AM").unwrap().second(), 45);
    }

    #[test]
    fn test_year_expansion() {
        assert_eq!(ts("1/2/2019", "10:00").unwrap().year(), 2019);
        assert_eq!(ts("1/2/49", "10:00").unwrap().year(), 2049);
        assert_eq!(ts("1/2/99", "10:00").unwrap().year(), 1999);
        assert!(ts("1/2/123", "10:00").is_none());
    }

    #[test]
    fn test_day_first() {
        let parsed = parse_export_timestamp("25/12/23", "20:30", DateOrder::DayFirst).unwrap();
        assert_eq!(parsed.month(), 12);
        assert_eq!(parsed.day(), 25);
        assert!(ts("25/12/23", "20:30").is_none());
    }

    #[test]
    fn test_out_of_range_values() {
        assert!(ts("99/99/99", "99:99").is_none());
        assert!(ts("2/30/23", "10:00").is_none());
        assert!(ts("12/25/23", "24:00").is_none());
        assert!(ts("12/25/23", "13:00 PM").is_none());
        assert!(ts("12/25/23", "0:10 AM").is_none());
        assert!(ts("12/25/23", "10:60").is_none());
    }

    #[test]
    fn test_leading_date_fields() {
        assert_eq!(leading_date_fields("25/12/23"), Some((25, 12)));
        assert_eq!(leading_date_fields("garbage"), None);
    }
}
