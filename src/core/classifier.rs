use crate::core::date_format;
use crate::domain::model::{DayMap, ParsedDate, PersonRecord};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::cmp::Ordering;

/// Parses `YYYY-MM-DD`, then `M/D/YYYY` / `MM/DD/YYYY`. Month and day are not
/// range checked.
pub fn parse_date(birthday: &str) -> Option<ParsedDate> {
    date_format::match_lenient(birthday)
}

/// Weekday of the birthday's month/day in `reference_year`.
///
/// Out-of-range fields roll over instead of being rejected: month 13 is
/// January of the next year, day 0 is the last day of the previous month and
/// February 29 in a common year lands on March 1. `None` only when the result
/// falls outside chrono's calendar.
pub fn weekday_of(date: ParsedDate, reference_year: i32) -> Option<Weekday> {
    let months = i64::from(reference_year) * 12 + i64::from(date.month) - 1;
    let year = i32::try_from(months.div_euclid(12)).ok()?;
    let month = u32::try_from(months.rem_euclid(12)).ok()? + 1;

    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
    let target = if date.day == 0 {
        first_of_month.checked_sub_days(Days::new(1))?
    } else {
        first_of_month.checked_add_days(Days::new(u64::from(date.day) - 1))?
    };

    Some(target.weekday())
}

fn compare_parsed(a: Option<ParsedDate>, b: Option<ParsedDate>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => (b.year, b.month, b.day).cmp(&(a.year, a.month, a.day)),
    }
}

/// Youngest first: birth year, month, day all descending; unparseable last.
pub fn youngest_first(a: &PersonRecord, b: &PersonRecord) -> Ordering {
    compare_parsed(parse_date(&a.birthday), parse_date(&b.birthday))
}

pub fn classify(records: &[PersonRecord], reference_year: i32) -> DayMap {
    let mut map = DayMap::new();

    // 先解析一次再排序，避免比較時重複跑 regex
    let mut keyed: Vec<(Option<ParsedDate>, &PersonRecord)> = records
        .iter()
        .map(|record| (parse_date(&record.birthday), record))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare_parsed(*a, *b));

    for (parsed, record) in keyed {
        let Some(parsed) = parsed else {
            tracing::trace!("Skipping '{}': unparseable birthday '{}'", record.name, record.birthday);
            continue;
        };
        match weekday_of(parsed, reference_year) {
            Some(day) => map.push(day, record.clone()),
            None => tracing::debug!(
                "Skipping '{}': birthday {:?} is outside the calendar in {}",
                record.name,
                parsed,
                reference_year
            ),
        }
    }

    map
}

pub fn initials(full_name: &str) -> String {
    let parts: Vec<&str> = full_name.split_whitespace().collect();
    let first = parts.first().and_then(|p| p.chars().next());
    let last = if parts.len() > 1 {
        parts.last().and_then(|p| p.chars().next())
    } else {
        None
    };

    first.into_iter().chain(last).flat_map(char::to_uppercase).collect()
}

/// `DD-MM-YYYY`, or the input unchanged when it is not a recognised date.
pub fn display_format(birthday: &str) -> String {
    match date_format::match_display(birthday) {
        Some(date) => date.format("%d-%m-%Y").to_string(),
        None => birthday.to_string(),
    }
}
