use crate::domain::model::ParsedDate;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldOrder {
    YearMonthDay,
    MonthDayYear,
    DayMonthYear,
}

struct DatePattern {
    regex: Regex,
    order: FieldOrder,
}

impl DatePattern {
    fn new(pattern: &str, order: FieldOrder) -> Self {
        Self {
            regex: Regex::new(pattern).expect("date pattern must compile"),
            order,
        }
    }

    fn capture(&self, input: &str) -> Option<ParsedDate> {
        let caps = self.regex.captures(input)?;
        let a: u32 = caps[1].parse().ok()?;
        let b: u32 = caps[2].parse().ok()?;
        let c: u32 = caps[3].parse().ok()?;

        let (year, month, day) = match self.order {
            FieldOrder::YearMonthDay => (a, b, c),
            FieldOrder::MonthDayYear => (c, a, b),
            FieldOrder::DayMonthYear => (c, b, a),
        };

        Some(ParsedDate {
            year: i32::try_from(year).ok()?,
            month,
            day,
        })
    }
}

const ISO: &str = r"^(\d{4})-(\d{2})-(\d{2})$";

// 排序與分組用：YYYY-MM-DD, M/D/YYYY
static LENIENT: LazyLock<Vec<DatePattern>> = LazyLock::new(|| {
    vec![
        DatePattern::new(ISO, FieldOrder::YearMonthDay),
        DatePattern::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$", FieldOrder::MonthDayYear),
    ]
});

// 顯示用：YYYY-MM-DD, MM/DD/YYYY, DD-MM-YYYY
static DISPLAY: LazyLock<Vec<DatePattern>> = LazyLock::new(|| {
    vec![
        DatePattern::new(ISO, FieldOrder::YearMonthDay),
        DatePattern::new(r"^(\d{2})/(\d{2})/(\d{4})$", FieldOrder::MonthDayYear),
        DatePattern::new(r"^(\d{2})-(\d{2})-(\d{4})$", FieldOrder::DayMonthYear),
    ]
});

// 輸入驗證用：YYYY-MM-DD, MM/DD/YYYY, M/D/YYYY, DD-MM-YYYY, D-M-YYYY
static SCHEMA: LazyLock<Vec<DatePattern>> = LazyLock::new(|| {
    vec![
        DatePattern::new(ISO, FieldOrder::YearMonthDay),
        DatePattern::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$", FieldOrder::MonthDayYear),
        DatePattern::new(r"^(\d{1,2})-(\d{1,2})-(\d{4})$", FieldOrder::DayMonthYear),
    ]
});

fn first_match(patterns: &[DatePattern], input: &str) -> Option<ParsedDate> {
    patterns.iter().find_map(|p| p.capture(input))
}

fn to_calendar_date(parsed: ParsedDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(parsed.year, parsed.month, parsed.day)
}

/// Pattern-only match, no range checks. First match wins.
pub fn match_lenient(input: &str) -> Option<ParsedDate> {
    first_match(&LENIENT, input)
}

/// Display formats, real calendar dates only.
pub fn match_display(input: &str) -> Option<NaiveDate> {
    first_match(&DISPLAY, input).and_then(to_calendar_date)
}

/// Every accepted input format, real calendar dates only.
pub fn match_schema(input: &str) -> Option<NaiveDate> {
    first_match(&SCHEMA, input).and_then(to_calendar_date)
}
