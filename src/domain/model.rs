use chrono::Weekday;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub name: String,
    pub birthday: String,
}

impl PersonRecord {
    pub fn new(name: impl Into<String>, birthday: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            birthday: birthday.into(),
        }
    }
}

/// 解析後的生日，month 為 1 起算，不做範圍檢查
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Sunday..Saturday, the fixed card order.
pub const WEEKDAY_ORDER: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Weekday -> people, always holding all seven buckets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DayMap {
    buckets: [Vec<PersonRecord>; 7],
}

impl DayMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, day: Weekday, person: PersonRecord) {
        self.buckets[day.num_days_from_sunday() as usize].push(person);
    }

    pub fn get(&self, day: Weekday) -> &[PersonRecord] {
        &self.buckets[day.num_days_from_sunday() as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[PersonRecord])> + '_ {
        WEEKDAY_ORDER
            .iter()
            .map(move |day| (*day, self.get(*day)))
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Result of one recomputation: what the presentation layer consumes.
#[derive(Debug, Clone)]
pub struct ClassifiedView {
    pub reference_year: i32,
    pub day_map: DayMap,
    /// 輸入無效時顯示給使用者的訊息
    pub error: Option<String>,
}
