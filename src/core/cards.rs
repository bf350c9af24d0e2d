use crate::core::classifier::{display_format, initials};
use crate::domain::model::{weekday_label, DayMap, PersonRecord};
use chrono::Weekday;
use serde::Serialize;

/// Number of colour slots cycled through by the cells of a card.
pub const PALETTE_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardEntry {
    pub name: String,
    pub birthday: String,
    pub initials: String,
    pub display_date: String,
    pub color_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCard {
    pub label: &'static str,
    pub short_label: String,
    pub entries: Vec<CardEntry>,
    /// Square grid: `columns * columns` cells.
    pub columns: usize,
}

/// Smallest square grid that holds `count` cells, at least 1x1.
pub fn grid_columns(count: usize) -> usize {
    let count = count.max(1);
    let mut cols = (count as f64).sqrt().ceil() as usize;
    // 浮點誤差修正
    while cols * cols < count {
        cols += 1;
    }
    while cols > 1 && (cols - 1) * (cols - 1) >= count {
        cols -= 1;
    }
    cols.max(1)
}

impl DayCard {
    pub fn new(day: Weekday, people: &[PersonRecord]) -> Self {
        let label = weekday_label(day);
        let entries = people
            .iter()
            .enumerate()
            .map(|(i, person)| CardEntry {
                name: person.name.clone(),
                birthday: person.birthday.clone(),
                initials: initials(&person.name),
                display_date: display_format(&person.birthday),
                color_index: i % PALETTE_SIZE,
            })
            .collect::<Vec<_>>();

        Self {
            label,
            short_label: label[..3].to_uppercase(),
            columns: grid_columns(entries.len()),
            entries,
        }
    }

    pub fn slots(&self) -> usize {
        self.columns * self.columns
    }

    pub fn padding(&self) -> usize {
        self.slots() - self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One card per weekday, Sunday first.
pub fn build_cards(map: &DayMap) -> Vec<DayCard> {
    map.iter().map(|(day, people)| DayCard::new(day, people)).collect()
}
