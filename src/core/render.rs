use crate::core::cards::{build_cards, DayCard};
use crate::domain::model::ClassifiedView;
pub use crate::domain::model::OutputFormat;
use crate::utils::error::{BirthdayError, Result};
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Serialize)]
struct JsonView<'a> {
    reference_year: i32,
    error: Option<&'a str>,
    days: &'a [DayCard],
}

pub fn render(view: &ClassifiedView, format: OutputFormat) -> Result<String> {
    let cards = build_cards(&view.day_map);
    match format {
        OutputFormat::Text => Ok(render_text(view, &cards)),
        OutputFormat::Json => render_json(view, &cards),
        OutputFormat::Csv => render_csv(&cards),
    }
}

fn render_text(view: &ClassifiedView, cards: &[DayCard]) -> String {
    let mut out = String::new();

    // 寫入 String 不會失敗
    let _ = writeln!(out, "YEAR {}", view.reference_year);
    if let Some(message) = &view.error {
        let _ = writeln!(out, "! {}", message);
    }

    for card in cards {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", card.short_label);
        if card.is_empty() {
            let _ = writeln!(out, "  (none)");
            continue;
        }

        let cells: Vec<&str> = card
            .entries
            .iter()
            .map(|e| e.initials.as_str())
            .chain(std::iter::repeat("·").take(card.padding()))
            .collect();
        for row in cells.chunks(card.columns) {
            let line: Vec<String> = row.iter().map(|c| format!("{:<2}", c)).collect();
            let _ = writeln!(out, "  {}", line.join(" ").trim_end());
        }
        for entry in &card.entries {
            let _ = writeln!(out, "  {:<2}  {}  {}", entry.initials, entry.name, entry.display_date);
        }
    }

    out
}

fn render_json(view: &ClassifiedView, cards: &[DayCard]) -> Result<String> {
    let json = JsonView {
        reference_year: view.reference_year,
        error: view.error.as_deref(),
        days: cards,
    };
    Ok(serde_json::to_string_pretty(&json)?)
}

fn render_csv(cards: &[DayCard]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["weekday", "name", "birthday", "display_date", "initials"])?;
    for card in cards {
        for entry in &card.entries {
            writer.write_record([
                card.label,
                entry.name.as_str(),
                entry.birthday.as_str(),
                entry.display_date.as_str(),
                entry.initials.as_str(),
            ])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| BirthdayError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| BirthdayError::ConfigError {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classifier::classify;
    use crate::domain::model::PersonRecord;

    fn view() -> ClassifiedView {
        let people = vec![
            PersonRecord::new("Ada Lovelace", "1815-12-10"),
            PersonRecord::new("Ann", "2020-01-01"),
        ];
        ClassifiedView {
            reference_year: 2024,
            day_map: classify(&people, 2024),
            error: None,
        }
    }

    #[test]
    fn test_render_text() {
        let text = render(&view(), OutputFormat::Text).unwrap();
        assert!(text.starts_with("YEAR 2024"));
        assert!(text.contains("MON\n  A\n  A   Ann  01-01-2020"));
        // 2024-12-10 is a Tuesday
        assert!(text.contains("TUE\n  AL\n  AL  Ada Lovelace  10-12-1815"));
        assert!(text.contains("SUN\n  (none)"));
    }

    #[test]
    fn test_render_text_shows_error() {
        let view = ClassifiedView {
            reference_year: 2024,
            day_map: Default::default(),
            error: Some("Invalid JSON".to_string()),
        };
        let text = render(&view, OutputFormat::Text).unwrap();
        assert!(text.contains("! Invalid JSON"));
        assert_eq!(text.matches("(none)").count(), 7);
    }

    #[test]
    fn test_render_json() {
        let json = render(&view(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["reference_year"], 2024);
        assert_eq!(value["days"].as_array().unwrap().len(), 7);
        assert_eq!(value["days"][1]["short_label"], "MON");
        assert_eq!(value["days"][1]["entries"][0]["name"], "Ann");
        assert!(value["error"].is_null());
    }

    #[test]
    fn test_render_csv() {
        let csv = render(&view(), OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "weekday,name,birthday,display_date,initials");
        assert_eq!(lines[1], "Monday,Ann,2020-01-01,01-01-2020,A");
        assert_eq!(lines[2], "Tuesday,Ada Lovelace,1815-12-10,10-12-1815,AL");
        assert_eq!(lines.len(), 3);
    }
}
