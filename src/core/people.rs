use crate::core::date_format;
use crate::domain::model::PersonRecord;
use crate::utils::error::{BirthdayError, Result};
use serde::Serialize;
use serde_json::Value;

/// Shown to the user whenever the people list is rejected.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid JSON";

/// Empty list literal used when nothing else is available.
pub const EMPTY_LIST: &str = "[]";

fn field<'a>(index: usize, obj: &'a serde_json::Map<String, Value>, key: &str) -> Result<&'a str> {
    match obj.get(key) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(other) => Err(BirthdayError::structural(format!(
            "item {}: '{}' must be a string, got {}",
            index, key, other
        ))),
        None => Err(BirthdayError::structural(format!(
            "item {}: missing '{}'",
            index, key
        ))),
    }
}

fn validate_item(index: usize, item: &Value) -> Result<PersonRecord> {
    let Value::Object(obj) = item else {
        return Err(BirthdayError::structural(format!(
            "item {}: expected an object",
            index
        )));
    };

    let name = field(index, obj, "name")?;
    if name.is_empty() {
        return Err(BirthdayError::structural(format!(
            "item {}: name is empty",
            index
        )));
    }

    let birthday = field(index, obj, "birthday")?;
    if date_format::match_schema(birthday).is_none() {
        return Err(BirthdayError::structural(format!(
            "item {}: invalid birthday format '{}'",
            index, birthday
        )));
    }

    Ok(PersonRecord::new(name, birthday))
}

/// Parses and validates a whole people list. One bad item rejects the list.
pub fn parse_people(text: &str) -> Result<Vec<PersonRecord>> {
    let raw: Value = serde_json::from_str(text)
        .map_err(|e| BirthdayError::structural(format!("not valid JSON: {}", e)))?;

    let Value::Array(items) = raw else {
        return Err(BirthdayError::structural("expected a JSON array"));
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| validate_item(index, item))
        .collect()
}

/// Same as [`parse_people`] for raw input; invalid UTF-8 rejects the list.
pub fn parse_people_bytes(bytes: &[u8]) -> Result<Vec<PersonRecord>> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| BirthdayError::structural(format!("not valid UTF-8: {}", e)))?;
    parse_people(text)
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PeopleInput {
    pub people: Vec<PersonRecord>,
    /// 面向使用者的訊息，輸入有效時為 None
    pub error: Option<String>,
    #[serde(skip)]
    pub detail: Option<String>,
}

/// Invalid input degrades to an empty list plus a visible message.
pub fn people_or_empty(raw: &[u8]) -> PeopleInput {
    match parse_people_bytes(raw) {
        Ok(people) => {
            tracing::debug!("Accepted {} people", people.len());
            PeopleInput {
                people,
                error: None,
                detail: None,
            }
        }
        Err(e) => {
            tracing::warn!("⚠️ Rejected people input: {}", e);
            PeopleInput {
                people: Vec::new(),
                error: Some(INVALID_INPUT_MESSAGE.to_string()),
                detail: Some(e.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_people_accepts_all_formats() {
        let text = r#"[
            {"name": "Iso", "birthday": "1990-07-04"},
            {"name": "Us", "birthday": "07/04/1990"},
            {"name": "UsShort", "birthday": "7/4/1990"},
            {"name": "Eu", "birthday": "04-07-1990"},
            {"name": "EuShort", "birthday": "4-7-1990"}
        ]"#;
        let people = parse_people(text).unwrap();
        assert_eq!(people.len(), 5);
        assert_eq!(people[0], PersonRecord::new("Iso", "1990-07-04"));
    }

    #[test]
    fn test_parse_people_ignores_extra_fields() {
        let text = r#"[{"name": "Ann", "birthday": "2020-01-01", "team": "ops"}]"#;
        assert_eq!(
            parse_people(text).unwrap(),
            vec![PersonRecord::new("Ann", "2020-01-01")]
        );
    }

    #[test]
    fn test_parse_people_rejects_whole_list() {
        let cases = [
            "not json",
            r#"{"name": "Ann", "birthday": "2020-01-01"}"#,
            r#"[{"name": "", "birthday": "2020-01-01"}]"#,
            r#"[{"name": "Ann"}]"#,
            r#"[{"name": 42, "birthday": "2020-01-01"}]"#,
            r#"[{"name": "Ann", "birthday": "2020/01/01"}]"#,
            r#"[{"name": "Ann", "birthday": "2023-02-29"}]"#,
            r#"[{"name": "Ok", "birthday": "2020-01-01"}, "stray"]"#,
        ];
        for text in cases {
            let err = parse_people(text).unwrap_err();
            assert!(
                matches!(err, BirthdayError::StructuralInvalid { .. }),
                "{} -> {:?}",
                text,
                err
            );
        }
    }

    #[test]
    fn test_people_or_empty() {
        let ok = people_or_empty(br#"[{"name": "Ann", "birthday": "2020-01-01"}]"#);
        assert_eq!(ok.people.len(), 1);
        assert!(ok.error.is_none());

        let bad = people_or_empty(br#"[{"name": "Ann", "birthday": "tomorrow"}]"#);
        assert!(bad.people.is_empty());
        assert_eq!(bad.error.as_deref(), Some(INVALID_INPUT_MESSAGE));
        assert!(bad.detail.unwrap().contains("tomorrow"));

        assert!(people_or_empty(EMPTY_LIST.as_bytes()).people.is_empty());
    }

    #[test]
    fn test_invalid_utf8_rejects_whole_list() {
        let mut raw = br#"[{"name": "Ann", "birthday": "2020-01-01"}, {"name": "B"#.to_vec();
        raw.extend_from_slice(&[0xff, 0xfe]);
        raw.extend_from_slice(br#"", "birthday": "2020-01-02"}]"#);

        let err = parse_people_bytes(&raw).unwrap_err();
        assert!(matches!(err, BirthdayError::StructuralInvalid { .. }));

        let input = people_or_empty(&raw);
        assert!(input.people.is_empty());
        assert_eq!(input.error.as_deref(), Some(INVALID_INPUT_MESSAGE));
        assert!(input.detail.unwrap().contains("UTF-8"));
    }
}
