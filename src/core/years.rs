use crate::utils::error::Result;
use crate::utils::validation::validate_range;
use chrono::{Datelike, Local};

/// Oldest selectable reference year.
pub const FIRST_YEAR: i32 = 2000;

pub fn current_year() -> i32 {
    Local::now().year()
}

/// Reference years are limited to [`FIRST_YEAR`] through the current year.
pub fn validate_year(field_name: &str, year: i32) -> Result<()> {
    validate_range(field_name, year, FIRST_YEAR, current_year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::BirthdayError;

    #[test]
    fn test_validate_year_bounds() {
        assert!(validate_year("year", FIRST_YEAR).is_ok());
        assert!(validate_year("year", current_year()).is_ok());
        assert!(validate_year("year", FIRST_YEAR - 1).is_err());
        assert!(validate_year("year", current_year() + 1).is_err());
    }

    #[test]
    fn test_two_digit_year_is_rejected() {
        let err = validate_year("year", 24).unwrap_err();
        assert!(matches!(
            err,
            BirthdayError::InvalidConfigValueError { ref field, .. } if field == "year"
        ));
    }
}
