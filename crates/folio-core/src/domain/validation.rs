//! Field rules shared by the `Author` and `Post` setters.
//!
//! Each function checks one candidate value and either accepts it or returns
//! `DomainError::InvalidField`. Lengths are counted in characters.

use crate::error::{DomainError, Violation};

pub const PHONE_NUMBER_LEN: usize = 10;
pub const MIN_CONTENT_LEN: usize = 250;
pub const MAX_SUMMARY_LEN: usize = 250;

/// A post title must contain at least one of these (case-sensitive substring).
pub const TITLE_MARKERS: [&str; 4] = ["Won't Believe", "Secret", "Top", "Guess"];

pub fn validate_author_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::invalid(
            "name",
            Violation::Required,
            "Name is required.",
        ));
    }
    Ok(())
}

pub fn validate_phone_number(phone_number: &str) -> Result<(), DomainError> {
    let valid = phone_number.chars().count() == PHONE_NUMBER_LEN
        && phone_number.chars().all(|c| c.is_ascii_digit());

    if !valid {
        return Err(DomainError::invalid(
            "phone_number",
            Violation::Format,
            "Phone number must be 10 digits.",
        ));
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), DomainError> {
    if title.is_empty() {
        return Err(DomainError::invalid(
            "title",
            Violation::Required,
            "Title is required.",
        ));
    }
    if !TITLE_MARKERS.iter().any(|marker| title.contains(marker)) {
        return Err(DomainError::invalid(
            "title",
            Violation::MissingKeyword,
            format!(
                "Title must contain one of the following: {}.",
                TITLE_MARKERS.join(", ")
            ),
        ));
    }
    Ok(())
}

pub fn validate_content(content: &str) -> Result<(), DomainError> {
    if content.chars().count() < MIN_CONTENT_LEN {
        return Err(DomainError::invalid(
            "content",
            Violation::Length,
            format!("Content must be at least {MIN_CONTENT_LEN} characters."),
        ));
    }
    Ok(())
}

pub fn validate_summary(summary: &str) -> Result<(), DomainError> {
    if summary.chars().count() > MAX_SUMMARY_LEN {
        return Err(DomainError::invalid(
            "summary",
            Violation::Length,
            format!("Summary must be at most {MAX_SUMMARY_LEN} characters."),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_name() {
        assert!(validate_author_name("Ursula").is_ok());
        let err = validate_author_name("").unwrap_err();
        assert_eq!(err.violation(), Some(Violation::Required));
    }

    #[test]
    fn test_phone_number_accepts_ten_digits() {
        assert!(validate_phone_number("5551234567").is_ok());
        assert!(validate_phone_number("0000000000").is_ok());
    }

    #[test]
    fn test_phone_number_rejects_wrong_length_or_non_digits() {
        for candidate in ["", "555123456", "55512345678", "555-123-45", "55512345a7", "５５５１２３４５６７"] {
            let err = validate_phone_number(candidate).unwrap_err();
            assert_eq!(err.violation(), Some(Violation::Format), "{candidate:?}");
        }
    }

    #[test]
    fn test_content_boundary() {
        assert!(validate_content(&"a".repeat(249)).is_err());
        assert!(validate_content(&"a".repeat(250)).is_ok());
        assert!(validate_content(&"a".repeat(1000)).is_ok());
    }

    #[test]
    fn test_content_counts_characters_not_bytes() {
        // 125 two-byte characters: 250 bytes, but only 125 characters.
        let err = validate_content(&"é".repeat(125)).unwrap_err();
        assert_eq!(err.violation(), Some(Violation::Length));
    }

    #[test]
    fn test_summary_boundary() {
        assert!(validate_summary("").is_ok());
        assert!(validate_summary(&"a".repeat(250)).is_ok());
        let err = validate_summary(&"a".repeat(251)).unwrap_err();
        assert_eq!(err.violation(), Some(Violation::Length));
    }

    #[test]
    fn test_title_markers() {
        assert!(validate_title("Top 10 Facts").is_ok());
        assert!(validate_title("You Won't Believe This").is_ok());
        assert!(validate_title("The Secret Garden").is_ok());
        assert!(validate_title("Guess Who").is_ok());
        // Substring match, not whole word.
        assert!(validate_title("Stopwatch Review").is_err());
        assert!(validate_title("Topology Basics").is_ok());
    }

    #[test]
    fn test_title_rejections() {
        let err = validate_title("Ordinary News").unwrap_err();
        assert_eq!(err.violation(), Some(Violation::MissingKeyword));

        let err = validate_title("").unwrap_err();
        assert_eq!(err.violation(), Some(Violation::Required));

        // Markers are case-sensitive.
        assert!(validate_title("top stories").is_err());
    }
}
