//! Input validation utilities
//!
//! Book writes only check field presence; no further sanitization happens
//! anywhere in the service.

/// Message returned whenever a required book field is missing
pub const MISSING_BOOK_FIELDS: &str = "Send all required fields: title, author, publishYear";

/// Validate that all required book fields are present and non-empty
///
/// Returns the owned trio on success so handlers can move the values into
/// a payload without re-checking.
pub fn required_book_fields(
    title: Option<String>,
    author: Option<String>,
    publish_year: Option<String>,
) -> Result<(String, String, String), String> {
    match (title, author, publish_year) {
        (Some(title), Some(author), Some(publish_year))
            if !title.is_empty() && !author.is_empty() && !publish_year.is_empty() =>
        {
            Ok((title, author, publish_year))
        }
        _ => Err(MISSING_BOOK_FIELDS.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_all_fields_present() {
        let result = required_book_fields(some("Dune"), some("Frank Herbert"), some("1965"));
        let (title, author, publish_year) = result.unwrap();
        assert_eq!(title, "Dune");
        assert_eq!(author, "Frank Herbert");
        assert_eq!(publish_year, "1965");
    }

    #[test]
    fn test_missing_title() {
        let result = required_book_fields(None, some("Frank Herbert"), some("1965"));
        assert_eq!(result.unwrap_err(), MISSING_BOOK_FIELDS);
    }

    #[test]
    fn test_missing_author() {
        let result = required_book_fields(some("Dune"), None, some("1965"));
        assert_eq!(result.unwrap_err(), MISSING_BOOK_FIELDS);
    }

    #[test]
    fn test_missing_publish_year() {
        let result = required_book_fields(some("Dune"), some("Frank Herbert"), None);
        assert_eq!(result.unwrap_err(), MISSING_BOOK_FIELDS);
    }

    #[test]
    fn test_empty_field_rejected() {
        let result = required_book_fields(some(""), some("Frank Herbert"), some("1965"));
        assert_eq!(result.unwrap_err(), MISSING_BOOK_FIELDS);
    }

    #[test]
    fn test_textual_year_accepted() {
        // Years are not format-validated
        let result = required_book_fields(some("Beowulf"), some("Unknown"), some("c. 1000 AD"));
        assert!(result.is_ok());
    }
}
