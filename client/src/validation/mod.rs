//! Input validation for push submissions.
//!
//! Validation never performs I/O. The single and batch paths deliberately
//! apply different rules:
//!
//! - [`validate_single`] rejects blank fields and content over the length cap.
//! - [`filter_batch`] silently drops blank entries and applies no length cap.

use crate::config::DEFAULT_MAX_CONTENT_LENGTH;
use crate::model::PushRequest;
use thiserror::Error;

/// Core validation trait that all validators implement.
///
/// # Type Parameters
///
/// * `T` - The type of data being validated (can be unsized like `str`)
pub trait Validator<T: ?Sized> {
    type Output;
    type Error;

    /// Validate the input, returning the accepted value or the reason it was rejected
    fn validate(&self, input: &T) -> Result<Self::Output, Self::Error>;
}

/// Reasons a single push is rejected before submission.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Destination or content is empty after trimming
    #[error("Destination and content are both required")]
    MissingField,

    /// Content exceeds the character cap
    #[error("Content must not exceed {max} characters (got {length})")]
    ContentTooLong { length: usize, max: usize },
}

/// Validator for the single-push path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PushValidator {
    max_content_length: usize,
}

impl Default for PushValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CONTENT_LENGTH)
    }
}

impl PushValidator {
    pub fn new(max_content_length: usize) -> Self {
        Self { max_content_length }
    }

    pub fn max_content_length(&self) -> usize {
        self.max_content_length
    }
}

impl<D, C> Validator<(D, C)> for PushValidator
where
    D: AsRef<str>,
    C: AsRef<str>,
{
    type Output = PushRequest;
    type Error = ValidationError;

    fn validate(&self, (destination, content): &(D, C)) -> Result<PushRequest, ValidationError> {
        let destination = destination.as_ref().trim();
        let content = content.as_ref().trim();

        if destination.is_empty() || content.is_empty() {
            return Err(ValidationError::MissingField);
        }

        let length = content.chars().count();
        if length > self.max_content_length {
            return Err(ValidationError::ContentTooLong {
                length,
                max: self.max_content_length,
            });
        }

        Ok(PushRequest::new(destination.to_string(), content.to_string()))
    }
}

/// Validates one push with the default 5000-character cap.
pub fn validate_single(destination: &str, content: &str) -> Result<PushRequest, ValidationError> {
    PushValidator::default().validate(&(destination, content))
}

/// Builds the ordered request list for a batch.
///
/// Both fields are trimmed and entries with a blank destination or content
/// are dropped. Survivors keep their relative order. No length cap applies.
pub fn filter_batch<I, D, C>(entries: I) -> Vec<PushRequest>
where
    I: IntoIterator<Item = (D, C)>,
    D: AsRef<str>,
    C: AsRef<str>,
{
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(position, (destination, content))| {
            let destination = destination.as_ref().trim();
            let content = content.as_ref().trim();
            if destination.is_empty() || content.is_empty() {
                log::debug!("Dropping incomplete batch entry at position {position}");
                None
            } else {
                Some(PushRequest::new(destination.to_string(), content.to_string()))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_is_trimmed() {
        let request = validate_single("  https://hooks.example.com/a \n", "\thello ")
            .expect("valid input");
        assert_eq!(request.destination(), "https://hooks.example.com/a");
        assert_eq!(request.content(), "hello");
    }

    #[test]
    fn test_single_missing_fields() {
        assert_eq!(
            validate_single("", "hello"),
            Err(ValidationError::MissingField)
        );
        assert_eq!(
            validate_single("https://hooks.example.com", "   "),
            Err(ValidationError::MissingField)
        );
    }

    #[test]
    fn test_length_cap_boundary() {
        let at_cap = "x".repeat(5000);
        assert!(validate_single("https://hooks.example.com", &at_cap).is_ok());

        let over_cap = "x".repeat(5001);
        assert_eq!(
            validate_single("https://hooks.example.com", &over_cap),
            Err(ValidationError::ContentTooLong {
                length: 5001,
                max: 5000
            })
        );
    }

    #[test]
    fn test_length_is_measured_after_trim_in_characters() {
        let padded = format!("  {}  ", "é".repeat(5000));
        assert!(validate_single("https://hooks.example.com", &padded).is_ok());
    }

    #[test]
    fn test_custom_cap() {
        let validator = PushValidator::new(3);
        assert!(validator.validate(&("u", "abc")).is_ok());
        assert!(matches!(
            validator.validate(&("u", "abcd")),
            Err(ValidationError::ContentTooLong { max: 3, .. })
        ));
    }

    #[test]
    fn test_filter_batch_drops_incomplete_entries_in_order() {
        let requests = filter_batch([
            ("url1", "a"),
            ("", "b"),
            ("url3", ""),
            (" url4 ", " d "),
        ]);
        let pairs: Vec<(&str, &str)> = requests
            .iter()
            .map(|r| (r.destination(), r.content()))
            .collect();
        assert_eq!(pairs, [("url1", "a"), ("url4", "d")]);
    }

    #[test]
    fn test_filter_batch_has_no_length_cap() {
        let long = "x".repeat(20_000);
        let requests = filter_batch([("url1", long.as_str())]);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].content().len(), 20_000);
    }
}
