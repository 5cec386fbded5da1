use client::validation::{ValidationError, filter_batch, validate_single};
use proptest::prelude::*;

#[cfg(test)]
mod single_validation_properties {
    use super::*;

    proptest! {
        #[test]
        fn test_blank_field_is_missing(
            padding in "[ \t\n]{0,4}",
            value in "[a-z0-9:/.]{1,40}",
            blank_destination in any::<bool>()
        ) {
            let (destination, content) = if blank_destination {
                (padding.clone(), value.clone())
            } else {
                (value.clone(), padding.clone())
            };

            // Property: a blank field always fails with MissingField
            prop_assert_eq!(
                validate_single(&destination, &content),
                Err(ValidationError::MissingField)
            );
        }

        #[test]
        fn test_length_cap(extra in 0usize..200, padding in "[ \t]{0,3}") {
            let at_cap = format!("{padding}{}{padding}", "a".repeat(5000));
            let over_cap = format!("{padding}{}{padding}", "a".repeat(5001 + extra));

            // Property: exactly 5000 characters after trimming passes
            prop_assert!(validate_single("https://hooks.example.com", &at_cap).is_ok());

            // Property: anything longer fails with ContentTooLong
            let is_too_long = matches!(
                validate_single("https://hooks.example.com", &over_cap),
                Err(ValidationError::ContentTooLong { max: 5000, .. })
            );
            prop_assert!(is_too_long);
        }

        #[test]
        fn test_accepted_request_is_trimmed(
            destination in "[ ]{0,3}[a-z]{1,20}[ ]{0,3}",
            content in "[ ]{0,3}[a-z ]{0,30}[a-z][ ]{0,3}"
        ) {
            let request = validate_single(&destination, &content);
            prop_assert!(request.is_ok());
            let request = request.unwrap();
            prop_assert_eq!(request.destination(), destination.trim());
            prop_assert_eq!(request.content(), content.trim());
        }
    }
}

#[cfg(test)]
mod batch_filter_properties {
    use super::*;

    fn entry() -> impl Strategy<Value = (String, String)> {
        (
            prop_oneof!["[ ]{0,2}", "[a-z]{1,8}"],
            prop_oneof!["[ ]{0,2}", "[a-z]{1,8}"],
        )
    }

    proptest! {
        #[test]
        fn test_filter_keeps_exactly_complete_entries_in_order(
            entries in prop::collection::vec(entry(), 0..30)
        ) {
            let expected: Vec<(String, String)> = entries
                .iter()
                .filter(|(d, c)| !d.trim().is_empty() && !c.trim().is_empty())
                .map(|(d, c)| (d.trim().to_string(), c.trim().to_string()))
                .collect();

            let filtered: Vec<(String, String)> = filter_batch(entries.clone())
                .iter()
                .map(|r| (r.destination().to_string(), r.content().to_string()))
                .collect();

            // Property: survivors are the complete entries, in input order
            prop_assert_eq!(filtered, expected);
        }
    }
}
