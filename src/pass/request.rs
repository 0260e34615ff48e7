//! Generation requests and length validation.

use thiserror::Error;

use super::charset::ClassSet;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Length is required")]
    Required,
    #[error("Length must be a number")]
    NotANumber(String),
    #[error("Should be minimum of {min} characters")]
    TooShort { min: usize },
    #[error("Should be maximum of {max} characters")]
    TooLong { max: usize },
}

/// Parse and range-check the length text typed into the form.
///
/// Any numeric text is range-checked before integrality, so negative and
/// overflowing values report the bound they miss.
pub fn validate_length(text: &str) -> Result<usize, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::Required);
    }
    let not_a_number = || ValidationError::NotANumber(text.to_string());
    let value: f64 = text.parse().map_err(|_| not_a_number())?;
    if value.is_nan() {
        return Err(not_a_number());
    }
    if value < MIN_LENGTH as f64 {
        return Err(ValidationError::TooShort { min: MIN_LENGTH });
    }
    if value > MAX_LENGTH as f64 {
        return Err(ValidationError::TooLong { max: MAX_LENGTH });
    }
    if value.fract() != 0.0 {
        return Err(not_a_number());
    }
    Ok(value as usize)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: ClassSet,
}

impl GenerationRequest {
    /// Unchecked: the generator accepts any length.
    pub fn new(length: usize, classes: ClassSet) -> Self {
        Self { length, classes }
    }

    pub fn validated(length_text: &str, classes: ClassSet) -> Result<Self, ValidationError> {
        Ok(Self::new(validate_length(length_text)?, classes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_range_bounds() {
        assert_eq!(validate_length("4"), Ok(4));
        assert_eq!(validate_length(" 16 "), Ok(16));
    }

    #[test]
    fn missing_length() {
        assert_eq!(validate_length(""), Err(ValidationError::Required));
        assert_eq!(validate_length("   "), Err(ValidationError::Required));
    }

    #[test]
    fn non_numeric_length() {
        assert_eq!(
            validate_length("eight"),
            Err(ValidationError::NotANumber("eight".into()))
        );
        assert!(matches!(
            validate_length("NaN"),
            Err(ValidationError::NotANumber(_))
        ));
        assert!(matches!(
            validate_length("8.5"),
            Err(ValidationError::NotANumber(_))
        ));
    }

    #[test]
    fn signed_and_overflowing_lengths_report_bounds() {
        assert_eq!(
            validate_length("-5"),
            Err(ValidationError::TooShort { min: 4 })
        );
        assert_eq!(
            validate_length("99999999999999999999999"),
            Err(ValidationError::TooLong { max: 16 })
        );
        assert_eq!(
            validate_length("-inf"),
            Err(ValidationError::TooShort { min: 4 })
        );
        assert_eq!(
            validate_length("0"),
            Err(ValidationError::TooShort { min: 4 })
        );
    }

    #[test]
    fn whole_decimal_is_accepted() {
        assert_eq!(validate_length("8.0"), Ok(8));
        assert_eq!(validate_length("+12"), Ok(12));
    }

    #[test]
    fn out_of_range_length() {
        assert_eq!(
            validate_length("3"),
            Err(ValidationError::TooShort { min: 4 })
        );
        assert_eq!(
            validate_length("17"),
            Err(ValidationError::TooLong { max: 16 })
        );
    }

    #[test]
    fn messages_match_form() {
        assert_eq!(ValidationError::Required.to_string(), "Length is required");
        assert_eq!(
            ValidationError::TooShort { min: 4 }.to_string(),
            "Should be minimum of 4 characters"
        );
        assert_eq!(
            ValidationError::TooLong { max: 16 }.to_string(),
            "Should be maximum of 16 characters"
        );
    }

    #[test]
    fn validated_request_keeps_classes() {
        let req = GenerationRequest::validated("8", ClassSet::ALL).unwrap();
        assert_eq!(req, GenerationRequest::new(8, ClassSet::ALL));
        assert!(GenerationRequest::validated("2", ClassSet::ALL).is_err());
    }
}
