use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Regex for validating identity document numbers.
    /// Uppercase alphanumeric, 6 to 20 characters (covers DNI, CE and passports)
    /// - Valid: "12345678", "X1234567", "001234567890"
    /// - Invalid: "123", "12 345678", "abc-123"
    pub static ref DOCUMENT_NUMBER_REGEX: Regex = Regex::new(r"^[A-Z0-9]{6,20}$").unwrap();
}

/// Allowed values for the worker sex field
pub const SEX_VALUES: [&str; 2] = ["M", "F"];

pub fn validate_sex(sex: &str) -> Result<(), ValidationError> {
    if SEX_VALUES.contains(&sex) {
        Ok(())
    } else {
        let mut error = ValidationError::new("sex");
        error.message = Some("Sex must be 'M' or 'F'".into());
        Err(error)
    }
}

pub fn validate_document_number(number: &str) -> Result<(), ValidationError> {
    if DOCUMENT_NUMBER_REGEX.is_match(number) {
        Ok(())
    } else {
        let mut error = ValidationError::new("document_number");
        error.message =
            Some("Document number must be 6-20 uppercase alphanumeric characters".into());
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_number_regex_valid() {
        assert!(DOCUMENT_NUMBER_REGEX.is_match("12345678"));
        assert!(DOCUMENT_NUMBER_REGEX.is_match("X1234567"));
        assert!(DOCUMENT_NUMBER_REGEX.is_match("001234567890"));
    }

    #[test]
    fn test_document_number_regex_invalid() {
        assert!(!DOCUMENT_NUMBER_REGEX.is_match("123")); // too short
        assert!(!DOCUMENT_NUMBER_REGEX.is_match("12 345678")); // space
        assert!(!DOCUMENT_NUMBER_REGEX.is_match("abc-123")); // lowercase and hyphen
        assert!(!DOCUMENT_NUMBER_REGEX.is_match("")); // empty
    }

    #[test]
    fn test_validate_sex() {
        assert!(validate_sex("M").is_ok());
        assert!(validate_sex("F").is_ok());
        assert!(validate_sex("m").is_err()); // case-sensitive
        assert!(validate_sex("X").is_err());
        assert!(validate_sex("").is_err());
    }
}
