// src/common/validation.rs

use validator::ValidationError;

/// `length(min = 1)` deixa passar "   "; aqui só conta texto de verdade.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("The value must not be blank.".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_is_blank() {
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("\t\n").is_err());
        assert!(validate_not_blank(" Techno Tuesday ").is_ok());
    }
}
