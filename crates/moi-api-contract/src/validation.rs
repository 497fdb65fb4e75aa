//! Shared validators for contract types

use validator::ValidationError;

/// Rejects strings that are empty after trimming.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Flatten validation errors into the first human readable message.
pub fn first_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .next()
        .unwrap_or_else(|| errors.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::TableConfig;
    use validator::Validate;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("").is_err());
        assert!(not_blank(" \t").is_err());
        assert!(not_blank("x").is_ok());
    }

    #[test]
    fn test_first_message_uses_declared_message() {
        let errors = TableConfig::default().validate().unwrap_err();
        assert_eq!(
            first_message(&errors),
            "table_config.conn_file_ids must contain at least one file ID"
        );
    }
}
