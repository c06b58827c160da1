use crate::utils::error::{FixtureError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FixtureError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FixtureError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FixtureError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_extension(field_name: &str, extension: &str) -> Result<()> {
    validate_non_empty_string(field_name, extension)?;

    if !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(FixtureError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: extension.to_string(),
            reason: "Extension must be ASCII letters and digits, without a leading dot"
                .to_string(),
        });
    }
    Ok(())
}

/// Model names become file names, so they must not escape the output directory.
pub fn validate_model_names(field_name: &str, names: &[String]) -> Result<()> {
    if names.is_empty() {
        return Err(FixtureError::ConfigValidationError {
            field: field_name.to_string(),
            message: "At least one model name is required".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for name in names {
        validate_non_empty_string(field_name, name)?;

        if name.contains('/') || name.contains('\\') || name.contains('\0') || name == ".." {
            return Err(FixtureError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.clone(),
                reason: "Model name must be a plain file stem".to_string(),
            });
        }

        if !seen.insert(name.as_str()) {
            return Err(FixtureError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.clone(),
                reason: "Duplicate model name".to_string(),
            });
        }
    }
    Ok(())
}
