use crate::utils::error::{CatalogError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// A catalog file path must be non-empty, NUL-free and name a file rather
/// than a directory.
pub fn validate_file_path(field_name: &str, path: &str) -> Result<()> {
    let reason = if path.trim().is_empty() {
        "no catalog file given"
    } else if path.contains('\0') {
        "catalog file path contains a NUL byte"
    } else if path.ends_with('/') || path.ends_with(std::path::MAIN_SEPARATOR) {
        "catalog file path names a directory"
    } else {
        return Ok(());
    };

    Err(CatalogError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: path.to_string(),
        reason: reason.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
