use crate::utils::error::{CliError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CliError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_relative_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CliError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CliError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    if std::path::Path::new(path).is_absolute() {
        return Err(CliError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path must be relative to the project root".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("project.name", "my-app").is_ok());
        assert!(validate_non_empty_string("project.name", "").is_err());
        assert!(validate_non_empty_string("project.name", "   ").is_err());
    }

    #[test]
    fn test_validate_relative_path() {
        assert!(validate_relative_path("paths.platforms", "platforms").is_ok());
        assert!(validate_relative_path("paths.platforms", "vendor/platforms").is_ok());
        assert!(validate_relative_path("paths.platforms", "").is_err());
        assert!(validate_relative_path("paths.platforms", "/opt/platforms").is_err());
    }
}
