use crate::utils::error::{Result, TriError};
use std::path::{Component, Path};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses one raw form field. Blank means "unknown"; anything else must be a finite number.
pub fn parse_optional_number(field_name: &str, raw: &str) -> Result<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: f64 = trimmed.parse().map_err(|_| TriError::InvalidInput {
        field: field_name.to_string(),
        value: raw.to_string(),
        reason: "not a number".to_string(),
    })?;

    if !value.is_finite() {
        return Err(TriError::InvalidInput {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "value must be finite".to_string(),
        });
    }

    Ok(Some(value))
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(TriError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(TriError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// A bare file name: one normal path component, no separators, no parent references.
pub fn validate_file_stem(field_name: &str, value: &str) -> Result<()> {
    let mut components = Path::new(value).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    let forbidden = value.contains(['/', '\\', '\0']) || value.contains("..");
    if forbidden || !single_normal {
        return Err(TriError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Must be a plain file name without path separators or '..'".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(TriError::InvalidConfigValue {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TriError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(TriError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_optional_number() {
        assert_eq!(parse_optional_number("side a", "").unwrap(), None);
        assert_eq!(parse_optional_number("side a", "   ").unwrap(), None);
        assert_eq!(parse_optional_number("side a", " 3.5 ").unwrap(), Some(3.5));
        assert_eq!(parse_optional_number("angle A", "-2").unwrap(), Some(-2.0));
        assert!(parse_optional_number("side a", "abc").is_err());
        assert!(parse_optional_number("side a", "inf").is_err());
        assert!(parse_optional_number("side a", "NaN").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("output.precision", 4usize, 0, 10).is_ok());
        assert!(validate_range("output.precision", 11usize, 0, 10).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("output.format", "json", &["markdown", "json"]).is_ok());
        let err = validate_one_of("output.format", "html", &["markdown", "json"]).unwrap_err();
        assert!(err.to_string().contains("markdown, json"));
    }

    #[test]
    fn test_validate_file_stem() {
        assert!(validate_file_stem("triangle[0].name", "right").is_ok());
        assert!(validate_file_stem("triangle[0].name", "sas 5-7").is_ok());
        for bad in ["../escaped", "a/b", "a\\b", "..", ".", "/abs", "x\0y", "a..b"] {
            assert!(validate_file_stem("triangle[0].name", bad).is_err(), "{:?}", bad);
        }
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output.svg_dir", "./out").is_ok());
        assert!(validate_path("output.svg_dir", "").is_err());
        assert!(validate_path("output.svg_dir", "a\0b").is_err());
    }
}
