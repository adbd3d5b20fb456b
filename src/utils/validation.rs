use crate::utils::error::{ReceiptError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(ReceiptError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ReceiptError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(ReceiptError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// 左開右閉區間 (min, max]，用於字型大小這類不能為零的浮點數
pub fn validate_open_range(field_name: &str, value: f32, min: f32, max: f32) -> Result<()> {
    if !value.is_finite() || value <= min || value > max {
        return Err(ReceiptError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be greater than {} and at most {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f32) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ReceiptError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a non-negative number".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output.path", "receipt.png").is_ok());
        assert!(validate_path("output.path", "").is_err());
        assert!(validate_path("output.path", "   ").is_err());
        assert!(validate_path("output.path", "bad\0name.png").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("layout.width", 300, 1).is_ok());
        assert!(validate_positive_number("layout.width", 0, 1).is_err());
    }

    #[test]
    fn test_validate_open_range() {
        assert!(validate_open_range("output.font_size", 14.0, 0.0, 512.0).is_ok());
        assert!(validate_open_range("output.font_size", 0.0, 0.0, 512.0).is_err());
        assert!(validate_open_range("output.font_size", 600.0, 0.0, 512.0).is_err());
        assert!(validate_open_range("output.font_size", f32::NAN, 0.0, 512.0).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("layout.gap_length", 0.0).is_ok());
        assert!(validate_non_negative("layout.gap_length", -1.0).is_err());
    }
}
