use crate::utils::error::{ActError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl Into<String>, reason: impl Into<String>) -> ActError {
    ActError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.into(),
        reason: reason.into(),
    }
}

/// An engine base URL; only http and https are accepted.
pub fn validate_url(field: &str, raw: &str) -> Result<()> {
    let url = Url::parse(raw.trim()).map_err(|e| invalid(field, raw, format!("not a URL ({})", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field,
            raw,
            format!("the engine is only reachable over http or https, not {}", url.scheme()),
        ));
    }
    Ok(())
}

pub fn validate_positive_number(field: &str, value: u64, min: u64) -> Result<()> {
    if value >= min {
        return Ok(());
    }
    Err(invalid(field, value.to_string(), format!("must be at least {}", min)))
}

pub fn validate_required_field<'a, T>(field: &str, value: &'a Option<T>) -> Result<&'a T> {
    match value {
        Some(value) => Ok(value),
        None => Err(ActError::MissingConfigError {
            field: field.to_string(),
        }),
    }
}

/// Secrets are never echoed back in the error.
pub fn validate_non_empty_string(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, "", "must not be blank"));
    }
    Ok(())
}
