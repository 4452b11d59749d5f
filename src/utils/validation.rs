use crate::utils::error::{DeferredError, Result};
use tracing_subscriber::EnvFilter;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DeferredError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_filter_directive(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    EnvFilter::try_new(value)
        .map(|_| ())
        .map_err(|e| DeferredError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Invalid filter directive: {}", e),
        })
}
