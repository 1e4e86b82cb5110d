use crate::server::error::AppError;

/// Returns the query parameter value, rejecting a missing or empty one.
///
/// # Arguments
/// - `value` - The raw query parameter, if it was supplied
/// - `message` - Client-facing error message used when the value is missing
///
/// # Returns
/// - `Ok(String)` - The non-empty parameter value
/// - `Err(AppError::BadRequest)` - The parameter was missing or empty
pub fn require_param(value: Option<String>, message: &str) -> Result<String, AppError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AppError::BadRequest(message.to_string())),
    }
}

/// Parses a round number from its query parameter value.
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u32`
///
/// # Returns
/// - `Ok(u32)` - Successfully parsed round number
/// - `Err(AppError::BadRequest)` - The value is not a non-negative integer
pub fn parse_round(value: &str) -> Result<u32, AppError> {
    value.trim().parse::<u32>().map_err(|e| {
        AppError::BadRequest(format!("Invalid round '{}': {}", value, e))
    })
}
