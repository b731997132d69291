use std::str::FromStr;

use crate::server::error::{internal::InternalError, AppError};

/// Parses an enum value read back from a database column.
///
/// Stored values are written by this application, so a failure indicates a bug
/// or manual tampering rather than bad user input.
///
/// # Arguments
/// - `column` - Column name, for the error message
/// - `value` - The stored string to parse
///
/// # Returns
/// - `Ok(T)` - Successfully parsed value
/// - `Err(AppError::InternalErr(InvalidStoredValue))` - The value is not a known variant
pub fn parse_stored<T: FromStr>(column: &'static str, value: String) -> Result<T, AppError> {
    let result = value
        .parse::<T>()
        .map_err(|_| InternalError::InvalidStoredValue { column, value })?;

    Ok(result)
}
