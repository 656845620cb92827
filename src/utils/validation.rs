use log::{debug, warn};

use crate::enumerator::constants::{MAX_OPERATOR_COUNT, MIN_OPERATOR_COUNT};
use crate::utils::errors::ConfigError;

/// # Errors
///
/// Returns an error if `count` lies outside the enumerable range.
pub fn validate_operator_count(count: usize) -> Result<(), ConfigError> {
    debug!("Validating operator count: {}", count);

    if !(MIN_OPERATOR_COUNT..=MAX_OPERATOR_COUNT).contains(&count) {
        warn!("Operator count {} is out of range", count);
        return Err(ConfigError::BadOperatorCount {
            count,
            min: MIN_OPERATOR_COUNT,
            max: MAX_OPERATOR_COUNT,
        });
    }

    Ok(())
}

/// # Errors
///
/// Returns an error if the half-open range `[min, max)` is empty.
pub fn validate_term_range(min: i64, max: i64) -> Result<(), ConfigError> {
    if min >= max {
        warn!("Empty term range: min={}, max={}", min, max);
        return Err(ConfigError::EmptyTermRange { min, max });
    }
    Ok(())
}

/// # Errors
///
/// Returns an error for a zero-sized stream buffer.
pub fn validate_buffer_capacity(capacity: usize) -> Result<(), ConfigError> {
    if capacity == 0 {
        return Err(ConfigError::ZeroBufferCapacity);
    }
    Ok(())
}
