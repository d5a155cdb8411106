//! Construction-time constraint violations.

use core::fmt;

/// A tuning value that cannot produce a well-formed board.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    NonFiniteValue { field: &'static str, value: f64 },
    NonPositiveWidth { field: &'static str, value: f64 },
    /// Width at or above `limit`.
    WidthTooLarge { field: &'static str, value: f64, limit: f64 },
    NonPositiveSpeed { field: &'static str, value: f64 },
    NegativeReloadTime { field: &'static str, value: f64 },
    ZeroRespawnAttempts,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteValue { field, value } => {
                write!(f, "{field} must be finite (got {value})")
            }
            Self::NonPositiveWidth { field, value } => {
                write!(f, "{field} must be > 0 (got {value})")
            }
            Self::WidthTooLarge { field, value, limit } => {
                write!(f, "{field} must be < {limit} (got {value})")
            }
            Self::NonPositiveSpeed { field, value } => {
                write!(f, "{field} must be > 0 (got {value})")
            }
            Self::NegativeReloadTime { field, value } => {
                write!(f, "{field} must be >= 0 (got {value})")
            }
            Self::ZeroRespawnAttempts => write!(f, "max_respawn_attempts must be >= 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Reject NaN and infinities.
pub fn check_finite(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFiniteValue { field, value })
    }
}

pub fn check_width(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if check_finite(field, value)? <= 0.0 {
        return Err(ConfigError::NonPositiveWidth { field, value });
    }
    Ok(value)
}

pub fn check_speed(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if check_finite(field, value)? <= 0.0 {
        return Err(ConfigError::NonPositiveSpeed { field, value });
    }
    Ok(value)
}

pub fn check_reload_time(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if check_finite(field, value)? < 0.0 {
        return Err(ConfigError::NegativeReloadTime { field, value });
    }
    Ok(value)
}
