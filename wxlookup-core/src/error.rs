use std::fmt;

use thiserror::Error;

/// Failure of any pipeline stage.
///
/// Every stage forwards an upstream failure untouched, so the variant seen by
/// the caller is the one produced by the first stage that failed.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The request never produced a response (DNS, refused connection, timeout, TLS, ...).
    #[error("connection error while calling {endpoint}: {message}")]
    Connect { endpoint: &'static str, message: String },

    /// The API answered, but not with a usable location or observation.
    #[error("lookup failed: {0}")]
    NotFound(String),

    #[error("unknown unit system '{0}'. Supported unit systems: metric, imperial, kelvin.")]
    UnknownUnits(String),
}

/// Two-valued classification of a [`WeatherError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Connect,
    NotFound,
}

impl WeatherError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WeatherError::Connect { .. } => ErrorKind::Connect,
            WeatherError::NotFound(_) | WeatherError::UnknownUnits(_) => ErrorKind::NotFound,
        }
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        WeatherError::NotFound(message.into())
    }

    pub(crate) fn connect(endpoint: &'static str, err: &reqwest::Error) -> Self {
        WeatherError::Connect { endpoint, message: err.to_string() }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::Connect => "connect error",
            ErrorKind::NotFound => "error",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_display_like_the_legacy_markers() {
        assert_eq!(ErrorKind::Connect.to_string(), "connect error");
        assert_eq!(ErrorKind::NotFound.to_string(), "error");
    }

    #[test]
    fn unknown_units_is_classified_as_not_found() {
        let err = WeatherError::UnknownUnits("rankine".into());
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("rankine"));
    }

    #[test]
    fn connect_error_names_endpoint() {
        let err = WeatherError::Connect { endpoint: "geo/1.0/zip", message: "refused".into() };
        assert_eq!(err.kind(), ErrorKind::Connect);
        assert!(err.to_string().contains("geo/1.0/zip"));
    }
}
