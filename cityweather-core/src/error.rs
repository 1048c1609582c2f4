use thiserror::Error;

/// Failures that are not part of the normal "no such city / no data" outcomes:
/// the request never completed or the body could not be decoded.
#[derive(Debug, Error)]
pub enum UnexpectedFailure {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("no place matched '{0}'")]
    NotFound(String),

    #[error(transparent)]
    Unexpected(#[from] UnexpectedFailure),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("current conditions are unavailable")]
    Unavailable,

    #[error(transparent)]
    Unexpected(#[from] UnexpectedFailure),
}

/// Every way a search can end without a report.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("empty city name")]
    EmptyInput,

    #[error("city not found")]
    NotFound,

    #[error("weather data unavailable")]
    Unavailable,

    #[error(transparent)]
    Unexpected(#[from] UnexpectedFailure),
}

impl SearchError {
    /// Text shown in the error region.
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::EmptyInput => "Please enter a city name.",
            SearchError::NotFound => "City not found. Please try again.",
            SearchError::Unavailable => "Failed to fetch weather data. Please try again later.",
            SearchError::Unexpected(_) => {
                "An error occurred. Please check your internet connection or try again."
            }
        }
    }

    pub fn is_unexpected(&self) -> bool {
        matches!(self, SearchError::Unexpected(_))
    }
}

impl From<LookupError> for SearchError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::NotFound(_) => SearchError::NotFound,
            LookupError::Unexpected(inner) => SearchError::Unexpected(inner),
        }
    }
}

impl From<FetchError> for SearchError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Unavailable => SearchError::Unavailable,
            FetchError::Unexpected(inner) => SearchError::Unexpected(inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_failure() -> UnexpectedFailure {
        let err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        UnexpectedFailure::Decode(err)
    }

    #[test]
    fn lookup_errors_map_to_search_errors() {
        let not_found: SearchError = LookupError::NotFound("Atlantis".into()).into();
        assert!(matches!(not_found, SearchError::NotFound));

        let unexpected: SearchError = LookupError::Unexpected(decode_failure()).into();
        assert!(unexpected.is_unexpected());
    }

    #[test]
    fn fetch_errors_map_to_search_errors() {
        let unavailable: SearchError = FetchError::Unavailable.into();
        assert!(matches!(unavailable, SearchError::Unavailable));

        let unexpected: SearchError = FetchError::Unexpected(decode_failure()).into();
        assert!(unexpected.is_unexpected());
    }

    #[test]
    fn user_messages() {
        assert_eq!(SearchError::EmptyInput.user_message(), "Please enter a city name.");
        assert_eq!(SearchError::NotFound.user_message(), "City not found. Please try again.");
        assert_eq!(
            SearchError::Unavailable.user_message(),
            "Failed to fetch weather data. Please try again later."
        );
        assert_eq!(
            SearchError::Unexpected(decode_failure()).user_message(),
            "An error occurred. Please check your internet connection or try again."
        );
    }
}
