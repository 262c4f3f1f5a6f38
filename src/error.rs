use thiserror::Error;

/// Everything that can go wrong while configuring or running a [`crate::HolidayQuery`].
#[derive(Debug, Error)]
pub enum HolidayError {
    /// A required setting was not provided before `list()`.
    #[error("configuration error: {0}")]
    Configuration(&'static str),

    /// `from`/`to` received something that is not a recognizable date.
    ///
    /// `source` is the chrono failure of the `YYYY-MM-DD` attempt; it is `None` when that
    /// format matched but the year was not written with four digits (`24-03-05`).
    #[error("could not parse date {input:?}")]
    DateParse {
        input: String,
        #[source]
        source: Option<chrono::ParseError>,
    },

    /// Network-level failure (DNS, TLS, timeout, ...).
    #[error("request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-2xx status.
    #[error("request to {url} failed with HTTP {status}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    /// The body was not JSON, or an item broke the provider's event contract.
    #[error("could not decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Coarse classification of [`HolidayError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Parse,
    Transport,
}

impl HolidayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HolidayError::Configuration(_) => ErrorKind::Configuration,
            HolidayError::DateParse { .. } => ErrorKind::Parse,
            HolidayError::Http { .. }
            | HolidayError::Status { .. }
            | HolidayError::Decode { .. } => ErrorKind::Transport,
        }
    }
}

pub type Result<T, E = HolidayError> = std::result::Result<T, E>;
