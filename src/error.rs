use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("failed to render config: {0}")]
    Serialize(#[source] toml::ser::Error),
}

/// Errors raised while decoding a market-data event.
///
/// A bad event is dropped for its own code only; the engine never sees it.
#[derive(Error, Debug)]
pub enum EventError {
    #[error("malformed event for {}: field {field} = {value:?}", code.as_deref().unwrap_or("<unknown>"))]
    Malformed {
        code: Option<String>,
        field: &'static str,
        value: String,
    },

    #[error("undecodable record on line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl EventError {
    pub(crate) fn malformed(
        code: impl Into<String>,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::Malformed {
            code: Some(code.into()),
            field,
            value: value.into(),
        }
    }
}

/// Execution-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("order rejected: {0}")]
    Rejected(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Event(#[from] EventError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error("no daily high available for {code}")]
    MissingDailyHigh { code: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
