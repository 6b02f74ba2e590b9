#[derive(Debug, thiserror::Error)]
pub enum RecognizerError {
    #[error("parameter {param} in route {pattern} has a default value, which is not supported")]
    DefaultValue { param: Box<str>, pattern: Box<str> },

    #[error("invalid route regex: {0}")]
    InvalidRegex(#[from] regex::Error),

    #[error("nested route chain is empty")]
    EmptyChain,

    #[error("there is no route named {route}")]
    NotFound { route: Box<str> },

    #[error("a value is required for route parameter '{param}' in route '{route}'")]
    MissingParameter { param: Box<str>, route: Box<str> },

    #[cfg(feature = "http-recognizer")]
    #[error("generated path is not a valid uri: {0}")]
    InvalidUri(#[from] http::uri::InvalidUri),
}

impl RecognizerError {
    /// `true` for errors raised while registering a route.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::DefaultValue { .. } | Self::InvalidRegex(_) | Self::EmptyChain
        )
    }
}
