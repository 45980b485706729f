use thiserror::Error;

pub const SUPPORTED_PATTERNS: &str = "Please provide:\n\
- Three sides (SSS)\n\
- Two sides and included angle (SAS)\n\
- One side and two angles (ASA/AAS)";

/// Classified failure of a single solve request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("Insufficient or invalid information ({detail}). {}", SUPPORTED_PATTERNS)]
    InsufficientInput { detail: String },

    #[error("Invalid triangle: {message}")]
    InvalidTriangle { message: String },

    #[error("Domain error while computing {context}: {message}")]
    DomainError { context: String, message: String },
}

impl SolveError {
    pub fn insufficient(detail: impl Into<String>) -> Self {
        Self::InsufficientInput {
            detail: detail.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidTriangle {
            message: message.into(),
        }
    }

    pub fn domain(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DomainError {
            context: context.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::InsufficientInput { .. } => "InsufficientInput",
            Self::InvalidTriangle { .. } => "InvalidTriangle",
            Self::DomainError { .. } => "DomainError",
        }
    }
}

#[derive(Error, Debug)]
pub enum TriError {
    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error("Invalid input for {field}: '{value}' ({reason})")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TriError {
    /// True when the failure comes from what the user typed rather than from the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Solve(_) | Self::InvalidInput { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Solve(e) => e.to_string(),
            Self::InvalidInput { field, value, .. } => {
                format!("'{}' is not a valid number for {}", value, field)
            }
            Self::Config { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration field {} is invalid: {}", field, reason)
            }
            Self::Io(e) => format!("File access failed: {}", e),
            Self::Toml(e) => format!("Configuration file could not be parsed: {}", e),
            Self::Json(e) => format!("Could not serialize the result: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Solve(SolveError::InsufficientInput { .. }) => {
                "Give exactly three values: three sides, two sides with the angle between them, or one side with two angles"
            }
            Self::Solve(SolveError::InvalidTriangle { .. }) => {
                "Check that any two sides add up to more than the third and that the angles sum to less than 180 degrees"
            }
            Self::Solve(SolveError::DomainError { .. }) => {
                "Angles must lie strictly between 0 and 180 degrees and all values must be finite"
            }
            Self::InvalidInput { .. } => "Leave unknown values blank and use plain decimal numbers",
            Self::Config { .. } | Self::InvalidConfigValue { .. } | Self::Toml(_) => {
                "Check the configuration file against the documented [output] and [[triangle]] tables"
            }
            Self::Io(_) => "Check that the path exists and is writable",
            Self::Json(_) => "Try the markdown or plain output format",
        }
    }
}

pub type Result<T> = std::result::Result<T, TriError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_message_lists_supported_patterns() {
        let msg = SolveError::insufficient("1 side, 1 angle").to_string();
        assert!(msg.contains("Three sides (SSS)"));
        assert!(msg.contains("Two sides and included angle (SAS)"));
        assert!(msg.contains("One side and two angles (ASA/AAS)"));
    }

    #[test]
    fn solve_errors_are_input_errors() {
        let err: TriError = SolveError::invalid("a + b <= c").into();
        assert!(err.is_input_error());
        assert_eq!(err.to_string(), "Invalid triangle: a + b <= c");

        let io: TriError = std::io::Error::other("disk full").into();
        assert!(!io.is_input_error());
    }
}
