use super::launch_spec::LaunchOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchError {
    /// Resolution produced no adapter at all. Only possible once the
    /// registry's fallback has been cleared.
    NoAdapter,
    /// An adapter rejected the options it was given.
    InvalidOptions { adapter: String, reason: String },
}

impl std::fmt::Display for LaunchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LaunchError::NoAdapter => write!(f, "llm: no adapter registered"),
            LaunchError::InvalidOptions { adapter, reason } => {
                write!(f, "{adapter} adapter rejected launch options: {reason}")
            }
        }
    }
}

impl std::error::Error for LaunchError {}

/// Builds a runtime-specific startup command for an agent session.
///
/// Implementations must treat `options` as read-only. Any rewrite goes into a
/// fresh `LaunchOptions` that is handed to the wrapped adapter.
pub trait LaunchAdapter: Send + Sync {
    fn build_launch_command(&self, options: &LaunchOptions) -> Result<String, LaunchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_adapter_message() {
        assert_eq!(
            LaunchError::NoAdapter.to_string(),
            "llm: no adapter registered"
        );
    }

    #[test]
    fn test_invalid_options_message_names_adapter() {
        let err = LaunchError::InvalidOptions {
            adapter: "openhands".to_string(),
            reason: "model is required".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "openhands adapter rejected launch options: model is required"
        );
    }
}
