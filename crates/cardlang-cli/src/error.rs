use std::path::Path;

/// Failures outside the languages themselves: bad files, bad flags.
///
/// Malformed queries and templates are not errors here; they are rendered
/// as diagnostics and only affect the exit status.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write JSON output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("{0}")]
    Argument(String),
}

impl CliError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.display().to_string(),
            source,
        }
    }
}
