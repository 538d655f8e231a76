use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response from {url} is not valid JSON: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected page shape: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Worker task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),

    #[error("Worker pool closed: {message}")]
    WorkerPool { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Bad data from the service.
    High,
    /// Network trouble, usually transient.
    Medium,
    /// Nothing was fetched: bad configuration or a broken runtime.
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl FetchError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FetchError::Transport(_) => ErrorSeverity::Medium,
            FetchError::Parse { .. } | FetchError::Decode { .. } => ErrorSeverity::High,
            FetchError::Config { .. }
            | FetchError::InvalidConfigValue { .. }
            | FetchError::Worker(_)
            | FetchError::WorkerPool { .. }
            | FetchError::Io(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FetchError::Transport(e) => match e.url() {
                Some(url) => format!("Could not reach the country service at {}", url),
                None => "Could not reach the country service".to_string(),
            },
            FetchError::Parse { url, .. } => {
                format!("The country service at {} did not answer with JSON", url)
            }
            FetchError::Decode { .. } => {
                "The country service returned records in an unexpected shape".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
