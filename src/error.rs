use thiserror::Error;

#[derive(Error, Debug)]
pub enum TeamForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Unknown playstyle '{0}'")]
    UnknownPlaystyle(String),

    #[error("Unknown algorithm '{0}' (expected 'sampling' or 'genetic')")]
    UnknownAlgorithm(String),

    #[error("Roster has {actual} slots but the team size is {expected}")]
    RosterLength { expected: usize, actual: usize },

    #[error("Invalid roster entry: {0}")]
    InvalidRoster(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

impl TeamForgeError {
    /// True for errors caused by the request itself rather than by data files.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::UnknownPlaystyle(_)
                | Self::UnknownAlgorithm(_)
                | Self::RosterLength { .. }
                | Self::InvalidRoster(_)
        )
    }
}

pub type TfResult<T> = Result<T, TeamForgeError>;
