use thiserror::Error;

#[derive(Debug, Error)]
pub enum MotifMarkError {
    #[error("motif '{motif}' has invalid symbol '{symbol}' at position {position}")]
    InvalidMotifSymbol {
        motif: String,
        symbol: char,
        position: usize,
    },
    #[error("sequence '{label}' is empty")]
    EmptySequence { label: String },
    #[error("occurrence {start}..{end} does not fit a sequence of length {sequence_len}")]
    InvalidOccurrence {
        start: usize,
        end: usize,
        sequence_len: usize,
    },
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse settings JSON '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl MotifMarkError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        MotifMarkError::Io {
            context: context.into(),
            source,
        }
    }
}

pub type Result<T, E = MotifMarkError> = std::result::Result<T, E>;
