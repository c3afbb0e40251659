//! Serialization error types.

use serde_json::error::Category;
use tessel_automata::AutomataError;
use thiserror::Error;

/// Errors that can occur reading or writing rule files and grid states.
///
/// Every failure is reported before any engine state is modified.
#[derive(Debug, Error)]
pub enum SerdeError {
    /// JSON syntax or structure error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Well-formed input with invalid content.
    #[error("invalid content: {0}")]
    Schema(String),

    /// A rule file with an empty rule list.
    #[error("rule file contains no rules")]
    NoRules,

    /// Bincode deserialization error.
    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::error::DecodeError),

    /// Bincode encoding error.
    #[error("bincode encode error: {0}")]
    BincodeEncode(#[from] bincode::error::EncodeError),

    /// File system error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The engine rejected the decoded data.
    #[error("engine error: {0}")]
    Automata(#[from] AutomataError),

    /// Preset names must be non-empty, at most 100 characters and free of
    /// path and wildcard characters.
    #[error("invalid preset name {0:?}")]
    InvalidPresetName(String),

    /// No preset with that name exists.
    #[error("preset not found: {0}")]
    PresetNotFound(String),
}

/// Coarse classification of a [`SerdeError`], for user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The bytes are not valid JSON.
    Parse,
    /// Valid syntax, wrong structure or values.
    Schema,
    /// The rule list is empty.
    NoRules,
    /// File system failure.
    Io,
    /// Binary encoding failure.
    Format,
    /// The engine refused the data.
    Engine,
}

impl SerdeError {
    /// Returns the kind of failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SerdeError::Json(err) => match err.classify() {
                Category::Data => ErrorKind::Schema,
                Category::Io => ErrorKind::Io,
                Category::Syntax | Category::Eof => ErrorKind::Parse,
            },
            SerdeError::Schema(_) | SerdeError::InvalidPresetName(_) => ErrorKind::Schema,
            SerdeError::NoRules | SerdeError::Automata(AutomataError::NoRules) => ErrorKind::NoRules,
            SerdeError::Bincode(_) | SerdeError::BincodeEncode(_) => ErrorKind::Format,
            SerdeError::Io(_) | SerdeError::PresetNotFound(_) => ErrorKind::Io,
            SerdeError::Automata(_) => ErrorKind::Engine,
        }
    }
}
