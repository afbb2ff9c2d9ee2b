use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// The kind of error that occurred while talking to the assistant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The service could not be reached, or the connection broke.
    Transport,
    /// The service answered with a non-success status.
    Status,
    /// The response body could not be parsed into a reply.
    Malformed,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Transport => write!(f, "transport error"),
            ErrorKind::Status => write!(f, "unsuccessful status"),
            ErrorKind::Malformed => write!(f, "malformed response"),
        }
    }
}
