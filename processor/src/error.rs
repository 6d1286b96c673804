use std::fmt::{self, Display};

use scheduler::Pid;

/// Errors raised by the simulation library.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A workload parameter is out of range. Nothing has been simulated.
    InvalidConfig {
        parameter: &'static str,
        reason: String,
    },

    /// Metrics were requested for a registry where a process never completed.
    Incomplete { pid: Pid },

    /// The processor ran out of work before every process completed.
    Stalled {
        time: usize,
        completed: usize,
        total: usize,
    },

    /// The policy picked a process that is not in the ready set.
    UnknownSelection { pid: Pid },
}

/// Result type of the simulation library
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn config(parameter: &'static str, reason: impl Into<String>) -> Error {
        Error::InvalidConfig {
            parameter,
            reason: reason.into(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig { parameter, reason } => {
                write!(f, "invalid {}: {}", parameter, reason)
            }
            Error::Incomplete { pid } => {
                write!(f, "process {} has no completion time", pid)
            }
            Error::Stalled {
                time,
                completed,
                total,
            } => {
                write!(
                    f,
                    "processor stalled at time {} with {}/{} processes completed",
                    time, completed, total
                )
            }
            Error::UnknownSelection { pid } => {
                write!(f, "policy selected process {} which is not ready", pid)
            }
        }
    }
}

impl std::error::Error for Error {}
