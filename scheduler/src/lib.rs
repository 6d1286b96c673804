//! A dispatch policy library.
//!
//! This library provides the traits and structures that a single-processor
//! batch simulation uses to decide which process runs next, together with
//! the three policies it compares: FIFO, SJF and SRT.
//!

use std::fmt::{self, Display};
use std::str::FromStr;

mod scheduler;

pub use crate::scheduler::{
    Pid, Process, ProcessState, Scheduler, SchedulingDecision, StopReason,
};

mod schedulers;

pub use schedulers::{FIFO, SJF, SRT};

/// Returns a structure that implements the `Scheduler` trait with a first-in-first-out policy
pub fn fifo() -> impl Scheduler {
    FIFO::new()
}

/// Returns a structure that implements the `Scheduler` trait with a non-preemptive
/// shortest job first policy
pub fn sjf() -> impl Scheduler {
    SJF::new()
}

/// Returns a structure that implements the `Scheduler` trait with a shortest remaining
/// time policy, which preempts the running process after every time unit
pub fn srt() -> impl Scheduler {
    SRT::new()
}

/// Names one of the available policies.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Fifo,
    Sjf,
    Srt,
}

impl Algorithm {
    /// Every policy, in reporting order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Fifo, Algorithm::Sjf, Algorithm::Srt];

    pub fn scheduler(self) -> Box<dyn Scheduler> {
        match self {
            Algorithm::Fifo => Box::new(FIFO::new()),
            Algorithm::Sjf => Box::new(SJF::new()),
            Algorithm::Srt => Box::new(SRT::new()),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Fifo => write!(f, "FIFO"),
            Algorithm::Sjf => write!(f, "SJF"),
            Algorithm::Srt => write!(f, "SRT"),
        }
    }
}

/// The error returned when a policy name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(String);

impl Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown policy `{}`, expected one of fifo, sjf, srt", self.0)
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(Algorithm::Fifo),
            "sjf" => Ok(Algorithm::Sjf),
            "srt" => Ok(Algorithm::Srt),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Algorithm;

    #[test]
    fn parse_algorithm() {
        assert_eq!("fifo".parse(), Ok(Algorithm::Fifo));
        assert_eq!("SJF".parse(), Ok(Algorithm::Sjf));
        assert_eq!("Srt".parse(), Ok(Algorithm::Srt));
        assert!("rr".parse::<Algorithm>().is_err());
    }

    #[test]
    fn names_match_schedulers() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.scheduler().name(), algorithm.to_string());
        }
    }
}
