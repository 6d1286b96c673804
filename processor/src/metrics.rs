use std::fmt::{self, Display};

use scheduler::Process;

use crate::error::{Error, Result};
use crate::registry::Registry;

/// The summary of one policy run.
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    /// Name of the policy, as returned by [`scheduler::Scheduler::name`].
    pub policy: &'static str,

    /// Mean of `completion - arrival` over every process.
    pub average_turnaround: f64,
}

impl Metrics {
    pub fn collect(policy: &'static str, registry: &Registry) -> Result<Metrics> {
        Ok(Metrics {
            policy,
            average_turnaround: average_turnaround(registry)?,
        })
    }

    /// `mean / average_turnaround`: the share of its turnaround that an
    /// average process spends being served. 1.0 means no waiting at all.
    pub fn normalized(&self, mean: f64) -> f64 {
        if self.average_turnaround > 0.0 {
            mean / self.average_turnaround
        } else {
            0.0
        }
    }
}

impl Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ATT = {:.2}", self.policy, self.average_turnaround)
    }
}

/// Average turnaround time of a finished run.
///
/// Every process must have completed; a missing completion time means the
/// run ended early and is reported as [`Error::Incomplete`] instead of being
/// averaged away.
pub fn average_turnaround(registry: &Registry) -> Result<f64> {
    let mut total = 0usize;
    for job in registry {
        match job.turnaround() {
            Some(turnaround) => total += turnaround,
            None => return Err(Error::Incomplete { pid: job.pid() }),
        }
    }
    Ok(total as f64 / registry.len() as f64)
}
