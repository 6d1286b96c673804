use std::fmt::{self, Display};
use std::num::NonZeroUsize;

/// The PID of a process
///
/// PIDs are assigned in generation order and start from 0. They carry no
/// meaning beyond identity and tie-breaking.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct Pid(usize);

impl Pid {
    pub fn new(pid: usize) -> Pid {
        Pid(pid)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl PartialEq<usize> for Pid {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The action that the processor takes in one iteration.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SchedulingDecision {
    /// Run the process with PID `pid` for `burst` time units.
    Run { pid: Pid, burst: NonZeroUsize },

    /// Nothing is ready; jump ahead by the specified amount of time units,
    /// up to the next arrival.
    Idle(NonZeroUsize),

    /// Every process has completed.
    Done,
}

impl Display for SchedulingDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulingDecision::Run { pid, burst } => {
                write!(f, "Run {} for {} units", pid, burst)
            }
            SchedulingDecision::Idle(amount) => {
                write!(f, "Idle for {} units", amount)
            }
            SchedulingDecision::Done => {
                write!(f, "Done, no more processes")
            }
        }
    }
}

/// The reason a burst ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The burst is over but the process still needs service. It goes back
    /// to the ready set and competes again.
    Expired,

    /// The process has no remaining service time.
    Completed,
}

impl Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Expired => write!(f, "Expired"),
            StopReason::Completed => write!(f, "Completed"),
        }
    }
}

/// The state of a process.
///
/// States only move forward: `NotArrived -> Ready -> Running -> Completed`.
/// A preemptive policy may also move a process from `Running` back to `Ready`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ProcessState {
    /// The arrival time has not been reached yet.
    NotArrived,

    /// The process has arrived and waits for the processor.
    Ready,

    /// The process owns the processor.
    Running,

    /// The process has received all its service time.
    Completed,
}

impl Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessState::NotArrived => write!(f, "PENDING"),
            ProcessState::Ready => write!(f, "READY"),
            ProcessState::Running => write!(f, "RUNNING"),
            ProcessState::Completed => write!(f, "DONE"),
        }
    }
}

/// The read-only view of a process record that the processor hands to a
/// [`Scheduler`].
pub trait Process {
    /// Return the PID of the process.
    fn pid(&self) -> Pid;

    /// Return the state of the process.
    fn state(&self) -> ProcessState;

    /// The time at which the process becomes eligible to run.
    fn arrival(&self) -> usize;

    /// The total service time the process needs.
    fn service(&self) -> usize;

    /// The service time still owed to the process.
    fn remaining(&self) -> usize;

    /// The time at which the process completed, if it did.
    fn completion(&self) -> Option<usize>;
}

/// The trait that any dispatch policy has to implement.
///
/// A policy does not own any process. The processor keeps the ready set and
/// asks the policy to pick from it whenever the processor is free.
pub trait Scheduler: Send {
    /// Short name of the policy, used in reports.
    fn name(&self) -> &'static str;

    /// Whether a running process is put back into the ready set and
    /// re-evaluated after every time unit.
    fn preemptive(&self) -> bool;

    /// The value a ready process is ranked by. The smallest key wins.
    fn key(&self, process: &dyn Process) -> usize;

    /// Returns the PID of the process that should run next.
    ///
    /// Ties on the key go to the lower PID. Returns [`None`] only if `ready`
    /// is empty.
    fn select(&self, ready: &[&dyn Process]) -> Option<Pid> {
        ready
            .iter()
            .map(|process| (self.key(*process), process.pid()))
            .min()
            .map(|(_, pid)| pid)
    }
}

impl<S: Scheduler + ?Sized> Scheduler for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn preemptive(&self) -> bool {
        (**self).preemptive()
    }

    fn key(&self, process: &dyn Process) -> usize {
        (**self).key(process)
    }

    fn select(&self, ready: &[&dyn Process]) -> Option<Pid> {
        (**self).select(ready)
    }
}
