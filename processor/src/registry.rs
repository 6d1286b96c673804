//! Process records and the registry that owns them for one run.

use std::slice;

use scheduler::{Pid, Process, ProcessState};

use crate::error::{Error, Result};

/// The record of a single process.
///
/// Only the processor changes a record, through the crate-private
/// transitions below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pid: Pid,
    state: ProcessState,
    arrival: usize,
    service: usize,
    remaining: usize,
    completion: Option<usize>,
    turnaround: Option<usize>,
}

impl Job {
    /// Creates a process that has not arrived yet.
    ///
    /// `service` must be at least 1; callers in this crate check it.
    pub(crate) fn new(pid: usize, arrival: usize, service: usize) -> Job {
        Job {
            pid: Pid::new(pid),
            state: ProcessState::NotArrived,
            arrival,
            service,
            remaining: service,
            completion: None,
            turnaround: None,
        }
    }

    /// `completion - arrival`, once the process has completed.
    pub fn turnaround(&self) -> Option<usize> {
        self.turnaround
    }

    pub(crate) fn admit(&mut self) {
        debug_assert_eq!(self.state, ProcessState::NotArrived);
        self.state = ProcessState::Ready;
    }

    pub(crate) fn dispatch(&mut self) {
        debug_assert_eq!(self.state, ProcessState::Ready);
        self.state = ProcessState::Running;
    }

    pub(crate) fn preempt(&mut self) {
        debug_assert_eq!(self.state, ProcessState::Running);
        self.state = ProcessState::Ready;
    }

    /// Runs the process for `amount` time units ending at `now`.
    ///
    /// Returns `true` if the process completed.
    pub(crate) fn execute(&mut self, amount: usize, now: usize) -> bool {
        debug_assert_eq!(self.state, ProcessState::Running);
        debug_assert!(amount <= self.remaining);
        self.remaining -= amount;
        if self.remaining == 0 {
            self.completion = Some(now);
            self.turnaround = Some(now - self.arrival);
            self.state = ProcessState::Completed;
            true
        } else {
            false
        }
    }
}

impl Process for Job {
    fn pid(&self) -> Pid {
        self.pid
    }

    fn state(&self) -> ProcessState {
        self.state
    }

    fn arrival(&self) -> usize {
        self.arrival
    }

    fn service(&self) -> usize {
        self.service
    }

    fn remaining(&self) -> usize {
        self.remaining
    }

    fn completion(&self) -> Option<usize> {
        self.completion
    }
}

/// The ordered, non-empty set of processes of one simulation run.
///
/// Processes are never removed; a run works on its own clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    pub(crate) jobs: Vec<Job>,
}

impl Registry {
    /// Builds a registry from `(arrival, service)` pairs. PIDs are assigned
    /// in order, starting from 0.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use processor::Registry;
    ///
    /// let registry = Registry::from_bursts(&[(0, 5), (1, 3), (2, 1)]).unwrap();
    /// assert_eq!(registry.len(), 3);
    /// ```
    pub fn from_bursts(bursts: &[(usize, usize)]) -> Result<Registry> {
        if bursts.is_empty() {
            return Err(Error::config("process count", "at least one process is required"));
        }
        let mut jobs = Vec::with_capacity(bursts.len());
        for (pid, &(arrival, service)) in bursts.iter().enumerate() {
            if service == 0 {
                return Err(Error::config(
                    "service time",
                    format!("process {} needs at least one unit of service", pid),
                ));
            }
            jobs.push(Job::new(pid, arrival, service));
        }
        Ok(Registry { jobs })
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Always `false`, a registry holds at least one process.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn iter(&self) -> slice::Iter<'_, Job> {
        self.jobs.iter()
    }

    pub fn get(&self, pid: Pid) -> Option<&Job> {
        self.jobs.iter().find(|job| job.pid == pid)
    }

    /// Whether every process has reached [`ProcessState::Completed`].
    pub fn is_complete(&self) -> bool {
        self.jobs
            .iter()
            .all(|job| job.state == ProcessState::Completed)
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Job;
    type IntoIter = slice::Iter<'a, Job>;

    fn into_iter(self) -> Self::IntoIter {
        self.jobs.iter()
    }
}
