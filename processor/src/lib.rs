//! A single-processor batch simulation library
//!
//! This is used for running the dispatch policies from the [`scheduler`]
//! crate against a synthetic workload and measuring their average
//! turnaround time.

use std::fmt::{self, Display};
use std::num::NonZeroUsize;
use std::thread;

use log::{debug, trace};
use scheduler::{
    Algorithm, Pid, Process, ProcessState, Scheduler, SchedulingDecision, StopReason,
};

mod error;
mod metrics;
mod registry;
mod workload;

pub use error::{Error, Result};
pub use metrics::{average_turnaround, Metrics};
pub use registry::{Job, Registry};
pub use workload::Workload;

/// Running iteration log
#[derive(Debug, Clone, PartialEq)]
pub struct Log {
    /// The simulated time at which the decision was taken.
    pub time: usize,

    /// The action taken by the processor.
    pub decision: SchedulingDecision,

    /// How the burst started by a [`SchedulingDecision::Run`] ended.
    pub stop_reason: Option<StopReason>,

    /// Every process of the run, in PID order, as seen right after the
    /// decision and before any time passes.
    pub processes: Vec<ProcessInfo>,
}

impl Log {
    fn new(time: usize, decision: SchedulingDecision, processes: Vec<ProcessInfo>) -> Log {
        Log {
            time,
            decision,
            stop_reason: None,
            processes,
        }
    }

    /// The process that owns the processor in this iteration, if any.
    pub fn running(&self) -> Option<&ProcessInfo> {
        self.processes
            .iter()
            .find(|process| process.state == ProcessState::Running)
    }

    /// The processes waiting in the ready set.
    pub fn ready(&self) -> impl Iterator<Item = &ProcessInfo> {
        self.processes
            .iter()
            .filter(|process| process.state == ProcessState::Ready)
    }
}

impl Display for Log {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[t={}] {}", self.time, self.decision)?;
        writeln!(f, "PID\tSTATE\t\tARRIVAL\tSERVICE\tREMAIN\tFINISH")?;
        for process in &self.processes {
            writeln!(f, "{}", process)?;
        }
        if let Some(reason) = self.stop_reason {
            writeln!(f, "-> {}", reason)?;
        }
        writeln!(f)
    }
}

/// Information about a process state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInfo {
    /// The PID of the process.
    pub pid: Pid,

    /// The process state.
    pub state: ProcessState,

    pub arrival: usize,
    pub service: usize,
    pub remaining: usize,
    pub completion: Option<usize>,
}

impl ProcessInfo {
    fn new(process: &dyn Process) -> ProcessInfo {
        ProcessInfo {
            pid: process.pid(),
            state: process.state(),
            arrival: process.arrival(),
            service: process.service(),
            remaining: process.remaining(),
            completion: process.completion(),
        }
    }
}

impl Display for ProcessInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t\t{}\t{}\t{}\t",
            self.pid, self.state, self.arrival, self.service, self.remaining
        )?;
        match self.completion {
            Some(completion) => write!(f, "{}", completion),
            None => write!(f, "-"),
        }
    }
}

/// The outcome of running one policy over a registry.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    /// The name of the policy.
    pub policy: &'static str,

    /// The registry after the run; every process is completed.
    pub registry: Registry,

    /// One entry per decision; empty for [`Processor::summarize`] runs.
    pub logs: Vec<Log>,

    /// The simulated time at which the last process completed.
    pub finish_time: usize,
}

impl Simulation {
    pub fn metrics(&self) -> Result<Metrics> {
        Metrics::collect(self.policy, &self.registry)
    }
}

/// The processor simulator.
///
/// Processes are referenced by their index in `jobs`; `ready` and `running`
/// never alias each other.
pub struct Processor<S: Scheduler> {
    scheduler: S,
    jobs: Vec<Job>,
    time: usize,
    ready: Vec<usize>,
    running: Option<usize>,
    completed: usize,
    logs: Vec<Log>,
    tracing: bool,
}

impl<S: Scheduler> Processor<S> {
    /// Runs `scheduler` over a private copy of `registry` and records the
    /// full decision log.
    ///
    /// * `scheduler` - the dispatch policy.
    /// * `registry` - the initial processes, left untouched.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use processor::{format_logs, Processor, Registry};
    ///
    /// let registry = Registry::from_bursts(&[(0, 5), (1, 3), (2, 1)]).unwrap();
    /// let simulation = Processor::run(scheduler::srt(), &registry).unwrap();
    ///
    /// println!("{}", format_logs(&simulation.logs));
    /// assert_eq!(simulation.finish_time, 9);
    /// ```
    pub fn run(scheduler: S, registry: &Registry) -> Result<Simulation> {
        Processor::new(scheduler, registry, true).simulate()
    }

    /// Runs `scheduler` over a private copy of `registry` without keeping a
    /// log and returns its metrics.
    pub fn summarize(scheduler: S, registry: &Registry) -> Result<Metrics> {
        Processor::new(scheduler, registry, false)
            .simulate()?
            .metrics()
    }

    fn new(scheduler: S, registry: &Registry, tracing: bool) -> Processor<S> {
        Processor {
            scheduler,
            jobs: registry.jobs.clone(),
            time: 0,
            ready: Vec::new(),
            running: None,
            completed: 0,
            logs: Vec::new(),
            tracing,
        }
    }

    fn simulate(mut self) -> Result<Simulation> {
        let policy = self.scheduler.name();
        debug!("{}: starting with {} processes", policy, self.jobs.len());

        while self.completed < self.jobs.len() {
            self.step()?;
        }
        self.log(SchedulingDecision::Done);

        debug!("{}: all processes completed at {}", policy, self.time);
        Ok(Simulation {
            policy,
            registry: Registry { jobs: self.jobs },
            logs: self.logs,
            finish_time: self.time,
        })
    }

    /// One iteration: admit, re-evaluate, select, then either execute a burst
    /// or jump to the next arrival.
    fn step(&mut self) -> Result<()> {
        self.admit();

        let preempted = if self.scheduler.preemptive() {
            self.running.take().map(|index| {
                self.jobs[index].preempt();
                self.ready.push(index);
                index
            })
        } else {
            None
        };

        if self.running.is_none() && !self.ready.is_empty() {
            let index = self.select()?;
            if let Some(previous) = preempted.filter(|&previous| previous != index) {
                debug!(
                    "{}: t={} process {} preempts process {}",
                    self.scheduler.name(),
                    self.time,
                    self.jobs[index].pid(),
                    self.jobs[previous].pid()
                );
            }
            self.jobs[index].dispatch();
            self.running = Some(index);
        }

        let Some(index) = self.running else {
            return self.idle();
        };

        let burst = if self.scheduler.preemptive() {
            1
        } else {
            self.jobs[index].remaining()
        };
        let burst = NonZeroUsize::new(burst).ok_or_else(|| self.stalled())?;
        let pid = self.jobs[index].pid();
        trace!("{}: t={} run {} for {}", self.scheduler.name(), self.time, pid, burst);
        self.log(SchedulingDecision::Run { pid, burst });

        self.time += burst.get();
        let reason = if self.jobs[index].execute(burst.get(), self.time) {
            self.running = None;
            self.completed += 1;
            StopReason::Completed
        } else {
            StopReason::Expired
        };
        if let Some(log) = self.logs.last_mut() {
            log.stop_reason = Some(reason);
        }
        Ok(())
    }

    fn admit(&mut self) {
        for (index, job) in self.jobs.iter_mut().enumerate() {
            if job.state() == ProcessState::NotArrived && job.arrival() <= self.time {
                trace!("t={} process {} arrives", self.time, job.pid());
                job.admit();
                self.ready.push(index);
            }
        }
    }

    fn select(&mut self) -> Result<usize> {
        let candidates: Vec<&dyn Process> = self
            .ready
            .iter()
            .map(|&index| &self.jobs[index] as &dyn Process)
            .collect();
        let pid = self
            .scheduler
            .select(&candidates)
            .ok_or_else(|| self.stalled())?;
        let position = self
            .ready
            .iter()
            .position(|&index| self.jobs[index].pid() == pid)
            .ok_or(Error::UnknownSelection { pid })?;
        Ok(self.ready.swap_remove(position))
    }

    /// Nothing is running and nothing is ready: jump straight to the next
    /// arrival.
    fn idle(&mut self) -> Result<()> {
        let next = self
            .jobs
            .iter()
            .filter(|job| job.state() == ProcessState::NotArrived)
            .map(|job| job.arrival())
            .min()
            .ok_or_else(|| self.stalled())?;
        let gap = next
            .checked_sub(self.time)
            .and_then(NonZeroUsize::new)
            .ok_or_else(|| self.stalled())?;

        debug!("{}: t={} idle until {}", self.scheduler.name(), self.time, next);
        self.log(SchedulingDecision::Idle(gap));
        self.time = next;
        Ok(())
    }

    fn log(&mut self, decision: SchedulingDecision) {
        if self.tracing {
            let processes = self
                .jobs
                .iter()
                .map(|job| ProcessInfo::new(job))
                .collect();
            self.logs.push(Log::new(self.time, decision, processes));
        }
    }

    fn stalled(&self) -> Error {
        Error::Stalled {
            time: self.time,
            completed: self.completed,
            total: self.jobs.len(),
        }
    }
}

/// Runs every policy of [`Algorithm::ALL`] over its own copy of `registry`
/// and returns their metrics in the same order.
///
/// The runs share nothing, so each one gets its own thread.
pub fn compare(registry: &Registry) -> Result<Vec<Metrics>> {
    thread::scope(|s| {
        let handles: Vec<_> = Algorithm::ALL
            .into_iter()
            .map(|algorithm| s.spawn(move || Processor::summarize(algorithm.scheduler(), registry)))
            .collect();
        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
            })
            .collect()
    })
}

/// Format the [`Processor`]'s logs to a [`String`].
///
/// * `logs` - the logs of a [`Simulation`].
///
/// ## Example
///
/// ```rust
/// use processor::{format_logs, Processor, Registry};
///
/// let registry = Registry::from_bursts(&[(0, 2)]).unwrap();
/// let simulation = Processor::run(scheduler::fifo(), &registry).unwrap();
///
/// println!("{}", format_logs(&simulation.logs));
/// ```
pub fn format_logs(logs: &[Log]) -> String {
    let mut s = String::new();
    for (iteration, log) in logs.iter().enumerate() {
        // Writing into a String cannot fail.
        let _ = fmt::write(
            &mut s,
            format_args!("===== Iteration: {} =====\n{}\n", iteration + 1, log),
        );
    }
    s
}
