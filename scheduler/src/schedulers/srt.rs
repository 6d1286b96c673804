use crate::{Process, Scheduler};

/// Shortest remaining time, the preemptive variant of [`SJF`](super::SJF).
///
/// The running process is re-evaluated after every time unit together with
/// the ready set. It keeps the processor only while no ready process has a
/// strictly smaller remaining time (equal times fall back to the PID).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SRT;

impl SRT {
    pub fn new() -> Self {
        SRT
    }
}

impl Scheduler for SRT {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn preemptive(&self) -> bool {
        true
    }

    fn key(&self, process: &dyn Process) -> usize {
        process.remaining()
    }
}
