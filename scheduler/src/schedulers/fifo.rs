use crate::{Process, Scheduler};

/// First-in-first-out: the process that arrived first runs first and keeps
/// the processor until it completes.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct FIFO;

impl FIFO {
    pub fn new() -> Self {
        FIFO
    }
}

impl Scheduler for FIFO {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn preemptive(&self) -> bool {
        false
    }

    fn key(&self, process: &dyn Process) -> usize {
        process.arrival()
    }
}
