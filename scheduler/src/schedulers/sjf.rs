use crate::{Process, Scheduler};

/// Shortest job first, non-preemptive.
///
/// Whenever the processor is free, the ready process with the smallest total
/// service time is picked. A running process is never interrupted, even when
/// a shorter one arrives.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SJF;

impl SJF {
    pub fn new() -> Self {
        SJF
    }
}

impl Scheduler for SJF {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn preemptive(&self) -> bool {
        false
    }

    fn key(&self, process: &dyn Process) -> usize {
        process.service()
    }
}
