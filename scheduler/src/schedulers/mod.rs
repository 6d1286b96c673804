//! The dispatch policies.
//!
//! Each policy is a ranking key plus a preemption flag; the selection itself
//! is the provided [`Scheduler::select`](crate::Scheduler::select).
mod fifo;
pub use fifo::FIFO;

mod sjf;
pub use sjf::SJF;

mod srt;
pub use srt::SRT;

#[cfg(test)]
mod tests {
    use super::{FIFO, SJF, SRT};
    use crate::{Pid, Process, ProcessState, Scheduler};

    struct Stub {
        pid: usize,
        arrival: usize,
        service: usize,
        remaining: usize,
    }

    impl Process for Stub {
        fn pid(&self) -> Pid {
            Pid::new(self.pid)
        }

        fn state(&self) -> ProcessState {
            ProcessState::Ready
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
            None
        }
    }

    fn stub(pid: usize, arrival: usize, service: usize, remaining: usize) -> Stub {
        Stub {
            pid,
            arrival,
            service,
            remaining,
        }
    }

    fn select(scheduler: &dyn Scheduler, stubs: &[Stub]) -> Option<Pid> {
        let ready: Vec<&dyn Process> = stubs.iter().map(|stub| stub as &dyn Process).collect();
        scheduler.select(&ready)
    }

    #[test]
    fn empty_ready_set() {
        assert_eq!(select(&FIFO, &[]), None);
        assert_eq!(select(&SJF, &[]), None);
        assert_eq!(select(&SRT, &[]), None);
    }

    #[test]
    fn fifo_picks_earliest_arrival() {
        let stubs = [stub(0, 4, 1, 1), stub(1, 2, 9, 9), stub(2, 3, 5, 5)];
        assert_eq!(select(&FIFO, &stubs), Some(Pid::new(1)));
    }

    #[test]
    fn sjf_picks_smallest_service() {
        let stubs = [stub(0, 0, 7, 1), stub(1, 2, 3, 3), stub(2, 3, 5, 5)];
        assert_eq!(select(&SJF, &stubs), Some(Pid::new(1)));
    }

    #[test]
    fn srt_picks_smallest_remaining() {
        let stubs = [stub(0, 0, 7, 1), stub(1, 2, 3, 3), stub(2, 3, 5, 5)];
        assert_eq!(select(&SRT, &stubs), Some(Pid::new(0)));
    }

    #[test]
    fn ties_go_to_lower_pid() {
        let stubs = [stub(3, 1, 4, 4), stub(1, 1, 4, 4), stub(2, 1, 4, 4)];
        assert_eq!(select(&FIFO, &stubs), Some(Pid::new(1)));
        assert_eq!(select(&SJF, &stubs), Some(Pid::new(1)));
        assert_eq!(select(&SRT, &stubs), Some(Pid::new(1)));
    }

    #[test]
    fn only_srt_preempts() {
        assert!(!FIFO.preemptive());
        assert!(!SJF.preemptive());
        assert!(SRT.preemptive());
    }

    #[test]
    fn boxed_scheduler_delegates() {
        let boxed: Box<dyn Scheduler> = Box::new(SJF);
        let stubs = [stub(0, 0, 2, 2), stub(1, 0, 1, 1)];
        assert_eq!(boxed.name(), "SJF");
        assert_eq!(select(&boxed, &stubs), Some(Pid::new(1)));
    }
}
