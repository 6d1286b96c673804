//! Synthetic workload generation.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::error::{Error, Result};
use crate::registry::{Job, Registry};

/// Parameters of a synthetic workload.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Workload {
    /// Number of processes, at least 1.
    pub process_count: usize,

    /// Arrivals are drawn uniformly from `0..=max_arrival`.
    pub max_arrival: usize,

    /// Mean of the normal distribution service times are drawn from.
    pub service_mean: f64,

    /// Standard deviation of the service time distribution.
    pub service_stddev: f64,
}

impl Workload {
    /// Creates a validated workload description.
    pub fn new(
        process_count: usize,
        max_arrival: usize,
        service_mean: f64,
        service_stddev: f64,
    ) -> Result<Workload> {
        let workload = Workload {
            process_count,
            max_arrival,
            service_mean,
            service_stddev,
        };
        workload.validate()?;
        Ok(workload)
    }

    pub fn validate(&self) -> Result<()> {
        if self.process_count == 0 {
            return Err(Error::config("process count", "must be positive"));
        }
        if !self.service_mean.is_finite() || self.service_mean <= 0.0 {
            return Err(Error::config(
                "service mean",
                format!("must be a positive number, got {}", self.service_mean),
            ));
        }
        if !self.service_stddev.is_finite() || self.service_stddev < 0.0 {
            return Err(Error::config(
                "service stddev",
                format!("must be a non-negative number, got {}", self.service_stddev),
            ));
        }
        Ok(())
    }

    /// Draws a registry of `process_count` processes from `rng`.
    ///
    /// For every process the arrival time is drawn first, then the service
    /// time. Service times are rounded to the nearest integer and never drop
    /// below 1, the normal distribution produces non-positive samples now and
    /// then.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Registry> {
        self.validate()?;
        let distribution = Normal::new(self.service_mean, self.service_stddev)
            .map_err(|err| Error::config("service stddev", err.to_string()))?;

        let mut jobs = Vec::with_capacity(self.process_count);
        for pid in 0..self.process_count {
            let arrival = rng.gen_range(0..=self.max_arrival);
            let sample = distribution.sample(rng).round();
            let service = if sample < 1.0 { 1 } else { sample as usize };
            jobs.push(Job::new(pid, arrival, service));
        }

        debug!(
            "generated {} processes, arrivals in 0..={}, service ~ N({}, {})",
            self.process_count, self.max_arrival, self.service_mean, self.service_stddev
        );
        Ok(Registry { jobs })
    }

    /// Same as [`Workload::generate`] with a [`StdRng`] seeded from `seed`.
    ///
    /// The same seed always produces the same registry.
    pub fn generate_seeded(&self, seed: u64) -> Result<Registry> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(&mut rng)
    }
}

#[cfg(test)]
mod tests {
    use scheduler::{Process, ProcessState};

    use super::*;

    #[test]
    fn rejects_invalid_parameters() {
        assert!(Workload::new(0, 10, 5.0, 1.0).is_err());
        assert!(Workload::new(3, 10, 0.0, 1.0).is_err());
        assert!(Workload::new(3, 10, -2.0, 1.0).is_err());
        assert!(Workload::new(3, 10, f64::NAN, 1.0).is_err());
        assert!(Workload::new(3, 10, 5.0, -1.0).is_err());
        assert!(Workload::new(3, 0, 5.0, 0.0).is_ok());
    }

    #[test]
    fn generated_processes_respect_bounds() {
        let workload = Workload::new(200, 30, 2.0, 4.0).unwrap();
        let registry = workload.generate_seeded(7).unwrap();
        assert_eq!(registry.len(), 200);
        for (pid, job) in registry.iter().enumerate() {
            assert_eq!(job.pid(), pid);
            assert!(job.arrival() <= 30);
            assert!(job.service() >= 1);
            assert_eq!(job.remaining(), job.service());
            assert_eq!(job.state(), ProcessState::NotArrived);
            assert_eq!(job.completion(), None);
        }
    }

    #[test]
    fn zero_stddev_gives_constant_service() {
        let workload = Workload::new(10, 5, 6.4, 0.0).unwrap();
        let registry = workload.generate_seeded(1).unwrap();
        assert!(registry.iter().all(|job| job.service() == 6));
    }

    #[test]
    fn same_seed_same_registry() {
        let workload = Workload::new(50, 1000, 20.0, 5.0).unwrap();
        assert_eq!(
            workload.generate_seeded(42).unwrap(),
            workload.generate_seeded(42).unwrap()
        );
    }
}
