use log::info;
use processor::{compare, Metrics, Result, Workload};
use rand::Rng;

/// Multiples of `max_arrival / process_count` used as mean service times,
/// from light to very heavy contention.
pub const FACTORS: [f64; 6] = [0.1, 0.5, 1.0, 2.0, 5.0, 10.0];

/// Standard deviations never go below this value.
const MIN_STDDEV: f64 = 1.0;

/// One point of a sweep: the policies' metrics for one mean service time.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub mean: f64,
    pub metrics: Vec<Metrics>,
}

/// Runs the three policies over one fresh workload per mean service time.
///
/// `base` provides the process count and the arrival window; its service
/// parameters are replaced for every row, with the standard deviation set to
/// `stddev_ratio * mean`.
pub fn sweep<R: Rng>(base: &Workload, stddev_ratio: f64, rng: &mut R) -> Result<Vec<Row>> {
    let interval = base.max_arrival as f64 / base.process_count as f64;
    let mut rows = Vec::with_capacity(FACTORS.len());
    for factor in FACTORS {
        let mean = interval * factor;
        let stddev = (mean * stddev_ratio).max(MIN_STDDEV);
        let workload = Workload::new(base.process_count, base.max_arrival, mean, stddev)?;
        info!("sweep: mean {:.2}, stddev {:.2}", mean, stddev);

        let registry = workload.generate(rng)?;
        rows.push(Row {
            mean,
            metrics: compare(&registry)?,
        });
    }
    Ok(rows)
}

/// Renders a sweep as a tab separated table, one column pair per policy.
pub fn format_rows(rows: &[Row]) -> String {
    let mut s = String::from("d");
    if let Some(row) = rows.first() {
        for metrics in &row.metrics {
            s.push_str(&format!("\tATT_{0}\td/ATT_{0}", metrics.policy));
        }
    }
    s.push('\n');
    for row in rows {
        s.push_str(&format!("{:.4}", row.mean));
        for metrics in &row.metrics {
            s.push_str(&format!(
                "\t{:.4}\t{:.4}",
                metrics.average_turnaround,
                metrics.normalized(row.mean)
            ));
        }
        s.push('\n');
    }
    s
}
