use std::fmt::Display;
use std::str::FromStr;

use clap::{App, Arg, ArgMatches};
use processor::{Error, Result, Workload};
use scheduler::Algorithm;

/// What the binary should do once the workload is known.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Compare the three policies on one workload.
    Compare,

    /// Print the decision log of a single policy.
    Trace(Algorithm),

    /// Compare the policies over a range of mean service times.
    Sweep { stddev_ratio: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub workload: Workload,
    pub seed: Option<u64>,
    pub mode: Mode,
}

pub fn app() -> App<'static, 'static> {
    App::new("batch-sim")
        .version("0.1.0")
        .about("Compares FIFO, SJF and SRT batch scheduling on a synthetic workload")
        .arg(Arg::with_name("processes")
            .short("n")
            .long("processes")
            .takes_value(true)
            .default_value("50")
            .help("Number of processes"))
        .arg(Arg::with_name("max-arrival")
            .short("k")
            .long("max-arrival")
            .takes_value(true)
            .help("Latest arrival time [default: 1000, 200 with --sweep]"))
        .arg(Arg::with_name("mean")
            .short("d")
            .long("mean")
            .takes_value(true)
            .default_value("20")
            .help("Mean service time"))
        .arg(Arg::with_name("stddev")
            .short("v")
            .long("stddev")
            .takes_value(true)
            .default_value("5")
            .help("Standard deviation of the service time"))
        .arg(Arg::with_name("seed")
            .long("seed")
            .takes_value(true)
            .help("Random seed, a fresh one is drawn and printed when missing"))
        .arg(Arg::with_name("trace")
            .long("trace")
            .takes_value(true)
            .value_name("POLICY")
            .conflicts_with("sweep")
            .help("Print the decision log of one policy (fifo, sjf or srt)"))
        .arg(Arg::with_name("sweep")
            .long("sweep")
            .help("Sweep the mean service time over multiples of max-arrival/processes"))
        .arg(Arg::with_name("stddev-ratio")
            .long("stddev-ratio")
            .takes_value(true)
            .requires("sweep")
            .help("Standard deviation as a fraction of the mean, used by --sweep [default: 0.3]"))
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Result<Config> {
        let sweep = matches.is_present("sweep");
        let default_arrival = if sweep { 200 } else { 1000 };

        let workload = Workload::new(
            parse(matches, "processes")?.unwrap_or(50),
            parse(matches, "max-arrival")?.unwrap_or(default_arrival),
            parse(matches, "mean")?.unwrap_or(20.0),
            parse(matches, "stddev")?.unwrap_or(5.0),
        )?;

        let mode = if sweep {
            let stddev_ratio: f64 = parse(matches, "stddev-ratio")?.unwrap_or(0.3);
            if !stddev_ratio.is_finite() || stddev_ratio < 0.0 {
                return Err(Error::InvalidConfig {
                    parameter: "stddev-ratio",
                    reason: format!("must be a non-negative number, got {}", stddev_ratio),
                });
            }
            Mode::Sweep { stddev_ratio }
        } else if let Some(policy) = parse::<Algorithm>(matches, "trace")? {
            Mode::Trace(policy)
        } else {
            Mode::Compare
        };

        Ok(Config {
            workload,
            seed: parse(matches, "seed")?,
            mode,
        })
    }
}

fn parse<T>(matches: &ArgMatches, name: &'static str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    matches
        .value_of(name)
        .map(|value| {
            value.parse::<T>().map_err(|err| Error::InvalidConfig {
                parameter: name,
                reason: format!("`{}`: {}", value, err),
            })
        })
        .transpose()
}
