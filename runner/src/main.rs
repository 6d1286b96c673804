use std::io::Write;
use std::process;

use env_logger::Builder;
use log::error;
use rand::rngs::StdRng;
use rand::SeedableRng;

use processor::{compare, format_logs, Processor, Result};

mod config;
mod sweep;

use config::{app, Config, Mode};

fn main() {
    Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let matches = app().get_matches();
    if let Err(err) = Config::from_matches(&matches).and_then(|config| execute(&config)) {
        error!("error: {}", err);
        process::exit(1);
    }
}

fn execute(config: &Config) -> Result<()> {
    let seed = config.seed.unwrap_or_else(rand::random);
    println!("Seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    match config.mode {
        Mode::Compare => {
            let workload = &config.workload;
            println!(
                "Processes {}\nMax arrival {}\nService mean {}\nService stddev {}\n",
                workload.process_count,
                workload.max_arrival,
                workload.service_mean,
                workload.service_stddev
            );
            let registry = workload.generate(&mut rng)?;
            for metrics in compare(&registry)? {
                println!("{}", metrics);
            }
        }
        Mode::Trace(algorithm) => {
            let registry = config.workload.generate(&mut rng)?;
            let simulation = Processor::run(algorithm.scheduler(), &registry)?;
            print!("{}", format_logs(&simulation.logs));
            println!("{}", simulation.metrics()?);
        }
        Mode::Sweep { stddev_ratio } => {
            let rows = sweep::sweep(&config.workload, stddev_ratio, &mut rng)?;
            print!("{}", sweep::format_rows(&rows));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
