use scheduler::Algorithm;

use std::env;
use std::fs;

use processor::format_logs;
use processor::{Processor, Registry, Simulation};

mod idle;

fn folder_of(algorithm: Algorithm) -> String {
    algorithm.to_string().to_lowercase()
}

fn write_logs(algorithm: Algorithm, folder: &str, name: &str, logs: &str) {
    let policy = folder_of(algorithm);
    fs::create_dir_all(format!("../outputs/{policy}/{folder}")).unwrap();
    fs::write(format!("../outputs/{policy}/{folder}/{name}.log"), logs).unwrap();
}

fn read_logs(algorithm: Algorithm, folder: &str, name: &str) -> String {
    let policy = folder_of(algorithm);
    fs::read_to_string(format!("../outputs/{policy}/{folder}/{name}.log")).unwrap()
}

fn simulate(algorithm: Algorithm, bursts: &[(usize, usize)]) -> Simulation {
    let registry = Registry::from_bursts(bursts).unwrap();
    Processor::run(algorithm.scheduler(), &registry).unwrap()
}

/// Runs `bursts` under every policy and compares the formatted logs with the
/// reference output of `folder/name`. Set `WRITE_OUTPUT` to regenerate them.
fn run(folder: &str, name: &str, bursts: &[(usize, usize)]) {
    for algorithm in Algorithm::ALL {
        let simulation = simulate(algorithm, bursts);
        let output = format!(
            "{}{}\n",
            format_logs(&simulation.logs),
            simulation.metrics().unwrap()
        );

        if env::var("WRITE_OUTPUT").is_ok() {
            write_logs(algorithm, folder, name, &output);
        } else {
            let reference = read_logs(algorithm, folder, name);

            println!("\n{algorithm}\nleft = Correct Output\nright = Your Output\n");
            use pretty_assertions::assert_eq;
            assert_eq!(reference, output);
        }
    }
}
