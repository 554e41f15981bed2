use std::env;
use std::fs;
use std::num::NonZeroUsize;

use processor::{format_run, Processor, Statistics, Trace};
use scheduler::{workload, JobStore, Policy};

mod round_robin;
mod sjf;

fn output_path(folder: &str, name: &str, timeslice: Option<usize>) -> String {
    match timeslice {
        Some(timeslice) => format!("../outputs/{folder}/{name}___{timeslice}.log"),
        None => format!("../outputs/{folder}/{name}.log"),
    }
}

fn write_output(folder: &str, name: &str, timeslice: Option<usize>, output: &str) {
    fs::create_dir_all(format!("../outputs/{folder}")).unwrap();
    fs::write(output_path(folder, name, timeslice), output).unwrap();
}

fn read_output(folder: &str, name: &str, timeslice: Option<usize>) -> String {
    fs::read_to_string(output_path(folder, name, timeslice)).unwrap()
}

fn load(name: &str) -> JobStore {
    workload::load(format!("../workloads/{name}.txt")).unwrap()
}

/// Replays the workload `name` and returns the trace and the statistics it left behind.
fn replay(policy: Policy, timeslice: usize, name: &str) -> (Trace, Statistics, JobStore) {
    let mut jobs = load(name);
    let mut scheduler = scheduler::for_policy(policy, NonZeroUsize::new(timeslice).unwrap());
    let trace = Processor::run(scheduler.as_mut(), &mut jobs);
    let statistics = Statistics::collect(&jobs).unwrap();
    (trace, statistics, jobs)
}

/// Compares the full output of a run against the reference in `outputs/`.
///
/// Set `WRITE_OUTPUT` to regenerate the references.
fn run(folder: &str, name: &str, policy: Policy, timeslice: Option<usize>) {
    let (trace, statistics, _) = replay(policy, timeslice.unwrap_or(1), name);
    let output = format_run(&trace, Some(&statistics));

    if env::var("WRITE_OUTPUT").is_ok() {
        write_output(folder, name, timeslice, &output);
    } else {
        let reference = read_output(folder, name, timeslice);

        println!("\nleft = Correct Output\nright = Your Output\n");
        use pretty_assertions::assert_eq;
        assert_eq!(reference, output);
    }
}

/// Every workload under `workloads/`.
const WORKLOADS: [&str; 5] = ["three_jobs", "late_start", "idle_gap", "single", "empty"];

/// Every policy together with the timeslices it is replayed with.
const POLICIES: [(Policy, usize); 7] = [
    (Policy::Fifo, 1),
    (Policy::Sjf, 1),
    (Policy::Stcf, 1),
    (Policy::RoundRobin, 1),
    (Policy::RoundRobin, 3),
    (Policy::Lottery, 1),
    (Policy::Lottery, 4),
];
