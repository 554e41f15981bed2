//! The scheduling policies.
//!
//! Every policy implements [`Scheduler`](crate::Scheduler) and is built
//! through the constructors at the crate root.

mod fifo;
pub use fifo::Fifo;

mod sjf;
pub use sjf::Sjf;

mod stcf;
pub use stcf::Stcf;

mod round_robin;
pub use round_robin::RoundRobin;

mod lottery;
pub use lottery::{Lottery, LOTTERY_SEED};

use crate::{Job, JobId, JobStore};

/// The arrived job with the smallest `length`, ties broken by arrival and then id.
fn shortest(jobs: &JobStore, time: usize) -> Option<JobId> {
    jobs.iter()
        .filter(|job| job.has_arrived(time))
        .min_by_key(|job| (job.length, job.arrival, job.id))
        .map(|job| job.id)
}

/// The earliest arrival among the jobs that arrive after `time`.
fn next_arrival(jobs: &JobStore, time: usize) -> usize {
    jobs.iter()
        .map(|job| job.arrival)
        .filter(|&arrival| arrival > time)
        .min()
        .unwrap_or(time + 1)
}

/// Circular search for a job that has arrived and still has work,
/// starting at `start` and wrapping around.
fn next_eligible(jobs: &[Job], start: usize, time: usize) -> Option<usize> {
    let count = jobs.len();
    (0..count)
        .map(|offset| (start + offset) % count)
        .find(|&index| jobs[index].has_arrived(time) && jobs[index].remaining() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload;

    #[test]
    fn circular_search_includes_the_start_slot() {
        let jobs = workload::parse("0,1\n3,1\n3,1\n");
        let jobs = jobs.as_slice();

        assert_eq!(next_eligible(jobs, 0, 0), Some(0));
        assert_eq!(next_eligible(jobs, 2, 3), Some(2));
        // jobs 1 and 2 have not arrived, so the search wraps to job 0
        assert_eq!(next_eligible(jobs, 1, 0), Some(0));
        assert_eq!(next_eligible(&jobs[1..], 0, 0), None);
    }
}
