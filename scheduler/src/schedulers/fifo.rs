use tracing::debug;

use crate::{Dispatch, JobStore, Scheduler};

/// Runs the jobs to completion in workload order.
///
/// Workload order is the admission queue, so jobs are not sorted by arrival.
pub struct Fifo;

impl Scheduler for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn run(&mut self, jobs: &mut JobStore) -> Vec<Dispatch> {
        let mut trace = Vec::with_capacity(jobs.len());
        let mut time = 0;

        for job in jobs.iter_mut() {
            // idle until the job arrives
            time = time.max(job.arrival);

            job.dispatch(time);
            trace.push(Dispatch {
                time,
                job: job.id,
                arrival: job.arrival,
                ran_for: job.length,
            });
            debug!(time, job = %job.id, ran_for = job.length, "dispatch");

            time += job.length;
            job.has_ran_for = job.length;
            job.complete(time);
        }

        trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{workload, JobId};

    #[test]
    fn runs_in_workload_order() {
        let mut jobs = workload::parse("0,5\n1,3\n2,1\n");
        let trace = Fifo.run(&mut jobs);

        let times: Vec<_> = trace.iter().map(|d| (d.time, d.job.index(), d.ran_for)).collect();
        assert_eq!(times, vec![(0, 0, 5), (5, 1, 3), (8, 2, 1)]);

        let stats: Vec<_> = jobs
            .iter()
            .map(|job| (job.response_time, job.turnaround_time, job.wait_time))
            .collect();
        assert_eq!(
            stats,
            vec![
                (Some(0), Some(5), Some(0)),
                (Some(4), Some(7), Some(4)),
                (Some(6), Some(7), Some(6)),
            ]
        );
    }

    #[test]
    fn later_arrival_listed_first_still_runs_first() {
        let mut jobs = workload::parse("4,2\n0,1\n");
        let trace = Fifo.run(&mut jobs);

        assert_eq!(trace[0].time, 4);
        assert_eq!(trace[1].time, 6);
        assert_eq!(jobs.get(JobId::new(1)).unwrap().response_time, Some(6));
    }
}
