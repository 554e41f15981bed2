use tracing::debug;

use super::{next_arrival, shortest};
use crate::{Dispatch, JobStore, Scheduler};

/// Non-preemptive Shortest Job First.
///
/// Among the jobs that have arrived, the shortest one runs to completion.
/// Ties go to the earliest arrival, then to the lowest id.
pub struct Sjf;

impl Scheduler for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn run(&mut self, jobs: &mut JobStore) -> Vec<Dispatch> {
        let mut pending = jobs.duplicate();
        let mut trace = Vec::with_capacity(jobs.len());
        let mut time = 0;

        while !pending.is_empty() {
            let Some(id) = shortest(&pending, time) else {
                // nothing has arrived yet
                time = next_arrival(&pending, time);
                continue;
            };
            let Some(mut job) = pending.remove(id) else {
                break;
            };

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
            jobs.reconcile(&job);
        }

        trace
    }
}
