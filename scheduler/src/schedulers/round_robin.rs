use std::num::NonZeroUsize;

use tracing::debug;

use super::next_eligible;
use crate::{Dispatch, JobStore, Scheduler};

/// Round-Robin over the workload order with a fixed timeslice.
///
/// Every visit moves the pointer one slot past the visited job. If the job under
/// the pointer cannot run, the next eligible job in circular order runs instead.
/// When no job can run, the CPU idles for one time unit; that visit still moves
/// the pointer.
pub struct RoundRobin {
    timeslice: NonZeroUsize,
}

impl RoundRobin {
    pub fn new(timeslice: NonZeroUsize) -> Self {
        RoundRobin { timeslice }
    }
}

impl Scheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn run(&mut self, jobs: &mut JobStore) -> Vec<Dispatch> {
        let jobs = jobs.as_mut_slice();
        let count = jobs.len();
        let mut outstanding = jobs.iter().filter(|job| job.remaining() > 0).count();
        let mut trace = Vec::new();
        let mut pointer = 0;
        let mut time = 0;

        while outstanding > 0 {
            let Some(index) = next_eligible(jobs, pointer, time) else {
                // idle
                time += 1;
                pointer = (pointer + 1) % count;
                continue;
            };

            let job = &mut jobs[index];
            let ran_for = job.remaining().min(self.timeslice.get());
            job.dispatch(time);
            trace.push(Dispatch {
                time,
                job: job.id,
                arrival: job.arrival,
                ran_for,
            });
            debug!(time, job = %job.id, ran_for, "dispatch");

            time += ran_for;
            job.has_ran_for += ran_for;
            if job.remaining() == 0 {
                job.complete(time);
                outstanding -= 1;
            }

            pointer = (index + 1) % count;
        }

        trace
    }
}
