use tracing::debug;

use super::{next_arrival, shortest};
use crate::{Dispatch, JobStore, Scheduler};

/// Preemptive Shortest Time-to-Completion First.
///
/// The simulation advances one time unit at a time. Before every unit the
/// arrived job with the least remaining work is picked, so a shorter arrival
/// preempts the running job. A dispatch is traced once per contiguous run,
/// not once per unit.
pub struct Stcf;

impl Scheduler for Stcf {
    fn name(&self) -> &'static str {
        "STCF"
    }

    fn run(&mut self, jobs: &mut JobStore) -> Vec<Dispatch> {
        // `length` on the duplicate is the remaining work.
        let mut remaining = jobs.duplicate();
        let mut trace = Vec::new();
        let mut segment: Option<Dispatch> = None;
        let mut time = 0;

        while !remaining.is_empty() {
            let Some(id) = shortest(&remaining, time) else {
                time = next_arrival(&remaining, time);
                continue;
            };

            if segment.map(|running| running.job) != Some(id) {
                if let Some(preempted) = segment.take() {
                    debug!(time, job = %preempted.job, "preempted");
                    trace.push(preempted);
                }
                let Some(job) = jobs.get_mut(id) else {
                    break;
                };
                job.dispatch(time);
                segment = Some(Dispatch {
                    time,
                    job: id,
                    arrival: job.arrival,
                    ran_for: 0,
                });
                debug!(time, job = %id, "dispatch");
            }

            let Some(job) = remaining.get_mut(id) else {
                break;
            };
            job.length -= 1;
            let finished = job.length == 0;
            time += 1;

            if let Some(running) = segment.as_mut() {
                running.ran_for += 1;
            }
            if let Some(job) = jobs.get_mut(id) {
                job.has_ran_for += 1;
                if finished {
                    job.complete(time);
                }
            }

            if finished {
                remaining.remove(id);
                trace.extend(segment.take());
            }
        }

        trace
    }
}
