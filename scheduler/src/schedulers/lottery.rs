use std::num::NonZeroUsize;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use super::next_eligible;
use crate::{Dispatch, Job, JobStore, Scheduler};

/// The seed used by [`Lottery::new`].
pub const LOTTERY_SEED: u64 = 42;

/// Ticket-weighted lottery scheduling with a fixed timeslice.
///
/// Every run starts from a clone of the generator given at construction,
/// so the same workload always produces the same trace.
pub struct Lottery<R> {
    timeslice: NonZeroUsize,
    rng: R,
}

impl Lottery<ChaCha8Rng> {
    pub fn new(timeslice: NonZeroUsize) -> Self {
        Lottery::with_rng(timeslice, ChaCha8Rng::seed_from_u64(LOTTERY_SEED))
    }
}

impl<R: Rng + Clone> Lottery<R> {
    pub fn with_rng(timeslice: NonZeroUsize, rng: R) -> Self {
        Lottery { timeslice, rng }
    }
}

impl<R: Rng + Clone> Scheduler for Lottery<R> {
    fn name(&self) -> &'static str {
        "LT"
    }

    fn run(&mut self, jobs: &mut JobStore) -> Vec<Dispatch> {
        let mut rng = self.rng.clone();
        let mut total_tickets = jobs.total_tickets();
        let jobs = jobs.as_mut_slice();
        let mut outstanding = jobs.iter().filter(|job| job.remaining() > 0).count();
        let mut trace = Vec::new();
        let mut time = 0;

        while outstanding > 0 {
            if total_tickets == 0 {
                warn!(outstanding, "no tickets left for the remaining jobs");
                break;
            }
            let winner = rng.gen_range(1..=total_tickets);
            let Some(candidate) = draw(jobs, winner) else {
                break;
            };

            let index = if jobs[candidate].has_arrived(time) {
                Some(candidate)
            } else {
                next_eligible(jobs, candidate + 1, time)
            };
            let Some(index) = index else {
                time += 1;
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
            debug!(time, winner, job = %job.id, ran_for, "dispatch");

            time += ran_for;
            job.has_ran_for += ran_for;
            if job.remaining() == 0 {
                job.complete(time);
                total_tickets -= job.tickets;
                job.tickets = 0;
                outstanding -= 1;
            }
        }

        trace
    }
}

/// Walks the jobs in order, accumulating tickets, and returns the index of
/// the job at which the running sum reaches `winner`.
fn draw(jobs: &[Job], winner: usize) -> Option<usize> {
    let mut counter = 0;
    jobs.iter().position(|job| {
        counter += job.tickets;
        counter >= winner
    })
}
