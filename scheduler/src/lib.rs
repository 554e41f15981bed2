//! A scheduling policy library.
//!
//! This library provides the job model, the workload loader and
//! five single-processor scheduling policies that replay a workload
//! and fill in the per-job timings.
//!

use std::num::NonZeroUsize;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

mod error;
mod job;
mod scheduler;
pub mod workload;

use schedulers::{Fifo, Lottery, RoundRobin, Sjf, Stcf};

pub use crate::error::SchedulerError;
pub use crate::job::{Job, JobStore, TICKETS_PER_RANK};
pub use crate::scheduler::{Dispatch, JobId, Policy, Scheduler, UnknownPolicy};
pub use crate::schedulers::LOTTERY_SEED;

pub mod schedulers;

/// Returns a structure that implements the `Scheduler` trait with a first-in-first-out policy.
pub fn fifo() -> impl Scheduler {
    Fifo
}

/// Returns a structure that implements the `Scheduler` trait with a
/// non-preemptive shortest job first policy.
pub fn sjf() -> impl Scheduler {
    Sjf
}

/// Returns a structure that implements the `Scheduler` trait with a
/// shortest time-to-completion first policy.
pub fn stcf() -> impl Scheduler {
    Stcf
}

/// Returns a structure that implements the `Scheduler` trait with a round robin scheduler policy
///
/// * `timeslice` - the time quanta that a job can run before it is preempted
pub fn round_robin(timeslice: NonZeroUsize) -> impl Scheduler {
    RoundRobin::new(timeslice)
}

/// Returns a structure that implements the `Scheduler` trait with a lottery scheduler policy
/// whose generator is seeded with [`LOTTERY_SEED`].
///
/// * `timeslice` - the time quanta that a job can run once it wins the lottery
pub fn lottery(timeslice: NonZeroUsize) -> impl Scheduler {
    Lottery::<ChaCha8Rng>::new(timeslice)
}

/// Same as [`lottery`], drawing tickets from `rng`.
///
/// Each run starts from a clone of `rng`, so runs stay reproducible.
pub fn lottery_with_rng<R: Rng + Clone>(timeslice: NonZeroUsize, rng: R) -> impl Scheduler {
    Lottery::with_rng(timeslice, rng)
}

/// Builds the scheduler for `policy`.
///
/// `timeslice` is only used by [`Policy::RoundRobin`] and [`Policy::Lottery`].
pub fn for_policy(policy: Policy, timeslice: NonZeroUsize) -> Box<dyn Scheduler> {
    match policy {
        Policy::Fifo => Box::new(fifo()),
        Policy::Sjf => Box::new(sjf()),
        Policy::Stcf => Box::new(stcf()),
        Policy::RoundRobin => Box::new(round_robin(timeslice)),
        Policy::Lottery => Box::new(lottery(timeslice)),
    }
}
