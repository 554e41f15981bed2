use std::fmt::{self, Display};
use std::str::FromStr;

use crate::JobStore;

/// The identifier of a job.
///
/// Identifiers start from 0 and follow the order in which jobs
/// appear in the workload.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct JobId(usize);

impl JobId {
    pub fn new(id: usize) -> JobId {
        JobId(id)
    }

    /// The position of the job inside its [`JobStore`].
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A dispatch event: the CPU started running `job` at `time`
/// and kept running it for `ran_for` time units.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// The simulated time of the dispatch.
    pub time: usize,

    /// The dispatched job.
    pub job: JobId,

    /// The arrival time of the dispatched job.
    pub arrival: usize,

    /// The number of time units the job ran before it
    /// completed or was preempted.
    pub ran_for: usize,
}

impl Display for Dispatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "t={}: [Job {}] arrived at [{}], ran for: [{}]",
            self.time, self.job, self.arrival, self.ran_for
        )
    }
}

/// The trait that any scheduling policy has to implement.
pub trait Scheduler {
    /// The name of the policy, as it appears in the trace.
    fn name(&self) -> &'static str;

    /// Replays the workload and returns the dispatch events in time order.
    ///
    /// The timing fields of every job in `jobs` are filled in by the run.
    /// Callers are expected to hand in a store whose timing fields are reset
    /// (see [`JobStore::reset_timings`]).
    fn run(&mut self, jobs: &mut JobStore) -> Vec<Dispatch>;
}

/// The scheduling policies that the simulator knows about.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Policy {
    /// First-In-First-Out, in workload order.
    Fifo,
    /// Shortest Job First, non-preemptive.
    Sjf,
    /// Shortest Time-to-Completion First, preemptive at every time unit.
    Stcf,
    /// Round-Robin with a fixed timeslice.
    RoundRobin,
    /// Lottery scheduling with a fixed timeslice.
    Lottery,
}

impl Policy {
    /// Whether the policy needs a timeslice to run.
    pub fn requires_timeslice(self) -> bool {
        matches!(self, Policy::RoundRobin | Policy::Lottery)
    }
}

impl Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Policy::Fifo => write!(f, "FIFO"),
            Policy::Sjf => write!(f, "SJF"),
            Policy::Stcf => write!(f, "STCF"),
            Policy::RoundRobin => write!(f, "RR"),
            Policy::Lottery => write!(f, "LT"),
        }
    }
}

/// Returned when a policy name is not one of `FIFO`, `SJF`, `STCF`, `RR` or `LT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPolicy(pub String);

impl Display for UnknownPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown policy {}", self.0)
    }
}

impl FromStr for Policy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FIFO" => Ok(Policy::Fifo),
            "SJF" => Ok(Policy::Sjf),
            "STCF" => Ok(Policy::Stcf),
            "RR" => Ok(Policy::RoundRobin),
            "LT" => Ok(Policy::Lottery),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}
