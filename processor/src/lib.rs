//! A processor simulation library
//!
//! This is used for replaying a workload with the policies from the [`scheduler`] crate
//! and for reporting the resulting per-job statistics.

use std::fmt::{self, Display};

use scheduler::{Dispatch, JobId, JobStore, Scheduler, SchedulerError};
use tracing::info;

/// The execution trace of one policy run.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    /// The name of the policy that produced the trace.
    pub policy: &'static str,

    /// The dispatch events, in time order.
    pub dispatches: Vec<Dispatch>,
}

impl Trace {
    /// The time at which the last dispatched job stopped running.
    pub fn end_time(&self) -> usize {
        self.dispatches
            .iter()
            .map(|dispatch| dispatch.time + dispatch.ran_for)
            .max()
            .unwrap_or(0)
    }
}

impl Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Execution trace with {}:", self.policy)?;
        for dispatch in &self.dispatches {
            writeln!(f, "{}", dispatch)?;
        }
        writeln!(f, "End of execution with {}.", self.policy)
    }
}

/// The processor simulator.
pub struct Processor;

impl Processor {
    /// Replays the workload in `jobs` with `scheduler`.
    ///
    /// The timing fields of `jobs` are reset before the run, so the same store
    /// can be replayed with several policies one after the other.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use processor::Processor;
    /// use scheduler::workload;
    ///
    /// let mut jobs = workload::parse("0,5\n1,3\n2,1\n");
    /// let trace = Processor::run(&mut scheduler::fifo(), &mut jobs);
    ///
    /// assert_eq!(trace.dispatches.len(), 3);
    /// println!("{}", trace);
    /// ```
    pub fn run<S: Scheduler + ?Sized>(scheduler: &mut S, jobs: &mut JobStore) -> Trace {
        let policy = scheduler.name();
        info!(policy, jobs = jobs.len(), "starting run");

        jobs.reset_timings();
        let dispatches = scheduler.run(jobs);
        let trace = Trace { policy, dispatches };
        check(&trace, jobs);

        info!(policy, end = trace.end_time(), dispatches = trace.dispatches.len(), "run finished");
        trace
    }
}

/// Invariants every policy has to uphold once a run is over.
fn check(trace: &Trace, jobs: &JobStore) {
    let ran: usize = trace.dispatches.iter().map(|dispatch| dispatch.ran_for).sum();
    let required: usize = jobs.iter().map(|job| job.length).sum();
    debug_assert_eq!(ran, required, "{} ran for {ran} units, the workload needs {required}", trace.policy);

    for window in trace.dispatches.windows(2) {
        debug_assert!(
            window[0].time + window[0].ran_for <= window[1].time,
            "{}: overlapping dispatches {} and {}",
            trace.policy,
            window[0],
            window[1]
        );
    }

    for job in jobs {
        debug_assert!(job.is_complete(), "{}: job {} never completed", trace.policy, job.id);
    }
}

/// The statistics of a single job.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct JobStatistics {
    pub id: JobId,
    pub response_time: usize,
    pub turnaround_time: usize,
    pub wait_time: usize,
}

impl Display for JobStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Job {} -- Response time: {} Turnaround: {} Wait: {}",
            self.id, self.response_time, self.turnaround_time, self.wait_time
        )
    }
}

/// Mean values across all jobs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Averages {
    pub response_time: f64,
    pub turnaround_time: f64,
    pub wait_time: f64,
}

/// Per-job and average statistics of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub jobs: Vec<JobStatistics>,

    /// [`None`] for an empty workload.
    pub averages: Option<Averages>,
}

impl Statistics {
    /// Reads the timings a policy run left in `jobs`.
    pub fn collect(jobs: &JobStore) -> Result<Statistics, SchedulerError> {
        let stats = jobs
            .iter()
            .map(|job| {
                match (job.response_time, job.turnaround_time, job.wait_time) {
                    (Some(response_time), Some(turnaround_time), Some(wait_time)) => {
                        Ok(JobStatistics {
                            id: job.id,
                            response_time,
                            turnaround_time,
                            wait_time,
                        })
                    }
                    _ => Err(SchedulerError::Unfinished(job.id)),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let averages = (!stats.is_empty()).then(|| {
            let count = stats.len() as f64;
            let mean = |metric: fn(&JobStatistics) -> usize| {
                stats.iter().map(metric).sum::<usize>() as f64 / count
            };
            Averages {
                response_time: mean(|job| job.response_time),
                turnaround_time: mean(|job| job.turnaround_time),
                wait_time: mean(|job| job.wait_time),
            }
        });

        Ok(Statistics {
            jobs: stats,
            averages,
        })
    }
}

impl Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for job in &self.jobs {
            writeln!(f, "{}", job)?;
        }
        match self.averages {
            Some(averages) => writeln!(
                f,
                "Average -- Response: {:.2} Turnaround: {:.2} Wait: {:.2}",
                averages.response_time, averages.turnaround_time, averages.wait_time
            ),
            None => writeln!(f, "Average -- no jobs"),
        }
    }
}

/// Format a [`Trace`], optionally followed by its [`Statistics`], to a [`String`].
///
/// ## Example
///
/// ```rust
/// use processor::{format_run, Processor, Statistics};
/// use scheduler::workload;
///
/// let mut jobs = workload::parse("0,5\n1,3\n2,1\n");
/// let trace = Processor::run(&mut scheduler::sjf(), &mut jobs);
/// let statistics = Statistics::collect(&jobs).unwrap();
///
/// println!("{}", format_run(&trace, Some(&statistics)));
/// ```
pub fn format_run(trace: &Trace, statistics: Option<&Statistics>) -> String {
    let mut s = String::new();
    // writing into a String cannot fail
    let _ = fmt::write(&mut s, format_args!("{}", trace));
    if let Some(statistics) = statistics {
        let _ = fmt::write(&mut s, format_args!("{}", statistics));
    }
    s
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use scheduler::workload;

    use super::*;

    #[test]
    fn trace_has_sentinels() {
        let mut jobs = workload::parse("0,5\n1,3\n2,1\n");
        let trace = Processor::run(&mut scheduler::fifo(), &mut jobs);

        assert_eq!(
            trace.to_string(),
            "Execution trace with FIFO:\n\
             t=0: [Job 0] arrived at [0], ran for: [5]\n\
             t=5: [Job 1] arrived at [1], ran for: [3]\n\
             t=8: [Job 2] arrived at [2], ran for: [1]\n\
             End of execution with FIFO.\n"
        );
        assert_eq!(trace.end_time(), 9);
    }

    #[test]
    fn statistics_lines_and_averages() {
        let mut jobs = workload::parse("0,5\n1,3\n2,1\n");
        Processor::run(&mut scheduler::fifo(), &mut jobs);
        let statistics = Statistics::collect(&jobs).unwrap();

        assert_eq!(
            statistics.to_string(),
            "Job 0 -- Response time: 0 Turnaround: 5 Wait: 0\n\
             Job 1 -- Response time: 4 Turnaround: 7 Wait: 4\n\
             Job 2 -- Response time: 6 Turnaround: 7 Wait: 6\n\
             Average -- Response: 3.33 Turnaround: 6.33 Wait: 3.33\n"
        );
    }

    #[test]
    fn empty_workload_is_guarded() {
        let mut jobs = JobStore::new();
        let trace = Processor::run(&mut scheduler::stcf(), &mut jobs);
        let statistics = Statistics::collect(&jobs).unwrap();

        assert_eq!(
            format_run(&trace, Some(&statistics)),
            "Execution trace with STCF:\nEnd of execution with STCF.\nAverage -- no jobs\n"
        );
        assert!(statistics.averages.is_none());
    }

    #[test]
    fn unfinished_jobs_are_reported() {
        let jobs = workload::parse("0,1\n");
        let error = Statistics::collect(&jobs).unwrap_err();
        assert!(matches!(error, SchedulerError::Unfinished(id) if id == JobId::new(0)));
    }

    #[test]
    fn replaying_resets_previous_timings() {
        let mut jobs = workload::parse("0,4\n0,1\n");
        let timeslice = NonZeroUsize::new(1).unwrap();

        Processor::run(&mut scheduler::lottery(timeslice), &mut jobs);
        let trace = Processor::run(&mut scheduler::fifo(), &mut jobs);
        let statistics = Statistics::collect(&jobs).unwrap();

        assert_eq!(trace.dispatches.len(), 2);
        assert_eq!(statistics.jobs[1].response_time, 4);
        assert_eq!(jobs.total_tickets(), 300);
    }
}
