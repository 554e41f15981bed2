use std::num::NonZeroUsize;
use std::path::PathBuf;

use scheduler::{Policy, SchedulerError};
use tracing::level_filters::LevelFilter;

/// Replays a workload with a single-processor scheduling policy.
#[derive(clap::Parser, Clone, Debug)]
#[clap(name = "runner")]
#[clap(version)]
pub struct Config {
    /// Print per-job statistics after the trace when set to 1.
    #[arg(value_parser = clap::value_parser!(u8).range(0..=1))]
    pub analysis: u8,

    /// The policy to replay: FIFO, SJF, STCF, RR or LT.
    pub policy: String,

    /// The timeslice used by RR and LT. Other policies ignore it.
    #[arg(allow_negative_numbers = true)]
    pub slice: String,

    /// The workload file, one `arrival,length` pair per line.
    pub trace: PathBuf,

    /// Overrides `RUST_LOG`.
    #[arg(long)]
    pub log_level: Option<LevelFilter>,
}

impl Config {
    pub fn analysis(&self) -> bool {
        self.analysis == 1
    }

    /// The timeslice to hand to `policy`.
    ///
    /// Policies that do not preempt on a timeslice accept any value, numeric or not.
    pub fn timeslice(&self, policy: Policy) -> Result<NonZeroUsize, SchedulerError> {
        if !policy.requires_timeslice() {
            return Ok(NonZeroUsize::MIN);
        }
        self.slice
            .trim()
            .parse::<NonZeroUsize>()
            .map_err(|_| SchedulerError::InvalidTimeslice(self.slice.clone()))
    }
}
