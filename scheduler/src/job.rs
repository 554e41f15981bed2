use std::slice;

use crate::JobId;

/// The number of lottery tickets handed to each job, scaled by its position.
pub const TICKETS_PER_RANK: usize = 100;

/// A single workload entry and the timings a policy run produced for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Position of the job in the workload, starting from 0.
    pub id: JobId,

    /// The time at which the job becomes eligible to run.
    pub arrival: usize,

    /// The total CPU time the job needs. Preemptive policies that work on a
    /// duplicate store use it as the remaining time.
    pub length: usize,

    /// The lottery weight of the job.
    pub tickets: usize,

    /// CPU time consumed so far.
    pub has_ran_for: usize,

    /// Delay between arrival and first dispatch.
    pub response_time: Option<usize>,

    /// The time at which the job finished.
    pub completion_time: Option<usize>,

    /// Delay between arrival and completion.
    pub turnaround_time: Option<usize>,

    /// Turnaround time minus the total length of the job.
    pub wait_time: Option<usize>,
}

impl Job {
    pub fn new(id: JobId, arrival: usize, length: usize, tickets: usize) -> Self {
        Job {
            id,
            arrival,
            length,
            tickets,
            has_ran_for: 0,
            response_time: None,
            completion_time: None,
            turnaround_time: None,
            wait_time: None,
        }
    }

    /// Work left, measured against `length`.
    pub fn remaining(&self) -> usize {
        self.length - self.has_ran_for
    }

    pub fn has_arrived(&self, time: usize) -> bool {
        self.arrival <= time
    }

    pub fn is_complete(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Records a dispatch at `time`. Only the first dispatch sets the response time.
    pub fn dispatch(&mut self, time: usize) {
        if self.response_time.is_none() {
            self.response_time = Some(time - self.arrival);
        }
    }

    /// Finalizes the completion-derived timings.
    ///
    /// `length` must still hold the original length of the job.
    pub fn complete(&mut self, time: usize) {
        let turnaround = time - self.arrival;
        self.completion_time = Some(time);
        self.turnaround_time = Some(turnaround);
        self.wait_time = Some(turnaround - self.length);
    }

    /// Copies the timings computed on a duplicate into this job.
    pub fn copy_timings(&mut self, other: &Job) {
        self.response_time = other.response_time;
        self.completion_time = other.completion_time;
        self.turnaround_time = other.turnaround_time;
        self.wait_time = other.wait_time;
    }

    fn reset(&mut self, tickets: usize) {
        self.tickets = tickets;
        self.has_ran_for = 0;
        self.response_time = None;
        self.completion_time = None;
        self.turnaround_time = None;
        self.wait_time = None;
    }
}

/// The ordered collection of jobs that forms a workload.
///
/// Job `k` always sits at index `k`, so a [`JobId`] doubles as an index into
/// the canonical store. Duplicates may drop jobs, so they must be searched by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobStore {
    jobs: Vec<Job>,
}

impl JobStore {
    pub fn new() -> Self {
        JobStore { jobs: Vec::new() }
    }

    /// Appends a job, assigning the next id and `100 * (position + 1)` tickets.
    pub fn push(&mut self, arrival: usize, length: usize) -> JobId {
        let id = JobId::new(self.jobs.len());
        self.jobs.push(Job::new(id, arrival, length, tickets_for(id)));
        id
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Job> {
        self.jobs.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Job> {
        self.jobs.iter_mut()
    }

    pub fn as_slice(&self) -> &[Job] {
        &self.jobs
    }

    pub fn as_mut_slice(&mut self) -> &mut [Job] {
        &mut self.jobs
    }

    pub fn get(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    pub fn get_mut(&mut self, id: JobId) -> Option<&mut Job> {
        self.jobs.iter_mut().find(|job| job.id == id)
    }

    /// Returns an independent deep copy that a policy can consume.
    pub fn duplicate(&self) -> JobStore {
        self.clone()
    }

    /// Removes and returns the job with the given id.
    pub fn remove(&mut self, id: JobId) -> Option<Job> {
        let position = self.jobs.iter().position(|job| job.id == id)?;
        Some(self.jobs.remove(position))
    }

    /// Clears every timing field and restores the load-time tickets,
    /// so that another policy run can start from scratch.
    pub fn reset_timings(&mut self) {
        for job in self.jobs.iter_mut() {
            let tickets = tickets_for(job.id);
            job.reset(tickets);
        }
    }

    /// The sum of the tickets held by all jobs.
    pub fn total_tickets(&self) -> usize {
        self.jobs.iter().map(|job| job.tickets).sum()
    }

    /// Copies the timings of `other` into the job with the same id.
    pub fn reconcile(&mut self, other: &Job) {
        if let Some(job) = self.get_mut(other.id) {
            job.copy_timings(other);
        }
    }
}

impl<'a> IntoIterator for &'a JobStore {
    type Item = &'a Job;
    type IntoIter = slice::Iter<'a, Job>;

    fn into_iter(self) -> Self::IntoIter {
        self.jobs.iter()
    }
}

fn tickets_for(id: JobId) -> usize {
    TICKETS_PER_RANK * (id.index() + 1)
}
