//! Derived reads over the job and contact collections. All pure.

use std::collections::BTreeMap;

use crate::{Contact, DashboardStats, Job, JobStatus};

/// Jobs whose status matches, or every job when `status` is `None`.
pub fn filter_by_status(jobs: &[Job], status: Option<JobStatus>) -> Vec<Job> {
    match status {
        None => jobs.to_vec(),
        Some(status) => jobs.iter().filter(|j| j.status == status).cloned().collect(),
    }
}

/// Count per status. Every status is present, zero when unused.
pub fn totals_by_status(jobs: &[Job]) -> BTreeMap<JobStatus, usize> {
    let mut totals: BTreeMap<JobStatus, usize> = JobStatus::ALL.iter().map(|s| (*s, 0)).collect();
    for job in jobs {
        *totals.entry(job.status).or_insert(0) += 1;
    }
    totals
}

/// Percentage of jobs that got any answer, rounded half up. 0 for no jobs.
pub fn response_rate(jobs: &[Job]) -> u32 {
    let total = jobs.len();
    if total == 0 {
        return 0;
    }
    let responded = jobs.iter().filter(|j| j.status.is_response()).count();
    ((200 * responded + total) / (2 * total)) as u32
}

pub fn dashboard_stats(jobs: &[Job]) -> DashboardStats {
    let totals = totals_by_status(jobs);
    let count = |s: JobStatus| totals.get(&s).copied().unwrap_or(0);
    DashboardStats {
        total_applications: jobs.len(),
        active_applications: jobs.iter().filter(|j| j.status.is_active()).count(),
        interviews: count(JobStatus::Interviewing),
        offers: count(JobStatus::Offer),
        rejected: count(JobStatus::Rejected),
        response_rate: response_rate(jobs),
    }
}

/// Applications list: status filter, then a case-insensitive match on
/// company, position or location. Newest application first.
pub fn search_jobs(jobs: &[Job], status: Option<JobStatus>, query: Option<&str>) -> Vec<Job> {
    let needle = normalize(query);
    let mut hits: Vec<Job> = filter_by_status(jobs, status)
        .into_iter()
        .filter(|j| match &needle {
            None => true,
            Some(q) => {
                contains(&j.company, q)
                    || contains(&j.position, q)
                    || j.location.as_deref().is_some_and(|l| contains(l, q))
            }
        })
        .collect();
    newest_first(&mut hits);
    hits
}

/// Dashboard feed: company/position match, newest first, at most `limit`.
pub fn recent_jobs(jobs: &[Job], query: Option<&str>, limit: usize) -> Vec<Job> {
    let needle = normalize(query);
    let mut hits: Vec<Job> = jobs
        .iter()
        .filter(|j| match &needle {
            None => true,
            Some(q) => contains(&j.company, q) || contains(&j.position, q),
        })
        .cloned()
        .collect();
    newest_first(&mut hits);
    hits.truncate(limit);
    hits
}

/// Contacts matching on name, email, company or position, sorted by name.
pub fn search_contacts(contacts: &[Contact], query: Option<&str>) -> Vec<Contact> {
    let needle = normalize(query);
    let mut hits: Vec<Contact> = contacts
        .iter()
        .filter(|c| match &needle {
            None => true,
            Some(q) => {
                contains(&c.name, q)
                    || [&c.email, &c.company, &c.position]
                        .iter()
                        .any(|f| f.as_deref().is_some_and(|v| contains(v, q)))
            }
        })
        .cloned()
        .collect();
    hits.sort_by(|a, b| {
        a.name.to_lowercase().cmp(&b.name.to_lowercase()).then_with(|| a.name.cmp(&b.name))
    });
    hits
}

fn normalize(query: Option<&str>) -> Option<String> {
    query.map(str::trim).filter(|q| !q.is_empty()).map(str::to_lowercase)
}

fn contains(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn newest_first(jobs: &mut [Job]) {
    jobs.sort_by(|a, b| b.date_applied.cmp(&a.date_applied));
}
