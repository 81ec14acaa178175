use std::collections::BTreeMap;
use std::sync::Arc;

use jt_core::metrics;
use jt_core::{
    reduce, validate_contact_patch, validate_job_patch, validate_new_contact, validate_new_job,
    Action, Contact, ContactId, ContactPatch, DashboardStats, Job, JobId, JobPatch, JobStatus,
    NewContact, NewJob, StoreState,
};
use jt_service::DataService;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::Result;

pub use jt_core::{FETCH_CONTACTS_FAILED, FETCH_JOBS_FAILED};

/// Number of applications the dashboard lists.
pub const RECENT_LIMIT: usize = 5;

/// Single source of truth for the jobs and contacts a view can see.
///
/// Every change goes through the data service first; the local state is only
/// touched once the service confirmed it, by dispatching an [`Action`]
/// through [`reduce`]. Construct one per session and share it as
/// `Arc<JobStore<_>>`.
pub struct JobStore<S: ?Sized> {
    service: Arc<S>,
    state: watch::Sender<StoreState>,
}

impl<S: DataService + ?Sized> JobStore<S> {
    pub fn new(service: Arc<S>) -> Self {
        let (state, _) = watch::channel(StoreState::default());
        Self { service, state }
    }

    /// Initial load. The composing application calls this once at startup.
    pub async fn initialize(&self) {
        info!("loading jobs and contacts");
        tokio::join!(self.fetch_jobs(), self.fetch_contacts());
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> StoreState {
        self.state.borrow().clone()
    }

    /// Receiver that is notified after every dispatched action.
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.state.subscribe()
    }

    fn dispatch(&self, action: Action) {
        debug!(?action, "dispatch");
        self.state.send_modify(|state| {
            let prev = std::mem::take(state);
            *state = reduce(prev, action);
        });
    }

    // ---- jobs ----

    /// Replaces the job collection with the service's list. Failures land in
    /// the shared error slot instead of being returned.
    pub async fn fetch_jobs(&self) {
        self.dispatch(Action::FetchJobsRequest);
        match self.service.list_jobs().await {
            Ok(jobs) => {
                info!(count = jobs.len(), "jobs fetched");
                self.dispatch(Action::FetchJobsSuccess(jobs));
            }
            Err(e) => {
                warn!(error = %e, "failed to fetch jobs");
                self.dispatch(Action::FetchJobsFailure(FETCH_JOBS_FAILED.to_string()));
            }
        }
    }

    pub async fn add_job(&self, job: NewJob) -> Result<Job> {
        validate_new_job(&job)?;
        let job = self.service.create_job(job).await?;
        info!(job_id = %job.id, company = %job.company, "job added");
        self.dispatch(Action::JobAdded(job.clone()));
        Ok(job)
    }

    /// Existence is checked by the service, not locally.
    pub async fn update_job(&self, id: &JobId, patch: JobPatch) -> Result<Job> {
        validate_job_patch(&patch)?;
        let job = self.service.update_job(id, patch).await?;
        info!(job_id = %job.id, status = %job.status, "job updated");
        self.dispatch(Action::JobUpdated(job.clone()));
        Ok(job)
    }

    pub async fn remove_job(&self, id: &JobId) -> Result<()> {
        self.service.delete_job(id).await?;
        info!(job_id = %id, "job removed");
        self.dispatch(Action::JobDeleted(id.clone()));
        Ok(())
    }

    // ---- contacts ----

    /// Replaces the contact collection. Starting it only clears an earlier
    /// contacts failure; a jobs failure stays until the next jobs fetch.
    pub async fn fetch_contacts(&self) {
        self.dispatch(Action::FetchContactsRequest);
        match self.service.list_contacts().await {
            Ok(contacts) => {
                info!(count = contacts.len(), "contacts fetched");
                self.dispatch(Action::FetchContactsSuccess(contacts));
            }
            Err(e) => {
                warn!(error = %e, "failed to fetch contacts");
                self.dispatch(Action::FetchContactsFailure(FETCH_CONTACTS_FAILED.to_string()));
            }
        }
    }

    pub async fn add_contact(&self, contact: NewContact) -> Result<Contact> {
        validate_new_contact(&contact)?;
        let contact = self.service.create_contact(contact).await?;
        info!(contact_id = %contact.id, "contact added");
        self.dispatch(Action::ContactAdded(contact.clone()));
        Ok(contact)
    }

    pub async fn update_contact(&self, id: &ContactId, patch: ContactPatch) -> Result<Contact> {
        validate_contact_patch(&patch)?;
        let contact = self.service.update_contact(id, patch).await?;
        info!(contact_id = %contact.id, "contact updated");
        self.dispatch(Action::ContactUpdated(contact.clone()));
        Ok(contact)
    }

    pub async fn remove_contact(&self, id: &ContactId) -> Result<()> {
        self.service.delete_contact(id).await?;
        info!(contact_id = %id, "contact removed");
        self.dispatch(Action::ContactDeleted(id.clone()));
        Ok(())
    }

    // ---- derived reads ----

    pub fn job(&self, id: &JobId) -> Option<Job> {
        self.state.borrow().jobs.iter().find(|j| &j.id == id).cloned()
    }

    pub fn contact(&self, id: &ContactId) -> Option<Contact> {
        self.state.borrow().contacts.iter().find(|c| &c.id == id).cloned()
    }

    pub fn filter_jobs_by_status(&self, status: Option<JobStatus>) -> Vec<Job> {
        metrics::filter_by_status(&self.state.borrow().jobs, status)
    }

    pub fn totals_by_status(&self) -> BTreeMap<JobStatus, usize> {
        metrics::totals_by_status(&self.state.borrow().jobs)
    }

    pub fn response_rate(&self) -> u32 {
        metrics::response_rate(&self.state.borrow().jobs)
    }

    pub fn dashboard_stats(&self) -> DashboardStats {
        metrics::dashboard_stats(&self.state.borrow().jobs)
    }

    pub fn search_jobs(&self, status: Option<JobStatus>, query: Option<&str>) -> Vec<Job> {
        metrics::search_jobs(&self.state.borrow().jobs, status, query)
    }

    pub fn recent_jobs(&self, query: Option<&str>) -> Vec<Job> {
        metrics::recent_jobs(&self.state.borrow().jobs, query, RECENT_LIMIT)
    }

    pub fn search_contacts(&self, query: Option<&str>) -> Vec<Contact> {
        metrics::search_contacts(&self.state.borrow().contacts, query)
    }
}
