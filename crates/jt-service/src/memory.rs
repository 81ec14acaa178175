use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use jt_core::{now_ms, Contact, ContactId, ContactPatch, Job, JobId, JobPatch, NewContact, NewJob};
use tracing::debug;

use crate::{seed, DataService, ServiceError};

/// Simulated round-trip time per kind of call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Latency {
    pub list: Duration,
    pub get: Duration,
    pub write: Duration,
}

impl Latency {
    pub fn none() -> Self {
        Self { list: Duration::ZERO, get: Duration::ZERO, write: Duration::ZERO }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(600),
            get: Duration::from_millis(300),
            write: Duration::from_millis(500),
        }
    }
}

/// Mock remote store. Keeps its own lists and sleeps before answering.
pub struct InMemoryDataService {
    inner: Mutex<Inner>,
    latency: Latency,
}

#[derive(Default)]
struct Inner {
    jobs: Vec<Job>,
    contacts: Vec<Contact>,
}

impl InMemoryDataService {
    pub fn new(jobs: Vec<Job>, contacts: Vec<Contact>, latency: Latency) -> Self {
        Self { inner: Mutex::new(Inner { jobs, contacts }), latency }
    }

    /// Empty store, no latency.
    pub fn empty() -> Self {
        Self::new(vec![], vec![], Latency::none())
    }

    /// Built-in demo data with the given latency.
    pub fn seeded(latency: Latency) -> Self {
        Self::new(seed::seed_jobs(), seed::seed_contacts(), latency)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, ServiceError> {
        self.inner
            .lock()
            .map_err(|_| ServiceError::Failed("mock storage lock poisoned".into()))
    }

    async fn delay(&self, d: Duration) {
        if !d.is_zero() {
            tokio::time::sleep(d).await;
        }
    }
}

#[async_trait]
impl DataService for InMemoryDataService {
    async fn list_jobs(&self) -> Result<Vec<Job>, ServiceError> {
        self.delay(self.latency.list).await;
        Ok(self.lock()?.jobs.clone())
    }

    async fn get_job(&self, id: &JobId) -> Result<Option<Job>, ServiceError> {
        self.delay(self.latency.get).await;
        Ok(self.lock()?.jobs.iter().find(|j| &j.id == id).cloned())
    }

    async fn create_job(&self, job: NewJob) -> Result<Job, ServiceError> {
        self.delay(self.latency.write).await;
        let job = job.into_job(JobId::new(), now_ms());
        self.lock()?.jobs.push(job.clone());
        debug!(job_id = %job.id, company = %job.company, "job created");
        Ok(job)
    }

    async fn update_job(&self, id: &JobId, patch: JobPatch) -> Result<Job, ServiceError> {
        self.delay(self.latency.write).await;
        let mut inner = self.lock()?;
        let job = inner
            .jobs
            .iter_mut()
            .find(|j| &j.id == id)
            .ok_or_else(|| ServiceError::not_found("job", id.as_str()))?;
        patch.apply_to(job, now_ms());
        debug!(job_id = %id, status = %job.status, "job updated");
        Ok(job.clone())
    }

    async fn delete_job(&self, id: &JobId) -> Result<(), ServiceError> {
        self.delay(self.latency.write).await;
        let mut inner = self.lock()?;
        let idx = inner
            .jobs
            .iter()
            .position(|j| &j.id == id)
            .ok_or_else(|| ServiceError::not_found("job", id.as_str()))?;
        inner.jobs.remove(idx);
        debug!(job_id = %id, "job deleted");
        Ok(())
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>, ServiceError> {
        self.delay(self.latency.list).await;
        Ok(self.lock()?.contacts.clone())
    }

    async fn get_contact(&self, id: &ContactId) -> Result<Option<Contact>, ServiceError> {
        self.delay(self.latency.get).await;
        Ok(self.lock()?.contacts.iter().find(|c| &c.id == id).cloned())
    }

    async fn create_contact(&self, contact: NewContact) -> Result<Contact, ServiceError> {
        self.delay(self.latency.write).await;
        let contact = contact.into_contact(ContactId::new(), now_ms());
        self.lock()?.contacts.push(contact.clone());
        debug!(contact_id = %contact.id, "contact created");
        Ok(contact)
    }

    async fn update_contact(
        &self,
        id: &ContactId,
        patch: ContactPatch,
    ) -> Result<Contact, ServiceError> {
        self.delay(self.latency.write).await;
        let mut inner = self.lock()?;
        let contact = inner
            .contacts
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| ServiceError::not_found("contact", id.as_str()))?;
        patch.apply_to(contact);
        debug!(contact_id = %id, "contact updated");
        Ok(contact.clone())
    }

    async fn delete_contact(&self, id: &ContactId) -> Result<(), ServiceError> {
        self.delay(self.latency.write).await;
        let mut inner = self.lock()?;
        let idx = inner
            .contacts
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| ServiceError::not_found("contact", id.as_str()))?;
        inner.contacts.remove(idx);
        debug!(contact_id = %id, "contact deleted");
        Ok(())
    }
}
