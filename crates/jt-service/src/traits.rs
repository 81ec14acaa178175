use async_trait::async_trait;
use jt_core::{Contact, ContactId, ContactPatch, Job, JobId, JobPatch, NewContact, NewJob};

use crate::ServiceError;

/// Remote CRUD contract for jobs and contacts.
///
/// The store treats an implementation as the system of record and mirrors it
/// after every successful call. Any call may fail.
#[async_trait]
pub trait DataService: Send + Sync {
    async fn list_jobs(&self) -> Result<Vec<Job>, ServiceError>;
    async fn get_job(&self, id: &JobId) -> Result<Option<Job>, ServiceError>;
    /// Assigns a fresh id and stamps `date_modified`.
    async fn create_job(&self, job: NewJob) -> Result<Job, ServiceError>;
    /// Merges the patch and re-stamps `date_modified`. `NotFound` for unknown ids.
    async fn update_job(&self, id: &JobId, patch: JobPatch) -> Result<Job, ServiceError>;
    async fn delete_job(&self, id: &JobId) -> Result<(), ServiceError>;

    async fn list_contacts(&self) -> Result<Vec<Contact>, ServiceError>;
    async fn get_contact(&self, id: &ContactId) -> Result<Option<Contact>, ServiceError>;
    /// Assigns a fresh id and stamps `date_added`.
    async fn create_contact(&self, contact: NewContact) -> Result<Contact, ServiceError>;
    async fn update_contact(
        &self,
        id: &ContactId,
        patch: ContactPatch,
    ) -> Result<Contact, ServiceError>;
    async fn delete_contact(&self, id: &ContactId) -> Result<(), ServiceError>;
}
