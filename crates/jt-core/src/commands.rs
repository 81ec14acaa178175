use crate::{ids::*, types::*};

/// Message the store writes to the error slot when listing jobs fails.
pub const FETCH_JOBS_FAILED: &str = "Failed to fetch jobs";
/// Message the store writes to the error slot when listing contacts fails.
pub const FETCH_CONTACTS_FAILED: &str = "Failed to fetch contacts";

/// Every state transition the store knows about.
/// Success variants are only dispatched after the data service confirmed the change.
#[derive(Clone, Debug)]
pub enum Action {
    FetchJobsRequest,
    FetchJobsSuccess(Vec<Job>),
    FetchJobsFailure(String),
    JobAdded(Job),
    JobUpdated(Job),
    JobDeleted(JobId),
    FetchContactsRequest,
    FetchContactsSuccess(Vec<Contact>),
    FetchContactsFailure(String),
    ContactAdded(Contact),
    ContactUpdated(Contact),
    ContactDeleted(ContactId),
}
