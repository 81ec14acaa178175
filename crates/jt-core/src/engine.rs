use crate::{Action, StoreState, FETCH_CONTACTS_FAILED};

/// Pure transition function. The store applies it to every dispatched action.
pub fn reduce(state: StoreState, action: Action) -> StoreState {
    let mut state = state;
    match action {
        Action::FetchJobsRequest => {
            state.loading = true;
            state.error = None;
        }
        Action::FetchJobsSuccess(jobs) => {
            state.jobs = jobs;
            state.loading = false;
        }
        Action::FetchJobsFailure(message) => {
            state.error = Some(message);
            state.loading = false;
        }
        Action::JobAdded(job) => state.jobs.push(job),
        Action::JobUpdated(job) => {
            // unknown ids are ignored; order is preserved
            if let Some(slot) = state.jobs.iter_mut().find(|j| j.id == job.id) {
                *slot = job;
            }
        }
        Action::JobDeleted(id) => state.jobs.retain(|j| j.id != id),
        Action::FetchContactsRequest => {
            // a pending jobs failure stays visible until the next jobs fetch
            if state.error.as_deref() == Some(FETCH_CONTACTS_FAILED) {
                state.error = None;
            }
        }
        Action::FetchContactsSuccess(contacts) => state.contacts = contacts,
        Action::FetchContactsFailure(message) => state.error = Some(message),
        Action::ContactAdded(contact) => state.contacts.push(contact),
        Action::ContactUpdated(contact) => {
            if let Some(slot) = state.contacts.iter_mut().find(|c| c.id == contact.id) {
                *slot = contact;
            }
        }
        Action::ContactDeleted(id) => state.contacts.retain(|c| c.id != id),
    }
    state
}
