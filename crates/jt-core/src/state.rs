use serde::Serialize;

use crate::{Contact, Job};

/// Everything the view layer sees.
///
/// `loading` covers the jobs fetch only. `error` holds the most recent fetch
/// failure and is cleared when the next fetch starts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StoreState {
    pub jobs: Vec<Job>,
    pub contacts: Vec<Contact>,
    pub loading: bool,
    pub error: Option<String>,
}
