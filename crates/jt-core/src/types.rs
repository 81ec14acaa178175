use serde::{Deserialize, Serialize};

use crate::{ids::*, model::*, time::EpochMs};

/// One tracked application.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub location: Option<String>,
    pub status: JobStatus,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    pub date_applied: EpochMs,
    pub date_modified: EpochMs,
    #[serde(default)]
    pub next_steps: Option<String>,
    #[serde(default)]
    pub next_interview_date: Option<EpochMs>,
}

/// Job as submitted for creation: the service assigns `id` and `date_modified`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub location: Option<String>,
    pub status: JobStatus,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    pub date_applied: EpochMs,
    #[serde(default)]
    pub next_steps: Option<String>,
    #[serde(default)]
    pub next_interview_date: Option<EpochMs>,
}

impl NewJob {
    /// Minimal input: everything optional left empty.
    pub fn new(
        company: impl Into<String>,
        position: impl Into<String>,
        status: JobStatus,
        date_applied: EpochMs,
    ) -> Self {
        Self {
            company: company.into(),
            position: position.into(),
            location: None,
            status,
            url: None,
            description: None,
            salary: None,
            notes: None,
            contact_name: None,
            contact_email: None,
            contact_phone: None,
            date_applied,
            next_steps: None,
            next_interview_date: None,
        }
    }

    pub fn into_job(self, id: JobId, now: EpochMs) -> Job {
        Job {
            id,
            company: self.company,
            position: self.position,
            location: self.location,
            status: self.status,
            url: self.url,
            description: self.description,
            salary: self.salary,
            notes: self.notes,
            contact_name: self.contact_name,
            contact_email: self.contact_email,
            contact_phone: self.contact_phone,
            date_applied: self.date_applied,
            date_modified: now,
            next_steps: self.next_steps,
            next_interview_date: self.next_interview_date,
        }
    }
}

/// Partial job update. `None` leaves the field as it is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobPatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub status: Option<JobStatus>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub salary: Option<String>,
    pub notes: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub date_applied: Option<EpochMs>,
    pub next_steps: Option<String>,
    pub next_interview_date: Option<EpochMs>,
}

impl JobPatch {
    pub fn status(status: JobStatus) -> Self {
        Self { status: Some(status), ..Self::default() }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge into `job` and re-stamp `date_modified`. The id is never touched.
    pub fn apply_to(self, job: &mut Job, now: EpochMs) {
        if let Some(v) = self.company {
            job.company = v;
        }
        if let Some(v) = self.position {
            job.position = v;
        }
        if let Some(v) = self.status {
            job.status = v;
        }
        if let Some(v) = self.date_applied {
            job.date_applied = v;
        }
        merge(&mut job.location, self.location);
        merge(&mut job.url, self.url);
        merge(&mut job.description, self.description);
        merge(&mut job.salary, self.salary);
        merge(&mut job.notes, self.notes);
        merge(&mut job.contact_name, self.contact_name);
        merge(&mut job.contact_email, self.contact_email);
        merge(&mut job.contact_phone, self.contact_phone);
        merge(&mut job.next_steps, self.next_steps);
        merge(&mut job.next_interview_date, self.next_interview_date);
        job.date_modified = now;
    }
}

/// One professional contact.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub date_added: EpochMs,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewContact {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub fn into_contact(self, id: ContactId, now: EpochMs) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            company: self.company,
            position: self.position,
            notes: self.notes,
            date_added: now,
        }
    }
}

/// Partial contact update. `date_added` is fixed at creation and not patchable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub notes: Option<String>,
}

impl ContactPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(self, contact: &mut Contact) {
        if let Some(v) = self.name {
            contact.name = v;
        }
        merge(&mut contact.email, self.email);
        merge(&mut contact.phone, self.phone);
        merge(&mut contact.company, self.company);
        merge(&mut contact.position, self.position);
        merge(&mut contact.notes, self.notes);
    }
}

/// Headline numbers for the dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_applications: usize,
    pub active_applications: usize,
    pub interviews: usize,
    pub offers: usize,
    pub rejected: usize,
    pub response_rate: u32,
}

fn merge<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}
