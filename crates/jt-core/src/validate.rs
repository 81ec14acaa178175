use thiserror::Error;

use crate::{ContactPatch, JobPatch, NewContact, NewJob};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    EmptyField(&'static str),
    #[error("unknown job status: {0}")]
    InvalidStatus(String),
}

pub fn validate_new_job(job: &NewJob) -> Result<(), ValidationError> {
    require("company", &job.company)?;
    require("position", &job.position)?;
    Ok(())
}

pub fn validate_job_patch(patch: &JobPatch) -> Result<(), ValidationError> {
    if let Some(company) = &patch.company {
        require("company", company)?;
    }
    if let Some(position) = &patch.position {
        require("position", position)?;
    }
    Ok(())
}

pub fn validate_new_contact(contact: &NewContact) -> Result<(), ValidationError> {
    require("name", &contact.name)
}

pub fn validate_contact_patch(patch: &ContactPatch) -> Result<(), ValidationError> {
    match &patch.name {
        Some(name) => require("name", name),
        None => Ok(()),
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JobStatus;

    #[test]
    fn blank_company_is_rejected() {
        let job = NewJob::new("  ", "Engineer", JobStatus::Applied, 0);
        assert_eq!(validate_new_job(&job), Err(ValidationError::EmptyField("company")));
    }

    #[test]
    fn blank_position_is_rejected() {
        let job = NewJob::new("Acme", "", JobStatus::Applied, 0);
        assert_eq!(validate_new_job(&job), Err(ValidationError::EmptyField("position")));
    }

    #[test]
    fn patch_may_omit_required_fields() {
        assert!(validate_job_patch(&JobPatch::status(JobStatus::Offer)).is_ok());
        let blanking = JobPatch { company: Some(String::new()), ..JobPatch::default() };
        assert_eq!(validate_job_patch(&blanking), Err(ValidationError::EmptyField("company")));
    }

    #[test]
    fn contact_needs_a_name() {
        assert_eq!(
            validate_new_contact(&NewContact::default()),
            Err(ValidationError::EmptyField("name"))
        );
        assert!(validate_new_contact(&NewContact::named("Ada")).is_ok());
        assert!(validate_contact_patch(&ContactPatch::default()).is_ok());
        let blanking = ContactPatch { name: Some(" ".into()), ..ContactPatch::default() };
        assert!(validate_contact_patch(&blanking).is_err());
    }
}
