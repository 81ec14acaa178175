use jt_core::metrics::{filter_by_status, response_rate, totals_by_status};
use jt_core::{
    Contact, ContactId, ContactPatch, Job, JobId, JobPatch, JobStatus, NewContact, NewJob,
};

fn job(status: JobStatus) -> Job {
    NewJob::new("Acme", "Engineer", status, 1_704_067_200_000)
        .into_job(JobId::new(), 1_704_067_200_000)
}

#[test]
fn test_totals_have_every_status_with_no_jobs() {
    let totals = totals_by_status(&[]);
    assert_eq!(totals.len(), 4);
    for status in JobStatus::ALL {
        assert_eq!(totals[&status], 0);
    }
}

#[test]
fn test_totals_sum_to_job_count() {
    let jobs = vec![
        job(JobStatus::Applied),
        job(JobStatus::Applied),
        job(JobStatus::Offer),
        job(JobStatus::Rejected),
        job(JobStatus::Interviewing),
    ];
    let totals = totals_by_status(&jobs);
    assert_eq!(totals.values().sum::<usize>(), jobs.len());
    assert_eq!(totals[&JobStatus::Applied], 2);
}

#[test]
fn test_response_rate() {
    assert_eq!(response_rate(&[]), 0);
    let jobs: Vec<Job> = JobStatus::ALL.into_iter().map(job).collect();
    assert_eq!(response_rate(&jobs), 75);
}

#[test]
fn test_filter_by_status() {
    let jobs: Vec<Job> = JobStatus::ALL.into_iter().chain([JobStatus::Offer]).map(job).collect();
    assert_eq!(filter_by_status(&jobs, None), jobs);
    let offers = filter_by_status(&jobs, Some(JobStatus::Offer));
    assert_eq!(offers.len(), 2);
    assert!(offers.iter().all(|j| j.status == JobStatus::Offer));
}

#[test]
fn test_job_patch_touches_only_given_fields() {
    let before = job(JobStatus::Applied);
    let mut after = before.clone();
    JobPatch::status(JobStatus::Offer).apply_to(&mut after, before.date_modified + 5);

    assert_eq!(after.status, JobStatus::Offer);
    assert_eq!(after.date_modified, before.date_modified + 5);
    assert_eq!(Job { status: before.status, date_modified: before.date_modified, ..after }, before);
}

#[test]
fn test_contact_patch_keeps_date_added() {
    let mut contact: Contact = NewContact::named("Ada").into_contact(ContactId::from_str("c1"), 42);
    let patch = ContactPatch { email: Some("ada@example.com".into()), ..ContactPatch::default() };
    patch.apply_to(&mut contact);
    assert_eq!(contact.date_added, 42);
    assert_eq!(contact.email.as_deref(), Some("ada@example.com"));
    assert_eq!(contact.id.as_str(), "c1");
}

#[test]
fn test_status_serde() {
    let serialized = serde_json::to_string(&JobStatus::Interviewing).unwrap();
    assert_eq!(serialized, r#""interviewing""#);
    let deserialized: JobStatus = serde_json::from_str(r#""offer""#).unwrap();
    assert_eq!(deserialized, JobStatus::Offer);
    assert!(serde_json::from_str::<JobStatus>(r#""ghosted""#).is_err());
}

#[test]
fn test_job_serializes_camel_case() {
    let value = serde_json::to_value(job(JobStatus::Applied)).unwrap();
    assert!(value.get("dateApplied").is_some());
    assert!(value.get("dateModified").is_some());
    assert_eq!(value["status"], "applied");
}
