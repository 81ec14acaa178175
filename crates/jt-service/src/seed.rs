use jt_core::{Contact, ContactId, Job, JobId, JobStatus, NewContact, NewJob};

const JAN_15: i64 = 1_705_276_800_000;
const FEB_01: i64 = 1_706_745_600_000;
const FEB_10: i64 = 1_707_523_200_000;
const FEB_20: i64 = 1_708_387_200_000;
const MAR_01: i64 = 1_709_251_200_000;
const MAR_05: i64 = 1_709_596_800_000;
const MAR_12: i64 = 1_710_201_600_000;
const MAR_18: i64 = 1_710_720_000_000;
const MAR_20: i64 = 1_710_892_800_000;

/// Demo applications, one or more per status.
pub fn seed_jobs() -> Vec<Job> {
    let mut techcorp =
        NewJob::new("TechCorp", "Senior Frontend Developer", JobStatus::Interviewing, FEB_01);
    techcorp.location = Some("San Francisco, CA".into());
    techcorp.url = Some("https://techcorp.example.com/careers/frontend".into());
    techcorp.salary = Some("$140,000 - $160,000".into());
    techcorp.contact_name = Some("Sarah Chen".into());
    techcorp.contact_email = Some("sarah.chen@techcorp.example.com".into());
    techcorp.next_steps = Some("Technical interview with the platform team".into());
    techcorp.next_interview_date = Some(MAR_20);

    let mut innovate =
        NewJob::new("Innovate Labs", "Full Stack Engineer", JobStatus::Applied, MAR_05);
    innovate.location = Some("Remote".into());
    innovate.salary = Some("$120,000 - $140,000".into());
    innovate.notes = Some("Referred by a former colleague".into());

    let mut datasys = NewJob::new("DataSystems Inc", "Backend Developer", JobStatus::Offer, JAN_15);
    datasys.location = Some("New York, NY".into());
    datasys.salary = Some("$150,000".into());
    datasys.next_steps = Some("Review offer letter".into());

    let mut webworks = NewJob::new("WebWorks", "React Developer", JobStatus::Rejected, FEB_10);
    webworks.location = Some("Austin, TX".into());
    webworks.notes = Some("Position filled internally".into());

    let mut cloudnine = NewJob::new("CloudNine", "Platform Engineer", JobStatus::Applied, MAR_12);
    cloudnine.location = Some("Seattle, WA".into());

    vec![
        techcorp.into_job(JobId::from_str("1"), MAR_12),
        innovate.into_job(JobId::from_str("2"), MAR_05),
        datasys.into_job(JobId::from_str("3"), MAR_01),
        webworks.into_job(JobId::from_str("4"), FEB_20),
        cloudnine.into_job(JobId::from_str("5"), MAR_18),
    ]
}

pub fn seed_contacts() -> Vec<Contact> {
    let sarah = NewContact {
        name: "Sarah Chen".into(),
        email: Some("sarah.chen@techcorp.example.com".into()),
        phone: Some("(555) 123-4567".into()),
        company: Some("TechCorp".into()),
        position: Some("Engineering Manager".into()),
        notes: Some("Hiring manager for the frontend role".into()),
    };
    let michael = NewContact {
        name: "Michael Rodriguez".into(),
        email: Some("m.rodriguez@datasystems.example.com".into()),
        company: Some("DataSystems Inc".into()),
        position: Some("Technical Recruiter".into()),
        ..NewContact::default()
    };
    let priya = NewContact {
        name: "Priya Patel".into(),
        phone: Some("(555) 987-6543".into()),
        company: Some("Innovate Labs".into()),
        position: Some("Senior Engineer".into()),
        notes: Some("Met at a local meetup".into()),
        ..NewContact::default()
    };

    vec![
        sarah.into_contact(ContactId::from_str("1"), FEB_01),
        michael.into_contact(ContactId::from_str("2"), JAN_15),
        priya.into_contact(ContactId::from_str("3"), MAR_01),
    ]
}
