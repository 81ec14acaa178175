use std::collections::BTreeMap;

use anyhow::Result;
use jt_core::{Contact, DashboardStats, Job, JobStatus};
use jt_store::Config;
use serde::Serialize;

use crate::dates::format_date;

pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn dashboard(totals: &BTreeMap<JobStatus, usize>, stats: &DashboardStats, recent: &[Job]) {
    println!("Applications: {} ({} active)", stats.total_applications, stats.active_applications);
    for (status, count) in totals {
        println!("  {:<13} {}", status.label(), count);
    }
    println!("Response rate: {}%", stats.response_rate);
    println!();
    println!("Recent applications:");
    if recent.is_empty() {
        println!("  (none yet, add one with `jt jobs add`)");
    }
    for job in recent {
        println!("  {}", job_line(job));
    }
}

pub fn job_list(jobs: &[Job]) {
    if jobs.is_empty() {
        println!("No applications found");
        return;
    }
    for job in jobs {
        println!("{}", job_line(job));
    }
}

fn job_line(job: &Job) -> String {
    let location = job.location.as_deref().map(|l| format!(" ({l})")).unwrap_or_default();
    format!(
        "- {} [{}] {} at {}{} applied {}",
        job.id,
        job.status,
        job.position,
        job.company,
        location,
        format_date(job.date_applied)
    )
}

pub fn job_detail(job: &Job) {
    println!("{} at {}", job.position, job.company);
    println!("  id:            {}", job.id);
    println!("  status:        {}", job.status.label());
    println!("  applied:       {}", format_date(job.date_applied));
    println!("  last modified: {}", format_date(job.date_modified));
    let optional = [
        ("location", job.location.as_deref()),
        ("url", job.url.as_deref()),
        ("salary", job.salary.as_deref()),
        ("contact", job.contact_name.as_deref()),
        ("contact email", job.contact_email.as_deref()),
        ("contact phone", job.contact_phone.as_deref()),
        ("next steps", job.next_steps.as_deref()),
        ("description", job.description.as_deref()),
        ("notes", job.notes.as_deref()),
    ];
    for (label, value) in optional {
        if let Some(v) = value {
            println!("  {:<14} {}", format!("{label}:"), v);
        }
    }
    if let Some(at) = job.next_interview_date {
        println!("  next interview: {}", format_date(at));
    }
}

pub fn contact_list(contacts: &[Contact]) {
    if contacts.is_empty() {
        println!("No contacts found");
        return;
    }
    for c in contacts {
        let mut line = format!("- {} {}", c.id, c.name);
        if let Some(position) = &c.position {
            line.push_str(&format!(", {position}"));
        }
        if let Some(company) = &c.company {
            line.push_str(&format!(" @ {company}"));
        }
        if let Some(email) = &c.email {
            line.push_str(&format!(" <{email}>"));
        }
        if let Some(phone) = &c.phone {
            line.push_str(&format!(" {phone}"));
        }
        line.push_str(&format!(" (added {})", format_date(c.date_added)));
        println!("{line}");
    }
}

pub fn settings(cfg: &Config) {
    println!("Account");
    println!("  name:  {}", cfg.account.name);
    println!("  email: {}", cfg.account.email);
    println!("  theme: {}", cfg.account.theme);
    println!("Notifications");
    let n = &cfg.notifications;
    for (label, on) in [
        ("application updates", n.application_updates),
        ("interviews", n.interviews),
        ("offers", n.offers),
        ("rejections", n.rejections),
        ("reminders", n.reminders),
    ] {
        println!("  {:<20} {}", label, if on { "on" } else { "off" });
    }
    println!("Data service");
    println!(
        "  latency: list {}ms, get {}ms, write {}ms",
        cfg.service.list_latency_ms, cfg.service.get_latency_ms, cfg.service.write_latency_ms
    );
    println!("  seed data: {}", if cfg.service.seed { "yes" } else { "no" });
}
