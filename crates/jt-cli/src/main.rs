use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use jt_core::{ContactId, ContactPatch, EpochMs, JobId, JobPatch, JobStatus, NewContact, NewJob};
use jt_service::InMemoryDataService;
use jt_store::{Config, JobStore, SettingsUpdate, Theme};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod dates;
mod render;

use dates::parse_date;

#[derive(Parser)]
#[command(name = "jt", version, about = "Track job applications and professional contacts")]
struct Cli {
    /// Config file [default: ./jobtrack.toml]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Totals per status, response rate and the latest applications
    Dashboard {
        #[arg(long)]
        search: Option<String>,
    },

    /// Manage job applications
    #[command(subcommand)]
    Jobs(JobsCommand),

    /// Manage professional contacts
    #[command(subcommand)]
    Contacts(ContactsCommand),

    /// Show the effective settings, or change and save them
    Settings(SettingsArgs),
}

#[derive(Subcommand)]
enum JobsCommand {
    /// List applications, newest first
    List {
        #[arg(long)]
        status: Option<JobStatus>,
        /// Match on company, position or location
        #[arg(long)]
        search: Option<String>,
    },
    Show {
        id: String,
    },
    Add(AddJobArgs),
    Update(UpdateJobArgs),
    Remove {
        id: String,
    },
}

#[derive(Args)]
struct AddJobArgs {
    #[arg(long)]
    company: String,
    #[arg(long)]
    position: String,
    /// YYYY-MM-DD or RFC 3339
    #[arg(long, value_parser = parse_date)]
    applied: EpochMs,
    #[arg(long, default_value = "applied")]
    status: JobStatus,
    #[command(flatten)]
    details: JobDetails,
}

#[derive(Args)]
struct UpdateJobArgs {
    id: String,
    #[arg(long)]
    company: Option<String>,
    #[arg(long)]
    position: Option<String>,
    #[arg(long, value_parser = parse_date)]
    applied: Option<EpochMs>,
    #[arg(long)]
    status: Option<JobStatus>,
    #[command(flatten)]
    details: JobDetails,
}

#[derive(Args)]
struct JobDetails {
    #[arg(long)]
    location: Option<String>,
    #[arg(long)]
    url: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    salary: Option<String>,
    #[arg(long)]
    notes: Option<String>,
    #[arg(long)]
    contact_name: Option<String>,
    #[arg(long)]
    contact_email: Option<String>,
    #[arg(long)]
    contact_phone: Option<String>,
    #[arg(long)]
    next_steps: Option<String>,
    #[arg(long, value_parser = parse_date)]
    next_interview: Option<EpochMs>,
}

#[derive(Subcommand)]
enum ContactsCommand {
    /// List contacts by name
    List {
        /// Match on name, email, company or position
        #[arg(long)]
        search: Option<String>,
    },
    Add(ContactArgs),
    Update {
        id: String,
        #[command(flatten)]
        fields: ContactArgs,
    },
    Remove {
        id: String,
    },
}

#[derive(Args)]
struct ContactArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    company: Option<String>,
    #[arg(long)]
    position: Option<String>,
    #[arg(long)]
    notes: Option<String>,
}

#[derive(Args)]
struct SettingsArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    /// light, dark or system
    #[arg(long)]
    theme: Option<Theme>,
    #[arg(long)]
    application_updates: Option<bool>,
    #[arg(long)]
    interviews: Option<bool>,
    #[arg(long)]
    offers: Option<bool>,
    #[arg(long)]
    rejections: Option<bool>,
    #[arg(long)]
    reminders: Option<bool>,
}

impl From<SettingsArgs> for SettingsUpdate {
    fn from(a: SettingsArgs) -> Self {
        SettingsUpdate {
            name: a.name,
            email: a.email,
            theme: a.theme,
            application_updates: a.application_updates,
            interviews: a.interviews,
            offers: a.offers,
            rejections: a.rejections,
            reminders: a.reminders,
        }
    }
}

impl AddJobArgs {
    fn into_new_job(self) -> NewJob {
        let d = self.details;
        NewJob {
            company: self.company,
            position: self.position,
            location: d.location,
            status: self.status,
            url: d.url,
            description: d.description,
            salary: d.salary,
            notes: d.notes,
            contact_name: d.contact_name,
            contact_email: d.contact_email,
            contact_phone: d.contact_phone,
            date_applied: self.applied,
            next_steps: d.next_steps,
            next_interview_date: d.next_interview,
        }
    }
}

impl UpdateJobArgs {
    fn into_patch(self) -> (JobId, JobPatch) {
        let d = self.details;
        let patch = JobPatch {
            company: self.company,
            position: self.position,
            location: d.location,
            status: self.status,
            url: d.url,
            description: d.description,
            salary: d.salary,
            notes: d.notes,
            contact_name: d.contact_name,
            contact_email: d.contact_email,
            contact_phone: d.contact_phone,
            date_applied: self.applied,
            next_steps: d.next_steps,
            next_interview_date: d.next_interview,
        };
        (JobId::from_str(self.id), patch)
    }
}

impl From<ContactArgs> for ContactPatch {
    fn from(a: ContactArgs) -> Self {
        ContactPatch {
            name: a.name,
            email: a.email,
            phone: a.phone,
            company: a.company,
            position: a.position,
            notes: a.notes,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg_path = match cli.config {
        Some(p) => p,
        None => Config::default_path(&std::env::current_dir()?),
    };
    let mut cfg = Config::load_or_default(&cfg_path)?;

    match cli.cmd {
        Command::Settings(args) => {
            let update = SettingsUpdate::from(args);
            if !update.is_empty() {
                cfg.apply_settings(update);
                cfg.save_to(&cfg_path)?;
                info!(path = %cfg_path.display(), "settings saved");
            }
            if cli.json {
                return render::json(&cfg);
            }
            render::settings(&cfg);
            Ok(())
        }
        Command::Dashboard { search } => dashboard(&open_store(&cfg).await, search, cli.json),
        Command::Jobs(cmd) => jobs(&open_store(&cfg).await, cmd, cli.json).await,
        Command::Contacts(cmd) => contacts(&open_store(&cfg).await, cmd, cli.json).await,
    }
}

type Store = JobStore<InMemoryDataService>;

/// Fresh store over the mock service, loaded once.
async fn open_store(cfg: &Config) -> Store {
    let service = if cfg.service.seed {
        InMemoryDataService::seeded(cfg.latency())
    } else {
        InMemoryDataService::new(vec![], vec![], cfg.latency())
    };
    let store = JobStore::new(Arc::new(service));
    store.initialize().await;
    if let Some(err) = store.state().error {
        warn!(error = %err, "initial load incomplete");
    }
    store
}

fn dashboard(store: &Store, search: Option<String>, json: bool) -> Result<()> {
    let totals = store.totals_by_status();
    let stats = store.dashboard_stats();
    let recent = store.recent_jobs(search.as_deref());
    if json {
        let out = serde_json::json!({ "stats": stats, "totals": totals, "recent": recent });
        return render::json(&out);
    }
    render::dashboard(&totals, &stats, &recent);
    Ok(())
}

async fn jobs(store: &Store, cmd: JobsCommand, json: bool) -> Result<()> {
    match cmd {
        JobsCommand::List { status, search } => {
            let jobs = store.search_jobs(status, search.as_deref());
            if json {
                return render::json(&jobs);
            }
            render::job_list(&jobs);
        }
        JobsCommand::Show { id } => {
            let Some(job) = store.job(&JobId::from_str(id.clone())) else {
                bail!("job {id} not found");
            };
            if json {
                return render::json(&job);
            }
            render::job_detail(&job);
        }
        JobsCommand::Add(args) => {
            let job = store.add_job(args.into_new_job()).await?;
            if json {
                return render::json(&job);
            }
            println!("Added application {}", job.id);
            render::job_detail(&job);
        }
        JobsCommand::Update(args) => {
            let (id, patch) = args.into_patch();
            if patch.is_empty() {
                bail!("nothing to update, pass at least one field");
            }
            let job = store.update_job(&id, patch).await?;
            if json {
                return render::json(&job);
            }
            println!("Updated application {}", job.id);
            render::job_detail(&job);
        }
        JobsCommand::Remove { id } => {
            store.remove_job(&JobId::from_str(id.clone())).await?;
            println!("Removed application {id} ({} left)", store.state().jobs.len());
        }
    }
    Ok(())
}

async fn contacts(store: &Store, cmd: ContactsCommand, json: bool) -> Result<()> {
    match cmd {
        ContactsCommand::List { search } => {
            let contacts = store.search_contacts(search.as_deref());
            if json {
                return render::json(&contacts);
            }
            render::contact_list(&contacts);
        }
        ContactsCommand::Add(args) => {
            let patch = ContactPatch::from(args);
            let Some(name) = patch.name else {
                bail!("--name is required");
            };
            let contact = store
                .add_contact(NewContact {
                    name,
                    email: patch.email,
                    phone: patch.phone,
                    company: patch.company,
                    position: patch.position,
                    notes: patch.notes,
                })
                .await?;
            if json {
                return render::json(&contact);
            }
            println!("Added contact {}", contact.id);
            render::contact_list(std::slice::from_ref(&contact));
        }
        ContactsCommand::Update { id, fields } => {
            let patch = ContactPatch::from(fields);
            if patch.is_empty() {
                bail!("nothing to update, pass at least one field");
            }
            let contact = store.update_contact(&ContactId::from_str(id), patch).await?;
            if json {
                return render::json(&contact);
            }
            println!("Updated contact {}", contact.id);
            render::contact_list(std::slice::from_ref(&contact));
        }
        ContactsCommand::Remove { id } => {
            store.remove_contact(&ContactId::from_str(id.clone())).await?;
            println!("Removed contact {id} ({} left)", store.state().contacts.len());
        }
    }
    Ok(())
}
