use anyhow::{Context, Result};
use colored::Colorize;
use console::Term;
use dialoguer::theme::ColorfulTheme;
use marketplace_core::common::CustomerId;
use marketplace_core::domains::jobs::Job;
use marketplace_core::domains::workers::{parse_roster, WorkerProfile};
use marketplace_core::kernel::{
    spawn_dispatch_worker, Dispatcher, InMemoryStore, MarketplaceDeps,
};
use marketplace_core::Config;
use std::fs;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::info;

const SAMPLE_ROSTER: &str = include_str!("../data/sample_roster.json");

/// How long to wait for the store to confirm a write before moving on
pub const STORE_WAIT: Duration = Duration::from_secs(2);

pub struct App {
    pub customer_id: CustomerId,
    pub store: Arc<InMemoryStore>,
    pub dispatcher: Dispatcher,
    pub term: Term,
    pub theme: ColorfulTheme,
    worker: JoinHandle<()>,
}

impl App {
    /// Seed the store and start the dispatch worker
    pub fn start(config: &Config) -> Result<Self> {
        let workers = load_roster(config)?;
        info!(workers = workers.len(), "Roster loaded");

        let store = Arc::new(InMemoryStore::new(workers));
        let deps = MarketplaceDeps::new(store.clone(), store.clone());
        let (dispatcher, rx) = Dispatcher::channel();
        let worker = spawn_dispatch_worker(rx, deps);

        Ok(Self {
            customer_id: config.customer_id,
            store,
            dispatcher,
            term: Term::stdout(),
            theme: ColorfulTheme::default(),
            worker,
        })
    }

    pub fn print_banner(&self) -> Result<()> {
        self.term.clear_screen()?;
        println!("{}", "╔════════════════════════════════════════╗".bright_cyan());
        println!("{}", "║          🧰  Odd Jobs Intake            ║".bright_cyan());
        println!("{}", "╚════════════════════════════════════════╝".bright_cyan());
        println!();
        Ok(())
    }

    /// Flush queued writes, then print the customer's jobs
    pub async fn shutdown(self) -> Result<()> {
        let Self {
            customer_id,
            store,
            dispatcher,
            worker,
            ..
        } = self;

        drop(dispatcher);
        tokio::time::timeout(STORE_WAIT, worker)
            .await
            .context("Timed out flushing store writes")?
            .context("Dispatch worker panicked")?;

        let jobs: Vec<Job> = store
            .jobs()
            .await
            .into_iter()
            .filter(|job| job.customer_id == customer_id)
            .collect();
        print_jobs(&jobs, &store);
        Ok(())
    }
}

fn load_roster(config: &Config) -> Result<Vec<WorkerProfile>> {
    match &config.roster_path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read roster file {}", path.display()))?;
            parse_roster(&json)
        }
        None => parse_roster(SAMPLE_ROSTER),
    }
}

pub fn worker_line(worker: &WorkerProfile) -> String {
    let status = if worker.available {
        "available".green()
    } else {
        "away".dimmed()
    };
    format!(
        "{} · {} · ★ {:.1} · ${:.0}/hr · {} jobs · {}",
        worker.name.bold(),
        worker.specialty,
        worker.rating,
        worker.hourly_rate,
        worker.completed_jobs,
        status
    )
}

fn print_jobs(jobs: &[Job], store: &InMemoryStore) {
    println!();
    if jobs.is_empty() {
        println!("{}", "No jobs booked this time.".dimmed());
        return;
    }

    println!("{}", "📋 Your jobs".bright_blue().bold());
    for job in jobs {
        let worker = store
            .roster()
            .latest()
            .iter()
            .find(|w| w.id == job.worker_id)
            .map(|w| w.name.clone())
            .unwrap_or_else(|| job.worker_id.to_string());
        println!(
            "  {} {} for {} [{}]",
            "•".bright_cyan(),
            job.category.to_string().bold(),
            worker,
            job.status.to_string().yellow()
        );
        println!("    {}", job.description.dimmed());
    }
}
