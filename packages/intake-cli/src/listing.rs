use anyhow::Result;
use colored::Colorize;
use dialoguer::Select;
use marketplace_core::domains::workers::{quick_book_worker, toggle_availability, WorkerProfile};
use tracing::warn;

use crate::app::{worker_line, App, STORE_WAIT};

const EXIT: &str = "👋 Exit";

pub async fn run(app: &App) -> Result<()> {
    let mut roster = app.store.roster();

    loop {
        let workers = roster.latest();
        if workers.is_empty() {
            println!("{}", "The roster is empty.".yellow());
            return Ok(());
        }

        let mut items: Vec<String> = workers.iter().map(worker_line).collect();
        items.push(EXIT.to_string());

        println!();
        let selection = Select::with_theme(&app.theme)
            .with_prompt("Workers")
            .items(&items)
            .default(0)
            .interact_on(&app.term)?;

        let Some(worker) = workers.get(selection) else {
            return Ok(());
        };

        if act_on_worker(app, worker).await? {
            // Show the roster only once the store has republished it
            if tokio::time::timeout(STORE_WAIT, roster.changed()).await.is_err() {
                warn!("Roster update not seen yet; showing last snapshot");
            }
        }
    }
}

/// Returns true when a roster change was requested
async fn act_on_worker(app: &App, worker: &WorkerProfile) -> Result<bool> {
    let toggle = if worker.available {
        "⏸  Mark unavailable"
    } else {
        "▶  Mark available"
    };
    let items = ["⚡ Quick book", toggle, "← Back"];

    let selection = Select::with_theme(&app.theme)
        .with_prompt(worker.name.as_str())
        .items(&items)
        .default(0)
        .interact_on(&app.term)?;

    match selection {
        0 => {
            let request = quick_book_worker(
                app.customer_id,
                worker.id,
                app.store.as_ref(),
                &app.dispatcher,
            )
            .await?;
            println!("{}", format!("✅ {}", request.description).bright_green());
            Ok(false)
        }
        1 => {
            let available = toggle_availability(worker, &app.dispatcher);
            let status = if available { "available" } else { "unavailable" };
            println!("{}", format!("{} marked {}", worker.name, status).bright_green());
            Ok(true)
        }
        _ => Ok(false),
    }
}
