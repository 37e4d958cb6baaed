#![allow(non_snake_case)]

mod app;
mod components;
mod context;
mod pages;
mod store;
mod theme;

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use rendezvous_core::{Event, ParticipantsConfig, User, UserId};
use tracing_subscriber::EnvFilter;

use crate::context::AppContext;
use crate::store::{seed_event, EventStore, StoreBehavior};

/// Session resolved from the command line, read once by the root component
static SESSION: OnceLock<AppContext> = OnceLock::new();

pub fn session() -> Option<&'static AppContext> {
    SESSION.get()
}

/// Rendezvous - event participants
#[derive(Parser, Debug)]
#[command(name = "rendezvous-desktop")]
#[command(about = "Rendezvous - who is coming, and who the owner can remove")]
struct Args {
    /// Event JSON in the data layer's shape (a sample event is used otherwise)
    #[arg(short, long)]
    event: Option<PathBuf>,

    /// Id of the signed-in user (defaults to the event owner)
    #[arg(short, long)]
    user: Option<String>,

    /// Give up on a confirmed delete after this many milliseconds
    #[arg(long, default_value_t = 10_000)]
    delete_timeout_ms: u64,

    /// Simulated round-trip time of the in-memory store's deletes
    #[arg(long, default_value_t = 400)]
    delete_latency_ms: u64,

    /// Make every delete fail, to see the error path
    #[arg(long)]
    fail_deletes: bool,
}

fn load_event(path: Option<&PathBuf>) -> Result<Event> {
    let Some(path) = path else {
        return Ok(seed_event());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading event from {}", path.display()))?;
    Event::from_json(&json).with_context(|| format!("validating event in {}", path.display()))
}

/// Pick the signed-in user among the event's participants
fn resolve_user(event: &Event, requested: Option<&str>) -> Result<User> {
    let id = requested
        .map(UserId::from)
        .unwrap_or_else(|| event.owner_id.clone());

    if let Some(participant) = event.participants.iter().find(|p| p.user.id == id) {
        return Ok(participant.user.clone());
    }
    if event.is_owned_by(&id) {
        return Ok(User::new(id, "Event owner"));
    }
    bail!("user {} is not part of event {}", id, event.id)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let event = load_event(args.event.as_ref())?;
    let cur_user = resolve_user(&event, args.user.as_deref())?;
    let config = ParticipantsConfig::default()
        .with_delete_timeout(Duration::from_millis(args.delete_timeout_ms));
    let behavior = StoreBehavior {
        fail_deletes: args.fail_deletes,
        delete_latency: Duration::from_millis(args.delete_latency_ms),
    };

    tracing::info!(
        event = %event.id,
        participants = event.participants.len(),
        user = %cur_user.id,
        "Starting Rendezvous"
    );

    let title = format!("Rendezvous - {}", event.name);
    let context = AppContext {
        store: Arc::new(EventStore::new(event, behavior)),
        cur_user,
        config,
    };
    if SESSION.set(context).is_err() {
        bail!("session already initialised");
    }

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(720.0, 820.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);
    Ok(())
}
