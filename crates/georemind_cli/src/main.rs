//! GeoRemind command-line driver.
//!
//! # Responsibility
//! - Wire config, logging, storage, repository and view-models together.
//! - Drive the reminder flows without a graphical UI for local checks.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use georemind_core::db::{open_db, open_db_in_memory};
use georemind_core::{
    init_logging, resolve_triggered, CoreConfig, GeofenceEvent, GeofenceTransition,
    LocalReminderRepository, PointOfInterest, ReminderDataItem, ReminderRepository,
    RemindersListViewModel, SaveReminderViewModel, SqliteReminderStore,
};
use log::info;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "georemind")]
#[command(about = "GeoRemind - location-based reminders", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the SQLite database path
    #[arg(long)]
    db: Option<PathBuf>,

    /// Keep reminders in memory for this run only
    #[arg(long, conflicts_with = "db")]
    in_memory: bool,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Override the absolute log directory
    #[arg(long)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all reminders
    List,
    /// Show one reminder
    Get {
        /// Reminder id
        id: String,
    },
    /// Validate and save a new reminder
    Add {
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        /// Place name of the selected point of interest
        #[arg(long)]
        location: Option<String>,
        #[arg(long, requires = "longitude", allow_hyphen_values = true)]
        latitude: Option<f64>,
        #[arg(long, requires = "latitude", allow_hyphen_values = true)]
        longitude: Option<f64>,
    },
    /// Delete every reminder
    Clear,
    /// Simulate entering the geofences of the given reminder ids
    Trigger {
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if let Some(log_dir) = &config.log_dir {
        let log_dir = log_dir
            .to_str()
            .context("log_dir must be valid UTF-8")?;
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            bail!("failed to initialize logging: {err}");
        }
    }

    let conn = match &config.db_path {
        Some(path) => open_db(path)
            .with_context(|| format!("failed to open database {}", path.display()))?,
        None => open_db_in_memory().context("failed to open in-memory database")?,
    };
    let store = SqliteReminderStore::try_new(conn).context("failed to prepare reminder store")?;
    let local = Arc::new(LocalReminderRepository::new(store));
    let repo: Arc<dyn ReminderRepository> = local.clone();
    info!("event=cli_start module=cli status=ok");

    match cli.command {
        Commands::List => {
            let vm = RemindersListViewModel::new(repo);
            vm.load_reminders().await;
            if let Some(message) = vm.base.snack_bar.get() {
                bail!("failed to load reminders: {message}");
            }
            if vm.base.no_data.get() {
                println!("No reminders.");
            }
            for item in vm.items.get() {
                print_item(&item);
            }
        }
        Commands::Get { id } => {
            let vm = RemindersListViewModel::new(repo);
            match vm.reminder_details(&id).await {
                Some(item) => print_item(&item),
                None => bail!(vm.base.snack_bar.get().unwrap_or_default()),
            }
        }
        Commands::Add {
            title,
            description,
            location,
            latitude,
            longitude,
        } => {
            let vm = SaveReminderViewModel::with_geofence_radius(
                repo,
                config.geofence_radius_meters,
            );
            vm.reminder_title.set(title);
            vm.reminder_description.set(description);
            if let (Some(name), Some(lat), Some(lon)) = (location.clone(), latitude, longitude) {
                vm.on_location_selected(PointOfInterest::new(name, lat, lon));
            } else {
                vm.reminder_selected_location.set(location);
                vm.latitude.set(latitude);
                vm.longitude.set(longitude);
            }

            if !vm.validate_and_save_draft().await {
                let error = vm.base.validation_error.get();
                bail!(error.map(|e| e.message()).unwrap_or("validation failed"));
            }
            if let Some(message) = vm.base.error_message.get() {
                bail!(message);
            }
            println!("{}", vm.base.toast.get().unwrap_or_default());
            if let Some(request) = vm.geofence_request.get() {
                println!(
                    "geofence: id={} lat={} lon={} radius={}m",
                    request.request_id, request.latitude, request.longitude, request.radius_meters
                );
            }
        }
        Commands::Clear => {
            repo.delete_all_reminders().await;
            if let Some(message) = local.last_write_error() {
                bail!(message);
            }
            println!("All reminders deleted.");
        }
        Commands::Trigger { ids } => {
            let event = GeofenceEvent {
                transition: GeofenceTransition::Enter,
                request_ids: ids,
            };
            let notifications = resolve_triggered(repo.as_ref(), &event).await;
            if notifications.is_empty() {
                println!("No matching reminders.");
            }
            for notification in notifications {
                println!("notify: {}", notification.headline());
                print_item(&notification.reminder);
            }
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<CoreConfig> {
    let mut config = CoreConfig::load(cli.config.as_deref()).context("failed to load config")?;
    if let Some(db) = &cli.db {
        config.db_path = Some(db.clone());
    }
    if cli.in_memory {
        config.db_path = None;
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(log_dir) = &cli.log_dir {
        config.log_dir = Some(log_dir.clone());
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn print_item(item: &ReminderDataItem) {
    let coordinates = match (item.latitude, item.longitude) {
        (Some(lat), Some(lon)) => format!("{lat:.5},{lon:.5}"),
        _ => "-".to_string(),
    };
    println!(
        "{}  {}  [{}]  {}  {}",
        item.id,
        item.title.as_deref().unwrap_or("-"),
        item.location.as_deref().unwrap_or("-"),
        coordinates,
        item.description.as_deref().unwrap_or("")
    );
}
