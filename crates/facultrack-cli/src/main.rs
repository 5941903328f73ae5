use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use facultrack_core::Config;
use facultrack_core::app::{ServiceBuilder, StatusService};
use facultrack_core::domain::{
    InstructorId, InstructorRecord, InstructorStatus, OverrideDuration, ScheduleEntry,
    StatusOverride,
};
use facultrack_core::impls::InMemoryInstructorStore;
use facultrack_core::ports::{Clock, FixedClock, SystemClock};

/// Instructor availability from a JSON snapshot of instructor records.
#[derive(Debug, Parser)]
#[command(name = "facultrack", version)]
struct Cli {
    /// JSON array of instructor records
    #[arg(long, default_value = "instructors.json")]
    data: PathBuf,

    /// TOML config (timezone, end_of_day)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Resolve as of this RFC 3339 instant instead of the system clock
    #[arg(long)]
    at: Option<DateTime<Utc>>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// All instructors with their current status, sorted by name
    List,

    /// Current status of one instructor
    Status {
        #[arg(long)]
        id: String,
    },

    /// Set or clear a status override (30m, 1h, 2h, eod, clear)
    Override {
        #[arg(long)]
        id: String,

        #[arg(long)]
        duration: OverrideDuration,

        #[arg(long)]
        status: Option<String>,
    },

    /// Update the static location and room
    Location {
        #[arg(long)]
        id: String,

        #[arg(long)]
        location: String,

        #[arg(long, default_value = "")]
        room: String,
    },

    /// Replace the weekly schedule with the JSON array in FILE
    Schedule {
        #[arg(long)]
        id: String,

        #[arg(long)]
        file: PathBuf,
    },
}

fn load_records(path: &Path) -> Result<Vec<InstructorRecord>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

async fn write_back(path: &Path, store: &InMemoryInstructorStore) -> Result<()> {
    let records = store.snapshot().await;
    let json = serde_json::to_string_pretty(&records)?;
    write_atomically(path, json.as_bytes())?;
    info!("wrote {} instructor records to {}", records.len(), path.display());
    Ok(())
}

/// Writes to a temp file next to `path`, then renames it over `path`.
fn write_atomically(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temp file in {}", dir.display()))?;
    tmp.write_all(contents)
        .and_then(|()| tmp.as_file().sync_all())
        .with_context(|| format!("writing temp file for {}", path.display()))?;
    tmp.persist(path).with_context(|| format!("replacing {}", path.display()))?;
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    // (A) 設定と時計
    let config = match &cli.config {
        Some(path) => Config::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    }
    .with_env_overrides()?;

    let clock: Arc<dyn Clock> = match cli.at {
        Some(at) => Arc::new(FixedClock::new(at)),
        None => Arc::new(SystemClock),
    };

    // (B) スナップショットを in-memory ストアに読み込む
    let store = Arc::new(InMemoryInstructorStore::from_records(load_records(&cli.data)?));
    let service: StatusService = ServiceBuilder::new()
        .store(store.clone())
        .clock(clock)
        .config(config)
        .build()?;

    // (C) コマンド実行（更新系はファイルに書き戻す）
    match cli.command {
        Command::List => print_json(&service.list_instructors().await?)?,
        Command::Status { id } => print_json(&service.instructor(&InstructorId::new(id)).await?)?,
        Command::Override {
            id,
            duration,
            status,
        } => {
            let request = StatusOverride::new(status.map(InstructorStatus::from), duration)?;
            let record = service.set_override(&InstructorId::new(id), &request).await?;
            write_back(&cli.data, &store).await?;
            print_json(&record)?;
        }
        Command::Location { id, location, room } => {
            let record = service
                .set_location(&InstructorId::new(id), location, room)
                .await?;
            write_back(&cli.data, &store).await?;
            print_json(&record)?;
        }
        Command::Schedule { id, file } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let schedule: Vec<ScheduleEntry> = serde_json::from_str(&content)
                .with_context(|| format!("parsing {}", file.display()))?;
            let record = service
                .replace_schedule(&InstructorId::new(id), schedule)
                .await?;
            write_back(&cli.data, &store).await?;
            print_json(&record)?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse()).await
}
