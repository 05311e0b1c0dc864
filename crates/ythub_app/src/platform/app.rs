use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use thiserror::Error;
use ythub_core::{
    parse_event, parse_records, update, Columns, Effect, InstanceStatus, ListState, Msg,
    NotebookStatus, RecordError, StatusKind, StatusRegistry, StatusValidator,
};
use ythub_logging::{ythub_info, ythub_warn};

use super::config::{self, ConfigError};
use super::logging::{self, LogDestination};
use super::render::{render, render_row};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Domain {
    Notebook,
    Instance,
}

/// Render a status list and follow status events from stdin.
#[derive(Debug, Parser)]
#[command(name = "ythub_app", version)]
pub struct Cli {
    /// Which status table the records use.
    #[arg(long, value_enum)]
    pub domain: Domain,

    /// JSON array of records, as returned by the list endpoint.
    #[arg(long)]
    pub records: PathBuf,

    /// RON file with status label overrides.
    #[arg(long)]
    pub labels: Option<PathBuf>,

    /// Also write logs to ./ythub.log.
    #[arg(long)]
    pub log_file: bool,

    /// Log at debug level instead of info.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("could not read records {path:?}: {source}")]
    ReadRecords {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Records(#[from] RecordError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let destination = if cli.log_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    };
    logging::initialize(destination, cli.verbose);

    match cli.domain {
        Domain::Notebook => run_list::<NotebookStatus>(&cli),
        Domain::Instance => run_list::<InstanceStatus>(&cli),
    }
}

fn run_list<K: StatusKind>(cli: &Cli) -> Result<(), AppError> {
    let mut registry = StatusRegistry::for_kind::<K>();
    if let Some(path) = &cli.labels {
        config::apply_overrides(&mut registry, config::load_label_config(path)?);
    }
    let registry = Arc::new(registry);
    let validator = StatusValidator::for_kind::<K>(&registry);

    let content = fs::read_to_string(&cli.records).map_err(|source| AppError::ReadRecords {
        path: cli.records.clone(),
        source,
    })?;
    let records = parse_records(&content)?;
    ythub_info!("Loaded {} {} records", records.len(), K::DOMAIN);
    for record in &records {
        if let Err(err) = validator.validate(record.status) {
            ythub_warn!("record {}: {}", record.id, err);
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let state = ListState::for_kind::<K>(Arc::clone(&registry), Columns::ALL);
    let state = dispatch(state, Msg::Loaded(records), &mut out)?;

    follow_events(state, io::stdin().lock(), &validator, &mut out)?;
    Ok(())
}

/// Applies one event per input line. Blank and malformed lines are skipped;
/// events failing validation are logged and still applied.
fn follow_events(
    mut state: ListState,
    input: impl BufRead,
    validator: &StatusValidator<'_>,
    out: &mut impl Write,
) -> Result<ListState, AppError> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event = match parse_event(&line) {
            Ok(event) => event,
            Err(err) => {
                ythub_warn!("skipping malformed event: {}", err);
                continue;
            }
        };
        if let Err(err) = validator.validate(event.data.status) {
            ythub_warn!("event for {}: {}", event.data.id, err);
        }
        state = dispatch(state, Msg::StatusChanged(event), out)?;
    }
    Ok(state)
}

/// Runs one message through `update` and carries out the resulting effects.
fn dispatch(state: ListState, msg: Msg, out: &mut impl Write) -> Result<ListState, AppError> {
    let (mut state, effects) = update(state, msg);
    for effect in effects {
        match effect {
            Effect::Render => {
                for line in render(&state.view()) {
                    writeln!(out, "{line}")?;
                }
            }
            Effect::ScheduleHighlightClear { id, .. } => {
                if let Some(row) = state.view().rows.iter().find(|row| row.id == id) {
                    writeln!(out, "{}", render_row(row))?;
                }
                // Output is line-based; the highlight has been shown once.
                let (next, _) = update(state, Msg::HighlightExpired { id });
                state = next;
            }
        }
    }
    out.flush()?;
    Ok(state)
}
