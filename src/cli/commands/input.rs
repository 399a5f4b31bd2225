//! Loads the attendance file and the roster for the processing commands.

use crate::cli::parser::InputArgs;
use crate::config::Config;
use crate::core::pipeline::{ProcessOutcome, process};
use crate::core::roster::Roster;
use crate::db::pool::DbPool;
use crate::db::roster::load_roster;
use crate::errors::{AppError, AppResult};
use crate::import::read_table;
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;

/// Discard reasons listed before the rest are summarized.
const MAX_LISTED_DISCARDS: usize = 5;

pub(crate) struct LoadedInput {
    pub outcome: ProcessOutcome,
    pub roster: Option<Roster>,
}

pub(crate) fn delimiter(arg: &Option<String>, cfg: &Config) -> AppResult<u8> {
    Config::delimiter_byte(arg.as_deref().unwrap_or(&cfg.csv_delimiter))
}

fn resolve_roster(input: &InputArgs, cfg: &Config, delim: u8) -> AppResult<Option<Roster>> {
    if let Some(file) = &input.roster {
        let roster = Roster::from_table(&read_table(&expand_tilde(file), delim)?)?;
        info(format!("Roster: {file} ({} entries)", roster.len()));
        return Ok(Some(roster));
    }

    let Some(mut pool) = DbPool::open_existing(&cfg.database)? else {
        return match input.roster_version {
            Some(id) => Err(AppError::RosterVersionNotFound(id)),
            None => Ok(None),
        };
    };

    Ok(load_roster(&mut pool, input.roster_version)?.map(|(version, roster)| {
        info(format!(
            "Roster: version {} ({} entries, imported {})",
            version.id, version.entry_count, version.created_at
        ));
        roster
    }))
}

/// Read, clean, resolve and classify the input file, reporting anything
/// the user should know about the data quality.
pub(crate) fn load_input(input: &InputArgs, cfg: &Config) -> AppResult<LoadedInput> {
    let delim = delimiter(&input.delimiter, cfg)?;
    let table = read_table(&expand_tilde(&input.file), delim)?;

    let roster = resolve_roster(input, cfg, delim)?;
    if roster.is_none() {
        warning("No roster available: activity and status will be empty.");
    }

    let outcome = process(&table, roster.as_ref(), &cfg.process_options())?;

    if !outcome.discards.is_empty() {
        warning(format!(
            "{} of {} rows discarded while cleaning.",
            outcome.discards.len(),
            table.len()
        ));
        for d in outcome.discards.iter().take(MAX_LISTED_DISCARDS) {
            warning(format!("  row {}: {}", d.row, d.reason));
        }
        if outcome.discards.len() > MAX_LISTED_DISCARDS {
            warning(format!(
                "  ... and {} more",
                outcome.discards.len() - MAX_LISTED_DISCARDS
            ));
        }
    }

    if outcome.location_mode.is_ambiguous() {
        warning("No entry/exit gate codes found: every scan counts as both check-in and check-out.");
    }

    if outcome.roster_misses > 0 {
        warning(format!(
            "{} workers not found in the roster.",
            outcome.roster_misses
        ));
    }

    Ok(LoadedInput { outcome, roster })
}
