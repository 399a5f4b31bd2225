use crate::cli::commands::input::delimiter;
use crate::cli::parser::{Commands, RosterAction};
use crate::config::Config;
use crate::core::roster::Roster;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::roster::{list_roster_versions, load_roster, save_roster_version};
use crate::errors::{AppError, AppResult};
use crate::import::read_table;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Roster { action } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        RosterAction::Import {
            file,
            delimiter: delim,
        } => {
            let table = read_table(&expand_tilde(file), delimiter(delim, cfg)?)?;
            let roster = Roster::from_table(&table)?;
            let id = save_roster_version(&mut pool, &roster, file)?;

            success(format!(
                "Roster version {id} stored ({} entries from {file})",
                roster.len()
            ));
            ttlog_quiet(
                &pool.conn,
                "roster_import",
                file,
                &format!("Stored roster version {id} with {} entries", roster.len()),
            );
        }

        RosterAction::List => {
            let versions = list_roster_versions(&mut pool)?;
            if versions.is_empty() {
                info("No roster imported yet.");
                return Ok(());
            }

            let mut table = Table::new(&["ID", "IMPORTED", "ENTRIES", "SOURCE"]);
            for v in versions {
                table.add_row(vec![
                    v.id.to_string(),
                    v.created_at,
                    v.entry_count.to_string(),
                    v.source,
                ]);
            }
            println!("{}", table.render());
        }

        RosterAction::Show { version } => {
            let (meta, roster) = match load_roster(&mut pool, *version)? {
                Some(found) => found,
                None => {
                    return Err(AppError::Config(
                        "no roster imported yet (use `roster import --file F`)".into(),
                    ));
                }
            };

            info(format!(
                "Roster version {} from {} ({})",
                meta.id, meta.source, meta.created_at
            ));

            let mut table = Table::new(&["NIP", "NAMA", "STATUS", "KEGIATAN"]);
            for e in roster.entries() {
                table.add_row(vec![
                    e.id.clone(),
                    e.name.clone(),
                    e.status.clone(),
                    e.activity.clone(),
                ]);
            }
            println!("{}", table.render());
        }
    }

    Ok(())
}
