use crate::cli::commands::input::load_input;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportRequest, ExportStyle};
use crate::utils::date::{parse_date, parse_month};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Export {
        input,
        kind,
        format,
        out,
        date,
        month,
        force,
    } = cmd
    else {
        return Ok(());
    };

    // Argument errors first, before the input file is read.
    let request = ExportRequest {
        kind: *kind,
        format: *format,
        file: out.clone(),
        date: date.as_deref().map(parse_date).transpose()?,
        month: month.as_deref().map(parse_month).transpose()?,
        force: *force,
    };

    let loaded = load_input(input, cfg)?;
    let style = ExportStyle {
        company: &cfg.company_name,
        marker: &cfg.present_marker,
    };

    let path = ExportLogic::export(&loaded.outcome, loaded.roster.as_ref(), &request, &style)?;

    let pool = DbPool::new(&cfg.database)?;
    ttlog_quiet(
        &pool.conn,
        "export",
        kind.as_str(),
        &format!("Exported {} from {} to {}", kind.as_str(), input.file, path.display()),
    );

    Ok(())
}
