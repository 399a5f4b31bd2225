use crate::cli::commands::input::load_input;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::model::{DAILY_HEADERS, SUMMARY_HEADERS, daily_rows, summary_row};
use crate::export::pdf_export::daily_title;
use crate::ui::messages::header;
use crate::utils::date::parse_date;
use crate::utils::table::Table;

/// Print the classified sheet of one day, or of every day in the file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Daily { input, date } = cmd else {
        return Ok(());
    };

    let loaded = load_input(input, cfg)?;
    let outcome = &loaded.outcome;

    let dates = match date {
        Some(d) => {
            let d = parse_date(d)?;
            if outcome.for_date(d).is_empty() {
                return Err(AppError::NoRecordsForDate(d.format("%Y-%m-%d").to_string()));
            }
            vec![d]
        }
        None => outcome.dates(),
    };

    for d in dates {
        let records = outcome.for_date(d);

        header(daily_title(&cfg.company_name, d).join(" | "));

        let mut table = Table::new(&DAILY_HEADERS[..]);
        for row in daily_rows(&records, &cfg.present_marker) {
            table.add_row(row);
        }
        println!("{}", table.render());

        let mut totals = Table::new(&SUMMARY_HEADERS[..]);
        totals.add_row(summary_row(&records));
        println!("{}", totals.render());
    }

    Ok(())
}
