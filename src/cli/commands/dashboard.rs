use crate::cli::commands::input::load_input;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregator::{aggregate, aggregate_month};
use crate::core::dashboard::{CountRow, summarize};
use crate::errors::AppResult;
use crate::models::daily::DailyAttendance;
use crate::ui::messages::header;
use crate::utils::date::parse_month;
use crate::utils::table::Table;
use chrono::Datelike;

fn print_counts(title: &str, label: &str, rows: &[CountRow]) {
    println!("{title}");
    let mut table = Table::new(&[label, "JUMLAH"]);
    for r in rows {
        table.add_row(vec![r.label.clone(), r.count.to_string()]);
    }
    println!("{}", table.render());
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Dashboard { input, month, json } = cmd else {
        return Ok(());
    };

    let month = month.as_deref().map(parse_month).transpose()?;
    let loaded = load_input(input, cfg)?;
    let roster = loaded.roster.as_ref();

    let recap = match month {
        Some((y, m)) => aggregate_month(&loaded.outcome.daily, roster, y, m)?,
        None => aggregate(&loaded.outcome.daily, roster)?,
    };
    let daily: Vec<DailyAttendance> = loaded
        .outcome
        .daily
        .into_iter()
        .filter(|d| d.date.year() == recap.year && d.date.month() == recap.month)
        .collect();

    let summary = summarize(&daily, &recap);

    if *json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    header(format!("Dashboard {}", summary.month));
    print_counts("Pekerja per tanggal", "TANGGAL", &summary.headcount_by_date);
    print_counts("Pekerja per kegiatan", "KEGIATAN", &summary.headcount_by_activity);
    print_counts("Pekerja per status", "STATUS", &summary.headcount_by_status);
    print_counts("Total per shift", "SHIFT", &summary.shift_totals);

    Ok(())
}
