use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::duration;
use crate::core::report::{filter_report, DateRange};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::date;
use crate::utils::table::{Column, Table};

/// Print a report of arrivals and teaching sessions, optionally narrowed
/// to a date range and a single staff member.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { from, to, staff } = cmd {
        let range = DateRange::new(
            date::parse_optional_date(from.as_deref())?,
            date::parse_optional_date(to.as_deref())?,
        );

        let pool = DbPool::new(&cfg.database)?;

        let arrivals = queries::list_arrival_logs(&pool.conn, None, DateRange::default())?;
        let teaching = queries::list_teaching_logs(&pool.conn, None, DateRange::default())?;

        let selection = filter_report(&arrivals, &teaching, range, *staff);

        if selection.is_empty() {
            println!("No logs found for the selected criteria.");
            return Ok(());
        }

        if !selection.arrivals.is_empty() {
            header("Arrivals");
            let mut table = Table::new(vec![
                Column::new("DATE", 12),
                Column::new("STAFF", 24),
                Column::new("TIME", 6),
                Column::new("NOTES", 30),
            ]);
            for log in &selection.arrivals {
                table.add_row(vec![
                    log.date_str(),
                    log.staff_name.clone(),
                    log.time_str(),
                    log.notes.clone().unwrap_or_default(),
                ]);
            }
            print!("{}", table.render());
        }

        if !selection.teaching.is_empty() {
            header("Teaching sessions");
            let mut table = Table::new(vec![
                Column::new("DATE", 12),
                Column::new("STAFF", 24),
                Column::new("CLASS", 20),
                Column::new("START", 6),
                Column::new("END", 6),
                Column::new("HOURS", 6),
                Column::new("NOTES", 24),
            ]);
            let mut total = 0.0;
            for log in &selection.teaching {
                let hours = duration::teaching_hours(log.start_time, log.end_time);
                total += hours;
                table.add_row(vec![
                    log.date_str(),
                    log.staff_name.clone(),
                    log.class_name.clone(),
                    log.start_str(),
                    log.end_str(),
                    duration::format_hours(hours),
                    log.notes.clone().unwrap_or_default(),
                ]);
            }
            print!("{}", table.render());
            println!("Total teaching hours: {}", duration::format_hours(total));
        }
    }
    Ok(())
}
