use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::bucket::bucket_by_date;
use crate::core::calculator::duration;
use crate::core::calendar::{build_calendar, month_bounds, CalendarCell, CalendarGrid};
use crate::core::report::DateRange;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::day_bucket::DayBucket;
use crate::ui::messages::warning;
use crate::utils::date;
use chrono::Datelike;

/// Show a monthly calendar of one staff member's logs, with optional
/// per-day details.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { staff, month, day } = cmd {
        let today = date::today();

        let (year, month0) = match month {
            Some(m) => date::parse_month(m)?,
            None => (today.year(), today.month0()),
        };

        let pool = DbPool::new(&cfg.database)?;

        let staff_name = queries::get_staff_name(&pool.conn, *staff)?
            .ok_or(AppError::StaffNotFound(*staff))?;

        // Fetch one month of logs for this staff member, then aggregate.
        let (first, last) = month_bounds(year, month0);
        let range = DateRange::new(Some(first), Some(last));
        let arrivals = queries::list_arrival_logs(&pool.conn, Some(*staff), range)?;
        let teaching = queries::list_teaching_logs(&pool.conn, Some(*staff), range)?;

        let buckets = bucket_by_date(&arrivals, &teaching);

        // The store enforces one arrival per staff/date; seeing duplicates
        // here means the data violates that invariant.
        for dup in buckets.duplicate_arrivals() {
            warning(format!("More than one arrival found for {}", dup));
            ttlog(
                &pool.conn,
                "calendar",
                &staff.to_string(),
                &format!("duplicate arrival for {}", dup),
            )?;
        }

        let grid = build_calendar(year, month0, &buckets, today);

        println!("{} {} - {}", grid.month_name(), grid.year, staff_name);
        print!("{}", render_grid(&grid));
        println!("  * arrival logged   + teaching logged   [n] today");

        if let Some(day_arg) = day {
            let selected = date::parse_date(day_arg)?;
            println!();
            print_day_details(selected, buckets.get(selected));
        }
    }
    Ok(())
}

fn render_grid(grid: &CalendarGrid) -> String {
    let mut out = String::new();

    for name in ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"] {
        out.push_str(&format!("{:>4}  ", name));
    }
    out.push('\n');

    for (i, cell) in grid.cells.iter().enumerate() {
        let rendered = match cell {
            CalendarCell::Empty => "      ".to_string(),
            CalendarCell::Day {
                date,
                has_arrival,
                has_teaching,
                is_today,
            } => {
                let mut marks = String::new();
                if *has_arrival {
                    marks.push('*');
                }
                if *has_teaching {
                    marks.push('+');
                }
                let day = if *is_today {
                    format!("[{}]", date.day())
                } else {
                    date.day().to_string()
                };
                format!("{:>4}{:<2}", day, marks)
            }
        };
        out.push_str(&rendered);
        if (i + 1) % 7 == 0 {
            out.push('\n');
        }
    }
    if grid.cells.len() % 7 != 0 {
        out.push('\n');
    }

    out
}

fn print_day_details(date: chrono::NaiveDate, bucket: Option<&DayBucket>) {
    println!("Logs for {}", date.format("%A, %B %-d, %Y"));

    let Some(bucket) = bucket else {
        println!("No logs found for this date.");
        return;
    };

    if let Some(arrival) = &bucket.arrival {
        println!("Arrival time: {}", arrival.time_str());
        if let Some(notes) = &arrival.notes {
            println!("  Notes: {}", notes);
        }
    }

    for session in &bucket.teaching {
        let hours = duration::teaching_hours(session.start_time, session.end_time);
        println!(
            "Teaching: {} {}-{} ({} hours)",
            session.class_name,
            session.start_str(),
            session.end_str(),
            duration::format_hours(hours)
        );
        if let Some(notes) = &session.notes {
            println!("  Notes: {}", notes);
        }
    }

    if !bucket.has_logs() {
        println!("No logs found for this date.");
    }
}
