use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::arrival::classify_arrival;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{self, ArrivalWrite};
use crate::errors::{AppError, AppResult};
use crate::models::arrival::ArrivalStatus;
use crate::ui::messages::{info, success};
use crate::utils::{date, time};

/// Record (or correct) a staff arrival for a date.
///
/// A second submission for the same staff/date updates the existing
/// record; the one-arrival-per-day invariant lives in the store.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Arrival {
        date: date_arg,
        staff,
        time: time_arg,
        notes,
    } = cmd
    {
        let d = date::parse_date(date_arg)?;
        let t = time::parse_time(time_arg)?;

        let pool = DbPool::new(&cfg.database)?;

        let staff_name = queries::get_staff_name(&pool.conn, *staff)?
            .ok_or(AppError::StaffNotFound(*staff))?;

        let write = queries::upsert_arrival(&pool.conn, *staff, d, t, notes.as_deref())?;

        match write {
            ArrivalWrite::Created => {
                success(format!("Arrival logged for {} on {}", staff_name, d))
            }
            ArrivalWrite::Updated => {
                success(format!("Arrival updated for {} on {}", staff_name, d))
            }
        }

        // One-shot on-time/late feedback against the configured threshold.
        let threshold = cfg.threshold_time()?;
        match classify_arrival(t, threshold) {
            ArrivalStatus::OnTime => info("You arrived on time!"),
            ArrivalStatus::Late => info("You arrived late!"),
        }

        ttlog(
            &pool.conn,
            "arrival",
            &staff.to_string(),
            &format!("arrival {} at {} ({:?})", d, time_arg, write),
        )?;
    }
    Ok(())
}
