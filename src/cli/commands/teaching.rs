use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::duration;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::{date, time};

/// Record a teaching session for a date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Teaching {
        date: date_arg,
        staff,
        class,
        start,
        end,
        notes,
    } = cmd
    {
        let d = date::parse_date(date_arg)?;
        let start_t = time::parse_time(start)?;
        let end_t = time::parse_time(end)?;

        // Reject the range before any duration arithmetic; never clamp.
        if end_t <= start_t {
            return Err(AppError::InvalidTimeRange {
                start: start.clone(),
                end: end.clone(),
            });
        }

        let pool = DbPool::new(&cfg.database)?;

        let staff_name = queries::get_staff_name(&pool.conn, *staff)?
            .ok_or(AppError::StaffNotFound(*staff))?;
        let class_name = queries::get_class_name(&pool.conn, *class)?
            .ok_or(AppError::ClassNotFound(*class))?;

        let id = queries::insert_teaching(
            &pool.conn,
            *staff,
            *class,
            d,
            start_t,
            end_t,
            notes.as_deref(),
        )?;

        let hours = duration::teaching_hours(start_t, end_t);
        success(format!(
            "Teaching session logged for {} ({}) on {}: {} hours",
            staff_name,
            class_name,
            d,
            duration::format_hours(hours)
        ));

        ttlog(
            &pool.conn,
            "teaching",
            &staff.to_string(),
            &format!("teaching log {} for class {} on {}", id, class, d),
        )?;
    }
    Ok(())
}
