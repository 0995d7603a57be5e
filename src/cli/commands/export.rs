use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{filter_report, DateRange};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::export::{
    notify_export_success, write_arrivals_csv, write_json, write_teaching_csv, ExportFormat,
};
use crate::utils::date;
use std::path::Path;

/// Export arrival or teaching logs to a file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        from,
        to,
        staff,
        arrivals,
        teaching,
    } = cmd
    {
        if !arrivals && !teaching {
            return Err(AppError::Export(
                "choose what to export: --arrivals or --teaching".into(),
            ));
        }

        let range = DateRange::new(
            date::parse_optional_date(from.as_deref())?,
            date::parse_optional_date(to.as_deref())?,
        );

        let pool = DbPool::new(&cfg.database)?;

        let all_arrivals = queries::list_arrival_logs(&pool.conn, None, DateRange::default())?;
        let all_teaching = queries::list_teaching_logs(&pool.conn, None, DateRange::default())?;
        let selection = filter_report(&all_arrivals, &all_teaching, range, *staff);

        let path = Path::new(file);

        if *arrivals {
            match format {
                ExportFormat::Csv => write_arrivals_csv(path, &selection.arrivals)?,
                ExportFormat::Json => write_json(path, &selection.arrivals)?,
            }
            notify_export_success("Arrival", path);
        } else {
            match format {
                ExportFormat::Csv => write_teaching_csv(path, &selection.teaching)?,
                ExportFormat::Json => write_json(path, &selection.teaching)?,
            }
            notify_export_success("Teaching", path);
        }

        ttlog(
            &pool.conn,
            "export",
            &path.display().to_string(),
            &format!("{:?} export", format),
        )?;
    }
    Ok(())
}
