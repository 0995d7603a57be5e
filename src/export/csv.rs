use crate::core::calculator::duration;
use crate::errors::AppResult;
use crate::models::arrival::ArrivalLog;
use crate::models::teaching::TeachingLog;
use csv::Writer;
use std::path::Path;

/// Write arrival logs in CSV to the given file.
pub fn write_arrivals_csv(path: &Path, logs: &[ArrivalLog]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["date", "staff", "arrival_time", "notes"])?;

    for log in logs {
        wtr.write_record(&[
            log.date_str(),
            log.staff_name.clone(),
            log.time_str(),
            log.notes.clone().unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write teaching logs in CSV to the given file, duration included.
pub fn write_teaching_csv(path: &Path, logs: &[TeachingLog]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["date", "staff", "class", "start", "end", "hours", "notes"])?;

    for log in logs {
        let hours = duration::teaching_hours(log.start_time, log.end_time);
        wtr.write_record(&[
            log.date_str(),
            log.staff_name.clone(),
            log.class_name.clone(),
            log.start_str(),
            log.end_str(),
            duration::format_hours(hours),
            log.notes.clone().unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
