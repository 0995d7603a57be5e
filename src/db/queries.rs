use crate::core::report::DateRange;
use crate::errors::{AppError, AppResult};
use crate::models::arrival::ArrivalLog;
use crate::models::class::Class;
use crate::models::staff::Staff;
use crate::models::teaching::TeachingLog;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{params, Connection, OptionalExtension, Result, Row, ToSql};

fn parse_date_col(s: String) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(s)),
        )
    })
}

fn parse_time_col(s: String) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(&s, "%H:%M").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(s)),
        )
    })
}

fn map_arrival_row(row: &Row) -> Result<ArrivalLog> {
    Ok(ArrivalLog {
        id: row.get(0)?,
        staff_id: row.get(1)?,
        staff_name: row.get(2)?,
        date: parse_date_col(row.get::<_, String>(3)?)?,
        arrival_time: parse_time_col(row.get::<_, String>(4)?)?,
        notes: row.get(5)?,
    })
}

fn map_teaching_row(row: &Row) -> Result<TeachingLog> {
    Ok(TeachingLog {
        id: row.get(0)?,
        staff_id: row.get(1)?,
        staff_name: row.get(2)?,
        class_id: row.get(3)?,
        class_name: row.get(4)?,
        date: parse_date_col(row.get::<_, String>(5)?)?,
        start_time: parse_time_col(row.get::<_, String>(6)?)?,
        end_time: parse_time_col(row.get::<_, String>(7)?)?,
        notes: row.get(8)?,
    })
}

/// Build the optional WHERE clauses shared by both log queries.
fn push_filters(
    conditions: &mut Vec<&'static str>,
    params_out: &mut Vec<Box<dyn ToSql>>,
    staff_id: Option<i64>,
    range: DateRange,
) {
    if let Some(id) = staff_id {
        conditions.push("staff_id = ?");
        params_out.push(Box::new(id));
    }
    if let Some(start) = range.start {
        conditions.push("date >= ?");
        params_out.push(Box::new(start.format("%Y-%m-%d").to_string()));
    }
    if let Some(end) = range.end {
        conditions.push("date <= ?");
        params_out.push(Box::new(end.format("%Y-%m-%d").to_string()));
    }
}

/// List arrival logs with their staff display name, newest date first.
/// The `date DESC, id ASC` order is the deterministic store order the
/// report layer preserves.
pub fn list_arrival_logs(
    conn: &Connection,
    staff_id: Option<i64>,
    range: DateRange,
) -> AppResult<Vec<ArrivalLog>> {
    let mut sql = String::from(
        "SELECT a.id, a.staff_id, s.full_name, a.date, a.arrival_time, a.notes \
         FROM arrival_logs a JOIN staff s ON s.id = a.staff_id",
    );

    let mut conditions = Vec::new();
    let mut owned: Vec<Box<dyn ToSql>> = Vec::new();
    push_filters(&mut conditions, &mut owned, staff_id, range);

    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }
    sql.push_str(" ORDER BY a.date DESC, a.id ASC");

    let mut stmt = conn.prepare_cached(&sql)?;
    let param_refs: Vec<&dyn ToSql> = owned.iter().map(|p| p.as_ref()).collect();
    let rows = stmt.query_map(param_refs.as_slice(), map_arrival_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// List teaching logs with staff and class display names, newest date first.
pub fn list_teaching_logs(
    conn: &Connection,
    staff_id: Option<i64>,
    range: DateRange,
) -> AppResult<Vec<TeachingLog>> {
    let mut sql = String::from(
        "SELECT t.id, t.staff_id, s.full_name, t.class_id, c.name, \
                t.date, t.start_time, t.end_time, t.notes \
         FROM teaching_logs t \
         JOIN staff s ON s.id = t.staff_id \
         JOIN classes c ON c.id = t.class_id",
    );

    let mut conditions = Vec::new();
    let mut owned: Vec<Box<dyn ToSql>> = Vec::new();
    push_filters(&mut conditions, &mut owned, staff_id, range);

    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }
    sql.push_str(" ORDER BY t.date DESC, t.id ASC");

    let mut stmt = conn.prepare_cached(&sql)?;
    let param_refs: Vec<&dyn ToSql> = owned.iter().map(|p| p.as_ref()).collect();
    let rows = stmt.query_map(param_refs.as_slice(), map_teaching_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Outcome of an arrival submission: a second submission for the same
/// staff/date updates the existing record instead of duplicating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrivalWrite {
    Created,
    Updated,
}

/// Insert or update the single arrival for (staff, date).
pub fn upsert_arrival(
    conn: &Connection,
    staff_id: i64,
    date: NaiveDate,
    arrival_time: NaiveTime,
    notes: Option<&str>,
) -> AppResult<ArrivalWrite> {
    let date_str = date.format("%Y-%m-%d").to_string();
    let time_str = arrival_time.format("%H:%M").to_string();

    let existing: Option<i64> = conn
        .query_row(
            "SELECT id FROM arrival_logs WHERE staff_id = ?1 AND date = ?2",
            params![staff_id, date_str],
            |r| r.get(0),
        )
        .optional()?;

    match existing {
        Some(id) => {
            conn.execute(
                "UPDATE arrival_logs SET arrival_time = ?1, notes = ?2 WHERE id = ?3",
                params![time_str, notes, id],
            )?;
            Ok(ArrivalWrite::Updated)
        }
        None => {
            conn.execute(
                "INSERT INTO arrival_logs (staff_id, date, arrival_time, notes) \
                 VALUES (?1, ?2, ?3, ?4)",
                params![staff_id, date_str, time_str, notes],
            )?;
            Ok(ArrivalWrite::Created)
        }
    }
}

/// Insert a teaching session. The time range has already been validated
/// by the caller (end strictly after start).
pub fn insert_teaching(
    conn: &Connection,
    staff_id: i64,
    class_id: i64,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    notes: Option<&str>,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO teaching_logs (staff_id, class_id, date, start_time, end_time, notes) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            staff_id,
            class_id,
            date.format("%Y-%m-%d").to_string(),
            start_time.format("%H:%M").to_string(),
            end_time.format("%H:%M").to_string(),
            notes,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn add_staff(conn: &Connection, full_name: &str, email: Option<&str>) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO staff (full_name, email) VALUES (?1, ?2)",
        params![full_name, email],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_staff(conn: &Connection) -> AppResult<Vec<Staff>> {
    let mut stmt =
        conn.prepare_cached("SELECT id, full_name, email FROM staff ORDER BY id ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok(Staff {
            id: row.get(0)?,
            full_name: row.get(1)?,
            email: row.get(2)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Display name for a staff id. `None` is a valid empty state, not an error.
pub fn get_staff_name(conn: &Connection, staff_id: i64) -> AppResult<Option<String>> {
    let name = conn
        .query_row(
            "SELECT full_name FROM staff WHERE id = ?1",
            [staff_id],
            |r| r.get(0),
        )
        .optional()?;
    Ok(name)
}

pub fn add_class(conn: &Connection, name: &str, description: Option<&str>) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO classes (name, description) VALUES (?1, ?2)",
        params![name, description],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_classes(conn: &Connection) -> AppResult<Vec<Class>> {
    let mut stmt =
        conn.prepare_cached("SELECT id, name, description FROM classes ORDER BY id ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok(Class {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_class_name(conn: &Connection, class_id: i64) -> AppResult<Option<String>> {
    let name = conn
        .query_row("SELECT name FROM classes WHERE id = ?1", [class_id], |r| {
            r.get(0)
        })
        .optional()?;
    Ok(name)
}
