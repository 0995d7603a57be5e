use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database schema.
///
/// Dates are stored as "YYYY-MM-DD" text and times of day as "HH:MM";
/// both are unambiguous and sort correctly as text. One arrival per
/// (staff, date) is enforced at write time by the UNIQUE constraint.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS staff (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            full_name TEXT NOT NULL,
            email     TEXT
        );

        CREATE TABLE IF NOT EXISTS classes (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            description TEXT
        );

        CREATE TABLE IF NOT EXISTS arrival_logs (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            staff_id     INTEGER NOT NULL REFERENCES staff(id),
            date         TEXT NOT NULL,         -- YYYY-MM-DD
            arrival_time TEXT NOT NULL,         -- HH:MM
            notes        TEXT,
            UNIQUE (staff_id, date)
        );

        CREATE TABLE IF NOT EXISTS teaching_logs (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            staff_id   INTEGER NOT NULL REFERENCES staff(id),
            class_id   INTEGER NOT NULL REFERENCES classes(id),
            date       TEXT NOT NULL,           -- YYYY-MM-DD
            start_time TEXT NOT NULL,           -- HH:MM
            end_time   TEXT NOT NULL,           -- HH:MM, strictly after start_time
            notes      TEXT
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        ",
    )?;
    Ok(())
}
