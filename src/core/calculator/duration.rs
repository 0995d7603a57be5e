use chrono::NaiveTime;

/// Elapsed teaching time in hours, rounded to two decimal places.
///
/// Both times are on the same calendar date. Callers must reject
/// `end <= start` before calling (see the teaching-log validation);
/// this function does not clamp or reorder its inputs.
pub fn teaching_hours(start: NaiveTime, end: NaiveTime) -> f64 {
    let minutes = (end - start).num_minutes() as f64;
    (minutes / 60.0 * 100.0).round() / 100.0
}

/// Display form with exactly two decimals ("1.50", "0.50").
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}
