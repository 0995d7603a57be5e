use chrono::{NaiveDate, NaiveTime};
use stafflogger::core::bucket::bucket_by_date;
use stafflogger::models::arrival::ArrivalLog;
use stafflogger::models::teaching::TeachingLog;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

fn arrival(id: i64, date: &str, time: &str) -> ArrivalLog {
    ArrivalLog {
        id,
        staff_id: 1,
        staff_name: "Jane Doe".to_string(),
        date: d(date),
        arrival_time: t(time),
        notes: None,
    }
}

fn teaching(id: i64, date: &str, start: &str, end: &str) -> TeachingLog {
    TeachingLog {
        id,
        staff_id: 1,
        staff_name: "Jane Doe".to_string(),
        class_id: 1,
        class_name: "Algebra".to_string(),
        date: d(date),
        start_time: t(start),
        end_time: t(end),
        notes: None,
    }
}

#[test]
fn test_bucket_groups_by_date() {
    let arrivals = vec![arrival(1, "2025-09-01", "08:45")];
    let teaching_logs = vec![
        teaching(1, "2025-09-01", "10:00", "11:30"),
        teaching(2, "2025-09-02", "09:00", "10:00"),
    ];

    let buckets = bucket_by_date(&arrivals, &teaching_logs);

    assert_eq!(buckets.len(), 2);

    let day1 = buckets.get(d("2025-09-01")).unwrap();
    assert!(day1.arrival.is_some());
    assert_eq!(day1.teaching.len(), 1);

    let day2 = buckets.get(d("2025-09-02")).unwrap();
    assert!(day2.arrival.is_none());
    assert_eq!(day2.teaching.len(), 1);
}

#[test]
fn test_bucket_missing_date_is_none() {
    let buckets = bucket_by_date(&[arrival(1, "2025-09-01", "08:45")], &[]);
    assert!(buckets.get(d("2025-09-02")).is_none());
}

#[test]
fn test_duplicate_arrival_last_write_wins() {
    let arrivals = vec![
        arrival(1, "2025-09-01", "08:45"),
        arrival(2, "2025-09-01", "09:30"),
    ];

    let buckets = bucket_by_date(&arrivals, &[]);

    let day = buckets.get(d("2025-09-01")).unwrap();
    let kept = day.arrival.as_ref().unwrap();
    assert_eq!(kept.id, 2);
    assert_eq!(kept.arrival_time, t("09:30"));

    // The collision is reported, not silently absorbed.
    assert_eq!(buckets.duplicate_arrivals(), &[d("2025-09-01")]);
}

#[test]
fn test_no_duplicates_reported_for_clean_input() {
    let arrivals = vec![
        arrival(1, "2025-09-01", "08:45"),
        arrival(2, "2025-09-02", "08:50"),
    ];
    let buckets = bucket_by_date(&arrivals, &[]);
    assert!(buckets.duplicate_arrivals().is_empty());
}

#[test]
fn test_teaching_sessions_keep_input_order() {
    let teaching_logs = vec![
        teaching(5, "2025-09-01", "14:00", "15:00"),
        teaching(3, "2025-09-01", "10:00", "11:30"),
        teaching(9, "2025-09-01", "08:00", "09:00"),
    ];

    let buckets = bucket_by_date(&[], &teaching_logs);
    let day = buckets.get(d("2025-09-01")).unwrap();
    let ids: Vec<i64> = day.teaching.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![5, 3, 9]);
}

#[test]
fn test_out_of_month_dates_are_still_bucketed() {
    // Bucketing does not drop anything; visibility is the calendar's job.
    let arrivals = vec![
        arrival(1, "2025-08-31", "08:45"),
        arrival(2, "2025-09-01", "08:45"),
    ];
    let buckets = bucket_by_date(&arrivals, &[]);
    assert!(buckets.get(d("2025-08-31")).is_some());
    assert!(buckets.get(d("2025-09-01")).is_some());
}

#[test]
fn test_empty_input_gives_empty_buckets() {
    let buckets = bucket_by_date(&[], &[]);
    assert!(buckets.is_empty());
    assert_eq!(buckets.len(), 0);
}
