use chrono::{NaiveDate, NaiveTime};
use stafflogger::core::report::{filter_report, DateRange};
use stafflogger::models::arrival::ArrivalLog;
use stafflogger::models::teaching::TeachingLog;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

fn arrival(id: i64, staff_id: i64, date: &str) -> ArrivalLog {
    ArrivalLog {
        id,
        staff_id,
        staff_name: format!("Staff {}", staff_id),
        date: d(date),
        arrival_time: t("08:45"),
        notes: None,
    }
}

fn teaching(id: i64, staff_id: i64, date: &str) -> TeachingLog {
    TeachingLog {
        id,
        staff_id,
        staff_name: format!("Staff {}", staff_id),
        class_id: 1,
        class_name: "Algebra".to_string(),
        date: d(date),
        start_time: t("10:00"),
        end_time: t("11:30"),
        notes: None,
    }
}

#[test]
fn test_range_is_inclusive_on_both_ends() {
    let arrivals = vec![
        arrival(1, 1, "2023-12-31"),
        arrival(2, 1, "2024-01-01"),
        arrival(3, 1, "2024-01-31"),
        arrival(4, 1, "2024-02-01"),
    ];
    let teaching_logs = vec![
        teaching(1, 1, "2024-01-01"),
        teaching(2, 1, "2024-01-31"),
        teaching(3, 1, "2024-02-15"),
    ];

    let range = DateRange::new(Some(d("2024-01-01")), Some(d("2024-01-31")));
    let selection = filter_report(&arrivals, &teaching_logs, range, None);

    let arrival_ids: Vec<i64> = selection.arrivals.iter().map(|a| a.id).collect();
    assert_eq!(arrival_ids, vec![2, 3]);

    let teaching_ids: Vec<i64> = selection.teaching.iter().map(|s| s.id).collect();
    assert_eq!(teaching_ids, vec![1, 2]);
}

#[test]
fn test_open_start_keeps_everything_up_to_end() {
    let arrivals = vec![
        arrival(1, 1, "2023-06-01"),
        arrival(2, 1, "2024-01-15"),
        arrival(3, 1, "2024-03-01"),
    ];

    let range = DateRange::new(None, Some(d("2024-01-31")));
    let selection = filter_report(&arrivals, &[], range, None);
    let ids: Vec<i64> = selection.arrivals.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_open_end_keeps_everything_from_start() {
    let arrivals = vec![
        arrival(1, 1, "2023-06-01"),
        arrival(2, 1, "2024-01-15"),
        arrival(3, 1, "2024-03-01"),
    ];

    let range = DateRange::new(Some(d("2024-01-01")), None);
    let selection = filter_report(&arrivals, &[], range, None);
    let ids: Vec<i64> = selection.arrivals.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn test_unbounded_range_keeps_all() {
    let range = DateRange::default();
    assert!(range.is_unbounded());

    let arrivals = vec![arrival(1, 1, "1999-01-01"), arrival(2, 1, "2099-12-31")];
    let selection = filter_report(&arrivals, &[], range, None);
    assert_eq!(selection.arrivals.len(), 2);
}

#[test]
fn test_staff_scope_filters_both_sequences() {
    let arrivals = vec![arrival(1, 1, "2024-01-10"), arrival(2, 2, "2024-01-10")];
    let teaching_logs = vec![teaching(1, 1, "2024-01-10"), teaching(2, 2, "2024-01-10")];

    let selection = filter_report(&arrivals, &teaching_logs, DateRange::default(), Some(2));

    assert_eq!(selection.arrivals.len(), 1);
    assert_eq!(selection.arrivals[0].staff_id, 2);
    assert_eq!(selection.teaching.len(), 1);
    assert_eq!(selection.teaching[0].staff_id, 2);
}

#[test]
fn test_filter_preserves_input_order() {
    // The store delivers newest date first; filtering must not re-sort.
    let arrivals = vec![
        arrival(7, 1, "2024-01-20"),
        arrival(4, 1, "2024-01-10"),
        arrival(9, 1, "2024-01-05"),
    ];

    let range = DateRange::new(Some(d("2024-01-01")), Some(d("2024-01-31")));
    let selection = filter_report(&arrivals, &[], range, None);
    let ids: Vec<i64> = selection.arrivals.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![7, 4, 9]);
}

#[test]
fn test_empty_selection_reports_empty() {
    let arrivals = vec![arrival(1, 1, "2024-01-10")];
    let range = DateRange::new(Some(d("2025-01-01")), Some(d("2025-12-31")));
    let selection = filter_report(&arrivals, &[], range, None);
    assert!(selection.is_empty());
}
