use crate::models::arrival::ArrivalLog;
use crate::models::day_bucket::DayBucket;
use crate::models::teaching::TeachingLog;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Date-keyed view over a flat set of logs, rebuilt per aggregation call.
///
/// Keys are typed `NaiveDate` values rather than ISO strings; the ISO form
/// only appears at the presentation and storage edges.
#[derive(Debug, Default)]
pub struct DayBuckets {
    map: BTreeMap<NaiveDate, DayBucket>,
    duplicate_arrivals: Vec<NaiveDate>,
}

impl DayBuckets {
    /// Look up the bucket for a date. `None` is the normal "no logs" state,
    /// not an error.
    pub fn get(&self, date: NaiveDate) -> Option<&DayBucket> {
        self.map.get(&date)
    }

    /// Dates for which more than one arrival was seen during bucketing.
    /// The store enforces one arrival per (staff, date), so a non-empty
    /// result is a data-quality signal worth logging upstream.
    pub fn duplicate_arrivals(&self) -> &[NaiveDate] {
        &self.duplicate_arrivals
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &DayBucket)> + '_ {
        self.map.iter()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Group flat arrival and teaching sequences into per-date buckets.
///
/// Arrivals fill the single arrival slot of their date, last write winning
/// when the input violates the one-per-day invariant; teaching sessions are
/// appended in input order. Logs dated outside whatever window the caller
/// requested are still bucketed under their own date; the calendar builder
/// decides which dates are visible.
pub fn bucket_by_date(arrivals: &[ArrivalLog], teaching: &[TeachingLog]) -> DayBuckets {
    let mut buckets = DayBuckets::default();

    for log in arrivals {
        let bucket = buckets.map.entry(log.date).or_default();
        if bucket.arrival.is_some() {
            buckets.duplicate_arrivals.push(log.date);
        }
        bucket.arrival = Some(log.clone());
    }

    for log in teaching {
        buckets
            .map
            .entry(log.date)
            .or_default()
            .teaching
            .push(log.clone());
    }

    buckets
}
