//! Classification of active tasks into display buckets relative to a
//! reference date.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::date::LocalDate;
use crate::models::{Task, TaskView};

/// A single sort key.
pub type Comparator<'a, T> = Box<dyn Fn(&T, &T) -> Ordering + 'a>;

/// Combines comparators into one that evaluates them in order and returns the
/// first result that is not [`Ordering::Equal`].
pub fn compare_by<'a, T: 'a>(comparators: Vec<Comparator<'a, T>>) -> impl Fn(&T, &T) -> Ordering + 'a {
    move |a, b| {
        comparators
            .iter()
            .map(|compare| compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Bucket {
    Now,
    Tomorrow,
    ThisWeek,
    Next7Days,
    Later,
}

impl Bucket {
    pub const ALL: [Bucket; 5] = [
        Bucket::Now,
        Bucket::Tomorrow,
        Bucket::ThisWeek,
        Bucket::Next7Days,
        Bucket::Later,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Bucket::Now => "Now",
            Bucket::Tomorrow => "Tomorrow",
            Bucket::ThisWeek => "This week",
            Bucket::Next7Days => "Next 7 days",
            Bucket::Later => "Later",
        }
    }
}

/// Buckets in display order. Each list keeps the global sort order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buckets {
    pub now: Vec<TaskView>,
    pub tomorrow: Vec<TaskView>,
    pub this_week: Vec<TaskView>,
    pub next_7_days: Vec<TaskView>,
    pub later: Vec<TaskView>,
}

impl Buckets {
    pub fn get(&self, bucket: Bucket) -> &[TaskView] {
        match bucket {
            Bucket::Now => &self.now,
            Bucket::Tomorrow => &self.tomorrow,
            Bucket::ThisWeek => &self.this_week,
            Bucket::Next7Days => &self.next_7_days,
            Bucket::Later => &self.later,
        }
    }

    fn get_mut(&mut self, bucket: Bucket) -> &mut Vec<TaskView> {
        match bucket {
            Bucket::Now => &mut self.now,
            Bucket::Tomorrow => &mut self.tomorrow,
            Bucket::ThisWeek => &mut self.this_week,
            Bucket::Next7Days => &mut self.next_7_days,
            Bucket::Later => &mut self.later,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Bucket, &[TaskView])> {
        Bucket::ALL.into_iter().map(move |bucket| (bucket, self.get(bucket)))
    }

    pub fn len(&self) -> usize {
        Bucket::ALL.iter().map(|bucket| self.get(*bucket).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A task together with the dates it was completed on.
///
/// Only completions on the reference date matter for bucketing, so callers may
/// pass just those.
#[derive(Debug, Clone)]
pub struct BucketEntry {
    pub task: Task,
    pub completion_dates: Vec<LocalDate>,
}

impl BucketEntry {
    pub fn new(task: Task, completion_dates: Vec<LocalDate>) -> Self {
        Self { task, completion_dates }
    }

    pub fn completed_on(&self, date: LocalDate) -> bool {
        self.completion_dates.contains(&date)
    }

    /// Due today or earlier, or completed on `reference`.
    fn wants_attention(&self, reference: LocalDate) -> bool {
        !self.task.next_due_date.is_after(&reference) || self.completed_on(reference)
    }

    /// Completed on `reference` and already advanced past it.
    ///
    /// A completion that leaves the due date on `reference` (zero interval)
    /// does not count.
    fn is_completed(&self, reference: LocalDate) -> bool {
        self.completed_on(reference) && self.task.next_due_date.is_after(&reference)
    }
}

/// Chooses the bucket for a single task. First match wins.
pub fn classify(next_due_date: LocalDate, completed: bool, reference: LocalDate) -> Bucket {
    if !next_due_date.is_after(&reference) || completed {
        Bucket::Now
    } else if next_due_date == reference.add_days(1) {
        Bucket::Tomorrow
    } else if next_due_date.is_within_same_week(&reference) {
        Bucket::ThisWeek
    } else if next_due_date.is_before(&reference.add_days(8)) {
        Bucket::Next7Days
    } else {
        Bucket::Later
    }
}

/// Case-insensitive title order with a byte-order tie-break. Locale-free:
/// umlauts sort by code point, not by German collation rules.
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Sorts the entries and partitions them into buckets. Archived tasks are
/// skipped.
pub fn bucket_tasks(entries: &[BucketEntry], reference: LocalDate) -> Buckets {
    let comparators: Vec<Comparator<BucketEntry>> = vec![
        Box::new(move |a: &BucketEntry, b: &BucketEntry| {
            b.wants_attention(reference).cmp(&a.wants_attention(reference))
        }),
        Box::new(|a: &BucketEntry, b: &BucketEntry| a.task.next_due_date.cmp(&b.task.next_due_date)),
        Box::new(|a: &BucketEntry, b: &BucketEntry| a.task.interval_type.cmp(&b.task.interval_type)),
        Box::new(|a: &BucketEntry, b: &BucketEntry| a.task.interval_count.cmp(&b.task.interval_count)),
        Box::new(|a: &BucketEntry, b: &BucketEntry| compare_titles(&a.task.title, &b.task.title)),
    ];
    let comparator = compare_by(comparators);

    let mut active: Vec<&BucketEntry> = entries.iter().filter(|e| !e.task.archived).collect();
    active.sort_by(|a, b| comparator(*a, *b));

    let mut buckets = Buckets::default();
    for entry in active {
        let completed = entry.is_completed(reference);
        let task = &entry.task;
        let bucket = classify(task.next_due_date, completed, reference);

        buckets.get_mut(bucket).push(TaskView {
            id: task.id,
            title: task.title.clone(),
            next_due_date: task.next_due_date,
            interval_count: task.interval_count,
            interval_type: task.interval_type,
            completed,
        });
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IntervalType, RepeatMode};
    use chrono::Utc;
    use rstest::rstest;

    fn date(iso: &str) -> LocalDate {
        LocalDate::parse(iso).unwrap()
    }

    fn task(id: i64, title: &str, due: &str) -> Task {
        Task {
            id,
            title: title.to_string(),
            next_due_date: date(due),
            interval_count: 1,
            interval_type: IntervalType::Days,
            repeat_mode: RepeatMode::FromDueDate,
            archived: false,
            created_at: Utc::now(),
        }
    }

    fn entry(id: i64, title: &str, due: &str) -> BucketEntry {
        BucketEntry::new(task(id, title, due), vec![])
    }

    fn ids(views: &[TaskView]) -> Vec<i64> {
        views.iter().map(|v| v.id).collect()
    }

    #[test]
    fn test_title_order_is_locale_free() {
        let mut titles = vec!["Äpfel", "birne", "Apfel", "apfel"];
        titles.sort_by(|a, b| compare_titles(a, b));
        assert_eq!(titles, vec!["Apfel", "apfel", "birne", "Äpfel"]);
    }

    #[test]
    fn test_compare_by_first_non_equal_wins() {
        let comparators: Vec<Comparator<(i32, i32)>> = vec![
            Box::new(|a: &(i32, i32), b: &(i32, i32)| a.0.cmp(&b.0)),
            Box::new(|a: &(i32, i32), b: &(i32, i32)| b.1.cmp(&a.1)),
        ];
        let compare = compare_by(comparators);
        let mut values = vec![(2, 1), (1, 1), (1, 5), (2, 9)];
        values.sort_by(|a, b| compare(a, b));
        assert_eq!(values, vec![(1, 5), (1, 1), (2, 9), (2, 1)]);
        assert_eq!(compare(&(3, 3), &(3, 3)), Ordering::Equal);
    }

    #[test]
    fn test_bucket_scenario_monday_reference() {
        let reference = date("2025-10-20");
        let entries = vec![
            entry(5, "E", "2025-11-05"),
            entry(4, "D", "2025-10-27"),
            entry(3, "C", "2025-10-24"),
            entry(2, "B", "2025-10-21"),
            entry(1, "A", "2025-10-19"),
        ];

        let buckets = bucket_tasks(&entries, reference);
        assert_eq!(ids(&buckets.now), vec![1]);
        assert_eq!(ids(&buckets.tomorrow), vec![2]);
        assert_eq!(ids(&buckets.this_week), vec![3]);
        assert_eq!(ids(&buckets.next_7_days), vec![4]);
        assert_eq!(ids(&buckets.later), vec![5]);
        assert_eq!(buckets.len(), 5);
    }

    #[rstest]
    #[case("2025-10-19", Bucket::Now)]
    #[case("2025-10-20", Bucket::Now)]
    #[case("2025-10-21", Bucket::Tomorrow)]
    #[case("2025-10-26", Bucket::ThisWeek)]
    #[case("2025-10-27", Bucket::Next7Days)]
    #[case("2025-10-28", Bucket::Later)]
    fn test_classify_boundaries(#[case] due: &str, #[case] expected: Bucket) {
        assert_eq!(classify(date(due), false, date("2025-10-20")), expected);
    }

    #[test]
    fn test_sunday_reference_tomorrow_is_next_week() {
        let reference = date("2025-10-26");
        assert_eq!(classify(date("2025-10-27"), false, reference), Bucket::Tomorrow);
        assert_eq!(classify(date("2025-10-28"), false, reference), Bucket::Next7Days);
        assert_eq!(classify(date("2025-11-02"), false, reference), Bucket::Next7Days);
        assert_eq!(classify(date("2025-11-03"), false, reference), Bucket::Later);
    }

    #[test]
    fn test_completed_today_stays_in_now_and_sorts_first_class() {
        let reference = date("2025-10-20");
        let mut done = entry(1, "Done", "2025-10-27");
        done.completion_dates.push(reference);
        let entries = vec![entry(2, "Tomorrow", "2025-10-21"), done, entry(3, "Overdue", "2025-10-18")];

        let buckets = bucket_tasks(&entries, reference);
        // overdue sorts before the completed one because its due date is earlier
        assert_eq!(ids(&buckets.now), vec![3, 1]);
        assert!(buckets.now[1].completed);
        assert!(!buckets.now[0].completed);
        assert_eq!(ids(&buckets.tomorrow), vec![2]);
    }

    #[test]
    fn test_completion_on_other_day_is_ignored() {
        let reference = date("2025-10-20");
        let mut e = entry(1, "Yesterday", "2025-10-22");
        e.completion_dates.push(date("2025-10-19"));
        let buckets = bucket_tasks(&[e], reference);
        assert_eq!(ids(&buckets.this_week), vec![1]);
        assert!(!buckets.this_week[0].completed);
    }

    #[test]
    fn test_completed_without_advancing_is_not_flagged() {
        // interval 0: completing today leaves the due date on today
        let reference = date("2025-10-20");
        let mut t = task(1, "Zero", "2025-10-20");
        t.interval_count = 0;
        let buckets = bucket_tasks(&[BucketEntry::new(t, vec![reference])], reference);
        assert_eq!(ids(&buckets.now), vec![1]);
        assert!(!buckets.now[0].completed);
    }

    #[test]
    fn test_archived_tasks_are_skipped() {
        let mut archived = entry(1, "Old", "2025-10-19");
        archived.task.archived = true;
        let buckets = bucket_tasks(&[archived, entry(2, "New", "2025-10-19")], date("2025-10-20"));
        assert_eq!(ids(&buckets.now), vec![2]);
        assert_eq!(buckets.len(), 1);
    }

    #[test]
    fn test_tie_breaks_interval_type_count_title() {
        let reference = date("2025-10-20");
        let mut monthly = task(1, "a", "2025-10-19");
        monthly.interval_type = IntervalType::Months;
        let mut weekly = task(2, "a", "2025-10-19");
        weekly.interval_count = 7;
        let daily_b = task(3, "b", "2025-10-19");
        let daily_a_upper = task(4, "A", "2025-10-19");
        let daily_a = task(5, "a", "2025-10-19");
        let earlier = task(6, "z", "2025-10-10");

        let entries: Vec<BucketEntry> = [monthly, weekly, daily_b, daily_a_upper, daily_a, earlier]
            .into_iter()
            .map(|t| BucketEntry::new(t, vec![]))
            .collect();

        let buckets = bucket_tasks(&entries, reference);
        assert_eq!(ids(&buckets.now), vec![6, 4, 5, 3, 2, 1]);
    }

    #[test]
    fn test_bucketing_is_idempotent() {
        let reference = date("2025-10-20");
        let entries = vec![
            entry(1, "A", "2025-10-19"),
            entry(2, "B", "2025-10-25"),
            entry(3, "C", "2025-12-01"),
        ];
        assert_eq!(bucket_tasks(&entries, reference), bucket_tasks(&entries, reference));
    }

    #[test]
    fn test_buckets_serialize_with_display_names() {
        let buckets = bucket_tasks(&[entry(1, "A", "2025-10-27")], date("2025-10-20"));
        let json = serde_json::to_value(&buckets).unwrap();
        for key in ["now", "tomorrow", "thisWeek", "next7Days", "later"] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(json["next7Days"][0]["id"], 1);
    }

    #[test]
    fn test_iter_follows_display_order() {
        let buckets = Buckets::default();
        let order: Vec<Bucket> = buckets.iter().map(|(b, _)| b).collect();
        assert_eq!(order, Bucket::ALL.to_vec());
        assert!(buckets.is_empty());
    }
}
