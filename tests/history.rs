#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use meetcost::libs::history::{History, DEFAULT_MAX_HISTORY};
    use meetcost::libs::summary::MeetingSummary;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 20, 17, 0, 0).unwrap()
    }

    fn summary(id: &str, total_cost: u64, completed_at: DateTime<Utc>) -> MeetingSummary {
        MeetingSummary {
            meeting_id: id.to_string(),
            title: format!("Meeting {}", id),
            total_cost,
            duration_ms: 30 * 60_000,
            attendee_count: 3,
            average_cost_per_minute: total_cost / 30,
            average_cost_per_attendee: total_cost / 3,
            completed_at,
        }
    }

    #[test]
    fn test_default_capacity() {
        assert_eq!(History::default().capacity(), DEFAULT_MAX_HISTORY);
        assert!(History::default().is_empty());
    }

    #[test]
    fn test_newest_first() {
        let mut history = History::new(5);
        history.push(summary("a", 100, now()));
        history.push(summary("b", 200, now()));

        let ids: Vec<&str> = history.entries().iter().map(|s| s.meeting_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(history.latest().map(|s| s.meeting_id.as_str()), Some("b"));
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut history = History::new(3);
        for i in 0..10 {
            history.push(summary(&i.to_string(), 100, now()));
            assert!(history.len() <= 3);
        }

        let ids: Vec<&str> = history.entries().iter().map(|s| s.meeting_id.as_str()).collect();
        assert_eq!(ids, vec!["9", "8", "7"]);
    }

    #[test]
    fn test_from_entries_truncates_to_capacity() {
        let entries = (0..5).map(|i| summary(&i.to_string(), 100, now())).collect();
        let history = History::from_entries(entries, 2);

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].meeting_id, "0");
    }

    #[test]
    fn test_stats() {
        let mut history = History::new(10);
        history.push(summary("old", 10_000, now() - Duration::days(30)));
        history.push(summary("recent", 5_001, now() - Duration::days(2)));
        history.push(summary("today", 2_000, now() - Duration::hours(1)));

        let stats = history.stats(now());
        assert_eq!(stats.count, 3);
        assert_eq!(stats.total_cost, 17_001);
        assert_eq!(stats.average_cost, 5_667);
        assert_eq!(stats.last_week_cost, 7_001);
        assert_eq!(stats.total_duration_ms, 90 * 60_000);
    }

    #[test]
    fn test_empty_stats_and_clear() {
        let mut history = History::new(10);
        assert_eq!(history.stats(now()).average_cost, 0);

        history.push(summary("a", 100, now()));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.total_cost(), 0);
    }

    #[test]
    fn test_huge_totals_saturate() {
        let mut history = History::new(10);
        history.push(summary("a", u64::MAX, now()));
        history.push(summary("b", u64::MAX, now()));

        let stats = history.stats(now());
        assert_eq!(stats.total_cost, u64::MAX);
        assert_eq!(stats.average_cost, u64::MAX);
        assert_eq!(stats.last_week_cost, u64::MAX);
    }
}
