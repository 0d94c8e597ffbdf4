#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use meetcost::libs::export::{
        default_file_name, dollars, parse_json, render_csv, render_json, render_text, ExportFormat, Exporter, CSV_HEADERS,
    };
    use meetcost::libs::history::History;
    use meetcost::libs::meeting::{AttendeeDraft, Meeting, RosterPolicy};
    use meetcost::libs::roles::Role;
    use meetcost::libs::summary::MeetingSummary;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        summaries: Vec<MeetingSummary>,
    }

    impl AsyncTestContext for ExportTestContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let summaries = vec![
                MeetingSummary {
                    meeting_id: "m-2".to_string(),
                    title: "Design review, round 2".to_string(),
                    total_cost: 123_456,
                    duration_ms: 90 * 60_000 + 30_000,
                    attendee_count: 6,
                    average_cost_per_minute: 1_365,
                    average_cost_per_attendee: 20_576,
                    completed_at: Utc.with_ymd_and_hms(2025, 2, 11, 23, 30, 0).unwrap(),
                },
                MeetingSummary {
                    meeting_id: "m-1".to_string(),
                    title: String::new(),
                    total_cost: 4_750,
                    duration_ms: 30 * 60_000,
                    attendee_count: 1,
                    average_cost_per_minute: 158,
                    average_cost_per_attendee: 4_750,
                    completed_at: Utc.with_ymd_and_hms(2025, 2, 10, 9, 0, 0).unwrap(),
                },
            ];
            ExportTestContext { temp_dir, summaries }
        }
    }

    #[test]
    fn test_dollars() {
        assert_eq!(dollars(0), "0.00");
        assert_eq!(dollars(5), "0.05");
        assert_eq!(dollars(123_456), "1234.56");
    }

    #[test]
    fn test_default_file_name() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 11).unwrap();
        assert_eq!(default_file_name(ExportFormat::Csv, date), "meeting-history-2025-02-11.csv");
        assert_eq!(default_file_name(ExportFormat::Json, date), "meeting-history-2025-02-11.json");
        assert_eq!(default_file_name(ExportFormat::Excel, date), "meeting-history-2025-02-11.xlsx");
    }

    #[test_context(ExportTestContext)]
    #[tokio::test]
    async fn test_csv_columns_and_rows(ctx: &mut ExportTestContext) {
        let csv = render_csv(&ctx.summaries).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], CSV_HEADERS.join(","));
        assert_eq!(lines[0], "date,duration_minutes,attendee_count,total_cost_dollars,cost_per_minute_dollars");
        // 90.5 minutes rounds half-up to 91.
        assert_eq!(lines[1], "2025-02-11,91,6,1234.56,13.65");
        assert_eq!(lines[2], "2025-02-10,30,1,47.50,1.58");
        assert_eq!(lines.len(), 3);

        assert_eq!(render_csv(&ctx.summaries).unwrap(), csv);
    }

    #[test]
    fn test_csv_of_empty_history_has_header_only() {
        let csv = render_csv(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }

    #[test_context(ExportTestContext)]
    #[tokio::test]
    async fn test_json_round_trip(ctx: &mut ExportTestContext) {
        let json = render_json(&ctx.summaries).unwrap();
        assert!(json.contains("\"meeting_id\": \"m-2\""));

        let parsed = parse_json(&json).unwrap();
        assert_eq!(parsed, ctx.summaries);
    }

    #[test]
    fn test_parse_json_rejects_garbage() {
        assert!(parse_json("[{\"meeting_id\": 1}]").is_err());
        assert!(parse_json("not json").is_err());
    }

    #[test_context(ExportTestContext)]
    #[tokio::test]
    async fn test_excel_has_no_text_form(ctx: &mut ExportTestContext) {
        assert!(render_text(ExportFormat::Excel, &ctx.summaries).is_err());
        assert!(render_text(ExportFormat::Csv, &ctx.summaries).is_ok());
    }

    #[test_context(ExportTestContext)]
    #[tokio::test]
    async fn test_exporter_writes_files(ctx: &mut ExportTestContext) {
        for format in [ExportFormat::Csv, ExportFormat::Json, ExportFormat::Excel] {
            let path = ctx.temp_dir.path().join(format!("history.{}", format.extension()));
            let exporter = Exporter::new(format, Some(path.clone()));

            let written = exporter.export(&ctx.summaries).unwrap();
            assert_eq!(written, path);
            assert!(std::fs::metadata(&path).unwrap().len() > 0);
        }

        let json = std::fs::read_to_string(ctx.temp_dir.path().join("history.json")).unwrap();
        assert_eq!(parse_json(&json).unwrap(), ctx.summaries);

        // xlsx files are zip archives.
        let xlsx = std::fs::read(ctx.temp_dir.path().join("history.xlsx")).unwrap();
        assert_eq!(&xlsx[..2], b"PK");
    }

    #[test]
    fn test_exporter_default_path() {
        let exporter = Exporter::new(ExportFormat::Json, None);
        let name = exporter.output_path().to_string_lossy().to_string();

        assert!(name.starts_with("meeting-history-"));
        assert!(name.ends_with(".json"));
    }

    #[test]
    fn test_json_round_trip_of_ended_meetings() {
        let start = Utc.with_ymd_and_hms(2025, 2, 12, 22, 13, 20).unwrap() + Duration::nanoseconds(123_856_789);
        let mut meeting = Meeting::new(start);
        meeting.add_attendee(AttendeeDraft::new(Role::ProductManager), &RosterPolicy::default()).unwrap();
        meeting.start(start).unwrap();

        let mut history = History::new(10);
        meeting.end(&mut history, start + Duration::minutes(30) + Duration::microseconds(400)).unwrap();

        let parsed = parse_json(&render_json(history.entries()).unwrap()).unwrap();
        assert_eq!(parsed, history.entries());
        assert_eq!(Some(parsed[0].completed_at), meeting.completed_at());
    }
}
