#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use meetcost::libs::calculations::{current_cost, elapsed_active_ms};
    use meetcost::libs::error::GuardError;
    use meetcost::libs::history::History;
    use meetcost::libs::meeting::{AttendeeDraft, AttendeeUpdate, Meeting, MeetingStatus, RosterPolicy};
    use meetcost::libs::roles::{RateTable, Role};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap()
    }

    fn at(minutes: i64) -> DateTime<Utc> {
        t0() + Duration::minutes(minutes)
    }

    fn meeting_with(roles: &[Role]) -> Meeting {
        let mut meeting = Meeting::new(t0());
        for role in roles {
            meeting.add_attendee(AttendeeDraft::new(*role), &RosterPolicy::default()).unwrap();
        }
        meeting
    }

    fn cost_at(meeting: &Meeting, now: DateTime<Utc>) -> u64 {
        current_cost(meeting.attendees(), &meeting.timing(), now)
    }

    #[test]
    fn test_new_meeting_is_in_setup() {
        let meeting = Meeting::new(t0());

        assert_eq!(meeting.status(), MeetingStatus::Setup);
        assert!(meeting.attendees().is_empty());
        assert!(meeting.start_time().is_none());
        assert_eq!(meeting.total_paused_ms(), 0);
        assert!(!meeting.can_start());
    }

    #[test]
    fn test_start_without_attendees_is_ignored() {
        let mut meeting = Meeting::new(t0());
        let before = meeting.clone();

        assert_eq!(meeting.start(at(0)), Err(GuardError::NoAttendees));
        assert_eq!(meeting, before);
        assert_eq!(meeting.status(), MeetingStatus::Setup);
    }

    #[test]
    fn test_invalid_transitions_leave_meeting_untouched() {
        let mut meeting = meeting_with(&[Role::Designer]);
        let setup = meeting.clone();
        assert_eq!(meeting.pause(at(1)), Err(GuardError::NotRunning));
        assert_eq!(meeting.resume(at(1)), Err(GuardError::NotPaused));
        assert!(meeting.complete(at(1)).is_err());
        assert_eq!(meeting, setup);

        meeting.start(at(0)).unwrap();
        let running = meeting.clone();
        assert_eq!(meeting.start(at(2)), Err(GuardError::AlreadyStarted));
        assert_eq!(meeting.resume(at(2)), Err(GuardError::NotPaused));
        assert_eq!(meeting, running);

        meeting.complete(at(3)).unwrap();
        let completed = meeting.clone();
        assert_eq!(meeting.start(at(4)), Err(GuardError::AlreadyCompleted));
        assert_eq!(meeting.pause(at(4)), Err(GuardError::NotRunning));
        assert_eq!(meeting.toggle(at(4)), Err(GuardError::AlreadyCompleted));
        assert_eq!(meeting, completed);
    }

    #[test]
    fn test_pause_then_immediate_resume_changes_nothing() {
        let mut meeting = meeting_with(&[Role::SeniorEngineer]);
        meeting.start(at(0)).unwrap();

        let elapsed_before = elapsed_active_ms(&meeting.timing(), at(10));
        meeting.pause(at(10)).unwrap();
        meeting.resume(at(10)).unwrap();

        assert_eq!(meeting.total_paused_ms(), 0);
        assert_eq!(elapsed_active_ms(&meeting.timing(), at(10)), elapsed_before);
        assert_eq!(meeting.status(), MeetingStatus::Running);
    }

    #[test]
    fn test_cost_is_constant_while_paused() {
        let mut meeting = meeting_with(&[Role::SeniorEngineer, Role::Vp]);
        meeting.start(at(0)).unwrap();
        meeting.pause(at(20)).unwrap();

        let frozen = cost_at(&meeting, at(20));
        assert!(frozen > 0);
        assert_eq!(cost_at(&meeting, at(25)), frozen);
        assert_eq!(cost_at(&meeting, at(240)), frozen);
    }

    #[test]
    fn test_resume_accumulates_pause_time() {
        let mut meeting = meeting_with(&[Role::SeniorEngineer]);
        meeting.start(at(0)).unwrap();
        meeting.pause(at(10)).unwrap();
        meeting.resume(at(25)).unwrap();
        meeting.pause(at(30)).unwrap();
        meeting.resume(at(32)).unwrap();

        assert_eq!(meeting.total_paused_ms(), 17 * 60_000);
        assert!(meeting.paused_at().is_none());
        assert_eq!(elapsed_active_ms(&meeting.timing(), at(60)), 43 * 60_000);
        // start_time is set once and kept through pauses.
        assert_eq!(meeting.start_time(), Some(at(0)));
    }

    #[test]
    fn test_toggle_cycles_through_states() {
        let mut meeting = meeting_with(&[Role::Designer]);

        assert_eq!(meeting.toggle(at(0)), Ok(MeetingStatus::Running));
        assert_eq!(meeting.toggle(at(5)), Ok(MeetingStatus::Paused));
        assert_eq!(meeting.toggle(at(8)), Ok(MeetingStatus::Running));
        assert_eq!(meeting.total_paused_ms(), 3 * 60_000);
    }

    #[test]
    fn test_end_records_exactly_one_summary() {
        let mut meeting = meeting_with(&[Role::SeniorEngineer, Role::JuniorEngineer]);
        meeting.set_title("Planning");
        let mut history = History::new(10);

        meeting.start(at(0)).unwrap();
        let expected = cost_at(&meeting, at(60));
        let summary = meeting.end(&mut history, at(60)).unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(summary.total_cost, expected);
        assert_eq!(summary.total_cost, 17_000);
        assert_eq!(summary.duration_ms, 60 * 60_000);
        assert_eq!(summary.attendee_count, 2);
        assert_eq!(summary.average_cost_per_minute, 283);
        assert_eq!(summary.average_cost_per_attendee, 8_500);
        assert_eq!(summary.title, "Planning");
        assert_eq!(summary.meeting_id, meeting.id());
        assert_eq!(history.latest(), Some(&summary));

        assert!(meeting.end(&mut history, at(61)).is_err());
        assert_eq!(history.len(), 1);
        assert_eq!(meeting.status(), MeetingStatus::Completed);
        assert_eq!(meeting.completed_at(), Some(at(60)));
    }

    #[test]
    fn test_end_while_paused_folds_in_the_pause() {
        let mut meeting = meeting_with(&[Role::SeniorEngineer]);
        let mut history = History::new(10);
        meeting.start(at(0)).unwrap();
        meeting.pause(at(30)).unwrap();

        let summary = meeting.end(&mut history, at(50)).unwrap();

        assert_eq!(meeting.total_paused_ms(), 20 * 60_000);
        assert!(meeting.paused_at().is_none());
        assert_eq!(summary.duration_ms, 30 * 60_000);
        assert_eq!(summary.total_cost, 4_750);
    }

    #[test]
    fn test_end_with_zero_duration() {
        let mut meeting = meeting_with(&[Role::SeniorEngineer]);
        let mut history = History::new(10);
        meeting.start(at(0)).unwrap();

        let summary = meeting.end(&mut history, at(0)).unwrap();
        assert_eq!(summary.total_cost, 0);
        assert_eq!(summary.average_cost_per_minute, 0);
    }

    #[test]
    fn test_reset_creates_fresh_meeting() {
        let mut meeting = meeting_with(&[Role::SeniorEngineer]);
        meeting.start(at(0)).unwrap();
        let old_id = meeting.id().to_string();

        meeting.reset(at(5));

        assert_ne!(meeting.id(), old_id);
        assert_eq!(meeting.status(), MeetingStatus::Setup);
        assert!(meeting.attendees().is_empty());
        assert!(meeting.start_time().is_none());
        assert_eq!(meeting.created_at(), at(5));
    }

    #[test]
    fn test_roster_cap() {
        let policy = RosterPolicy {
            rates: RateTable::default(),
            max_attendees: 2,
        };
        let mut meeting = Meeting::new(t0());

        assert!(meeting.add_attendee(AttendeeDraft::new(Role::Designer), &policy).is_ok());
        assert!(meeting.add_attendee(AttendeeDraft::new(Role::Designer), &policy).is_ok());
        assert_eq!(
            meeting.add_attendee(AttendeeDraft::new(Role::Designer), &policy).err(),
            Some(GuardError::RosterFull { max: 2 })
        );
        assert_eq!(meeting.attendees().len(), 2);

        meeting.clear_attendees();
        let added = meeting.add_quick_attendees(&[Role::Vp, Role::Custom, Role::Director, Role::CSuite], &policy);
        assert_eq!(added, 2);
        assert_eq!(meeting.attendees()[0].role, Role::Vp);
        assert_eq!(meeting.attendees()[1].role, Role::Director);
    }

    #[test]
    fn test_custom_role_needs_rate() {
        let mut meeting = Meeting::new(t0());
        let policy = RosterPolicy::default();

        assert_eq!(
            meeting.add_attendee(AttendeeDraft::new(Role::Custom), &policy).err(),
            Some(GuardError::MissingCustomRate)
        );

        let added = meeting
            .add_attendee(AttendeeDraft::new(Role::Custom).with_rate(4_200).with_name("Contractor"), &policy)
            .unwrap();
        assert_eq!(added.hourly_rate, 4_200);
        assert!(added.is_custom_rate);
        assert_eq!(added.label(), "Contractor");
    }

    #[test]
    fn test_switching_to_custom_role_needs_rate() {
        let mut meeting = meeting_with(&[Role::Designer]);
        let id = meeting.attendees()[0].id.clone();
        let before = meeting.clone();

        let refused = meeting.update_attendee(
            &id,
            AttendeeUpdate {
                name: Some("Freelancer".to_string()),
                role: Some(Role::Custom),
                ..Default::default()
            },
            &RateTable::default(),
        );
        assert_eq!(refused.err(), Some(GuardError::MissingCustomRate));
        assert_eq!(meeting, before);

        let updated = meeting
            .update_attendee(
                &id,
                AttendeeUpdate {
                    role: Some(Role::Custom),
                    hourly_rate: Some(6_000),
                    ..Default::default()
                },
                &RateTable::default(),
            )
            .unwrap();
        assert_eq!(updated.role, Role::Custom);
        assert_eq!(updated.hourly_rate, 6_000);
        assert!(updated.is_custom_rate);
    }

    #[test]
    fn test_preset_attendee_gets_preset_rate() {
        let meeting = meeting_with(&[Role::EngineeringManager]);
        let attendee = &meeting.attendees()[0];

        assert_eq!(attendee.hourly_rate, 12_000);
        assert!(!attendee.is_custom_rate);
        assert_eq!(attendee.label(), "Engineering Manager");
    }

    #[test]
    fn test_update_and_remove_attendee() {
        let mut meeting = meeting_with(&[Role::SeniorEngineer, Role::Designer]);
        let rates = RateTable::default();
        let id = meeting.attendee_at(1).unwrap().id.clone();

        let updated = meeting
            .update_attendee(
                &id,
                AttendeeUpdate {
                    name: Some("Ada".to_string()),
                    role: Some(Role::Director),
                    ..Default::default()
                },
                &rates,
            )
            .unwrap();
        assert_eq!(updated.hourly_rate, 15_000);
        assert_eq!(updated.label(), "Ada");
        assert!(!updated.is_custom_rate);

        let updated = meeting
            .update_attendee(
                &id,
                AttendeeUpdate {
                    hourly_rate: Some(16_000),
                    ..Default::default()
                },
                &rates,
            )
            .unwrap();
        assert_eq!(updated.hourly_rate, 16_000);
        assert!(updated.is_custom_rate);

        let removed = meeting.remove_attendee(&id).unwrap();
        assert_eq!(removed.name, "Ada");
        assert_eq!(meeting.attendees().len(), 1);
        assert_eq!(
            meeting.remove_attendee(&id),
            Err(GuardError::AttendeeNotFound(id.clone()))
        );
        assert!(meeting.attendee_at(0).is_none());
        assert!(meeting.attendee_at(2).is_none());
    }

    #[test]
    fn test_rate_change_reprices_elapsed_time() {
        let mut meeting = meeting_with(&[Role::SeniorEngineer]);
        meeting.start(at(0)).unwrap();
        assert_eq!(cost_at(&meeting, at(60)), 9_500);

        let id = meeting.attendees()[0].id.clone();
        meeting
            .update_attendee(
                &id,
                AttendeeUpdate {
                    hourly_rate: Some(10_000),
                    ..Default::default()
                },
                &RateTable::default(),
            )
            .unwrap();

        assert_eq!(cost_at(&meeting, at(60)), 10_000);
    }

    #[test]
    fn test_meeting_survives_json_round_trip() {
        let mut meeting = meeting_with(&[Role::SeniorEngineer, Role::Vp]);
        meeting.set_title("Retro");
        meeting.start(at(0)).unwrap();
        meeting.pause(at(7)).unwrap();

        let json = serde_json::to_string(&meeting).unwrap();
        assert!(json.contains("\"status\":\"paused\""));
        assert!(json.contains("\"role\":\"senior_engineer\""));

        let restored: Meeting = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, meeting);
    }

    #[test]
    fn test_transitions_keep_millisecond_precision() {
        let start = t0() + Duration::nanoseconds(123_856_789);
        let mut meeting = Meeting::new(start);
        meeting.add_attendee(AttendeeDraft::new(Role::SeniorEngineer), &RosterPolicy::default()).unwrap();
        meeting.start(start).unwrap();
        meeting.pause(start + Duration::minutes(10) + Duration::microseconds(400)).unwrap();

        assert_eq!(meeting.created_at(), t0() + Duration::milliseconds(123));
        assert_eq!(meeting.start_time(), Some(t0() + Duration::milliseconds(123)));
        assert_eq!(meeting.paused_at(), Some(t0() + Duration::minutes(10) + Duration::milliseconds(124)));

        let json = serde_json::to_string(&meeting).unwrap();
        assert_eq!(serde_json::from_str::<Meeting>(&json).unwrap(), meeting);
    }
}
