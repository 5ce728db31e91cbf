use classgrid::platform::dto::{ItemsResponse, TimetableSlotDto, VirtualSessionDto};

#[test]
fn timetable_rows_parse_and_malformed_rows_drop() {
    let body = r#"{
        "items": [
            {
                "_id": "t1",
                "dayOfWeek": 2,
                "periodNumber": 1,
                "subjectName": "Math",
                "teacherName": "A. Rivera",
                "room": "201",
                "startTime": "08:00",
                "endTime": "08:45",
                "className": "9B",
                "schoolYear": "2025/26"
            },
            {"dayOfWeek": 3, "periodNumber": 2},
            {"_id": "t2", "periodNumber": 4},
            {"_id": "", "dayOfWeek": 1, "periodNumber": 1}
        ]
    }"#;

    let parsed: ItemsResponse<TimetableSlotDto> = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.items.len(), 4);

    let slots: Vec<_> = parsed
        .items
        .into_iter()
        .filter_map(|row| row.into_model())
        .collect();

    assert_eq!(slots.len(), 1);
    let slot = &slots[0];
    assert_eq!(slot.id, "t1");
    assert_eq!(slot.day_of_week, 2);
    assert_eq!(slot.period_number, 1);
    assert_eq!(slot.subject_name.as_deref(), Some("Math"));
    assert_eq!(slot.class_name.as_deref(), Some("9B"));
}

#[test]
fn session_rows_parse_with_legacy_creator_field() {
    let body = r#"{
        "items": [
            {
                "_id": "v1",
                "timetableId": "t1",
                "title": "Math Live",
                "createdBy": "A. Rivera",
                "meetingUrl": "https://meet.example/x"
            },
            {
                "_id": "v2",
                "dayOfWeek": 4,
                "periodNumber": 3,
                "title": "Extra Session"
            },
            {"title": "no id, dropped"}
        ]
    }"#;

    let parsed: ItemsResponse<VirtualSessionDto> = serde_json::from_str(body).unwrap();
    let sessions: Vec<_> = parsed
        .items
        .into_iter()
        .filter_map(|row| row.into_model())
        .collect();

    assert_eq!(sessions.len(), 2);

    let linked = &sessions[0];
    assert_eq!(linked.id, "v1");
    assert_eq!(linked.timetable_id.as_deref(), Some("t1"));
    assert_eq!(linked.teacher_name.as_deref(), Some("A. Rivera"));

    let free = &sessions[1];
    assert_eq!(free.id, "v2");
    assert!(free.timetable_id.is_none());
    assert_eq!(free.day_of_week, Some(4));
    assert_eq!(free.period_number, Some(3));
}

#[test]
fn empty_string_timetable_id_normalizes_to_none() {
    let body = r#"{"items": [{"_id": "v1", "timetableId": "", "dayOfWeek": 1, "periodNumber": 1}]}"#;

    let parsed: ItemsResponse<VirtualSessionDto> = serde_json::from_str(body).unwrap();
    let session = parsed.items.into_iter().next().unwrap().into_model().unwrap();
    assert!(session.timetable_id.is_none());
}

#[test]
fn missing_items_field_parses_as_empty() {
    let parsed: ItemsResponse<TimetableSlotDto> = serde_json::from_str("{}").unwrap();
    assert!(parsed.items.is_empty());
}
