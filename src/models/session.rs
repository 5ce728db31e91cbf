use serde::{Deserialize, Serialize};

/// An ad-hoc online class meeting.
///
/// Linked when `timetable_id` names a timetable slot; free when it instead
/// carries its own `(day_of_week, period_number)` grid coordinate. A session
/// with neither cannot be placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualSession {
    pub id: String,
    pub timetable_id: Option<String>,
    pub day_of_week: Option<i32>,
    pub period_number: Option<i32>,
    pub title: Option<String>,
    pub subject_name: Option<String>,
    pub teacher_name: Option<String>,
    pub meeting_url: Option<String>,
    pub class_name: Option<String>,
    pub starts_at: Option<String>,
}
