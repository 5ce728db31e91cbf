use serde::{Deserialize, Serialize};

/// A fixed, recurring class period in a class's weekly timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableSlot {
    pub id: String,
    /// 0 = Sunday .. 6 = Saturday.
    pub day_of_week: i32,
    /// 1-based position within the daily period grid.
    pub period_number: i32,
    pub subject_name: Option<String>,
    pub teacher_name: Option<String>,
    pub room: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub class_name: Option<String>,
}
