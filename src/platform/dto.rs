use serde::Deserialize;

use crate::models::{TimetableSlot, VirtualSession};

/// Collection envelope the platform backend wraps every list response in.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ItemsResponse<T> {
    #[serde(default)]
    pub items: Vec<T>,
}

/// A timetable row as the backend serves it. Every field is optional so that
/// one malformed row cannot sink the whole response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableSlotDto {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub day_of_week: Option<i32>,
    #[serde(default)]
    pub period_number: Option<i32>,
    #[serde(default)]
    pub subject_name: Option<String>,
    #[serde(default)]
    pub teacher_name: Option<String>,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub class_name: Option<String>,
}

impl TimetableSlotDto {
    /// `None` when the row is missing its id or its grid coordinate.
    pub fn into_model(self) -> Option<TimetableSlot> {
        let id = self.id.filter(|id| !id.is_empty())?;
        let day_of_week = self.day_of_week?;
        let period_number = self.period_number?;

        Some(TimetableSlot {
            id,
            day_of_week,
            period_number,
            subject_name: self.subject_name,
            teacher_name: self.teacher_name,
            room: self.room,
            start_time: self.start_time,
            end_time: self.end_time,
            class_name: self.class_name,
        })
    }
}

/// A virtual-classroom session as the backend serves it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualSessionDto {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub timetable_id: Option<String>,
    #[serde(default)]
    pub day_of_week: Option<i32>,
    #[serde(default)]
    pub period_number: Option<i32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subject_name: Option<String>,
    // Older records carry the creator's name instead of a teacher name.
    #[serde(default, alias = "createdBy")]
    pub teacher_name: Option<String>,
    #[serde(default)]
    pub meeting_url: Option<String>,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub starts_at: Option<String>,
}

impl VirtualSessionDto {
    /// `None` when the record has no usable id. Placement fields stay as they
    /// came; the composer decides whether the session is placeable.
    pub fn into_model(self) -> Option<VirtualSession> {
        let id = self.id.filter(|id| !id.is_empty())?;

        Some(VirtualSession {
            id,
            timetable_id: self.timetable_id.filter(|t| !t.is_empty()),
            day_of_week: self.day_of_week,
            period_number: self.period_number,
            title: self.title,
            subject_name: self.subject_name,
            teacher_name: self.teacher_name,
            meeting_url: self.meeting_url,
            class_name: self.class_name,
            starts_at: self.starts_at,
        })
    }
}
