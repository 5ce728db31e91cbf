use serde::{Deserialize, Serialize};

use super::{TimetableSlot, VirtualSession};

/// Days rendered per week, day 0 = Sunday.
pub const DAYS_PER_WEEK: i32 = 7;
/// Periods rendered per day, numbered from 1.
pub const PERIODS_PER_DAY: i32 = 8;

/// One cell of the weekly grid. Either side may be empty; a fixed slot and a
/// virtual session can share a cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleCell {
    pub slot: Option<TimetableSlot>,
    pub session: Option<VirtualSession>,
}

impl ScheduleCell {
    pub fn is_empty(&self) -> bool {
        self.slot.is_none() && self.session.is_none()
    }
}

/// One period row: the same period number across all seven days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodRow {
    pub period_number: i32,
    /// Indexed by day of week, 0 = Sunday. Always `DAYS_PER_WEEK` entries.
    pub days: Vec<ScheduleCell>,
}

/// The composed weekly schedule for one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleGrid {
    pub class_id: String,
    /// Best-effort header label; empty when neither source carries one.
    pub class_name: String,
    /// Always `PERIODS_PER_DAY` rows, period numbers 1..=8.
    pub periods: Vec<PeriodRow>,
}

impl ScheduleGrid {
    /// Cell at (period 1..=8, day 0..=6). `None` outside the declared shape.
    pub fn cell(&self, period_number: i32, day_of_week: i32) -> Option<&ScheduleCell> {
        if !(1..=PERIODS_PER_DAY).contains(&period_number)
            || !(0..DAYS_PER_WEEK).contains(&day_of_week)
        {
            return None;
        }
        self.periods
            .get((period_number - 1) as usize)
            .and_then(|row| row.days.get(day_of_week as usize))
    }
}
