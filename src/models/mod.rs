pub mod grid;
pub mod session;
pub mod timetable;

pub use grid::{DAYS_PER_WEEK, PERIODS_PER_DAY, PeriodRow, ScheduleCell, ScheduleGrid};
pub use session::VirtualSession;
pub use timetable::TimetableSlot;
