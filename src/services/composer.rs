use std::collections::HashMap;

use tracing::warn;

use crate::models::{
    DAYS_PER_WEEK, PERIODS_PER_DAY, PeriodRow, ScheduleCell, ScheduleGrid, TimetableSlot,
    VirtualSession,
};

/// Compose the weekly grid for one class from its fixed timetable slots and
/// its virtual-classroom sessions.
///
/// Pure and total: no I/O, deterministic for a given input order, and every
/// input shape yields a full-size grid. Malformed entries are skipped rather
/// than reported.
pub fn compose(
    class_id: &str,
    slots: &[TimetableSlot],
    sessions: &[VirtualSession],
) -> ScheduleGrid {
    let slot_index = index_slots(slots);
    let linked = index_linked_sessions(sessions);
    let free = index_free_sessions(sessions);

    let periods = (1..=PERIODS_PER_DAY)
        .map(|period_number| PeriodRow {
            period_number,
            days: (0..DAYS_PER_WEEK)
                .map(|day_of_week| {
                    resolve_cell(period_number, day_of_week, &slot_index, &linked, &free)
                })
                .collect(),
        })
        .collect();

    ScheduleGrid {
        class_id: class_id.to_string(),
        class_name: display_class_name(slots, sessions),
        periods,
    }
}

/// Index slots by (period, day). A later slot at an occupied coordinate
/// replaces the earlier one.
fn index_slots(slots: &[TimetableSlot]) -> HashMap<(i32, i32), &TimetableSlot> {
    let mut index = HashMap::new();
    for slot in slots {
        if let Some(previous) = index.insert((slot.period_number, slot.day_of_week), slot) {
            warn!(
                "duplicate timetable slot at day {} period {}: {} replaces {}",
                slot.day_of_week, slot.period_number, slot.id, previous.id
            );
        }
    }
    index
}

/// Index linked sessions by the slot id they reference. The first session per
/// slot wins.
fn index_linked_sessions(sessions: &[VirtualSession]) -> HashMap<&str, &VirtualSession> {
    let mut index: HashMap<&str, &VirtualSession> = HashMap::new();
    for session in sessions {
        let Some(timetable_id) = session.timetable_id.as_deref().filter(|id| !id.is_empty())
        else {
            continue;
        };
        if let Some(existing) = index.get(timetable_id) {
            warn!(
                "virtual session {} duplicates link to slot {} already held by {}",
                session.id, timetable_id, existing.id
            );
            continue;
        }
        index.insert(timetable_id, session);
    }
    index
}

/// Index free sessions by the (period, day) they name. First one per
/// coordinate wins; coordinates outside the grid shape are dropped.
fn index_free_sessions(sessions: &[VirtualSession]) -> HashMap<(i32, i32), &VirtualSession> {
    let mut index = HashMap::new();
    for session in sessions {
        if session
            .timetable_id
            .as_deref()
            .is_some_and(|id| !id.is_empty())
        {
            continue;
        }
        let (Some(day), Some(period)) = (session.day_of_week, session.period_number) else {
            // Neither linked nor placed on the grid: not placeable.
            continue;
        };
        if !(0..DAYS_PER_WEEK).contains(&day) || !(1..=PERIODS_PER_DAY).contains(&period) {
            warn!(
                "virtual session {} names out-of-range day {} period {}",
                session.id, day, period
            );
            continue;
        }
        index.entry((period, day)).or_insert(session);
    }
    index
}

/// A linked session surfaces through the slot occupying the cell; otherwise a
/// free session at the same coordinate shows, slot or no slot.
fn resolve_cell(
    period_number: i32,
    day_of_week: i32,
    slots: &HashMap<(i32, i32), &TimetableSlot>,
    linked: &HashMap<&str, &VirtualSession>,
    free: &HashMap<(i32, i32), &VirtualSession>,
) -> ScheduleCell {
    let key = (period_number, day_of_week);
    let slot = slots.get(&key).copied();
    let session = slot
        .and_then(|s| linked.get(s.id.as_str()).copied())
        .or_else(|| free.get(&key).copied());

    ScheduleCell {
        slot: slot.cloned(),
        session: session.cloned(),
    }
}

/// Header label: the first class name either source carries.
fn display_class_name(slots: &[TimetableSlot], sessions: &[VirtualSession]) -> String {
    slots
        .iter()
        .find_map(|slot| slot.class_name.clone().filter(|name| !name.is_empty()))
        .or_else(|| {
            sessions
                .iter()
                .find_map(|session| session.class_name.clone().filter(|name| !name.is_empty()))
        })
        .unwrap_or_default()
}
