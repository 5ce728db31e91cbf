use std::sync::Arc;

use async_trait::async_trait;

use classgrid::error::AppError;
use classgrid::models::{TimetableSlot, VirtualSession};
use classgrid::platform::{NoopPlatformClient, PlatformClient};
use classgrid::services::ScheduleService;

struct FailingPlatform;

#[async_trait]
impl PlatformClient for FailingPlatform {
    async fn fetch_timetable(&self, _class_id: &str) -> Result<Vec<TimetableSlot>, AppError> {
        Err(AppError::Upstream("connection refused".to_string()))
    }

    async fn fetch_virtual_sessions(
        &self,
        _class_id: &str,
    ) -> Result<Vec<VirtualSession>, AppError> {
        Err(AppError::Upstream("connection refused".to_string()))
    }
}

struct FixedPlatform {
    slots: Vec<TimetableSlot>,
    sessions: Result<Vec<VirtualSession>, String>,
}

#[async_trait]
impl PlatformClient for FixedPlatform {
    async fn fetch_timetable(&self, _class_id: &str) -> Result<Vec<TimetableSlot>, AppError> {
        Ok(self.slots.clone())
    }

    async fn fetch_virtual_sessions(
        &self,
        _class_id: &str,
    ) -> Result<Vec<VirtualSession>, AppError> {
        self.sessions
            .clone()
            .map_err(AppError::Upstream)
    }
}

fn math_slot() -> TimetableSlot {
    TimetableSlot {
        id: "t1".to_string(),
        day_of_week: 2,
        period_number: 1,
        subject_name: Some("Math".to_string()),
        teacher_name: None,
        room: None,
        start_time: None,
        end_time: None,
        class_name: Some("9B".to_string()),
    }
}

fn math_live_session() -> VirtualSession {
    VirtualSession {
        id: "v1".to_string(),
        timetable_id: Some("t1".to_string()),
        day_of_week: None,
        period_number: None,
        title: Some("Math Live".to_string()),
        subject_name: None,
        teacher_name: None,
        meeting_url: Some("https://x".to_string()),
        class_name: None,
        starts_at: None,
    }
}

#[tokio::test]
async fn upstream_failure_composes_empty_grid() {
    let service = ScheduleService::new(Arc::new(FailingPlatform));
    let grid = service.class_schedule("9b").await;

    assert_eq!(grid.class_id, "9b");
    assert_eq!(grid.class_name, "");
    assert_eq!(grid.periods.len(), 8);
    for row in &grid.periods {
        assert!(row.days.iter().all(|cell| cell.is_empty()));
    }
}

#[tokio::test]
async fn slots_survive_session_fetch_failure() {
    let platform = FixedPlatform {
        slots: vec![math_slot()],
        sessions: Err("timeout".to_string()),
    };
    let service = ScheduleService::new(Arc::new(platform));
    let grid = service.class_schedule("9b").await;

    let cell = grid.cell(1, 2).unwrap();
    assert_eq!(cell.slot.as_ref().unwrap().id, "t1");
    assert!(cell.session.is_none());
    assert_eq!(grid.class_name, "9B");
}

#[tokio::test]
async fn linked_sessions_surface_through_service() {
    let platform = FixedPlatform {
        slots: vec![math_slot()],
        sessions: Ok(vec![math_live_session()]),
    };
    let service = ScheduleService::new(Arc::new(platform));
    let grid = service.class_schedule("9b").await;

    let cell = grid.cell(1, 2).unwrap();
    assert_eq!(cell.slot.as_ref().unwrap().subject_name.as_deref(), Some("Math"));
    assert_eq!(cell.session.as_ref().unwrap().title.as_deref(), Some("Math Live"));
}

#[tokio::test]
async fn noop_platform_gives_empty_schedule() {
    let service = ScheduleService::new(Arc::new(NoopPlatformClient));
    let grid = service.class_schedule("any-class").await;

    assert!(grid.periods.iter().all(|row| row.days.iter().all(|c| c.is_empty())));
}
