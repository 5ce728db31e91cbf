use std::sync::Arc;

use tracing::warn;

use crate::models::ScheduleGrid;
use crate::platform::PlatformClient;
use crate::services::composer;

/// Builds composed weekly schedules from the platform's two upstream
/// collections.
pub struct ScheduleService {
    platform: Arc<dyn PlatformClient>,
}

impl ScheduleService {
    pub fn new(platform: Arc<dyn PlatformClient>) -> Self {
        Self { platform }
    }

    /// Fetch both sources for a class and compose the weekly grid.
    ///
    /// Both fetches fail soft: an upstream error collapses to an empty
    /// collection, so a partially available schedule still renders. This
    /// never returns an error.
    pub async fn class_schedule(&self, class_id: &str) -> ScheduleGrid {
        let (slots, sessions) = tokio::join!(
            self.platform.fetch_timetable(class_id),
            self.platform.fetch_virtual_sessions(class_id),
        );

        let slots = slots.unwrap_or_else(|e| {
            warn!("timetable fetch failed for class {}: {}", class_id, e);
            Vec::new()
        });
        let sessions = sessions.unwrap_or_else(|e| {
            warn!("virtual session fetch failed for class {}: {}", class_id, e);
            Vec::new()
        });

        composer::compose(class_id, &slots, &sessions)
    }
}
