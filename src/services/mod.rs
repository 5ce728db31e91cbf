pub mod composer;
pub mod schedule_service;

pub use composer::compose;
pub use schedule_service::ScheduleService;
