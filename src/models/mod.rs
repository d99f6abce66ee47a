// Data models shared across the dashboard views

pub mod athlete;
pub mod calendar_event;
pub mod performance_stat;
pub mod workout;

pub use athlete::*;
pub use calendar_event::*;
pub use performance_stat::*;
pub use workout::*;
