//! Planner core - timezone catalog, selection state, and hour projection
//! for the meeting planner, plus the clock and settings plumbing.

pub mod catalog;
pub mod clock;
pub mod config;
pub mod projection;
pub mod selection;

pub use catalog::{available_entries, label_for, ZoneEntry, CATALOG};
pub use clock::{Ticker, WallClock};
pub use config::{load_config, save_config, ConfigError};
pub use projection::{
    is_working_hour, project, project_in, Projection, ANCHOR_ZONE, WORK_END_HOUR, WORK_START_HOUR,
};
pub use selection::SelectionList;
