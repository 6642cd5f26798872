//! State Management
//!
//! Global application state and toast notices.

pub mod global;
pub mod notice;

pub use global::{apply_preferences, provide_global_state, GlobalState};
pub use notice::Notice;
