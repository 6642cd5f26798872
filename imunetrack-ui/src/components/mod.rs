//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod admin_panel;
pub mod calendar;
pub mod dose_list;
pub mod form_errors;
pub mod loading;
pub mod schedule_form;
pub mod settings_modal;
pub mod sidebar;
pub mod toast;

pub use admin_panel::AdminPanelView;
pub use calendar::Calendar;
pub use dose_list::DoseListView;
pub use form_errors::FormErrors;
pub use loading::{ListSkeleton, Loading};
pub use schedule_form::ScheduleFormView;
pub use settings_modal::SettingsModal;
pub use sidebar::Sidebar;
pub use toast::Toast;
