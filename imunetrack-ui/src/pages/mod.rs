//! Application Pages
//!
//! Top-level page components for routing.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod signup;

pub use dashboard::Dashboard;
pub use home::Home;
pub use login::Login;
pub use signup::Signup;
