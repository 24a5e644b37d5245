//! Per-page state containers. Each page is a snapshot advanced by discrete events.

pub mod admin;
pub mod home;
pub mod login;

pub use admin::{AdminEvent, AdminState, AdminTab, SaveStatus};
pub use home::{FormStatus, HomeEvent, HomeState, LeadField};
pub use login::{LoginEvent, LoginState};
