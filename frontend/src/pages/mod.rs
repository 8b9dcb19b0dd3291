pub mod dashboard;
pub mod home;
