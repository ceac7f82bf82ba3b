pub mod admins;
pub mod auth;
pub mod dashboard;
pub mod drivers;
pub mod feedbacks;
pub mod passengers;
pub mod rides;
