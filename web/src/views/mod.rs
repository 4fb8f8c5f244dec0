pub mod auth;
pub mod bookings;
pub mod checkout;
pub mod event_detail;
pub mod home;
pub mod not_found;
