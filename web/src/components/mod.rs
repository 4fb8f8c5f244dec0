pub mod auth_guard;
pub mod booking_card;
pub mod city_picker;
pub mod error;
pub mod event_card;
pub mod loading;
pub mod navbar;
pub mod seat_selection;
pub mod ticket_quantity;

// Re-export commonly used types
pub use auth_guard::RequireAuth;
pub use booking_card::BookingCard;
pub use city_picker::CityPicker;
pub use error::{ErrorView, NoticeView};
pub use event_card::EventCard;
pub use loading::LoadingView;
pub use navbar::Navbar;
pub use seat_selection::SeatMap;
pub use ticket_quantity::TicketQuantityInput;
