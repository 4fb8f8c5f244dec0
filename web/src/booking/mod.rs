//! Client-side ticket selection state. Everything here is plain data with
//! no reactive dependencies so it can be driven from components and tested
//! directly.

pub mod flow;
pub mod quantity;
pub mod seating;
pub mod selection;

pub use flow::{book_now, BookNow, CheckoutError, CheckoutRequest};
pub use quantity::TicketQuantity;
pub use seating::{join_seats, SeatId, SeatSelection, SeatStatus, SeatToggle, SeatingPlan};
pub use selection::{bookable_tickets, format_price, ticket_kind, BookingSelection, TicketKind};
