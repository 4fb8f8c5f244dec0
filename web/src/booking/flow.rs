use shared_types::Event;

use super::seating::{join_seats, SeatId, SeatingPlan};
use super::selection::{bookable_tickets, ticket_kind, BookingSelection, TicketKind};

/// Where the "Book now" button leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookNow {
    LoginRedirect(String),
    SelectSeats { remaining: u32 },
    Checkout(String),
}

pub fn event_path(event_id: &str) -> String {
    format!("/events/{}", urlencoding::encode(event_id))
}

pub fn login_path(redirect_to: &str) -> String {
    format!("/login?redirect={}", urlencoding::encode(redirect_to))
}

pub fn book_now(event_id: &str, authenticated: bool, selection: &BookingSelection) -> BookNow {
    if !authenticated {
        return BookNow::LoginRedirect(login_path(&event_path(event_id)));
    }
    if !selection.is_complete() {
        return BookNow::SelectSeats {
            remaining: selection.remaining_seats(),
        };
    }
    let request = CheckoutRequest {
        event_id: event_id.to_string(),
        quantity: selection.quantity().value(),
        seats: selection.seats().seats().to_vec(),
    };
    BookNow::Checkout(request.to_path())
}

/// Why a checkout link no longer describes a bookable order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckoutError {
    #[error("This checkout link belongs to a different event.")]
    WrongEvent,
    #[error("This event is sold out.")]
    SoldOut,
    #[error("Only {available} ticket(s) are left for this event.")]
    NotEnoughTickets { available: u32 },
    #[error("Please select {remaining} more seat(s) before checking out.")]
    SeatsMissing { remaining: u32 },
    #[error("Seat {0} cannot be booked.")]
    SeatNotBookable(SeatId),
    #[error("Seat {0} is listed more than once.")]
    DuplicateSeat(SeatId),
    #[error("This event has no reserved seats.")]
    UnexpectedSeats,
}

/// What the checkout page needs, carried in the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub event_id: String,
    pub quantity: u32,
    pub seats: Vec<SeatId>,
}

impl CheckoutRequest {
    pub fn to_path(&self) -> String {
        let mut path = format!(
            "/checkout?event={}&qty={}",
            urlencoding::encode(&self.event_id),
            self.quantity
        );
        if !self.seats.is_empty() {
            path.push_str("&seats=");
            path.push_str(&join_seats(&self.seats, ","));
        }
        path
    }

    /// Checks the request against the event as loaded now, with the same
    /// rules the event page enforces while picking tickets.
    pub fn validate(&self, event: &Event) -> Result<(), CheckoutError> {
        if self.event_id != event.id {
            return Err(CheckoutError::WrongEvent);
        }
        let available = bookable_tickets(event);
        if available == 0 {
            return Err(CheckoutError::SoldOut);
        }
        if self.quantity > available {
            return Err(CheckoutError::NotEnoughTickets { available });
        }
        match (ticket_kind(event), event.seating.as_ref()) {
            (TicketKind::ReservedSeating, Some(layout)) => {
                let plan = SeatingPlan::from(layout);
                for (i, seat) in self.seats.iter().enumerate() {
                    if !plan.contains(*seat) || plan.is_unavailable(*seat) {
                        return Err(CheckoutError::SeatNotBookable(*seat));
                    }
                    if self.seats[..i].contains(seat) {
                        return Err(CheckoutError::DuplicateSeat(*seat));
                    }
                }
                let picked = self.seats.len() as u32;
                if picked < self.quantity {
                    return Err(CheckoutError::SeatsMissing {
                        remaining: self.quantity - picked,
                    });
                }
                Ok(())
            }
            _ if !self.seats.is_empty() => Err(CheckoutError::UnexpectedSeats),
            _ => Ok(()),
        }
    }

    /// Parses already-decoded query values. Returns `None` when the event is
    /// missing, the quantity is not a positive number, or there are more
    /// seats than tickets.
    pub fn from_query(event: Option<&str>, qty: Option<&str>, seats: Option<&str>) -> Option<Self> {
        let event_id = event.map(str::trim).filter(|e| !e.is_empty())?.to_string();
        let quantity = qty?.trim().parse::<u32>().ok().filter(|q| *q >= 1)?;
        let seats = match seats.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => raw
                .split(',')
                .map(|s| s.parse::<SeatId>().ok())
                .collect::<Option<Vec<_>>>()?,
            None => Vec::new(),
        };
        if seats.len() > quantity as usize {
            return None;
        }
        Some(Self {
            event_id,
            quantity,
            seats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback;

    #[test]
    fn unauthenticated_users_go_to_login_first() {
        let selection = BookingSelection::new(TicketKind::ReservedSeating, 4);
        assert_eq!(
            book_now("evt-1", false, &selection),
            BookNow::LoginRedirect("/login?redirect=%2Fevents%2Fevt-1".to_string())
        );
    }

    #[test]
    fn incomplete_reserved_selection_asks_for_seats() {
        let mut selection = BookingSelection::new(TicketKind::ReservedSeating, 4);
        selection.set_quantity(3);
        assert_eq!(
            book_now("evt-1", true, &selection),
            BookNow::SelectSeats { remaining: 3 }
        );
    }

    #[test]
    fn complete_selection_goes_to_checkout() {
        let plan = SeatingPlan::new(2, 2, vec![]);
        let mut selection = BookingSelection::new(TicketKind::ReservedSeating, 4);
        selection.set_quantity(2);
        selection.toggle_seat(&plan, "B2".parse().unwrap());
        selection.toggle_seat(&plan, "A1".parse().unwrap());
        assert_eq!(
            book_now("evt-1", true, &selection),
            BookNow::Checkout("/checkout?event=evt-1&qty=2&seats=B2,A1".to_string())
        );

        let general = BookingSelection::new(TicketKind::GeneralAdmission, 4);
        assert_eq!(
            book_now("evt-2", true, &general),
            BookNow::Checkout("/checkout?event=evt-2&qty=1".to_string())
        );
    }

    #[test]
    fn checkout_query_is_validated() {
        let parsed = CheckoutRequest::from_query(Some("evt-1"), Some("2"), Some("A1,b3")).unwrap();
        assert_eq!(parsed.quantity, 2);
        assert_eq!(parsed.seats.len(), 2);
        assert_eq!(parsed.to_path(), "/checkout?event=evt-1&qty=2&seats=A1,B3");

        assert!(CheckoutRequest::from_query(None, Some("2"), None).is_none());
        assert!(CheckoutRequest::from_query(Some("evt-1"), Some("0"), None).is_none());
        assert!(CheckoutRequest::from_query(Some("evt-1"), Some("1"), Some("A1,A2")).is_none());
        assert!(CheckoutRequest::from_query(Some("evt-1"), Some("2"), Some("A1,??")).is_none());
    }

    fn request(event_id: &str, qty: &str, seats: Option<&str>) -> CheckoutRequest {
        CheckoutRequest::from_query(Some(event_id), Some(qty), seats).unwrap()
    }

    #[test]
    fn matching_request_passes_validation() {
        // evt-1002: 6x10 plan, 32 tickets; evt-1001: general admission.
        let symphony = fallback::find_event("evt-1002").unwrap();
        assert_eq!(request("evt-1002", "2", Some("A1,B2")).validate(&symphony), Ok(()));

        let jazz = fallback::find_event("evt-1001").unwrap();
        assert_eq!(request("evt-1001", "4", None).validate(&jazz), Ok(()));
    }

    #[test]
    fn request_for_another_event_is_rejected() {
        let jazz = fallback::find_event("evt-1001").unwrap();
        assert_eq!(
            request("evt-1004", "1", None).validate(&jazz),
            Err(CheckoutError::WrongEvent)
        );
    }

    #[test]
    fn sold_out_event_cannot_be_checked_out() {
        let showcase = fallback::find_event("evt-1005").unwrap();
        assert_eq!(
            request("evt-1005", "1", Some("B1")).validate(&showcase),
            Err(CheckoutError::SoldOut)
        );
    }

    #[test]
    fn quantity_above_availability_is_rejected() {
        // evt-1003 has 8 tickets left.
        let film = fallback::find_event("evt-1003").unwrap();
        assert_eq!(
            request("evt-1003", "9", None).validate(&film),
            Err(CheckoutError::NotEnoughTickets { available: 8 })
        );
    }

    #[test]
    fn reserved_seats_must_be_free_unique_and_complete() {
        let symphony = fallback::find_event("evt-1002").unwrap();
        let seat = |s: &str| s.parse::<SeatId>().unwrap();

        assert_eq!(
            request("evt-1002", "2", Some("A3,B1")).validate(&symphony),
            Err(CheckoutError::SeatNotBookable(seat("A3")))
        );
        assert_eq!(
            request("evt-1002", "1", Some("G1")).validate(&symphony),
            Err(CheckoutError::SeatNotBookable(seat("G1")))
        );
        assert_eq!(
            request("evt-1002", "2", Some("B1,B1")).validate(&symphony),
            Err(CheckoutError::DuplicateSeat(seat("B1")))
        );
        assert_eq!(
            request("evt-1002", "3", Some("B1")).validate(&symphony),
            Err(CheckoutError::SeatsMissing { remaining: 2 })
        );
    }

    #[test]
    fn general_admission_takes_no_seats() {
        let jazz = fallback::find_event("evt-1001").unwrap();
        assert_eq!(
            request("evt-1001", "1", Some("A1")).validate(&jazz),
            Err(CheckoutError::UnexpectedSeats)
        );
    }
}
