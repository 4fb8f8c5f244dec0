use shared_types::Event;

use super::quantity::TicketQuantity;
use super::seating::{SeatId, SeatSelection, SeatToggle, SeatingPlan};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketKind {
    GeneralAdmission,
    ReservedSeating,
}

pub fn ticket_kind(event: &Event) -> TicketKind {
    if event.is_reserved_seating() {
        TicketKind::ReservedSeating
    } else {
        TicketKind::GeneralAdmission
    }
}

/// Most tickets one booking can take. For reserved seating this is also
/// bounded by the seats the plan still has free.
pub fn bookable_tickets(event: &Event) -> u32 {
    match event.seating.as_ref() {
        Some(layout) => {
            let free = SeatingPlan::from(layout).available_count();
            event
                .tickets_available
                .min(u32::try_from(free).unwrap_or(u32::MAX))
        }
        None => event.tickets_available,
    }
}

/// Quantity and seats picked on an event page.
///
/// Holds `seats.len() <= quantity` after every operation.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSelection {
    kind: TicketKind,
    quantity: TicketQuantity,
    seats: SeatSelection,
}

impl BookingSelection {
    pub fn new(kind: TicketKind, max_available: u32) -> Self {
        Self {
            kind,
            quantity: TicketQuantity::new(max_available),
            seats: SeatSelection::new(),
        }
    }

    pub fn for_event(event: &Event) -> Self {
        Self::new(ticket_kind(event), bookable_tickets(event))
    }

    pub fn kind(&self) -> TicketKind {
        self.kind
    }

    pub fn quantity(&self) -> TicketQuantity {
        self.quantity
    }

    pub fn seats(&self) -> &SeatSelection {
        &self.seats
    }

    /// Sets the ticket count. Out-of-range values are ignored; lowering the
    /// count drops the most recently picked seats.
    pub fn set_quantity(&mut self, value: u32) -> bool {
        if value < 1 || value > self.quantity.max_available() {
            return false;
        }
        self.quantity = TicketQuantity::with_value(value, self.quantity.max_available());
        self.seats.truncate(value as usize);
        true
    }

    pub fn toggle_seat(&mut self, plan: &SeatingPlan, seat: SeatId) -> SeatToggle {
        let max = self.quantity.value() as usize;
        self.seats.toggle(plan, seat, max)
    }

    pub fn remaining_seats(&self) -> u32 {
        match self.kind {
            TicketKind::GeneralAdmission => 0,
            TicketKind::ReservedSeating => {
                self.quantity.value().saturating_sub(self.seats.len() as u32)
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.remaining_seats() == 0
    }

    pub fn total_cents(&self, unit_price: u32) -> u64 {
        u64::from(self.quantity.value()).saturating_mul(u64::from(unit_price))
    }
}

/// Formats minor units as a price string, e.g. `2550, "USD"` -> "$25.50".
pub fn format_price(cents: u64, currency: &str) -> String {
    let major = cents / 100;
    let minor = cents % 100;
    match currency {
        "USD" | "CAD" | "AUD" => format!("${}.{:02}", major, minor),
        "EUR" => format!("€{}.{:02}", major, minor),
        "GBP" => format!("£{}.{:02}", major, minor),
        other => format!("{}.{:02} {}", major, minor, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::SeatingLayout;

    fn seat(s: &str) -> SeatId {
        s.parse().unwrap()
    }

    #[test]
    fn lowering_quantity_truncates_front_seats() {
        let plan = SeatingPlan::new(2, 4, vec![]);
        let mut selection = BookingSelection::new(TicketKind::ReservedSeating, 6);
        selection.set_quantity(4);
        for id in ["B1", "A2", "A4", "B3"] {
            assert_eq!(selection.toggle_seat(&plan, seat(id)), SeatToggle::Selected);
        }

        assert!(selection.set_quantity(2));
        assert_eq!(selection.seats().seats(), &[seat("B1"), seat("A2")]);
        assert!(selection.seats().len() <= selection.quantity().value() as usize);
    }

    #[test]
    fn seat_limit_follows_quantity() {
        let plan = SeatingPlan::new(1, 5, vec![seat("A3")]);
        let mut selection = BookingSelection::new(TicketKind::ReservedSeating, 5);
        assert_eq!(selection.toggle_seat(&plan, seat("A1")), SeatToggle::Selected);
        assert_eq!(selection.toggle_seat(&plan, seat("A2")), SeatToggle::LimitReached);
        assert_eq!(selection.toggle_seat(&plan, seat("A3")), SeatToggle::Unavailable);
        assert!(selection.is_complete());
    }

    #[test]
    fn invalid_quantity_is_ignored() {
        let mut selection = BookingSelection::new(TicketKind::GeneralAdmission, 3);
        assert!(!selection.set_quantity(0));
        assert!(!selection.set_quantity(4));
        assert_eq!(selection.quantity().value(), 1);
    }

    #[test]
    fn reserved_seating_is_incomplete_until_all_seats_picked() {
        let plan = SeatingPlan::new(1, 4, vec![]);
        let mut selection = BookingSelection::new(TicketKind::ReservedSeating, 4);
        selection.set_quantity(2);
        assert_eq!(selection.remaining_seats(), 2);
        selection.toggle_seat(&plan, seat("A1"));
        assert!(!selection.is_complete());
        selection.toggle_seat(&plan, seat("A4"));
        assert!(selection.is_complete());
    }

    #[test]
    fn general_admission_is_always_complete() {
        let mut selection = BookingSelection::new(TicketKind::GeneralAdmission, 10);
        selection.set_quantity(7);
        assert!(selection.is_complete());
        assert_eq!(selection.total_cents(1250), 8750);
    }

    fn reserved_event(tickets_available: u32, layout: SeatingLayout) -> Event {
        Event {
            id: "evt-9".into(),
            title: "Recital".into(),
            description: String::new(),
            venue: "Small Hall".into(),
            city: "Chicago".into(),
            date_time: "2026-12-01T19:00:00Z".into(),
            category: "Classical".into(),
            image_url: None,
            price: 2000,
            currency: "USD".into(),
            tickets_available,
            seating: Some(layout),
        }
    }

    #[test]
    fn reserved_quantity_is_capped_by_free_seats() {
        let layout = SeatingLayout {
            rows: 1,
            seats_per_row: 3,
            unavailable_seats: vec!["A1".into()],
        };
        let event = reserved_event(10, layout.clone());
        let plan = SeatingPlan::from(&layout);
        assert_eq!(bookable_tickets(&event), 2);

        let mut selection = BookingSelection::for_event(&event);
        assert!(!selection.set_quantity(5));
        assert!(selection.set_quantity(2));
        selection.toggle_seat(&plan, seat("A2"));
        selection.toggle_seat(&plan, seat("A3"));
        assert!(selection.is_complete());
    }

    #[test]
    fn fully_blocked_plan_has_nothing_to_book() {
        let layout = SeatingLayout {
            rows: 1,
            seats_per_row: 2,
            unavailable_seats: vec!["A1".into(), "A2".into()],
        };
        assert_eq!(bookable_tickets(&reserved_event(40, layout)), 0);
    }

    #[test]
    fn formats_prices() {
        assert_eq!(format_price(2550, "USD"), "$25.50");
        assert_eq!(format_price(5, "EUR"), "€0.05");
        assert_eq!(format_price(100000, "JPY"), "1000.00 JPY");
    }
}
