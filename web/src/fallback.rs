//! Embedded events and bookings served when the events API is unreachable.

use shared_types::{Booking, BookingStatus, Event, PaymentStatus, SeatingLayout, TicketLine};

fn event(
    id: &str,
    title: &str,
    venue: &str,
    city: &str,
    date_time: &str,
    category: &str,
    price: u32,
    tickets_available: u32,
    seating: Option<SeatingLayout>,
) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{} at {}, {}.", title, venue, city),
        venue: venue.to_string(),
        city: city.to_string(),
        date_time: date_time.to_string(),
        category: category.to_string(),
        image_url: None,
        price,
        currency: "USD".to_string(),
        tickets_available,
        seating,
    }
}

fn layout(rows: u8, seats_per_row: u8, unavailable: &[&str]) -> SeatingLayout {
    SeatingLayout {
        rows,
        seats_per_row,
        unavailable_seats: unavailable.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn events() -> Vec<Event> {
    vec![
        event(
            "evt-1001",
            "Midnight Jazz Sessions",
            "Blue Note Lounge",
            "New York",
            "2026-11-14T21:00:00Z",
            "Music",
            4500,
            120,
            None,
        ),
        event(
            "evt-1002",
            "City Symphony: Winter Gala",
            "Grand Concert Hall",
            "Chicago",
            "2026-12-05T19:30:00Z",
            "Classical",
            8900,
            32,
            Some(layout(6, 10, &["A3", "A4", "B7", "C1", "C2", "D5", "F10"])),
        ),
        event(
            "evt-1003",
            "Indie Film Night",
            "Riverside Cinema",
            "Austin",
            "2026-11-21T20:00:00Z",
            "Film",
            1800,
            8,
            Some(layout(4, 8, &["A1", "A2", "B4", "B5", "D8"])),
        ),
        event(
            "evt-1004",
            "Street Food Festival",
            "Pier 39 Grounds",
            "San Francisco",
            "2026-10-31T12:00:00Z",
            "Food",
            1200,
            500,
            None,
        ),
        event(
            "evt-1005",
            "Stand-up Showcase",
            "Laugh Factory",
            "Chicago",
            "2026-11-08T20:30:00Z",
            "Comedy",
            3000,
            0,
            Some(layout(3, 6, &["A1", "A2", "A3", "A4", "A5", "A6"])),
        ),
        event(
            "evt-1006",
            "Tech Leaders Summit",
            "Convention Center",
            "Austin",
            "2027-01-20T09:00:00Z",
            "Conference",
            24900,
            250,
            None,
        ),
    ]
}

pub fn find_event(id: &str) -> Option<Event> {
    events().into_iter().find(|event| event.id == id)
}

fn booking(
    id: &str,
    event: &str,
    title: &str,
    date: &str,
    status: BookingStatus,
    payment_status: PaymentStatus,
    tickets: Vec<TicketLine>,
    seats: &[&str],
) -> Booking {
    let total_amount = tickets.iter().map(TicketLine::subtotal).sum();
    Booking {
        id: id.to_string(),
        event_id: event.to_string(),
        event_title: title.to_string(),
        event_date: date.to_string(),
        status,
        payment_status,
        tickets,
        seats: seats.iter().map(|s| s.to_string()).collect(),
        total_amount,
        currency: "USD".to_string(),
    }
}

fn line(ticket_type: &str, quantity: u32, price: u32) -> TicketLine {
    TicketLine {
        ticket_type: ticket_type.to_string(),
        quantity,
        price,
    }
}

pub fn bookings() -> Vec<Booking> {
    vec![
        booking(
            "bk-2001",
            "evt-1001",
            "Midnight Jazz Sessions",
            "2026-11-14T21:00:00Z",
            BookingStatus::Confirmed,
            PaymentStatus::Completed,
            vec![line("General Admission", 2, 4500)],
            &[],
        ),
        booking(
            "bk-2002",
            "evt-1002",
            "City Symphony: Winter Gala",
            "2026-12-05T19:30:00Z",
            BookingStatus::Pending,
            PaymentStatus::Pending,
            vec![line("Reserved", 2, 8900)],
            &["E4", "E5"],
        ),
        booking(
            "bk-2003",
            "evt-0907",
            "Summer Rooftop Party",
            "2026-08-15T18:00:00Z",
            BookingStatus::Completed,
            PaymentStatus::Completed,
            vec![line("General Admission", 1, 3500), line("VIP Upgrade", 1, 2000)],
            &[],
        ),
        booking(
            "bk-2004",
            "evt-1004",
            "Street Food Festival",
            "2026-10-31T12:00:00Z",
            BookingStatus::Cancelled,
            PaymentStatus::Refunded,
            vec![line("Day Pass", 3, 1200)],
            &[],
        ),
        booking(
            "bk-2005",
            "evt-1003",
            "Indie Film Night",
            "2026-11-21T20:00:00Z",
            BookingStatus::Failed,
            PaymentStatus::Failed,
            vec![line("Reserved", 1, 1800)],
            &["C2"],
        ),
        booking(
            "bk-2006",
            "evt-0812",
            "Open Air Cinema",
            "2026-07-02T21:00:00Z",
            BookingStatus::Refunded,
            PaymentStatus::Refunded,
            vec![line("General Admission", 4, 1500)],
            &[],
        ),
    ]
}
