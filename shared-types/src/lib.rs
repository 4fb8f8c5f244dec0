use serde::{Deserialize, Serialize};

/// Seating layout as delivered by the events API. Seat ids are kept as raw
/// strings here; the web crate parses them into typed seats.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SeatingLayout {
    pub rows: u8,
    pub seats_per_row: u8,
    #[serde(default)]
    pub unavailable_seats: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub venue: String,
    pub city: String,
    #[serde(rename = "dateTime", alias = "eventDate")]
    pub date_time: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Price of one ticket in minor currency units.
    pub price: u32,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub tickets_available: u32,
    #[serde(default)]
    pub seating: Option<SeatingLayout>,
}

impl Event {
    pub fn is_reserved_seating(&self) -> bool {
        self.seating.is_some()
    }

    pub fn is_sold_out(&self) -> bool {
        self.tickets_available == 0
    }
}

fn default_currency() -> String {
    "USD".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    Failed,
    Refunded,
}

impl BookingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::Failed => "Failed",
            BookingStatus::Refunded => "Refunded",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Failed => "failed",
            BookingStatus::Refunded => "refunded",
        }
    }

    /// Whether the booking still grants entry to the event.
    pub fn is_active(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Payment pending",
            PaymentStatus::Completed => "Paid",
            PaymentStatus::Failed => "Payment failed",
            PaymentStatus::Refunded => "Refunded",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TicketLine {
    #[serde(alias = "type")]
    pub ticket_type: String,
    pub quantity: u32,
    /// Unit price in minor currency units.
    pub price: u32,
}

impl TicketLine {
    pub fn subtotal(&self) -> u64 {
        u64::from(self.quantity) * u64::from(self.price)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(alias = "event")]
    pub event_id: String,
    #[serde(default)]
    pub event_title: String,
    #[serde(rename = "eventDate", alias = "dateTime")]
    pub event_date: String,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub tickets: Vec<TicketLine>,
    #[serde(default)]
    pub seats: Vec<String>,
    /// Total in minor currency units.
    pub total_amount: u64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Booking {
    pub fn ticket_count(&self) -> u32 {
        self.tickets.iter().map(|t| t.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_accepts_underscore_id_and_event_date() {
        let json = r#"{
            "_id": "evt-1",
            "title": "Jazz Night",
            "venue": "Blue Room",
            "city": "Austin",
            "eventDate": "2026-11-02T20:00:00Z",
            "price": 2500,
            "ticketsAvailable": 40
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, "evt-1");
        assert_eq!(event.date_time, "2026-11-02T20:00:00Z");
        assert_eq!(event.currency, "USD");
        assert!(!event.is_reserved_seating());
    }

    #[test]
    fn event_with_seating_is_reserved() {
        let json = r#"{
            "id": "evt-2",
            "title": "Symphony",
            "venue": "Hall",
            "city": "Denver",
            "dateTime": "2026-12-01T19:00:00Z",
            "price": 9000,
            "ticketsAvailable": 0,
            "seating": { "rows": 3, "seatsPerRow": 4, "unavailableSeats": ["A3"] }
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert!(event.is_reserved_seating());
        assert!(event.is_sold_out());
        assert_eq!(
            event.seating.unwrap().unavailable_seats,
            vec!["A3".to_string()]
        );
    }

    #[test]
    fn booking_statuses_are_lowercase_on_the_wire() {
        let json = r#"{
            "_id": "bk-9",
            "event": "evt-1",
            "dateTime": "2026-11-02T20:00:00Z",
            "status": "refunded",
            "paymentStatus": "refunded",
            "tickets": [{ "type": "General", "quantity": 2, "price": 2500 }],
            "totalAmount": 5000
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.status, BookingStatus::Refunded);
        assert_eq!(booking.payment_status, PaymentStatus::Refunded);
        assert_eq!(booking.event_id, "evt-1");
        assert_eq!(booking.ticket_count(), 2);
        assert_eq!(booking.tickets[0].subtotal(), 5000);

        let out = serde_json::to_value(&booking).unwrap();
        assert_eq!(out["status"], "refunded");
        assert_eq!(out["eventDate"], "2026-11-02T20:00:00Z");
    }

    #[test]
    fn only_pending_and_confirmed_are_active() {
        assert!(BookingStatus::Pending.is_active());
        assert!(BookingStatus::Confirmed.is_active());
        assert!(!BookingStatus::Cancelled.is_active());
        assert!(!BookingStatus::Completed.is_active());
    }
}
