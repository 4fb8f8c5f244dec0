use leptos::prelude::*;
use leptos_router::components::A;
use shared_types::{Booking, BookingStatus, PaymentStatus};

use crate::booking::flow::event_path;
use crate::booking::format_price;
use crate::utils::format::{format_event_date, pluralize_tickets};

pub fn status_class(status: BookingStatus) -> String {
    format!("booking-status booking-status--{}", status.as_str())
}

pub fn payment_class(status: PaymentStatus) -> String {
    format!("payment-status payment-status--{}", status.as_str())
}

#[component]
pub fn BookingCard(booking: Booking) -> impl IntoView {
    let total = format_price(booking.total_amount, &booking.currency);
    let tickets = pluralize_tickets(booking.ticket_count());
    let seats = (!booking.seats.is_empty()).then(|| booking.seats.join(", "));
    let currency = booking.currency.clone();

    view! {
        <article class={if booking.status.is_active() { "booking-card" } else { "booking-card booking-card--inactive" }}>
            <header class="booking-card__header">
                <div>
                    <h3 class="booking-card__title">
                        <A href=event_path(&booking.event_id)>{booking.event_title.clone()}</A>
                    </h3>
                    <p class="booking-card__date">{format_event_date(&booking.event_date)}</p>
                </div>
                <div class="booking-card__badges">
                    <span class=status_class(booking.status)>{booking.status.label()}</span>
                    <span class=payment_class(booking.payment_status)>{booking.payment_status.label()}</span>
                </div>
            </header>

            <ul class="booking-card__lines">
                {booking.tickets.iter().map(|line| {
                    let subtotal = format_price(line.subtotal(), &currency);
                    view! {
                        <li class="booking-card__line">
                            <span>{format!("{} × {}", line.quantity, line.ticket_type)}</span>
                            <span>{subtotal}</span>
                        </li>
                    }
                }).collect::<Vec<_>>()}
            </ul>

            {seats.map(|seats| view! { <p class="booking-card__seats">{format!("Seats: {}", seats)}</p> })}

            <footer class="booking-card__footer">
                <span class="booking-card__reference">{format!("Ref #{}", booking.id)}</span>
                <span>{tickets}</span>
                <strong class="booking-card__total">{total}</strong>
            </footer>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_classes_use_wire_names() {
        assert_eq!(status_class(BookingStatus::Cancelled), "booking-status booking-status--cancelled");
        assert_eq!(payment_class(PaymentStatus::Refunded), "payment-status payment-status--refunded");
    }
}
