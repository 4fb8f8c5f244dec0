use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api::DataSource;
use crate::booking::{bookable_tickets, book_now, format_price, BookNow, BookingSelection, SeatId, SeatToggle, SeatingPlan};
use crate::components::{ErrorView, LoadingView, NoticeView, SeatMap, TicketQuantityInput};
use crate::server::{get_event, EventDetail};
use crate::session::use_session;
use crate::utils::format::format_event_date;

#[component]
pub fn EventDetailPage() -> impl IntoView {
    let params = use_params_map();
    let event_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    let event_resource = Resource::new(move || event_id.get(), |id| async move { get_event(id).await });

    view! {
        <div class="event-detail-page">
            <Suspense fallback=move || view! { <LoadingView message=Some("Loading event...".to_string()) /> }>
                {move || event_resource.get().map(|result| match result {
                    Ok(detail) => view! { <EventBooking detail=detail /> }.into_any(),
                    Err(e) => view! {
                        <ErrorView message=Some(e.to_string()) />
                        <a href="/" class="event-detail__back">"← Back to events"</a>
                    }.into_any(),
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn EventBooking(detail: EventDetail) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let event = StoredValue::new(detail.event);
    let plan = event.with_value(|event| event.seating.as_ref().map(SeatingPlan::from));
    let selection = RwSignal::new(event.with_value(BookingSelection::for_event));
    let notice = RwSignal::new(None::<String>);

    let (unit_price, currency, sold_out) = event.with_value(|event| {
        (event.price, event.currency.clone(), bookable_tickets(event) == 0)
    });

    let quantity = Signal::derive(move || selection.with(|s| s.quantity().value()));
    let max_available = Signal::derive(move || selection.with(|s| s.quantity().max_available()));
    let seats = Signal::derive(move || selection.with(|s| s.seats().clone()));

    let on_quantity_change = move |value: u32| {
        selection.update(|s| {
            s.set_quantity(value);
        });
        notice.set(None);
    };

    let seat_plan = plan.clone();
    let on_seat_click = {
        let plan = StoredValue::new(seat_plan);
        move |seat: SeatId| {
            let Some(outcome) = plan.with_value(|plan| {
                plan.as_ref().map(|plan| {
                    let mut outcome = SeatToggle::OutOfPlan;
                    selection.update(|s| outcome = s.toggle_seat(plan, seat));
                    outcome
                })
            }) else {
                return;
            };
            if outcome == SeatToggle::LimitReached {
                let max = selection.with_untracked(|s| s.quantity().value());
                notice.set(Some(format!(
                    "You can select up to {} seat(s). Increase the ticket quantity to pick more.",
                    max
                )));
            } else if outcome.changed() {
                notice.set(None);
            }
        }
    };

    let total = {
        let currency = currency.clone();
        move || format_price(selection.with(|s| s.total_cents(unit_price)), &currency)
    };

    let on_book_now = move |_| {
        let id = event.with_value(|event| event.id.clone());
        let decision = selection.with_untracked(|s| book_now(&id, session.is_authenticated(), s));
        match decision {
            BookNow::LoginRedirect(url) | BookNow::Checkout(url) => {
                navigate(&url, Default::default());
            }
            BookNow::SelectSeats { remaining } => {
                notice.set(Some(format!("Please select {} more seat(s) before booking.", remaining)));
            }
        }
    };

    view! {
        <article class="event-detail">
            <header class="event-detail__header">
                <span class="event-detail__category">{event.with_value(|e| e.category.clone())}</span>
                <h1 class="event-detail__title">{event.with_value(|e| e.title.clone())}</h1>
                <p class="event-detail__date">{event.with_value(|e| format_event_date(&e.date_time))}</p>
                <p class="event-detail__venue">{event.with_value(|e| format!("{}, {}", e.venue, e.city))}</p>
                {(detail.source == DataSource::Fallback).then(|| view! {
                    <p class="event-detail__notice">"Showing saved event details while live data is unavailable."</p>
                })}
            </header>

            <p class="event-detail__description">{event.with_value(|e| e.description.clone())}</p>

            <section class="event-detail__booking">
                <h2>"Tickets"</h2>
                <p class="event-detail__unit-price">
                    {format!("{} per ticket", format_price(u64::from(unit_price), &currency))}
                </p>

                <Show
                    when=move || !sold_out
                    fallback=|| view! { <p class="event-detail__sold-out">"This event is sold out."</p> }
                >
                    <TicketQuantityInput
                        value=quantity
                        max_available=max_available
                        on_change=on_quantity_change
                    />
                </Show>

                {plan.filter(|_| !sold_out).map(|plan| view! {
                    <div class="event-detail__seating">
                        <h3>"Choose your seats"</h3>
                        <p class="event-detail__seat-count">
                            {move || selection.with(|s| format!(
                                "{} of {} selected",
                                s.seats().len(),
                                s.quantity().value()
                            ))}
                        </p>
                        <SeatMap plan=plan selection=seats on_seat_click=on_seat_click />
                    </div>
                })}

                <NoticeView notice=notice />

                <div class="event-detail__summary">
                    <span>"Total"</span>
                    <strong class="event-detail__total">{total}</strong>
                </div>

                <button
                    class="event-detail__book-btn"
                    disabled=sold_out
                    on:click=on_book_now
                >
                    "Book Now"
                </button>
            </section>
        </article>
    }
}
