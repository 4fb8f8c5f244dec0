use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use thaw::{MessageBar, MessageBarIntent};

use crate::booking::flow::event_path;
use crate::booking::{format_price, join_seats, CheckoutRequest};
use crate::components::{ErrorView, LoadingView, RequireAuth};
use crate::server::get_event;
use crate::utils::format::{format_event_date, pluralize_tickets};

#[component]
pub fn CheckoutPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <CheckoutSummary />
        </RequireAuth>
    }
}

#[component]
fn CheckoutSummary() -> impl IntoView {
    let query = use_query_map();
    let request = Memo::new(move |_| {
        query.with(|q| {
            CheckoutRequest::from_query(
                q.get("event").as_deref(),
                q.get("qty").as_deref(),
                q.get("seats").as_deref(),
            )
        })
    });

    let event_resource = Resource::new(
        move || request.get().map(|r| r.event_id),
        |event_id| async move {
            match event_id {
                Some(id) => get_event(id).await.map(Some),
                None => Ok(None),
            }
        },
    );

    view! {
        <div class="checkout-page">
            <h1>"Checkout"</h1>
            <Suspense fallback=move || view! { <LoadingView message=Some("Preparing your order...".to_string()) /> }>
                {move || event_resource.get().map(|result| {
                    match (result, request.get()) {
                        (Ok(Some(detail)), Some(request)) => {
                            let event = detail.event;
                            if let Err(e) = request.validate(&event) {
                                return view! {
                                    <ErrorView message=Some(e.to_string()) />
                                    <a href=event_path(&event.id) class="checkout-summary__back">"← Back to the event"</a>
                                }.into_any();
                            }
                            let subtotal = u64::from(request.quantity) * u64::from(event.price);
                            let seats = join_seats(&request.seats, ", ");
                            view! {
                                <section class="checkout-summary">
                                    <h2 class="checkout-summary__title">{event.title.clone()}</h2>
                                    <p>{format_event_date(&event.date_time)}</p>
                                    <p>{format!("{}, {}", event.venue, event.city)}</p>
                                    <dl class="checkout-summary__lines">
                                        <dt>"Tickets"</dt>
                                        <dd>{pluralize_tickets(request.quantity)}</dd>
                                        <dt>"Price per ticket"</dt>
                                        <dd>{format_price(u64::from(event.price), &event.currency)}</dd>
                                        {(!seats.is_empty()).then(|| view! {
                                            <dt>"Seats"</dt>
                                            <dd>{seats.clone()}</dd>
                                        })}
                                        <dt>"Total"</dt>
                                        <dd class="checkout-summary__total">{format_price(subtotal, &event.currency)}</dd>
                                    </dl>
                                    <MessageBar intent=MessageBarIntent::Info>
                                        "Online payment is not available yet. Your selection is not reserved."
                                    </MessageBar>
                                    <a href=event_path(&event.id) class="checkout-summary__back">"← Change selection"</a>
                                </section>
                            }.into_any()
                        }
                        (Err(e), _) => view! { <ErrorView message=Some(e.to_string()) /> }.into_any(),
                        _ => view! {
                            <ErrorView message=Some("This checkout link is incomplete. Pick your tickets from an event page.".to_string()) />
                        }.into_any(),
                    }
                })}
            </Suspense>
        </div>
    }
}
