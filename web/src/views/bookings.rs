use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

use crate::api::DataSource;
use crate::components::{BookingCard, ErrorView, LoadingView, RequireAuth};
use crate::server::get_user_bookings;
use crate::session::use_session;

#[component]
pub fn BookingsPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <BookingList />
        </RequireAuth>
    }
}

#[component]
fn BookingList() -> impl IntoView {
    let session = use_session();

    let bookings_resource = Resource::new(
        move || session.access_token(),
        |token| async move {
            match token {
                Some(token) => get_user_bookings(token).await,
                None => Err(ServerFnError::new("You are not signed in".to_string())),
            }
        },
    );

    view! {
        <div class="bookings-page">
            <div class="bookings-header">
                <h1>"My Bookings"</h1>
                <p class="bookings-subtitle">"Tickets you have booked, newest first"</p>
            </div>

            <Suspense fallback=move || view! { <LoadingView message=Some("Loading your bookings...".to_string()) /> }>
                {move || bookings_resource.get().map(|result| match result {
                    Ok(listing) if listing.bookings.is_empty() => view! {
                        <div class="bookings-empty">
                            <p>"You have no bookings yet."</p>
                            <a href="/" class="bookings-empty__cta">"Browse events"</a>
                        </div>
                    }.into_any(),
                    Ok(listing) => view! {
                        {(listing.source == DataSource::Fallback).then(|| view! {
                            <MessageBar intent=MessageBarIntent::Info>
                                "Live booking data is unavailable, showing sample bookings."
                            </MessageBar>
                        })}
                        <div class="bookings-list">
                            {listing.bookings.into_iter().map(|booking| view! { <BookingCard booking=booking /> }).collect::<Vec<_>>()}
                        </div>
                    }.into_any(),
                    Err(e) => view! { <ErrorView message=Some(e.to_string()) /> }.into_any(),
                })}
            </Suspense>
        </div>
    }
}
