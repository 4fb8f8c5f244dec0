use leptos::prelude::*;

use crate::api::DataSource;
use crate::components::{CityPicker, ErrorView, EventCard, LoadingView};
use crate::server::list_events;
use crate::utils::storage;

#[component]
pub fn HomePage() -> impl IntoView {
    let city = RwSignal::new(None::<String>);
    let cities = RwSignal::new(Vec::<String>::new());

    // Restore the remembered city once the page is live in the browser.
    Effect::new(move |_| {
        if let Some(saved) = storage::selected_city() {
            city.set(Some(saved));
        }
    });

    let events_resource = Resource::new(move || city.get(), |city| async move { list_events(city).await });

    Effect::new(move |_| {
        if let Some(Ok(listing)) = events_resource.get() {
            cities.set(listing.cities);
        }
    });

    view! {
        <div class="events-page">
            <header class="events-page__header">
                <div>
                    <h1>"Upcoming Events"</h1>
                    <p class="events-page__subtitle">"Find something to do and grab your tickets"</p>
                </div>
                <CityPicker cities=cities selected=city />
            </header>

            <Suspense fallback=move || view! { <LoadingView message=None /> }>
                {move || events_resource.get().map(|result| match result {
                    Ok(listing) => {
                        let fallback_notice = (listing.source == DataSource::Fallback).then(|| view! {
                            <p class="events-page__notice">"Live listings are unavailable, showing featured events."</p>
                        });
                        if listing.events.is_empty() {
                            view! {
                                {fallback_notice}
                                <div class="events-page__empty">
                                    <p>"No events in this city yet."</p>
                                </div>
                            }.into_any()
                        } else {
                            view! {
                                {fallback_notice}
                                <div class="events-grid">
                                    {listing.events.into_iter().map(|event| view! { <EventCard event=event /> }).collect::<Vec<_>>()}
                                </div>
                            }.into_any()
                        }
                    }
                    Err(e) => view! { <ErrorView message=Some(e.to_string()) /> }.into_any(),
                })}
            </Suspense>
        </div>
    }
}
