use leptos::prelude::*;
use leptos_router::components::A;
use shared_types::Event;

use crate::booking::flow::event_path;
use crate::booking::format_price;
use crate::utils::format::format_event_date;

#[component]
pub fn EventCard(event: Event) -> impl IntoView {
    let href = event_path(&event.id);
    let price = format_price(u64::from(event.price), &event.currency);
    let date = format_event_date(&event.date_time);
    let sold_out = event.is_sold_out();
    let reserved = event.is_reserved_seating();

    view! {
        <article class={if sold_out { "event-card event-card--sold-out" } else { "event-card" }}>
            {event.image_url.clone().map(|src| view! {
                <img class="event-card__image" src=src alt=event.title.clone() />
            })}
            <div class="event-card__body">
                <span class="event-card__category">{event.category.clone()}</span>
                <h3 class="event-card__title">{event.title.clone()}</h3>
                <p class="event-card__date">{date}</p>
                <p class="event-card__venue">{format!("{} · {}", event.venue, event.city)}</p>
                <div class="event-card__footer">
                    <span class="event-card__price">{format!("From {}", price)}</span>
                    {reserved.then(|| view! { <span class="event-card__tag">"Reserved seating"</span> })}
                    {sold_out.then(|| view! { <span class="event-card__tag event-card__tag--sold-out">"Sold out"</span> })}
                </div>
                <A href=href attr:class="event-card__link">"View details"</A>
            </div>
        </article>
    }
}
