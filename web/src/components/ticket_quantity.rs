use leptos::prelude::*;

use crate::booking::TicketQuantity;

/// `-` / number / `+` control. The parent owns the value; this only reports
/// accepted changes through `on_change`.
#[component]
pub fn TicketQuantityInput(
    #[prop(into)] value: Signal<u32>,
    #[prop(into)] max_available: Signal<u32>,
    on_change: impl Fn(u32) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let current = move || TicketQuantity::with_value(value.get(), max_available.get());

    view! {
        <div class="ticket-quantity">
            <label class="ticket-quantity__label">"Tickets"</label>
            <div class="ticket-quantity__controls">
                <button
                    class="ticket-quantity__btn"
                    aria-label="Decrease quantity"
                    disabled=move || !current().can_decrement()
                    on:click=move |_| {
                        if let Some(next) = current().decrement() {
                            on_change(next);
                        }
                    }
                >
                    "−"
                </button>
                <input
                    class="ticket-quantity__input"
                    type="number"
                    min="1"
                    max=move || max_available.get().to_string()
                    prop:value=move || value.get().to_string()
                    on:change=move |ev| {
                        if let Some(next) = current().set_from_input(&event_target_value(&ev)) {
                            on_change(next);
                        }
                    }
                />
                <button
                    class="ticket-quantity__btn"
                    aria-label="Increase quantity"
                    disabled=move || !current().can_increment()
                    on:click=move |_| {
                        if let Some(next) = current().increment() {
                            on_change(next);
                        }
                    }
                >
                    "+"
                </button>
            </div>
            <p class="ticket-quantity__hint">
                {move || format!("{} available", max_available.get())}
            </p>
        </div>
    }
}
