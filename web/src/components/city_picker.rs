use leptos::prelude::*;

use crate::utils::storage;

/// City dropdown. The choice is remembered in local storage across visits.
#[component]
pub fn CityPicker(
    #[prop(into)] cities: Signal<Vec<String>>,
    selected: RwSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="city-picker">
            <label class="city-picker__label" for="city-picker">"City"</label>
            <select
                id="city-picker"
                class="city-picker__select"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    let city = (!value.is_empty()).then_some(value);
                    storage::set_selected_city(city.as_deref());
                    selected.set(city);
                }
            >
                <option value="" selected=move || selected.get().is_none()>"All cities"</option>
                {move || cities.get().into_iter().map(|city| {
                    let is_selected = {
                        let city = city.clone();
                        move || selected.get().as_deref() == Some(city.as_str())
                    };
                    view! {
                        <option value=city.clone() selected=is_selected>{city.clone()}</option>
                    }
                }).collect::<Vec<_>>()}
            </select>
        </div>
    }
}
