//! Thin wrappers over `window.localStorage`. Outside the browser every read
//! is `None` and every write is dropped.

pub const SELECTED_CITY_KEY: &str = "eventbook_selected_city";

#[cfg(feature = "hydrate")]
mod js {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = localStorage)]
        pub fn getItem(key: &str) -> Option<String>;

        #[wasm_bindgen(js_namespace = localStorage)]
        pub fn setItem(key: &str, value: &str);

        #[wasm_bindgen(js_namespace = localStorage)]
        pub fn removeItem(key: &str);
    }
}

pub fn get_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        js::getItem(key).filter(|value| !value.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

pub fn set_item(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    js::setItem(key, value);
    #[cfg(not(feature = "hydrate"))]
    let _ = (key, value);
}

pub fn remove_item(key: &str) {
    #[cfg(feature = "hydrate")]
    js::removeItem(key);
    #[cfg(not(feature = "hydrate"))]
    let _ = key;
}

pub fn selected_city() -> Option<String> {
    get_item(SELECTED_CITY_KEY)
}

/// Persists the city; `None` clears the preference.
pub fn set_selected_city(city: Option<&str>) {
    match city.map(str::trim).filter(|c| !c.is_empty()) {
        Some(city) => set_item(SELECTED_CITY_KEY, city),
        None => remove_item(SELECTED_CITY_KEY),
    }
}
