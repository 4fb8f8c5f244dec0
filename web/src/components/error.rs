use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

#[component]
pub fn ErrorView(message: Option<String>) -> impl IntoView {
    view! {
        <MessageBar intent=MessageBarIntent::Error>
            {message.unwrap_or_else(|| "Something went wrong. Please try again.".to_string())}
        </MessageBar>
    }
}

/// Dismissable inline notice, used where a toast would be.
#[component]
pub fn NoticeView(notice: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || notice.get().map(|text| view! {
            <div class="notice" role="status">
                <MessageBar intent=MessageBarIntent::Warning>{text}</MessageBar>
                <button class="notice__close" on:click=move |_| notice.set(None)>"×"</button>
            </div>
        })}
    }
}
