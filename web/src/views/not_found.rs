use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    let navigate = use_navigate();

    view! {
        <div class="not-found">
            <div class="not-found__card">
                <div class="not-found__code">"404"</div>
                <h1 class="not-found__title">"Page Not Found"</h1>
                <p class="not-found__text">
                    "The page you're looking for doesn't exist or the event has been removed."
                </p>
                <button
                    class="not-found__btn"
                    on:click=move |_| {
                        navigate("/", Default::default());
                    }
                >
                    "Browse Events"
                </button>
            </div>
        </div>
    }
}
