use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::session::use_session;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let sign_out = move |_| {
        session.sign_out();
        navigate("/", Default::default());
    };

    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <div class="navbar__brand">
                    <A href="/" attr:class="navbar__logo">
                        "EventBook"
                    </A>
                </div>

                <div class="navbar__links">
                    <A href="/" attr:class="navbar__link">
                        "Events"
                    </A>
                    <Show
                        when=move || session.is_authenticated()
                        fallback=|| view! {
                            <A href="/login" attr:class="navbar__link navbar__link--cta">
                                "Sign In"
                            </A>
                        }
                    >
                        <A href="/bookings" attr:class="navbar__link">
                            "My Bookings"
                        </A>
                        <span class="navbar__user">
                            {move || session.user().map(|user| user.display_name()).unwrap_or_default()}
                        </span>
                        <button class="navbar__link navbar__link--button" on:click=sign_out.clone()>
                            "Sign Out"
                        </button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
