use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::booking::flow::login_path;
use crate::session::use_session;

#[component]
pub fn LoadingState() -> impl IntoView {
    view! {
        <div class="auth-guard-container">
            <div class="auth-guard-content">
                <div class="auth-guard-loading-title">
                    "Checking your session..."
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SignInRedirect() -> impl IntoView {
    let navigate = use_navigate();
    let location = use_location();

    Effect::new(move |_| {
        let here = format!("{}{}", location.pathname.get_untracked(), location.search.get_untracked());
        navigate(&login_path(&here), Default::default());
    });

    view! {
        <div class="auth-guard-container">
            <div class="auth-guard-content">
                <div class="auth-guard-denied-subtitle">
                    "Please sign in to continue. Redirecting..."
                </div>
            </div>
        </div>
    }
}

/// Renders `children` only for signed-in users; everyone else is sent to the
/// login page with a redirect back here.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_restored()
            fallback=move || view! { <LoadingState/> }
        >
            <Show
                when=move || session.is_authenticated()
                fallback=move || view! { <SignInRedirect/> }
                clone:children
            >
                {children()}
            </Show>
        </Show>
    }
}
