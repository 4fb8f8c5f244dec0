use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::components::Navbar;
use crate::session::provide_session;
use crate::views::auth::{AuthCallbackPage, ForgotPasswordPage, LoginPage, SignupPage};
use crate::views::bookings::BookingsPage;
use crate::views::checkout::CheckoutPage;
use crate::views::event_detail::EventDetailPage;
use crate::views::home::HomePage;
use crate::views::not_found::NotFoundPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_session();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/eventbook.css"/>

        <Title text="EventBook"/>

        <ConfigProvider>
            <Router>
                <Navbar/>
                <main>
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=(StaticSegment("events"), ParamSegment("id")) view=EventDetailPage/>
                        <Route path=StaticSegment("checkout") view=CheckoutPage/>
                        <Route path=StaticSegment("bookings") view=BookingsPage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("signup") view=SignupPage/>
                        <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                        <Route path=(StaticSegment("auth"), StaticSegment("callback")) view=AuthCallbackPage/>
                    </Routes>
                </main>
            </Router>
        </ConfigProvider>
    }
}
