use leptos::prelude::*;
use leptos::server;
use serde::{Deserialize, Serialize};
use shared_types::{Booking, Event};

use crate::api::DataSource;
use crate::auth_client::{OAuthProvider, SignUpOutcome};
use crate::session::{AuthSession, SessionUser};

#[cfg(feature = "ssr")]
use crate::api::{distinct_cities, filter_by_city, newest_first, resolve_with_fallback, ApiError, EventsApi};
#[cfg(feature = "ssr")]
use crate::auth_client::{user_id_from_token, AuthClient, AuthError};
#[cfg(feature = "ssr")]
use crate::config::get_config;
#[cfg(feature = "ssr")]
use crate::fallback;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EventListing {
    pub events: Vec<Event>,
    pub cities: Vec<String>,
    pub source: DataSource,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EventDetail {
    pub event: Event,
    pub source: DataSource,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BookingListing {
    pub bookings: Vec<Booking>,
    pub source: DataSource,
}

#[cfg(feature = "ssr")]
fn events_api() -> Result<EventsApi, ServerFnError> {
    EventsApi::from_config(get_config())
        .map_err(|e| ServerFnError::new(format!("Events API unavailable: {}", e)))
}

#[cfg(feature = "ssr")]
fn auth_client() -> Result<AuthClient, ServerFnError> {
    AuthClient::from_config(get_config()).map_err(|e| {
        tracing::warn!(error = %e, "auth client unavailable");
        ServerFnError::new(e.to_string())
    })
}

#[server]
pub async fn list_events(city: Option<String>) -> Result<EventListing, ServerFnError> {
    let api = events_api()?;
    let (events, source) = resolve_with_fallback(api.list_events().await, || {
        Some(fallback::events())
    })
    .map_err(|e| ServerFnError::new(format!("Failed to load events: {}", e)))?;

    let cities = distinct_cities(&events);

    Ok(EventListing {
        events: filter_by_city(events, city.as_deref()),
        cities,
        source,
    })
}

#[server]
pub async fn get_event(id: String) -> Result<EventDetail, ServerFnError> {
    let api = events_api()?;
    let (event, source) =
        resolve_with_fallback(api.get_event(&id).await, || fallback::find_event(&id))
            .map_err(|e| match e {
                ApiError::NotFound(_) => ServerFnError::new("Event not found".to_string()),
                other => ServerFnError::new(format!("Failed to load event: {}", other)),
            })?;

    Ok(EventDetail { event, source })
}

#[server]
pub async fn get_user_bookings(token: String) -> Result<BookingListing, ServerFnError> {
    let config = get_config();
    let user_id = user_id_from_token(&token, config.baas_jwt_secret.as_deref())
        .map_err(|e| ServerFnError::new(format!("Please sign in again ({})", e)))?;
    tracing::debug!(user_id = %user_id, "loading bookings");

    let api = events_api()?;
    let (bookings, source) = resolve_with_fallback(api.user_bookings(&token).await, || {
        Some(fallback::bookings())
    })
    .map_err(|e| ServerFnError::new(format!("Failed to load bookings: {}", e)))?;

    Ok(BookingListing {
        bookings: newest_first(bookings),
        source,
    })
}

#[server]
pub async fn sign_in(email: String, password: String) -> Result<AuthSession, ServerFnError> {
    let client = auth_client()?;
    client
        .sign_in_with_password(email.trim(), &password)
        .await
        .map_err(|e| {
            tracing::info!(error = %e, "sign-in rejected");
            ServerFnError::new(e.to_string())
        })
}

#[server]
pub async fn sign_up(
    email: String,
    password: String,
    full_name: Option<String>,
) -> Result<SignUpOutcome, ServerFnError> {
    let client = auth_client()?;
    let full_name = full_name.filter(|name| !name.trim().is_empty());
    client
        .sign_up(email.trim(), &password, full_name.as_deref())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
pub async fn request_password_reset(email: String, redirect_to: String) -> Result<(), ServerFnError> {
    let client = auth_client()?;
    client
        .recover_password(email.trim(), &redirect_to)
        .await
        .map_err(|e| ServerFnError::new(format!("Could not send reset email: {}", e)))
}

#[server]
pub async fn social_sign_in_url(
    provider: OAuthProvider,
    redirect_to: String,
) -> Result<String, ServerFnError> {
    let client = auth_client()?;
    Ok(client.oauth_authorize_url(provider, &redirect_to))
}

/// `Ok(None)` means the provider no longer accepts the token.
#[server]
pub async fn current_user(token: String) -> Result<Option<SessionUser>, ServerFnError> {
    let client = auth_client()?;
    match client.get_user(&token).await {
        Ok(user) => Ok(Some(user)),
        Err(AuthError::Rejected(reason)) => {
            tracing::debug!(%reason, "stored session rejected");
            Ok(None)
        }
        Err(e) => Err(ServerFnError::new(e.to_string())),
    }
}
