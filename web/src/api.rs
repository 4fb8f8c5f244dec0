//! Client for the external events REST API.
//!
//! Every call is made once with a short timeout. Callers pair the result with
//! the embedded dataset through [`resolve_with_fallback`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shared_types::{Booking, Event};

#[cfg(feature = "ssr")]
use crate::config::AppConfig;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request to {path} failed: {message}")]
    Transport { path: String, message: String },
    #[error("{path} returned HTTP {status}")]
    Status { path: String, status: u16 },
    #[error("could not decode response from {path}: {message}")]
    Decode { path: String, message: String },
    #[error("{0} not found")]
    NotFound(String),
}

/// Where a piece of data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    Remote,
    Fallback,
}

/// Falls through to `fallback` exactly once when `primary` failed. The
/// original error is returned if the fallback has nothing either.
pub fn resolve_with_fallback<T, F>(
    primary: Result<T, ApiError>,
    fallback: F,
) -> Result<(T, DataSource), ApiError>
where
    F: FnOnce() -> Option<T>,
{
    match primary {
        Ok(value) => Ok((value, DataSource::Remote)),
        Err(err) => match fallback() {
            Some(value) => {
                #[cfg(feature = "ssr")]
                tracing::warn!(error = %err, "events API unavailable, serving fallback data");
                Ok((value, DataSource::Fallback))
            }
            None => Err(err),
        },
    }
}

/// Responses come either bare or wrapped in a single named field.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload<T> {
    Bare(T),
    Wrapped {
        #[serde(alias = "events", alias = "event", alias = "bookings", alias = "booking")]
        data: T,
    },
}

pub fn decode_payload<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str::<Payload<T>>(body)
        .map(|payload| match payload {
            Payload::Bare(value) => value,
            Payload::Wrapped { data } => data,
        })
        .map_err(|e| ApiError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })
}

/// Case-insensitive city filter; `None` or an empty city keeps everything.
pub fn filter_by_city(events: Vec<Event>, city: Option<&str>) -> Vec<Event> {
    match city.map(str::trim).filter(|c| !c.is_empty()) {
        Some(city) => events
            .into_iter()
            .filter(|event| event.city.eq_ignore_ascii_case(city))
            .collect(),
        None => events,
    }
}

/// Distinct cities of `events`, sorted.
pub fn distinct_cities(events: &[Event]) -> Vec<String> {
    let mut cities: Vec<String> = events.iter().map(|event| event.city.clone()).collect();
    cities.sort();
    cities.dedup();
    cities
}

/// Sorts by event date, latest first. Unparseable dates sort last.
pub fn newest_first(mut bookings: Vec<Booking>) -> Vec<Booking> {
    bookings.sort_by_key(|booking| {
        std::cmp::Reverse(
            chrono::DateTime::parse_from_rfc3339(&booking.event_date)
                .map(|date| date.timestamp())
                .unwrap_or(i64::MIN),
        )
    });
    bookings
}

#[cfg(feature = "ssr")]
pub struct EventsApi {
    http: reqwest::Client,
    base_url: String,
}

#[cfg(feature = "ssr")]
impl EventsApi {
    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.api_timeout)
            .build()
            .map_err(|e| ApiError::Transport {
                path: config.api_base_url.clone(),
                message: e.to_string(),
            })?;
        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        bearer: Option<&str>,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.get(&url);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| ApiError::Transport {
            path: path.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| ApiError::Transport {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        decode_payload(path, &body)
    }

    pub async fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        self.get_json("/api/events", None).await
    }

    pub async fn get_event(&self, id: &str) -> Result<Event, ApiError> {
        let path = format!("/api/events/{}", urlencoding::encode(id));
        self.get_json(&path, None).await
    }

    pub async fn user_bookings(&self, token: &str) -> Result<Vec<Booking>, ApiError> {
        self.get_json("/api/bookings/user", Some(token)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback;

    #[test]
    fn successful_primary_is_remote() {
        let result = resolve_with_fallback(Ok(vec![1, 2]), || Some(vec![9]));
        assert_eq!(result.unwrap(), (vec![1, 2], DataSource::Remote));
    }

    #[test]
    fn failed_primary_falls_back_once() {
        let mut calls = 0;
        let result = resolve_with_fallback(
            Err::<Vec<u8>, _>(ApiError::Status {
                path: "/api/events".into(),
                status: 502,
            }),
            || {
                calls += 1;
                Some(vec![7])
            },
        );
        assert_eq!(result.unwrap(), (vec![7], DataSource::Fallback));
        assert_eq!(calls, 1);
    }

    #[test]
    fn missing_fallback_keeps_original_error() {
        let result = resolve_with_fallback::<Event, _>(
            Err(ApiError::NotFound("/api/events/x".into())),
            || fallback::find_event("x"),
        );
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[test]
    fn decodes_bare_and_wrapped_payloads() {
        let bare: Vec<u32> = decode_payload("/t", "[1,2,3]").unwrap();
        assert_eq!(bare, vec![1, 2, 3]);

        let wrapped: Vec<u32> = decode_payload("/t", r#"{"events":[4]}"#).unwrap();
        assert_eq!(wrapped, vec![4]);

        let bookings: Vec<u32> = decode_payload("/t", r#"{"bookings":[5]}"#).unwrap();
        assert_eq!(bookings, vec![5]);

        let err = decode_payload::<Vec<u32>>("/t", "not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[test]
    fn city_filter_ignores_case_and_blank() {
        let chicago = filter_by_city(fallback::events(), Some("chicago"));
        assert_eq!(chicago.len(), 2);
        assert!(chicago.iter().all(|e| e.city == "Chicago"));

        let all = filter_by_city(fallback::events(), Some("  "));
        assert_eq!(all.len(), fallback::events().len());
    }

    #[test]
    fn lists_each_city_once() {
        assert_eq!(
            distinct_cities(&fallback::events()),
            ["Austin", "Chicago", "New York", "San Francisco"]
        );
    }

    #[test]
    fn bookings_sorted_latest_first() {
        let mut bookings = fallback::bookings();
        bookings[0].event_date = "not a date".into();
        let sorted = newest_first(bookings);
        assert_eq!(sorted[0].id, "bk-2002");
        assert_eq!(sorted.last().unwrap().id, "bk-2001");
    }
}
