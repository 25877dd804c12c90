//! REST client for the booking backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since the
//! backend is only ever reached from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. Views render the error's
//! `Display` text next to the form that triggered the call and treat
//! [`ApiError::is_auth_failure`] as an expired session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::types::{
    Booking, BookingInput, Hotel, HotelInput, LoginRequest, LoginResponse, RegisterRequest, Review, ReviewInput,
    Room, RoomInput, User, UserUpdate,
};
use crate::session::SessionStore;

/// Object keys that commonly wrap a list payload.
const LIST_ENVELOPE_KEYS: [&str; 3] = ["data", "items", "content"];

/// Longest plain-text error body shown to the user verbatim.
const MAX_PLAIN_ERROR_LEN: usize = 200;

/// Failures surfaced by REST calls.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{message} ({status})")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("unexpected response shape: expected {expected}")]
    UnexpectedShape { expected: &'static str },
    #[error("you need to sign in first")]
    MissingSession,
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Whether the failure means the session is missing, expired, or rejected.
    pub fn is_auth_failure(&self) -> bool {
        match self {
            ApiError::Status { status, .. } => matches!(status, 401 | 403),
            ApiError::MissingSession => true,
            _ => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

/// Backend handle carrying the base URL and optional bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, token }
    }

    /// Client for the configured backend, authorized with the stored token
    /// when one is present.
    pub fn from_store(store: &SessionStore) -> Self {
        Self::new(crate::config::api_base_url(), store.get_token())
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }

    fn require_token(&self) -> Result<(), ApiError> {
        if self.has_token() { Ok(()) } else { Err(ApiError::MissingSession) }
    }

    // =============================================================
    // Auth
    // =============================================================

    /// Exchange credentials and the chosen role for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or no token is returned.
    pub async fn login(&self, request: &LoginRequest) -> Result<String, ApiError> {
        let body = self.send(Verb::Post, "/auth/login", Some(encode(request)?)).await?;
        let resp: LoginResponse = decode_one(&body)?;
        if resp.token.trim().is_empty() {
            return Err(ApiError::Decode("login response carried an empty token".to_owned()));
        }
        Ok(resp.token)
    }

    /// Create an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the registration.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.send(Verb::Post, "/auth/register", Some(encode(request)?)).await?;
        Ok(())
    }

    // =============================================================
    // Hotels
    // =============================================================

    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is not a list of hotels.
    pub async fn list_hotels(&self) -> Result<Vec<Hotel>, ApiError> {
        self.get_list("/hotels").await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is not a hotel.
    pub async fn get_hotel(&self, hotel_id: &str) -> Result<Hotel, ApiError> {
        self.get_one(&hotel_path(hotel_id)).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is not a list of hotels.
    pub async fn hotels_for_manager(&self, manager_id: &str) -> Result<Vec<Hotel>, ApiError> {
        self.require_token()?;
        self.get_list(&format!("/hotels/manager/{}", urlencoding::encode(manager_id))).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is not a hotel.
    pub async fn create_hotel(&self, input: &HotelInput) -> Result<Hotel, ApiError> {
        self.require_token()?;
        let body = self.send(Verb::Post, "/hotels", Some(encode(input)?)).await?;
        decode_one(&body)
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is not a hotel.
    pub async fn update_hotel(&self, hotel_id: &str, input: &HotelInput) -> Result<Hotel, ApiError> {
        self.require_token()?;
        let body = self.send(Verb::Put, &hotel_path(hotel_id), Some(encode(input)?)).await?;
        decode_one(&body)
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_hotel(&self, hotel_id: &str) -> Result<(), ApiError> {
        self.require_token()?;
        self.send(Verb::Delete, &hotel_path(hotel_id), None).await?;
        Ok(())
    }

    // =============================================================
    // Rooms
    // =============================================================

    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is not a list of rooms.
    pub async fn rooms_for_hotel(&self, hotel_id: &str) -> Result<Vec<Room>, ApiError> {
        self.get_list(&format!("{}/rooms", hotel_path(hotel_id))).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is not a room.
    pub async fn create_room(&self, input: &RoomInput) -> Result<Room, ApiError> {
        self.require_token()?;
        let body = self.send(Verb::Post, "/rooms", Some(encode(input)?)).await?;
        decode_one(&body)
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is not a room.
    pub async fn update_room(&self, room_id: &str, input: &RoomInput) -> Result<Room, ApiError> {
        self.require_token()?;
        let body = self.send(Verb::Put, &room_path(room_id), Some(encode(input)?)).await?;
        decode_one(&body)
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_room(&self, room_id: &str) -> Result<(), ApiError> {
        self.require_token()?;
        self.send(Verb::Delete, &room_path(room_id), None).await?;
        Ok(())
    }

    // =============================================================
    // Bookings
    // =============================================================

    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is not a booking.
    pub async fn create_booking(&self, input: &BookingInput) -> Result<Booking, ApiError> {
        self.require_token()?;
        let body = self.send(Verb::Post, "/bookings", Some(encode(input)?)).await?;
        decode_one(&body)
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is not a list of bookings.
    pub async fn bookings_for_user(&self, user_id: &str) -> Result<Vec<Booking>, ApiError> {
        self.require_token()?;
        self.get_list(&format!("/bookings/user/{}", urlencoding::encode(user_id))).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is not a list of bookings.
    pub async fn bookings_for_hotel(&self, hotel_id: &str) -> Result<Vec<Booking>, ApiError> {
        self.require_token()?;
        self.get_list(&format!("/bookings/hotel/{}", urlencoding::encode(hotel_id))).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is not a list of bookings.
    pub async fn list_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.require_token()?;
        self.get_list("/bookings").await
    }

    /// Cancel a booking. The backend's echo of the booking is ignored; the
    /// caller patches its local copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn cancel_booking(&self, booking_id: &str) -> Result<(), ApiError> {
        self.require_token()?;
        self.send(Verb::Put, &format!("{}/cancel", booking_path(booking_id)), None).await?;
        Ok(())
    }

    // =============================================================
    // Reviews
    // =============================================================

    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is not a list of reviews.
    pub async fn reviews_for_hotel(&self, hotel_id: &str) -> Result<Vec<Review>, ApiError> {
        self.get_list(&format!("{}/reviews", hotel_path(hotel_id))).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is not a review.
    pub async fn create_review(&self, input: &ReviewInput) -> Result<Review, ApiError> {
        self.require_token()?;
        let body = self.send(Verb::Post, "/reviews", Some(encode(input)?)).await?;
        decode_one(&body)
    }

    // =============================================================
    // Users
    // =============================================================

    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is not a list of users.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.require_token()?;
        self.get_list("/users").await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is not a user.
    pub async fn get_user(&self, user_id: &str) -> Result<User, ApiError> {
        self.require_token()?;
        self.get_one(&user_path(user_id)).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is not a user.
    pub async fn update_user(&self, user_id: &str, update: &UserUpdate) -> Result<User, ApiError> {
        self.require_token()?;
        let body = self.send(Verb::Put, &user_path(user_id), Some(encode(update)?)).await?;
        decode_one(&body)
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        self.require_token()?;
        self.send(Verb::Delete, &user_path(user_id), None).await?;
        Ok(())
    }

    // =============================================================
    // Transport
    // =============================================================

    async fn get_one<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.send(Verb::Get, path, None).await?;
        decode_one(&body)
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let body = self.send(Verb::Get, path, None).await?;
        decode_list(&body)
    }

    /// Issue one request and return the raw response body of a 2xx reply.
    async fn send(&self, verb: Verb, path: &str, body: Option<Value>) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = self.url(path);
            let mut builder = match verb {
                Verb::Get => Request::get(&url),
                Verb::Post => Request::post(&url),
                Verb::Put => Request::put(&url),
                Verb::Delete => Request::delete(&url),
            };
            if let Some(auth) = self.authorization() {
                builder = builder.header("Authorization", &auth);
            }
            let request = match body {
                Some(body) => builder.json(&body).map_err(|e| ApiError::Network(e.to_string()))?,
                None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
            };
            let resp = request.send().await.map_err(|e| {
                log::warn!("{verb:?} {url} failed: {e}");
                ApiError::Network(e.to_string())
            })?;
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            if !resp.ok() {
                log::warn!("{verb:?} {url} returned {status}");
                return Err(ApiError::Status { status, message: error_message(status, &text) });
            }
            Ok(text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (verb, self.url(path), self.authorization(), body);
            Err(ApiError::Unavailable)
        }
    }
}

fn encode<T: Serialize>(payload: &T) -> Result<Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================
// Paths
// =============================================================

fn hotel_path(hotel_id: &str) -> String {
    format!("/hotels/{}", urlencoding::encode(hotel_id))
}

fn room_path(room_id: &str) -> String {
    format!("/rooms/{}", urlencoding::encode(room_id))
}

fn booking_path(booking_id: &str) -> String {
    format!("/bookings/{}", urlencoding::encode(booking_id))
}

fn user_path(user_id: &str) -> String {
    format!("/users/{}", urlencoding::encode(user_id))
}

// =============================================================
// Response decoding
// =============================================================

/// Decode a single-record body.
fn decode_one<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a list body defensively.
///
/// Arrays decode element-wise. Empty bodies and `null` are empty lists. An
/// object carrying a common envelope key is unwrapped: an array is the list,
/// `null` is an empty list, anything else is `UnexpectedShape`. Any other
/// object is treated as a one-element list.
fn decode_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ApiError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let value: Value = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let items = match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        Value::Object(mut map) => match LIST_ENVELOPE_KEYS.iter().find_map(|k| map.remove(*k)) {
            Some(Value::Array(items)) => items,
            Some(Value::Null) => Vec::new(),
            Some(_) => return Err(ApiError::UnexpectedShape { expected: "a list" }),
            None => vec![Value::Object(map)],
        },
        _ => return Err(ApiError::UnexpectedShape { expected: "a list" }),
    };
    items
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<T>, _>>()
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Best human-readable message for a failed response.
fn error_message(status: u16, body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        for key in ["message", "error", "detail"] {
            if let Some(Value::String(msg)) = map.get(key) {
                if !msg.trim().is_empty() {
                    return msg.trim().to_owned();
                }
            }
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() && trimmed.len() <= MAX_PLAIN_ERROR_LEN && !trimmed.starts_with('<') && !trimmed.starts_with('{') {
        return trimmed.to_owned();
    }
    format!("request failed with status {status}")
}
