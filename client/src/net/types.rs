//! Wire DTOs for the booking REST backend.
//!
//! DESIGN
//! ======
//! Records are displayed as the backend sends them. Deserialization is
//! lenient where backends commonly disagree (numeric vs. string identifiers,
//! missing optional fields) and strict nowhere else.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::session::Role;

/// Records that carry a backend identifier.
pub trait Identified {
    fn id(&self) -> &str;
}

/// A hotel listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    /// Average review rating, when the backend computes one.
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub manager_id: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A bookable room inside a hotel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub hotel_id: String,
    #[serde(default)]
    pub room_type: String,
    pub price_per_night: f64,
    #[serde(default = "default_capacity")]
    pub capacity: u32,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_capacity() -> u32 {
    1
}

fn default_available() -> bool {
    true
}

/// Lifecycle state of a booking.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    /// A status this client does not know, kept verbatim for display.
    Other(String),
}

impl BookingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Other(raw) => raw,
        }
    }

    pub fn is_cancellable(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

impl From<&str> for BookingStatus {
    fn from(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => BookingStatus::Pending,
            "confirmed" | "booked" => BookingStatus::Confirmed,
            "cancelled" | "canceled" => BookingStatus::Cancelled,
            _ => BookingStatus::Other(raw.to_owned()),
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BookingStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BookingStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(BookingStatus::from(raw.as_str()))
    }
}

/// A reservation of one room for a date range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub user_id: Option<String>,
    #[serde(deserialize_with = "deserialize_id")]
    pub hotel_id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub room_id: String,
    /// ISO date (`YYYY-MM-DD`), possibly with a time suffix.
    pub check_in: String,
    pub check_out: String,
    #[serde(default)]
    pub guests: Option<u32>,
    #[serde(default)]
    pub total_price: Option<f64>,
    #[serde(default)]
    pub status: BookingStatus,
}

/// A guest review of a hotel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub hotel_id: String,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A registered account as listed by the admin and profile views.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_opt_role")]
    pub role: Option<Role>,
}

impl Identified for Hotel {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Room {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Booking {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Review {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for User {
    fn id(&self) -> &str {
        &self.id
    }
}

// =============================================================
// Request payloads
// =============================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Token issued by the login endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "accessToken", alias = "access_token")]
    pub token: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelInput {
    pub name: String,
    pub location: String,
    pub description: String,
    pub amenities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomInput {
    pub hotel_id: String,
    pub room_type: String,
    pub price_per_night: f64,
    pub capacity: u32,
    pub available: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingInput {
    pub user_id: String,
    pub hotel_id: String,
    pub room_id: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewInput {
    pub hotel_id: String,
    pub user_id: String,
    pub rating: u8,
    pub comment: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
}

// =============================================================
// Lenient field decoders
// =============================================================

fn id_from_value<E: serde::de::Error>(value: serde_json::Value) -> Result<String, E> {
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(E::custom(format!("expected string or number id, got {other}"))),
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    id_from_value(serde_json::Value::deserialize(deserializer)?)
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        value => id_from_value(value).map(Some),
    }
}

fn deserialize_opt_role<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|r| r.parse().ok()))
}
