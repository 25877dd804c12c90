//! Networking modules for the booking REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP calls and classifies failures; `types` defines the wire
//! schema shared by every view.

pub mod api;
pub mod types;
