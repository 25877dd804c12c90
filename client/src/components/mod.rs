//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render hotel, booking, and review collections handed to them
//! by pages; only the navbar reads shared session state directly.

pub mod booking_table;
pub mod hotel_card;
pub mod navbar;
pub mod review_list;
