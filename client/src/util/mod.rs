//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate session glue, date math, and field validation from
//! page and component logic to improve reuse and testability.

pub mod auth;
pub mod dates;
pub mod forms;
