//! Time-series utilities shared by sources and the orchestrator.
//!
//! Modules include:
//! - `align`: pair a comparison series with a target, exactly or by lead/lag offset
//! - `window`: restrict a series to a calendar-month window
/// Exact and lead/lag temporal alignment.
pub mod align;
/// Calendar window filtering.
pub mod window;
