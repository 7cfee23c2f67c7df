//! Coordinates that calendar views navigate over.
//!
//! # Responsibility
//! - Define the day/week coordinate types shared by the views.
//!
//! # Invariants
//! - Coordinates always name a real calendar position; out-of-range
//!   construction is a programmer error and panics.

pub mod coordinate;

pub use coordinate::{DayCoordinate, ViewId, WeekCoordinate};
