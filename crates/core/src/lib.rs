//! # OpenSlot Core
//!
//! Domain types and the slot-generation algorithm for the OpenSlot
//! appointment-availability service. Everything in this crate is synchronous
//! and free of I/O; the HTTP surface lives in `openslot-api`.

/// Busy-interval providers consulted during slot generation
pub mod calendar;
/// Error types shared by every OpenSlot crate
pub mod errors;
/// Request, response and time-range models
pub mod models;
/// Hourly slot generation within the working window
pub mod slots;

pub use calendar::{BusyIntervalProvider, FixedDailyBlock};
pub use errors::{SlotError, SlotResult};
pub use models::range::{BusyInterval, DateRange};
pub use models::slot::{Slot, SlotRequest, SlotResponse};
pub use slots::{WorkingHours, available_slots, generate_slots, generate_slots_within};
