//! Services Layer
//!
//! Pure business logic kept out of the HTTP handlers: price
//! computation, availability, date-range selection, booking creation
//! and the rental status board.

pub mod board;
pub mod booking;
pub mod calendar;
pub mod pricing;
