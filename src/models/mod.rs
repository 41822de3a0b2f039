pub mod item;
pub mod rental;

pub use item::{Condition, Item};
pub use rental::{BookingDto, DeliveryOption, PaymentMethod, Rental, RentalStatus};
