use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::item::Item;

/// Board bucket a rental currently sits in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RentalStatus {
    Active,
    Upcoming,
    Past,
}

impl RentalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RentalStatus::Active => "active",
            RentalStatus::Upcoming => "upcoming",
            RentalStatus::Past => "past",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryOption {
    Pickup,
    Delivery,
}

/// Accepted at booking time but not stored on the rental record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Upi,
}

/// A confirmed reservation of an item for a date range.
///
/// The item is embedded as an owned copy so a rental stays renderable
/// even if the listing is later withdrawn from the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    pub id: String,
    pub item: Item,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Whole days between start and end.
    pub duration: i64,
    pub status: RentalStatus,
    /// Rental cost plus delivery and service fees, in whole rupees.
    pub total_amount: i64,
    /// Refundable hold, in whole rupees.
    pub security_deposit: i64,
    pub booking_date: NaiveDate,
    pub owner: String,
    pub pickup_location: String,
    pub pickup_instructions: String,
}

/// Payload for creating a booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDto {
    pub item_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub delivery_option: DeliveryOption,
    pub payment_method: PaymentMethod,
}
