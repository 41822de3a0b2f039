//! Booking price computation. All amounts are whole rupees.

use serde::Serialize;

use crate::models::DeliveryOption;

/// Flat fee charged when the item is delivered instead of picked up.
pub const DELIVERY_FEE: i64 = 100;
/// Platform service charge, applied to the rental cost.
pub const SERVICE_FEE_RATE: f64 = 0.05;
/// Floor for the refundable security deposit.
pub const MIN_SECURITY_DEPOSIT: i64 = 500;
/// Deposit fraction of the item's replacement value.
pub const DEPOSIT_RATE: f64 = 0.5;

/// Cost breakdown for a prospective booking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub rental_cost: i64,
    pub delivery_fee: i64,
    pub service_fee: i64,
    pub total_payment: i64,
    pub security_deposit: i64,
}

/// Compute the cost breakdown for renting an item.
///
/// A zero-day duration means no dates have been chosen yet: every
/// amount is zero, and booking creation rejects such a quote.
pub fn quote(
    daily_price: i64,
    duration_days: i64,
    delivery: DeliveryOption,
    replacement_value: i64,
) -> Quote {
    if duration_days <= 0 {
        return Quote::default();
    }

    let rental_cost = daily_price * duration_days;
    let delivery_fee = match delivery {
        DeliveryOption::Delivery => DELIVERY_FEE,
        DeliveryOption::Pickup => 0,
    };
    let service_fee = (rental_cost as f64 * SERVICE_FEE_RATE).round() as i64;
    let security_deposit =
        MIN_SECURITY_DEPOSIT.max((replacement_value as f64 * DEPOSIT_RATE).round() as i64);

    Quote {
        rental_cost,
        delivery_fee,
        service_fee,
        total_payment: rental_cost + delivery_fee + service_fee,
        security_deposit,
    }
}
