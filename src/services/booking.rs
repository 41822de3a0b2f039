//! Booking creation - validation, pricing and rental record assembly.

use chrono::{Local, NaiveDate};
use uuid::Uuid;

use crate::domain::{DomainError, ItemRepository, RentalRepository};
use crate::models::{BookingDto, Rental, RentalStatus};
use crate::services::pricing;

/// Shown to the renter until owners can supply their own instructions.
const DEFAULT_PICKUP_INSTRUCTIONS: &str =
    "Contact the owner 30 minutes before pickup. Bring ID proof.";

/// Status a rental should carry given its dates.
pub fn derived_status(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> RentalStatus {
    if start > today {
        RentalStatus::Upcoming
    } else if end < today {
        RentalStatus::Past
    } else {
        RentalStatus::Active
    }
}

/// Confirm a booking: validate the range against existing rentals of
/// the item, price it, and store the resulting rental record.
pub async fn create_booking(
    item_repo: &dyn ItemRepository,
    rental_repo: &dyn RentalRepository,
    dto: BookingDto,
) -> Result<Rental, DomainError> {
    let today = Local::now().date_naive();

    // 1. Item must exist
    let item = item_repo
        .find_by_id(&dto.item_id)
        .await?
        .ok_or(DomainError::NotFound)?;

    // 2. Range must be well-formed and bookable
    if dto.end_date < dto.start_date {
        return Err(DomainError::Validation(
            "end_date is before start_date".to_string(),
        ));
    }
    let duration = (dto.end_date - dto.start_date).num_days();
    if duration < 1 {
        return Err(DomainError::Validation(
            "booking must span at least one day".to_string(),
        ));
    }
    if dto.start_date < today {
        return Err(DomainError::Validation(
            "start_date is in the past".to_string(),
        ));
    }

    // 3. Price the stay
    let quote = pricing::quote(
        item.daily_price,
        duration,
        dto.delivery_option,
        item.replacement_value,
    );

    let rental = Rental {
        id: Uuid::new_v4().to_string(),
        start_date: dto.start_date,
        end_date: dto.end_date,
        duration,
        status: derived_status(dto.start_date, dto.end_date, today),
        total_amount: quote.total_payment,
        security_deposit: quote.security_deposit,
        booking_date: today,
        owner: item.owner.clone(),
        pickup_location: item.location.clone(),
        pickup_instructions: DEFAULT_PICKUP_INSTRUCTIONS.to_string(),
        item,
    };

    // 4. Store, with the overlap check atomic against concurrent
    // bookings of the same item
    let saved = rental_repo.create_if_available(rental, today).await?;
    tracing::info!(
        "📦 Booking {} confirmed for item {} ({} payment)",
        saved.id,
        saved.item.id,
        match dto.payment_method {
            crate::models::PaymentMethod::Card => "card",
            crate::models::PaymentMethod::Upi => "upi",
        }
    );
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{InMemoryItemRepository, InMemoryRentalRepository};
    use crate::models::{Condition, DeliveryOption, Item, PaymentMethod};
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn drill() -> Item {
        Item {
            id: "item1".to_string(),
            name: "Bosch Power Drill Set".to_string(),
            description: "Professional-grade power drill set".to_string(),
            daily_price: 250,
            replacement_value: 5000,
            category: "Tools".to_string(),
            condition: Condition::LikeNew,
            location: "Koramangala, Bangalore".to_string(),
            images: vec![],
            owner: "Vikram Mehta".to_string(),
            rating: Some(4.8),
        }
    }

    fn dto(start: NaiveDate, end: NaiveDate) -> BookingDto {
        BookingDto {
            item_id: "item1".to_string(),
            start_date: start,
            end_date: end,
            delivery_option: DeliveryOption::Pickup,
            payment_method: PaymentMethod::Card,
        }
    }

    #[test]
    fn status_is_derived_from_dates() {
        let today = date(2025, 6, 15);
        assert_eq!(
            derived_status(date(2025, 6, 16), date(2025, 6, 18), today),
            RentalStatus::Upcoming
        );
        assert_eq!(
            derived_status(date(2025, 6, 14), date(2025, 6, 16), today),
            RentalStatus::Active
        );
        assert_eq!(
            derived_status(date(2025, 6, 10), date(2025, 6, 12), today),
            RentalStatus::Past
        );
    }

    #[tokio::test]
    async fn booking_prices_and_stores_the_rental() {
        let items = InMemoryItemRepository::new();
        let rentals = InMemoryRentalRepository::new();
        items.insert(drill()).await.unwrap();

        let start = Local::now().date_naive() + Duration::days(10);
        let end = start + Duration::days(3);

        let rental = create_booking(&items, &rentals, dto(start, end))
            .await
            .unwrap();

        assert_eq!(rental.duration, 3);
        assert_eq!(rental.total_amount, 788);
        assert_eq!(rental.security_deposit, 2500);
        assert_eq!(rental.status, RentalStatus::Upcoming);
        assert_eq!(rental.pickup_location, "Koramangala, Bangalore");

        let stored = rentals.find_by_id(&rental.id).await.unwrap();
        assert_eq!(stored, Some(rental));
    }

    #[tokio::test]
    async fn overlapping_booking_is_rejected() {
        let items = InMemoryItemRepository::new();
        let rentals = InMemoryRentalRepository::new();
        items.insert(drill()).await.unwrap();

        let start = Local::now().date_naive() + Duration::days(10);
        let end = start + Duration::days(3);
        create_booking(&items, &rentals, dto(start, end))
            .await
            .unwrap();

        let overlapping = dto(start + Duration::days(2), end + Duration::days(2));
        let err = create_booking(&items, &rentals, overlapping)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_overlapping_bookings_accept_exactly_one() {
        use std::sync::Arc;

        let items = Arc::new(InMemoryItemRepository::new());
        let rentals = Arc::new(InMemoryRentalRepository::new());
        items.insert(drill()).await.unwrap();

        let start = Local::now().date_naive() + Duration::days(10);
        let end = start + Duration::days(3);

        let first = {
            let (items, rentals) = (items.clone(), rentals.clone());
            let dto = dto(start, end);
            tokio::spawn(async move { create_booking(&*items, &*rentals, dto).await })
        };
        let second = {
            let (items, rentals) = (items.clone(), rentals.clone());
            let dto = dto(start + Duration::days(1), end + Duration::days(1));
            tokio::spawn(async move { create_booking(&*items, &*rentals, dto).await })
        };

        let (a, b) = (first.await.unwrap(), second.await.unwrap());

        // whichever task lost the race must see the conflict
        assert!(
            a.is_ok() != b.is_ok(),
            "expected exactly one booking to win, got {:?} and {:?}",
            a.is_ok(),
            b.is_ok()
        );
        let loser = if a.is_err() { a } else { b };
        assert!(matches!(loser.unwrap_err(), DomainError::Conflict(_)));

        let stored = rentals.find_all(Default::default()).await.unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[tokio::test]
    async fn unknown_item_and_bad_ranges_are_rejected() {
        let items = InMemoryItemRepository::new();
        let rentals = InMemoryRentalRepository::new();
        items.insert(drill()).await.unwrap();

        let start = Local::now().date_naive() + Duration::days(5);

        let mut missing = dto(start, start + Duration::days(1));
        missing.item_id = "item999".to_string();
        assert!(matches!(
            create_booking(&items, &rentals, missing).await.unwrap_err(),
            DomainError::NotFound
        ));

        let inverted = dto(start + Duration::days(2), start);
        assert!(matches!(
            create_booking(&items, &rentals, inverted).await.unwrap_err(),
            DomainError::Validation(_)
        ));

        // same-day start and end has zero duration
        let empty = dto(start, start);
        assert!(matches!(
            create_booking(&items, &rentals, empty).await.unwrap_err(),
            DomainError::Validation(_)
        ));

        let past = dto(
            Local::now().date_naive() - Duration::days(3),
            Local::now().date_naive() - Duration::days(1),
        );
        assert!(matches!(
            create_booking(&items, &rentals, past).await.unwrap_err(),
            DomainError::Validation(_)
        ));
    }
}
