//! In-memory implementation of RentalRepository

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::domain::{DomainError, RentalFilter, RentalRepository};
use crate::models::{Rental, RentalStatus};
use crate::services::calendar::AvailabilityCalendar;

/// Rental store guarded by a single RwLock so the overlap scan and the
/// insert of `create_if_available` share one critical section. Listings
/// come back newest booking first, matching how the rentals view
/// orders its cards.
pub struct InMemoryRentalRepository {
    rentals: RwLock<HashMap<String, Rental>>,
}

impl InMemoryRentalRepository {
    pub fn new() -> Self {
        Self {
            rentals: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryRentalRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn matches_filter(rental: &Rental, filter: &RentalFilter) -> bool {
    if let Some(status) = filter.status
        && rental.status != status
    {
        return false;
    }
    if let Some(item_id) = &filter.item_id
        && rental.item.id != *item_id
    {
        return false;
    }
    true
}

#[async_trait]
impl RentalRepository for InMemoryRentalRepository {
    async fn find_all(&self, filter: RentalFilter) -> Result<Vec<Rental>, DomainError> {
        let rentals = self.rentals.read().await;

        let mut rentals: Vec<Rental> = rentals
            .values()
            .filter(|rental| matches_filter(rental, &filter))
            .cloned()
            .collect();

        rentals.sort_by(|a, b| {
            b.booking_date
                .cmp(&a.booking_date)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(rentals)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Rental>, DomainError> {
        Ok(self.rentals.read().await.get(id).cloned())
    }

    async fn create(&self, rental: Rental) -> Result<Rental, DomainError> {
        let mut rentals = self.rentals.write().await;
        if rentals.contains_key(&rental.id) {
            return Err(DomainError::Internal(format!(
                "Rental id collision for '{}'",
                rental.id
            )));
        }
        rentals.insert(rental.id.clone(), rental.clone());
        Ok(rental)
    }

    async fn create_if_available(
        &self,
        rental: Rental,
        today: NaiveDate,
    ) -> Result<Rental, DomainError> {
        // Write lock held across the scan and the insert, so two
        // overlapping bookings can never both pass the check.
        let mut rentals = self.rentals.write().await;

        if rentals.contains_key(&rental.id) {
            return Err(DomainError::Internal(format!(
                "Rental id collision for '{}'",
                rental.id
            )));
        }

        let same_item: Vec<Rental> = rentals
            .values()
            .filter(|existing| existing.item.id == rental.item.id)
            .cloned()
            .collect();
        let calendar = AvailabilityCalendar::new(today, &same_item);
        if !calendar.range_is_free(rental.start_date, rental.end_date) {
            return Err(DomainError::Conflict(
                "item is already booked for part of the selected dates".to_string(),
            ));
        }

        rentals.insert(rental.id.clone(), rental.clone());
        Ok(rental)
    }

    async fn update_status(&self, id: &str, status: RentalStatus) -> Result<Rental, DomainError> {
        let mut rentals = self.rentals.write().await;
        let rental = rentals.get_mut(id).ok_or(DomainError::NotFound)?;
        rental.status = status;
        Ok(rental.clone())
    }
}
