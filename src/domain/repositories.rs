//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::DomainError;
use crate::models::{Item, Rental, RentalStatus};

/// Filter criteria for catalog queries
#[derive(Debug, Default, Clone)]
pub struct ItemFilter {
    /// Substring match on the item name
    pub query: Option<String>,
    /// Substring match on the listing location
    pub location: Option<String>,
    pub category: Option<String>,
    pub condition: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
}

/// Repository trait for the item catalog
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Find all items matching the filter criteria, ordered by id
    async fn find_all(&self, filter: ItemFilter) -> Result<Vec<Item>, DomainError>;

    /// Find a single item by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Item>, DomainError>;

    /// Add an item to the catalog
    async fn insert(&self, item: Item) -> Result<Item, DomainError>;
}

/// Filter criteria for rental queries
#[derive(Debug, Default, Clone)]
pub struct RentalFilter {
    pub status: Option<RentalStatus>,
    pub item_id: Option<String>,
}

/// Repository trait for rental records
#[async_trait]
pub trait RentalRepository: Send + Sync {
    /// Find all rentals matching the filter, newest booking first
    async fn find_all(&self, filter: RentalFilter) -> Result<Vec<Rental>, DomainError>;

    /// Find a single rental by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Rental>, DomainError>;

    /// Store a rental without availability checks (seeding, restores)
    async fn create(&self, rental: Rental) -> Result<Rental, DomainError>;

    /// Store a rental only if every day of its range is free of other
    /// active or upcoming rentals of the same item. The overlap check
    /// and the insert are a single atomic operation; the conflicting
    /// case fails with `DomainError::Conflict`.
    async fn create_if_available(
        &self,
        rental: Rental,
        today: NaiveDate,
    ) -> Result<Rental, DomainError>;

    /// Set the status of an existing rental, returning the updated record
    async fn update_status(&self, id: &str, status: RentalStatus) -> Result<Rental, DomainError>;
}
