//! In-memory repository implementations

pub mod item_repository;
pub mod rental_repository;

pub use item_repository::InMemoryItemRepository;
pub use rental_repository::InMemoryRentalRepository;
