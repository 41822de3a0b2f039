//! Application state containing repositories and shared resources

use std::sync::Arc;

use crate::domain::{ItemRepository, RentalRepository};
use crate::infrastructure::{InMemoryItemRepository, InMemoryRentalRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Item catalog
    pub item_repo: Arc<dyn ItemRepository>,
    /// Rental records
    pub rental_repo: Arc<dyn RentalRepository>,
}

impl AppState {
    /// Create a new AppState backed by empty in-memory stores
    pub fn new() -> Self {
        Self {
            item_repo: Arc::new(InMemoryItemRepository::new()),
            rental_repo: Arc::new(InMemoryRentalRepository::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
