//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Application state (state)
//! - In-memory repository implementations (repositories)

pub mod repositories;
pub mod state;

pub use repositories::{InMemoryItemRepository, InMemoryRentalRepository};
pub use state::AppState;
