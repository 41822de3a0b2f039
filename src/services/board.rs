//! Rental status board - three fixed buckets with a manual move
//! operation. Any bucket is reachable from any other; the last move
//! wins.

use chrono::Local;
use serde::Serialize;

use crate::domain::{DomainError, RentalRepository};
use crate::models::{Rental, RentalStatus};
use crate::services::booking::derived_status;

/// Rentals partitioned into the three board buckets.
#[derive(Debug, Default, Serialize)]
pub struct BoardView {
    pub active: Vec<Rental>,
    pub upcoming: Vec<Rental>,
    pub past: Vec<Rental>,
}

/// Partition rentals by status, keeping only those whose item name
/// contains the query (case-insensitive).
pub fn board_view(rentals: Vec<Rental>, query: Option<&str>) -> BoardView {
    let needle = query.unwrap_or("").to_lowercase();

    let mut board = BoardView::default();
    for rental in rentals {
        if !needle.is_empty() && !rental.item.name.to_lowercase().contains(&needle) {
            continue;
        }
        match rental.status {
            RentalStatus::Active => board.active.push(rental),
            RentalStatus::Upcoming => board.upcoming.push(rental),
            RentalStatus::Past => board.past.push(rental),
        }
    }
    board
}

/// Move a rental to a bucket. Moving to the current bucket is a no-op
/// success. A move that contradicts what the rental's dates imply is
/// allowed but logged, so contradictory states stay observable.
pub async fn move_rental(
    rental_repo: &dyn RentalRepository,
    id: &str,
    target: RentalStatus,
) -> Result<Rental, DomainError> {
    let rental = rental_repo.update_status(id, target).await?;

    let expected = derived_status(
        rental.start_date,
        rental.end_date,
        Local::now().date_naive(),
    );
    if expected != target {
        tracing::warn!(
            "⚠️ Rental {} moved to '{}' but its dates say '{}'",
            rental.id,
            target.as_str(),
            expected.as_str()
        );
    }
    Ok(rental)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryRentalRepository;
    use crate::models::{Condition, Item};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rental(id: &str, name: &str, status: RentalStatus) -> Rental {
        Rental {
            id: id.to_string(),
            item: Item {
                id: format!("item-{}", id),
                name: name.to_string(),
                description: String::new(),
                daily_price: 100,
                replacement_value: 1000,
                category: "Tools".to_string(),
                condition: Condition::Good,
                location: "Bangalore".to_string(),
                images: vec![],
                owner: "Owner".to_string(),
                rating: None,
            },
            start_date: date(2025, 6, 15),
            end_date: date(2025, 6, 18),
            duration: 3,
            status,
            total_amount: 300,
            security_deposit: 500,
            booking_date: date(2025, 6, 10),
            owner: "Owner".to_string(),
            pickup_location: "Bangalore".to_string(),
            pickup_instructions: String::new(),
        }
    }

    #[test]
    fn board_partitions_by_status() {
        let rentals = vec![
            rental("r1", "Camera", RentalStatus::Active),
            rental("r2", "Tent", RentalStatus::Upcoming),
            rental("r3", "Drill", RentalStatus::Past),
            rental("r4", "Drone", RentalStatus::Upcoming),
        ];

        let board = board_view(rentals, None);
        assert_eq!(board.active.len(), 1);
        assert_eq!(board.upcoming.len(), 2);
        assert_eq!(board.past.len(), 1);
    }

    #[test]
    fn board_query_filters_by_item_name() {
        let rentals = vec![
            rental("r1", "Canon EOS DSLR Camera", RentalStatus::Active),
            rental("r2", "Camping Tent", RentalStatus::Upcoming),
        ];

        let board = board_view(rentals, Some("cam"));
        assert_eq!(board.active.len(), 1);
        assert_eq!(board.upcoming.len(), 1);

        let board = board_view(
            vec![rental("r1", "Canon EOS DSLR Camera", RentalStatus::Active)],
            Some("tent"),
        );
        assert!(board.active.is_empty());
    }

    #[tokio::test]
    async fn moving_through_all_buckets_is_last_write_wins() {
        let repo = InMemoryRentalRepository::new();
        repo.create(rental("r1", "Camera", RentalStatus::Upcoming))
            .await
            .unwrap();

        move_rental(&repo, "r1", RentalStatus::Active).await.unwrap();
        move_rental(&repo, "r1", RentalStatus::Past).await.unwrap();
        let moved = move_rental(&repo, "r1", RentalStatus::Upcoming)
            .await
            .unwrap();
        assert_eq!(moved.status, RentalStatus::Upcoming);

        // still exactly one record with that id, carrying the last status
        let all = repo.find_all(Default::default()).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].status, RentalStatus::Upcoming);
    }

    #[tokio::test]
    async fn moving_a_missing_rental_fails() {
        let repo = InMemoryRentalRepository::new();
        let err = move_rental(&repo, "ghost", RentalStatus::Active)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound));
    }
}
