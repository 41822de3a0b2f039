//! In-memory implementation of ItemRepository

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{DomainError, ItemFilter, ItemRepository};
use crate::models::Item;

/// DashMap-backed item catalog. The catalog is reference data seeded
/// at startup; listings are returned sorted by id so results are
/// stable across calls.
pub struct InMemoryItemRepository {
    items: DashMap<String, Item>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
        }
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn matches_filter(item: &Item, filter: &ItemFilter) -> bool {
    if let Some(q) = &filter.query
        && !q.is_empty()
        && !item.name.to_lowercase().contains(&q.to_lowercase())
    {
        return false;
    }

    if let Some(location) = &filter.location
        && !location.is_empty()
        && !item.location.to_lowercase().contains(&location.to_lowercase())
    {
        return false;
    }

    if let Some(category) = &filter.category
        && !category.is_empty()
        && !item.category.eq_ignore_ascii_case(category)
    {
        return false;
    }

    if let Some(condition) = &filter.condition
        && !condition.is_empty()
        && !item.condition.as_str().eq_ignore_ascii_case(condition)
    {
        return false;
    }

    if let Some(min) = filter.min_price
        && item.daily_price < min
    {
        return false;
    }

    if let Some(max) = filter.max_price
        && item.daily_price > max
    {
        return false;
    }

    true
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn find_all(&self, filter: ItemFilter) -> Result<Vec<Item>, DomainError> {
        let mut items: Vec<Item> = self
            .items
            .iter()
            .filter(|entry| matches_filter(entry.value(), &filter))
            .map(|entry| entry.value().clone())
            .collect();

        items.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(items)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Item>, DomainError> {
        Ok(self.items.get(id).map(|entry| entry.value().clone()))
    }

    async fn insert(&self, item: Item) -> Result<Item, DomainError> {
        if self.items.contains_key(&item.id) {
            return Err(DomainError::Validation(format!(
                "Item '{}' already exists",
                item.id
            )));
        }
        self.items.insert(item.id.clone(), item.clone());
        Ok(item)
    }
}
