use serde::{Deserialize, Serialize};

/// Physical condition of a listed item, as declared by its owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "Like New")]
    LikeNew,
    Good,
    Fair,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::LikeNew => "Like New",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
        }
    }
}

/// A rentable physical object listed by an owner. Reference data:
/// items are seeded into the catalog and never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Rental price per day, in whole rupees.
    pub daily_price: i64,
    /// Replacement value of the item, used to size the security deposit.
    pub replacement_value: i64,
    pub category: String,
    pub condition: Condition,
    pub location: String,
    pub images: Vec<String>,
    pub owner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}
