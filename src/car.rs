use serde::{Deserialize, Serialize};

/// One tracked vehicle entry.
///
/// `id` is assigned from the creation timestamp (millisecond resolution) and
/// is unique within a store. `sold` starts false and only ever changes via
/// the store's sold-toggle. Field names double as the persisted JSON keys.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub sold: bool,
}
