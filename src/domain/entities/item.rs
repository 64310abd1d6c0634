//! Item entity representing a rated entry of a list.

/// Rating every item starts with. No operation ever changes it.
pub const DEFAULT_RATING: i64 = 1000;

/// A titled entry belonging to exactly one list.
///
/// `list_id` is expected to reference an existing list, but the store does
/// not enforce it: deleting a list leaves its items behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub title: String,
    pub rating: i64,
    pub list_id: i64,
}

impl Item {
    /// Creates a new Item instance.
    pub fn new(id: i64, title: String, rating: i64, list_id: i64) -> Self {
        Self {
            id,
            title,
            rating,
            list_id,
        }
    }
}

/// An item whose `list_id` references no existing list.
///
/// `list_id` is `None` when the row stores no list at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanedItem {
    pub id: i64,
    pub title: String,
    pub list_id: Option<i64>,
}

/// Input data for creating a new item.
///
/// There is no rating field: new items always get
/// [`DEFAULT_RATING`].
#[derive(Debug, Clone)]
pub struct NewItem {
    pub title: String,
    pub list_id: i64,
}
