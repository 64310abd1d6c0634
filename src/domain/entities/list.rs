//! List entity representing a named container of items.

/// A named list of items.
///
/// Values are snapshots of a `lists` row taken for a single request; the
/// store is the only writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub id: i64,
    pub title: String,
}

impl List {
    /// Creates a new List instance.
    pub fn new(id: i64, title: String) -> Self {
        Self { id, title }
    }

    /// Canonical URL of the list's item collection.
    pub fn items_url(&self) -> String {
        format!("/lists/{}/items", self.id)
    }
}

/// Input data for creating a new list.
///
/// Titles are free text: no uniqueness, no length limit, empty allowed.
#[derive(Debug, Clone)]
pub struct NewList {
    pub title: String,
}
